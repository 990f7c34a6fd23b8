use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Output volume for runner diagnostics. Library code only emits through
/// `tracing`; the host runner picks the level once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. An explicit RUST_LOG takes precedence
/// over the requested verbosity.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("test_runner_core={}", verbosity.to_level()))
    });

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact();

    if verbosity == Verbosity::Quiet {
        subscriber.with_writer(std::io::sink).init();
    } else {
        subscriber.init();
    }
}
