use crate::finder::Test;

/// What kind of diagnostic a runtime event carried. The `Php*` variants are
/// engine-level diagnostics, the rest originate in userland code. Grouping
/// treats all categories identically; the tag is carried for the producer's
/// benefit only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    Deprecation,
    PhpDeprecation,
    Error,
    Notice,
    PhpNotice,
    Warning,
    PhpWarning,
}

/// One diagnostic raised while a test ran, attributed to the file and line
/// that triggered it and to the test that was running at the time.
#[derive(Debug, Clone)]
pub struct IssueEvent {
    category: IssueCategory,
    message: String,
    file: String,
    line: usize,
    test: Test,
}

impl IssueEvent {
    pub fn new(
        category: IssueCategory,
        message: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        test: Test,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            file: file.into(),
            line,
            test,
        }
    }

    pub fn category(&self) -> IssueCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn test(&self) -> &Test {
        &self.test
    }
}
