use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::error::{AggregateError, Result};
use crate::finder::Test;

use super::event::IssueEvent;

const LOCATIONS_HEADER: &str = "Triggered at these locations:";
const TESTS_HEADER: &str = "Triggered by these tests:";

/// One renderable group of identical-message diagnostics. The front end
/// decides how to display it; this core only builds the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportElement {
    pub title: String,
    pub body: String,
}

#[derive(Default)]
struct MessageGroup {
    locations: BTreeSet<String>,
    tests: BTreeSet<String>,
}

/// Collapses the diagnostic events of a whole run into deduplicated,
/// deterministically ordered report elements, one per distinct message.
/// Events from configured ignored path prefixes are dropped up front.
pub struct IssueAggregator {
    ignored_path_prefixes: Vec<String>,
}

impl IssueAggregator {
    pub fn new(ignored_path_prefixes: Vec<String>) -> Self {
        Self {
            ignored_path_prefixes,
        }
    }

    /// `events_by_test` pairs each test identifier with the events raised
    /// while it ran, in run order. Elements come back in the order each
    /// message was first encountered; locations and test descriptors within
    /// an element are deduplicated and sorted.
    pub fn aggregate(
        &self,
        events_by_test: &[(String, Vec<IssueEvent>)],
    ) -> Result<Vec<ReportElement>> {
        let mut order = Vec::new();
        let mut groups: HashMap<String, MessageGroup> = HashMap::new();

        for (_, events) in events_by_test {
            for event in events {
                if self.should_be_ignored(event.file()) {
                    continue;
                }

                let group = match groups.entry(event.message().to_string()) {
                    Entry::Vacant(vacant) => {
                        order.push(event.message().to_string());
                        vacant.insert(MessageGroup::default())
                    }
                    Entry::Occupied(occupied) => occupied.into_mut(),
                };

                group
                    .locations
                    .insert(format!("{}:{}", event.file(), event.line()));
                group.tests.insert(describe(event.test())?);
            }
        }

        Ok(order
            .into_iter()
            .map(|message| {
                let group = &groups[&message];
                render(message, group)
            })
            .collect())
    }

    fn should_be_ignored(&self, file: &str) -> bool {
        self.ignored_path_prefixes
            .iter()
            .any(|prefix| file.starts_with(prefix.as_str()))
    }
}

/// Bare name for a test function; `Scope::name (file:line)` for a method,
/// pointing at the method's own declaration rather than the issue site.
fn describe(test: &Test) -> std::result::Result<String, AggregateError> {
    if !test.is_method() {
        return Ok(test.name().to_string());
    }

    if test.owning_scope().is_none() {
        return Err(AggregateError::missing_scope(test.name()));
    }

    Ok(format!(
        "{} ({}:{})",
        test.qualified_name(),
        test.file(),
        test.line()
    ))
}

fn render(message: String, group: &MessageGroup) -> ReportElement {
    let mut body = String::from(LOCATIONS_HEADER);

    for location in &group.locations {
        body.push_str("\n - ");
        body.push_str(location);
    }

    body.push_str("\n\n");
    body.push_str(TESTS_HEADER);

    for test in &group.tests {
        body.push_str("\n - ");
        body.push_str(test);
    }

    ReportElement {
        title: message,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueCategory;

    fn deprecation(message: &str, file: &str, line: usize, test: Test) -> IssueEvent {
        IssueEvent::new(IssueCategory::Deprecation, message, file, line, test)
    }

    #[test]
    fn test_same_location_events_collapse_to_one_element() {
        let aggregator = IssueAggregator::new(vec![]);

        let events = vec![
            (
                "T1".to_string(),
                vec![deprecation(
                    "Deprecated",
                    "a.php",
                    10,
                    Test::function("T1", "tests/T1Test.php", 5),
                )],
            ),
            (
                "T2".to_string(),
                vec![deprecation(
                    "Deprecated",
                    "a.php",
                    10,
                    Test::function("T2", "tests/T2Test.php", 5),
                )],
            ),
        ];

        let elements = aggregator.aggregate(&events).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].title, "Deprecated");
        assert_eq!(
            elements[0].body,
            "Triggered at these locations:\n - a.php:10\n\nTriggered by these tests:\n - T1\n - T2"
        );
    }

    #[test]
    fn test_elements_keep_first_encounter_order() {
        let aggregator = IssueAggregator::new(vec![]);
        let test = Test::function("T1", "tests/T1Test.php", 5);

        let events = vec![(
            "T1".to_string(),
            vec![
                deprecation("zebra() is deprecated", "a.php", 1, test.clone()),
                deprecation("alpha() is deprecated", "a.php", 2, test.clone()),
                deprecation("zebra() is deprecated", "b.php", 3, test),
            ],
        )];

        let elements = aggregator.aggregate(&events).unwrap();

        let titles: Vec<&str> = elements.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["zebra() is deprecated", "alpha() is deprecated"]);
    }

    #[test]
    fn test_method_descriptor_uses_declared_location() {
        let aggregator = IssueAggregator::new(vec![]);
        let test = Test::method("MathTest", "testAddition", "tests/MathTest.php", 12);

        let events = vec![(
            "MathTest::testAddition".to_string(),
            vec![deprecation("Deprecated", "src/legacy.php", 99, test)],
        )];

        let elements = aggregator.aggregate(&events).unwrap();

        assert_eq!(
            elements[0].body,
            "Triggered at these locations:\n - src/legacy.php:99\n\n\
             Triggered by these tests:\n - MathTest::testAddition (tests/MathTest.php:12)"
        );
    }

    #[test]
    fn test_ignored_prefix_drops_event() {
        let aggregator = IssueAggregator::new(vec!["vendor/".to_string()]);
        let test = Test::function("T1", "tests/T1Test.php", 5);

        let events = vec![(
            "T1".to_string(),
            vec![
                deprecation("Deprecated", "vendor/lib.php", 7, test.clone()),
                deprecation("Deprecated", "src/app.php", 3, test),
            ],
        )];

        let elements = aggregator.aggregate(&events).unwrap();

        assert_eq!(elements.len(), 1);
        assert!(!elements[0].body.contains("vendor/lib.php"));
        assert!(elements[0].body.contains("src/app.php:3"));
    }

    #[test]
    fn test_fully_ignored_message_produces_no_element() {
        let aggregator = IssueAggregator::new(vec!["vendor/".to_string()]);
        let test = Test::function("T1", "tests/T1Test.php", 5);

        let events = vec![(
            "T1".to_string(),
            vec![deprecation("Deprecated", "vendor/lib.php", 7, test)],
        )];

        assert!(aggregator.aggregate(&events).unwrap().is_empty());
    }
}
