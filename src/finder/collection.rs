use serde::{Deserialize, Serialize};

use super::test::Test;

/// Ordered, immutable sequence of discovered tests. Order reflects the
/// order of discovery within a file and is preserved by merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCollection {
    tests: Vec<Test>,
}

impl TestCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tests(tests: Vec<Test>) -> Self {
        Self { tests }
    }

    pub fn as_slice(&self) -> &[Test] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Restartable iteration in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Test> {
        self.tests.iter()
    }

    /// Returns a new collection ordered self-then-other. Neither operand
    /// is mutated.
    pub fn merge_with(&self, other: &TestCollection) -> TestCollection {
        let mut tests = Vec::with_capacity(self.tests.len() + other.tests.len());
        tests.extend_from_slice(&self.tests);
        tests.extend_from_slice(&other.tests);
        Self { tests }
    }
}

impl FromIterator<Test> for TestCollection {
    fn from_iter<I: IntoIterator<Item = Test>>(iter: I) -> Self {
        Self {
            tests: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TestCollection {
    type Item = &'a Test;
    type IntoIter = std::slice::Iter<'a, Test>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}
