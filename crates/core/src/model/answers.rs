use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chosen option scores keyed by question index within one question set.
///
/// Keys are unique: recording an index twice keeps only the latest score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<usize, u32>);

impl Answers {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Upserts the score for `question`, returning the score it replaced.
    pub fn record(&mut self, question: usize, score: u32) -> Option<u32> {
        self.0.insert(question, score)
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<u32> {
        self.0.get(&question).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all recorded scores.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|score| u64::from(*score)).sum()
    }

    /// Iterates `(question index, score)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().map(|(question, score)| (*question, *score))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(usize, u32)> for Answers {
    fn from_iter<T: IntoIterator<Item = (usize, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_same_index_overwrites() {
        let mut answers = Answers::new();
        assert_eq!(answers.record(0, 2), None);
        assert_eq!(answers.record(0, 4), Some(2));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(0), Some(4));
        assert_eq!(answers.total(), 4);
    }

    #[test]
    fn iterates_in_index_order() {
        let answers: Answers = [(2, 4), (0, 2), (1, 3)].into_iter().collect();
        let collected: Vec<_> = answers.iter().collect();
        assert_eq!(collected, vec![(0, 2), (1, 3), (2, 4)]);
        assert_eq!(answers.total(), 9);
    }

    #[test]
    fn serializes_as_plain_map() {
        let answers: Answers = [(0, 1), (1, 2)].into_iter().collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"0":1,"1":2}"#);
    }
}
