//! Name-keyed probability tables.
//!
//! Both tables treat a missing entry as probability `0.0`. Nothing here checks
//! that values lie in `[0, 1]` or that rows sum to one; see
//! [`HiddenMarkovModel::validate`](crate::hmm::HiddenMarkovModel::validate).

use std::collections::HashMap;

/// Probabilities keyed by a single label, used for the initial-state
/// distribution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    entries: HashMap<String, f64>,
}

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the probability stored for `key`, or `0.0` if there is none.
    pub fn get(&self, key: &str) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Inserts or overwrites the probability for `key`. The last write wins.
    pub fn set(&mut self, key: impl Into<String>, probability: f64) {
        self.entries.insert(key.into(), probability);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &p)| (k.as_str(), p))
    }

    /// Sum of all stored probabilities.
    pub fn sum(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Probabilities keyed by a `(given, outcome)` pair.
///
/// Used both for transitions, where `P(next | current)` is stored under
/// `(current, next)`, and for emissions, where `P(symbol | state)` is stored
/// under `(state, symbol)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalProbabilityTable {
    rows: HashMap<String, HashMap<String, f64>>,
}

impl ConditionalProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `P(outcome | given)`, or `0.0` if the pair was never set.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmeval::hmm::ConditionalProbabilityTable;
    ///
    /// let mut emission = ConditionalProbabilityTable::new();
    /// emission.set("Rain", "Grumpy", 0.9);
    ///
    /// assert_eq!(emission.get("Rain", "Grumpy"), 0.9);
    /// assert_eq!(emission.get("Rain", "Happy"), 0.0);
    /// assert_eq!(emission.get("Snow", "Grumpy"), 0.0);
    /// ```
    pub fn get(&self, given: &str, outcome: &str) -> f64 {
        self.rows
            .get(given)
            .and_then(|row| row.get(outcome))
            .copied()
            .unwrap_or(0.0)
    }

    /// Inserts or overwrites `P(outcome | given)`. The last write wins.
    pub fn set(&mut self, given: impl Into<String>, outcome: impl Into<String>, probability: f64) {
        self.rows
            .entry(given.into())
            .or_default()
            .insert(outcome.into(), probability);
    }

    /// All outcomes recorded for `given`. Empty if the row does not exist.
    pub fn row<'a>(&'a self, given: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.rows
            .get(given)
            .into_iter()
            .flat_map(|row| row.iter().map(|(k, &p)| (k.as_str(), p)))
    }

    /// Labels that have at least one recorded outcome.
    pub fn givens(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Every `(given, outcome, probability)` triple, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rows.iter().flat_map(|(given, row)| {
            row.iter()
                .map(move |(outcome, &p)| (given.as_str(), outcome.as_str(), p))
        })
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_as_zero() {
        let table = ProbabilityTable::new();
        assert_eq!(table.get("Rain"), 0.0);
        assert!(!table.contains("Rain"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = ProbabilityTable::new();
        table.set("Rain", 0.4);
        table.set("Rain", 0.6);
        assert_eq!(table.get("Rain"), 0.6);
        assert_eq!(table.len(), 1);

        let mut transitions = ConditionalProbabilityTable::new();
        transitions.set("Rain", "Sunny", 0.1);
        transitions.set("Rain", "Sunny", 0.3);
        assert_eq!(transitions.get("Rain", "Sunny"), 0.3);
        assert_eq!(transitions.len(), 1);
    }

    #[test]
    fn test_conditional_absent_pairs_read_as_zero() {
        let mut emission = ConditionalProbabilityTable::new();
        emission.set("Rain", "Grumpy", 0.9);

        // Unknown state and unknown symbol for a known state
        assert_eq!(emission.get("Cloudy", "Grumpy"), 0.0);
        assert_eq!(emission.get("Rain", "Happy"), 0.0);
    }

    #[test]
    fn test_row_iterates_one_given() {
        let mut transitions = ConditionalProbabilityTable::new();
        transitions.set("A", "A", 0.25);
        transitions.set("A", "B", 0.75);
        transitions.set("B", "A", 1.0);

        let row_sum: f64 = transitions.row("A").map(|(_, p)| p).sum();
        assert!((row_sum - 1.0).abs() < 1e-12);
        assert_eq!(transitions.row("missing").count(), 0);
        assert_eq!(transitions.iter().count(), 3);

        let mut givens: Vec<_> = transitions.givens().collect();
        givens.sort_unstable();
        assert_eq!(givens, vec!["A", "B"]);
    }

    #[test]
    fn test_sum_and_emptiness() {
        let mut table = ProbabilityTable::new();
        assert!(table.is_empty());
        table.set("A", 0.5);
        table.set("B", 0.25);
        assert!((table.sum() - 0.75).abs() < 1e-12);

        assert!(ConditionalProbabilityTable::new().is_empty());
    }
}
