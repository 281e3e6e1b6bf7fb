//! Measurement results returned by an execution backend.
//!
//! Bitstrings follow the usual register convention: the rightmost character
//! is bit 0 of the register.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Occurrence count per observed bitstring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build counts from `(bitstring, count)` pairs, summing repeated keys.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut counts = Self::new();
        for (bitstring, count) in pairs {
            counts.insert(bitstring, count);
        }
        counts
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Count for `bitstring`; a key that was never observed counts as zero.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate in bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// The most frequent bitstring.
    pub fn most_frequent(&self) -> Option<(&String, &u64)> {
        self.counts.iter().max_by_key(|(_, count)| **count)
    }

    /// Length shared by every bitstring, `None` when nothing was observed.
    pub fn width(&self) -> HalResult<Option<usize>> {
        let mut keys = self.counts.keys();
        let Some(first) = keys.next() else {
            return Ok(None);
        };
        match keys.find(|k| k.len() != first.len()) {
            Some(other) => Err(HalError::InvalidBitstring {
                bitstring: other.clone(),
                width: first.len(),
            }),
            None => Ok(Some(first.len())),
        }
    }

    /// Counts over the bits at `positions`, summed over all other bits.
    ///
    /// Position `k` is bit `k` of the register, the `k`-th character from
    /// the right. In the new bitstrings `positions[0]` is the rightmost
    /// character.
    pub fn marginal(&self, positions: &[usize]) -> HalResult<Counts> {
        let needed = positions.iter().max().map_or(0, |p| p + 1);
        let mut out = Counts::new();
        for (bitstring, &count) in &self.counts {
            let bytes = bitstring.as_bytes();
            if bytes.len() < needed || !bytes.iter().all(|b| matches!(b, b'0' | b'1')) {
                return Err(HalError::InvalidBitstring {
                    bitstring: bitstring.clone(),
                    width: needed,
                });
            }
            let key: String = positions
                .iter()
                .rev()
                .map(|&p| char::from(bytes[bytes.len() - 1 - p]))
                .collect();
            out.insert(key, count);
        }
        Ok(out)
    }
}

/// Counts of one circuit together with the number of shots taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Observed bitstrings.
    pub counts: Counts,
    /// Shots requested for the circuit.
    pub shots: u64,
}

impl ExecutionResult {
    /// Create a result.
    pub fn new(counts: Counts, shots: u64) -> Self {
        Self { counts, shots }
    }

    /// Create a result whose shot count is the sum of its counts.
    pub fn from_counts(counts: Counts) -> Self {
        let shots = counts.total_shots();
        Self { counts, shots }
    }

    /// Fraction of shots that produced `bitstring`.
    pub fn probability(&self, bitstring: &str) -> HalResult<f64> {
        if self.shots == 0 {
            return Err(HalError::InvalidShots("result has zero shots".into()));
        }
        #[allow(clippy::cast_precision_loss)]
        Ok(self.counts.get(bitstring) as f64 / self.shots as f64)
    }
}

/// Results of a batch, in submission order.
///
/// A backend may run only part of a batch; circuits it did not run have no
/// entry and read back as [`HalError::MissingResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    results: Vec<Option<ExecutionResult>>,
}

impl BatchResult {
    /// Create a batch from per-circuit results.
    pub fn new(results: Vec<Option<ExecutionResult>>) -> Self {
        Self { results }
    }

    /// Create a batch where every circuit has a result.
    pub fn complete(results: impl IntoIterator<Item = ExecutionResult>) -> Self {
        Self {
            results: results.into_iter().map(Some).collect(),
        }
    }

    /// Number of circuits in the batch.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The result of circuit `index`.
    pub fn get(&self, index: usize) -> HalResult<&ExecutionResult> {
        self.results
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(HalError::MissingResult { index })
    }

    /// Iterate over entries in submission order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ExecutionResult>> {
        self.results.iter().map(Option::as_ref)
    }

    /// Positions of circuits without a result.
    pub fn missing(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.is_none().then_some(i))
            .collect()
    }

    /// Parse a batch from its JSON form, an array of results or `null`s.
    pub fn from_json(json: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::from_pairs([("00", 10), ("11", 5)]);
        counts.insert("00", 2);
        assert_eq!(counts.get("00"), 12);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total_shots(), 17);
        assert_eq!(counts.most_frequent(), Some((&"00".to_string(), &12)));
    }

    #[test]
    fn test_marginal_keeps_register_order() {
        let counts = Counts::from_pairs([("1100000", 3), ("0100001", 2), ("1000000", 5)]);
        let top = counts.marginal(&[5, 6]).unwrap();
        assert_eq!(top.get("11"), 3);
        assert_eq!(top.get("01"), 2);
        assert_eq!(top.get("10"), 5);
        assert_eq!(top.total_shots(), 10);

        let low = counts.marginal(&[0]).unwrap();
        assert_eq!(low.get("1"), 2);
        assert_eq!(low.get("0"), 8);
    }

    #[test]
    fn test_marginal_rejects_short_or_bad_keys() {
        let counts = Counts::from_pairs([("01", 1)]);
        assert!(matches!(
            counts.marginal(&[2]),
            Err(HalError::InvalidBitstring { width: 3, .. })
        ));
        let counts = Counts::from_pairs([("0a1", 1)]);
        assert!(counts.marginal(&[0]).is_err());
    }

    #[test]
    fn test_width() {
        assert_eq!(Counts::new().width().unwrap(), None);
        assert_eq!(Counts::from_pairs([("000", 1), ("111", 1)]).width().unwrap(), Some(3));
        assert!(Counts::from_pairs([("00", 1), ("111", 1)]).width().is_err());
    }

    #[test]
    fn test_probability() {
        let result = ExecutionResult::new(Counts::from_pairs([("00", 250)]), 1000);
        assert!((result.probability("00").unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(result.probability("11").unwrap(), 0.0);

        let empty = ExecutionResult::new(Counts::new(), 0);
        assert!(matches!(
            empty.probability("00"),
            Err(HalError::InvalidShots(_))
        ));
    }

    #[test]
    fn test_batch_missing_entries() {
        let batch = BatchResult::new(vec![
            Some(ExecutionResult::from_counts(Counts::from_pairs([("0", 4)]))),
            None,
        ]);
        assert_eq!(batch.get(0).unwrap().shots, 4);
        assert!(matches!(batch.get(1), Err(HalError::MissingResult { index: 1 })));
        assert!(matches!(batch.get(5), Err(HalError::MissingResult { index: 5 })));
        assert_eq!(batch.missing(), vec![1]);
    }

    #[test]
    fn test_batch_from_json() {
        let json = r#"[
            {"counts": {"00": 480, "11": 470, "01": 25, "10": 25}, "shots": 1000},
            null
        ]"#;
        let batch = BatchResult::from_json(json).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(0).unwrap().counts.get("11"), 470);
        assert!(batch.get(1).is_err());
        assert!(BatchResult::from_json("{").is_err());
    }
}
