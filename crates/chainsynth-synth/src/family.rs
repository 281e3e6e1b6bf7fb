//! Ordered collections of circuits.

use chainsynth_ir::Circuit;
use serde::{Deserialize, Serialize};

/// An ordered sequence of independent circuits.
///
/// For a Trotter run each element is a snapshot of the same growing program;
/// for a teleportation sweep each element is one chain length. Elements own
/// their data and are never modified after they are pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitFamily {
    circuits: Vec<Circuit>,
}

impl CircuitFamily {
    /// Create an empty family.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            circuits: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, circuit: Circuit) {
        self.circuits.push(circuit);
    }

    /// Number of circuits.
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    /// Whether the family is empty.
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    /// The circuit at `index`.
    pub fn get(&self, index: usize) -> Option<&Circuit> {
        self.circuits.get(index)
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Circuit> {
        self.circuits.iter()
    }

    /// The circuits as a slice, e.g. for a batch submission.
    pub fn as_slice(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Take ownership of the circuits.
    pub fn into_inner(self) -> Vec<Circuit> {
        self.circuits
    }
}

impl From<Vec<Circuit>> for CircuitFamily {
    fn from(circuits: Vec<Circuit>) -> Self {
        Self { circuits }
    }
}

impl IntoIterator for CircuitFamily {
    type Item = Circuit;
    type IntoIter = std::vec::IntoIter<Circuit>;

    fn into_iter(self) -> Self::IntoIter {
        self.circuits.into_iter()
    }
}

impl<'a> IntoIterator for &'a CircuitFamily {
    type Item = &'a Circuit;
    type IntoIter = std::slice::Iter<'a, Circuit>;

    fn into_iter(self) -> Self::IntoIter {
        self.circuits.iter()
    }
}
