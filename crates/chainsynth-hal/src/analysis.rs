//! Probabilities derived from measurement counts.
//!
//! Only simple ratios of counts: no error mitigation and no fitting.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HalError, HalResult};
use crate::result::{BatchResult, Counts, ExecutionResult};

/// Two-qubit gate layers added by one forward+mirror Trotter step.
pub const TWO_QUBIT_DEPTH_PER_STEP: u32 = 4;

/// The outcome of one circuit in a sequence.
///
/// A circuit the backend never ran is `Missing`, which is not the same as a
/// target outcome that was never observed (`Observed(0.0)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Probability measured for this step.
    Observed(f64),
    /// No result for this step.
    Missing,
}

impl StepOutcome {
    /// The probability, if one was measured.
    pub fn probability(self) -> Option<f64> {
        match self {
            StepOutcome::Observed(p) => Some(p),
            StepOutcome::Missing => None,
        }
    }

    /// Whether the step has no result.
    pub fn is_missing(self) -> bool {
        matches!(self, StepOutcome::Missing)
    }

    /// The probability, or `sentinel` for a missing step.
    ///
    /// Substitution is logged so a plotted zero can be traced back to a
    /// missing result.
    pub fn or_sentinel(self, sentinel: f64) -> f64 {
        match self {
            StepOutcome::Observed(p) => p,
            StepOutcome::Missing => {
                warn!(sentinel, "Substituting sentinel for missing result");
                sentinel
            }
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Observed(p) => write!(f, "{p:.4}"),
            StepOutcome::Missing => write!(f, "missing"),
        }
    }
}

/// Probability of the all-zero bitstring over a `width`-bit register.
pub fn survival_probability(result: &ExecutionResult, width: usize) -> HalResult<f64> {
    result.probability(&"0".repeat(width))
}

/// Survival probability of every circuit in `batch`, in order.
///
/// Circuits without a result yield [`StepOutcome::Missing`] rather than
/// failing the whole sequence.
pub fn survival_probabilities(batch: &BatchResult, width: usize) -> HalResult<Vec<StepOutcome>> {
    batch
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Some(result) => survival_probability(result, width).map(StepOutcome::Observed),
            None => {
                warn!(index, "No result for step");
                Ok(StepOutcome::Missing)
            }
        })
        .collect()
}

/// Two-qubit gate depth of each step of a Trotter family: `0, 4, 8, ...`.
///
/// This is the x-axis the survival probabilities are plotted against.
pub fn depth_axis(steps: u32) -> Vec<u32> {
    (0..steps).map(|s| s * TWO_QUBIT_DEPTH_PER_STEP).collect()
}

/// Endpoint statistics of a teleportation chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BellProbabilities {
    /// Fraction of `00` and `11` outcomes.
    pub bell: f64,
    /// Fraction of `01` and `10` outcomes.
    pub not_bell: f64,
}

impl BellProbabilities {
    /// Derive from endpoint counts over `shots` shots.
    ///
    /// Keys are either the two-bit outcome register alone or the whole
    /// classical register of a chain. The outcome register is declared last,
    /// so in a full-width key it is the two leftmost characters. Outcomes
    /// absent from `counts` count as zero.
    pub fn from_counts(counts: &Counts, shots: u64) -> HalResult<Self> {
        if shots == 0 {
            return Err(HalError::InvalidShots("result has zero shots".into()));
        }
        let endpoints = match counts.width()? {
            Some(width) if width > 2 => counts.marginal(&[width - 2, width - 1])?,
            Some(2) | None => counts.clone(),
            Some(_) => counts.marginal(&[0, 1])?,
        };
        #[allow(clippy::cast_precision_loss)]
        let ratio =
            |a: &str, b: &str| (endpoints.get(a) + endpoints.get(b)) as f64 / shots as f64;
        Ok(Self {
            bell: ratio("00", "11"),
            not_bell: ratio("01", "10"),
        })
    }

    /// Derive from an endpoint result.
    pub fn from_result(result: &ExecutionResult) -> HalResult<Self> {
        Self::from_counts(&result.counts, result.shots)
    }
}

/// Two-point correlators `<Z_0 Z_i>` of an `N`-qubit GHZ readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceProfile {
    /// `<Z_0 Z_i>` for `i = 1..N`, index `i - 1`.
    pub correlators: Vec<f64>,
}

impl CoherenceProfile {
    /// Estimate the correlators from counts over an `N`-bit register.
    ///
    /// Every key must be an `N`-character bitstring of `0`s and `1`s.
    pub fn from_counts(counts: &Counts, num_qubits: usize) -> HalResult<Self> {
        let total = counts.total_shots();
        if total == 0 {
            return Err(HalError::InvalidShots("counts are empty".into()));
        }
        let mut sums = vec![0i64; num_qubits.saturating_sub(1)];
        for (bitstring, &count) in counts.iter() {
            let bits = parse_bits(bitstring, num_qubits)?;
            #[allow(clippy::cast_possible_wrap)]
            let count = count as i64;
            for (i, sum) in sums.iter_mut().enumerate() {
                // Z eigenvalue product is +1 when the two bits agree.
                if bits[0] == bits[i + 1] {
                    *sum += count;
                } else {
                    *sum -= count;
                }
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let correlators = sums.into_iter().map(|s| s as f64 / total as f64).collect();
        Ok(Self { correlators })
    }

    /// Correlators relative to the nearest-neighbour one,
    /// `<Z_0 Z_i> / <Z_0 Z_1>`.
    ///
    /// `None` when `<Z_0 Z_1>` is zero.
    pub fn normalized(&self) -> Option<Vec<f64>> {
        let first = *self.correlators.first()?;
        if first == 0.0 {
            return None;
        }
        Some(self.correlators.iter().map(|c| c / first).collect())
    }
}

/// Bits of `bitstring`, indexed by register position (bit 0 is rightmost).
fn parse_bits(bitstring: &str, width: usize) -> HalResult<Vec<bool>> {
    let invalid = || HalError::InvalidBitstring {
        bitstring: bitstring.to_string(),
        width,
    };
    if bitstring.len() != width {
        return Err(invalid());
    }
    bitstring
        .chars()
        .rev()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(invalid()),
        })
        .collect()
}
