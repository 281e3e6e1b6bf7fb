//! Classical guard expressions for conditional blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::ClbitId;

/// A boolean expression over measured classical bits.
///
/// Only XOR folds are needed: a guard is true iff an odd number of the bits
/// it reads are 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// A single bit lifted to a boolean.
    Bit(ClbitId),
    /// Exclusive or of two sub-expressions.
    Xor(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Lift a single bit into a condition.
    pub fn lift(bit: ClbitId) -> Self {
        Condition::Bit(bit)
    }

    /// Combine `bit` with an accumulated condition.
    #[must_use]
    pub fn xor(bit: ClbitId, acc: Condition) -> Self {
        Condition::Xor(Box::new(Condition::Bit(bit)), Box::new(acc))
    }

    /// Fold every bit of `bits` into one parity condition, in order.
    ///
    /// The first bit is lifted and each following bit is XORed onto the
    /// accumulator, so every bit is read exactly once.
    pub fn parity(bits: impl IntoIterator<Item = ClbitId>) -> IrResult<Self> {
        let mut bits = bits.into_iter();
        let first = bits.next().ok_or(IrError::EmptyCondition)?;
        Ok(bits.fold(Condition::lift(first), |acc, bit| Condition::xor(bit, acc)))
    }

    /// Every bit this condition reads, in fold order.
    pub fn bits(&self) -> Vec<ClbitId> {
        let mut out = Vec::new();
        self.collect_bits(&mut out);
        out
    }

    // The accumulator sits on the right of every `Xor`, so visiting it first
    // yields the bits in the order they were folded.
    fn collect_bits(&self, out: &mut Vec<ClbitId>) {
        match self {
            Condition::Bit(b) => out.push(*b),
            Condition::Xor(a, b) => {
                b.collect_bits(out);
                a.collect_bits(out);
            }
        }
    }

    /// Reference evaluation against a bit assignment.
    ///
    /// Execution backends evaluate guards at run time; this is for offline
    /// checks and tests.
    pub fn evaluate(&self, value: &impl Fn(ClbitId) -> bool) -> bool {
        match self {
            Condition::Bit(b) => value(*b),
            Condition::Xor(a, b) => a.evaluate(value) ^ b.evaluate(value),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bit(b) => write!(f, "{b}"),
            Condition::Xor(a, b) => write!(f, "({a} ^ {b})"),
        }
    }
}
