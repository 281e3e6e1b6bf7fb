//! Wire identifiers and classical registers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a qubit on the chain, `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

/// A classical bit, numbered across all registers of one circuit in
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl From<u32> for QubitId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<u32> for ClbitId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q[{}]", self.0)
    }
}

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit {}", self.0)
    }
}

/// A classical bit and where it lives.
///
/// Bits created through [`Circuit::add_creg`](crate::Circuit::add_creg) always
/// carry their register name and position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clbit {
    pub id: ClbitId,
    pub register: Option<String>,
    pub index: Option<u32>,
}

impl Clbit {
    /// A bit outside any register.
    pub fn new(id: ClbitId) -> Self {
        Self {
            id,
            register: None,
            index: None,
        }
    }

    /// Bit `index` of register `register`.
    pub fn with_register(id: ClbitId, register: impl Into<String>, index: u32) -> Self {
        Self {
            register: Some(register.into()),
            index: Some(index),
            ..Self::new(id)
        }
    }
}

impl fmt::Display for Clbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(reg), Some(idx)) = (&self.register, self.index) {
            write!(f, "{reg}[{idx}]")
        } else {
            fmt::Display::fmt(&self.id, f)
        }
    }
}

/// A named, ordered run of classical bits.
///
/// Registers never share bits: a circuit hands out fresh [`ClbitId`]s for
/// every register it creates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalRegister {
    pub name: String,
    /// Bits in register order; `bits[0]` is the rightmost character of a
    /// result bitstring.
    pub bits: Vec<ClbitId>,
}

impl ClassicalRegister {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index` within the register.
    pub fn bit(&self, index: usize) -> Option<ClbitId> {
        self.bits.get(index).copied()
    }
}
