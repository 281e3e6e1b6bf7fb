//! Circuit-model errors.

use thiserror::Error;

use crate::qubit::{ClbitId, QubitId};

/// Errors raised while building or analysing a circuit.
///
/// `QubitNotFound` and `ClbitNotFound` are index errors. For builders fed a
/// validated configuration they signal a defect in the builder, never a user
/// mistake.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    #[error("{qubit} is outside the circuit{}", in_gate(.gate_name))]
    QubitNotFound {
        qubit: QubitId,
        gate_name: Option<String>,
    },

    #[error("{clbit} is outside the circuit{}", in_gate(.gate_name))]
    ClbitNotFound {
        clbit: ClbitId,
        gate_name: Option<String>,
    },

    /// A guard reads a classical bit that no earlier measurement wrote.
    #[error("Condition reads {clbit} before any measurement writes it")]
    UnmeasuredClbit { clbit: ClbitId },

    #[error("Parity condition over no bits")]
    EmptyCondition,

    #[error("'{gate_name}' acts on {expected} qubits, got {got}")]
    QubitCountMismatch {
        gate_name: String,
        expected: u32,
        got: u32,
    },

    /// Measurement operands do not pair up.
    #[error("Measurement maps {qubits} qubits onto {clbits} classical bits")]
    ClbitCountMismatch { qubits: usize, clbits: usize },

    #[error("{qubit} appears twice in one operation{}", in_gate(.gate_name))]
    DuplicateQubit {
        qubit: QubitId,
        gate_name: Option<String>,
    },

    #[error("Classical register '{0}' already exists")]
    DuplicateRegister(String),
}

#[allow(clippy::ref_option)]
fn in_gate(gate_name: &Option<String>) -> String {
    gate_name
        .as_ref()
        .map(|name| format!(" ('{name}')"))
        .unwrap_or_default()
}

pub type IrResult<T> = Result<T, IrError>;
