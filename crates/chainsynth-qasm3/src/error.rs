//! Error types for the QASM3 emitter.

use chainsynth_ir::ClbitId;
use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// A classical bit that belongs to no named register.
    #[error("Classical {0} is not part of a register")]
    UnregisteredClbit(ClbitId),

    /// A parameter symbol that is not a valid QASM identifier.
    #[error("Invalid parameter name: {0}")]
    InvalidIdentifier(String),

    /// A parameter symbol that shadows a register, gate, constant or keyword.
    #[error("Parameter name '{0}' is already in use")]
    ReservedIdentifier(String),

    /// A rotation angle that cannot be written as a literal.
    #[error("Angle {0} is not finite")]
    NonFiniteAngle(f64),
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
