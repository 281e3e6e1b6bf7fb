//! Error types for circuit synthesis.

use chainsynth_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// The requested configuration cannot be built.
    ///
    /// Always raised before any operation is appended.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The circuit model rejected an operation.
    ///
    /// For a validated configuration this indicates a builder defect.
    #[error(transparent)]
    Ir(#[from] IrError),
}

impl SynthError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SynthError::Configuration(msg.into())
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
