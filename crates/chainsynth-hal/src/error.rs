//! Errors at the backend boundary and in result analysis.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// A circuit of the batch was not run.
    #[error("No result for circuit {index}")]
    MissingResult { index: usize },

    #[error("Unknown job {0}")]
    JobNotFound(String),

    #[error("Job failed: {0}")]
    JobFailed(String),

    /// The polling budget of [`crate::WaitOptions`] ran out.
    #[error("Gave up waiting for job {0}")]
    Timeout(String),

    /// A shot count of zero, or counts that sum to nothing.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// A counts key that is not a `width`-character string of `0`/`1`.
    #[error("'{bitstring}' is not a {width}-bit string")]
    InvalidBitstring { bitstring: String, width: usize },

    #[error("Malformed result data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything a backend implementation reports on its own terms.
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type HalResult<T> = Result<T, HalError>;
