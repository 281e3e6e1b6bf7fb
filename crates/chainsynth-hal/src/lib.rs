//! Chainsynth execution boundary and result analysis
//!
//! Synthesized circuits leave the workspace through the [`Backend`] trait and
//! come back as a [`BatchResult`]: one optional [`ExecutionResult`] per
//! submitted circuit, in submission order. The [`analysis`] module turns those
//! counts into the quantities each experiment reports.
//!
//! | Experiment | Circuit family | Reported quantity |
//! |------------|----------------|-------------------|
//! | Trotter echo | `tfim_step_XX` | [`survival_probabilities`] against [`depth_axis`] |
//! | Teleport chain | `teleport_N` | [`BellProbabilities`] of the endpoints |
//! | GHZ chain | `ghz_N` | [`CoherenceProfile`] correlators |
//!
//! # Example: Reading a Batch
//!
//! ```
//! use chainsynth_hal::{BatchResult, StepOutcome, survival_probabilities};
//!
//! let json = r#"[{"counts": {"00": 900, "11": 100}, "shots": 1000}, null]"#;
//! let batch = BatchResult::from_json(json)?;
//! let outcomes = survival_probabilities(&batch, 2)?;
//! assert_eq!(outcomes, vec![StepOutcome::Observed(0.9), StepOutcome::Missing]);
//! # Ok::<(), chainsynth_hal::HalError>(())
//! ```
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use chainsynth_hal::{Backend, BatchResult, HalResult, JobId, JobStatus};
//! use chainsynth_ir::Circuit;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { "my_backend" }
//!
//!     async fn submit(&self, circuits: &[Circuit], shots: u32) -> HalResult<JobId> {
//!         // Transpile and queue the whole family
//!         # todo!()
//!     }
//!
//!     async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
//!         # todo!()
//!     }
//!
//!     async fn result(&self, job_id: &JobId) -> HalResult<BatchResult> {
//!         # todo!()
//!     }
//! }
//! ```

pub mod analysis;
pub mod backend;
pub mod error;
pub mod job;
pub mod result;

pub use analysis::{
    BellProbabilities, CoherenceProfile, StepOutcome, TWO_QUBIT_DEPTH_PER_STEP, depth_axis,
    survival_probabilities, survival_probability,
};
pub use backend::{Backend, WaitOptions};
pub use error::{HalError, HalResult};
pub use job::{JobId, JobStatus};
pub use result::{BatchResult, Counts, ExecutionResult};
