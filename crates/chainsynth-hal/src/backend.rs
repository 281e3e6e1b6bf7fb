//! The execution backend seam.
//!
//! Circuit synthesis ends at a list of circuits; transpilation, execution and
//! run-time evaluation of parity guards all happen behind this trait.
//!
//! ```text
//!   submit(circuits, shots) ──→ status() ──→ result()
//!          (async)               (async)      (async)
//! ```
//!
//! No implementation ships with this crate.

use std::time::Duration;

use async_trait::async_trait;
use chainsynth_ir::Circuit;
use tracing::debug;

use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::BatchResult;

/// Polling schedule for [`Backend::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay between status polls.
    pub poll_interval: Duration,
    /// Give up after this many polls.
    pub max_polls: u32,
}

impl Default for WaitOptions {
    fn default() -> Self {
        // 5 minutes at 500ms
        Self {
            poll_interval: Duration::from_millis(500),
            max_polls: 600,
        }
    }
}

/// Trait for execution backends.
///
/// - `submit()` takes a whole family at once; results come back in the same
///   order.
/// - `result()` may return a batch with missing entries for circuits the
///   backend did not run.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Submit circuits for execution with `shots` shots each.
    async fn submit(&self, circuits: &[Circuit], shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the results of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<BatchResult>;

    /// Poll until the job is terminal, then fetch its results.
    async fn wait(&self, job_id: &JobId, options: WaitOptions) -> HalResult<BatchResult> {
        for poll in 0..options.max_polls {
            match self.status(job_id).await? {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Queued | JobStatus::Running => {
                    debug!(job = %job_id, poll, backend = self.name(), "Job pending");
                    tokio::time::sleep(options.poll_interval).await;
                }
            }
        }
        Err(HalError::Timeout(job_id.to_string()))
    }
}
