//! Domain model for extraction task lifecycle.
//!
//! An [`ExtractionTask`] owns the project it mines and tracks status, result
//! and timing. Running the stages is the job of
//! [`crate::task::services::ExtractionPipeline`].

mod error;
mod ids;
mod status;
mod task;

pub use error::{ExtractionTaskError, FailureCategory, TaskStateError};
pub use ids::TaskId;
pub use status::{TaskResult, TaskStatus};
pub use task::{ExtractionTask, NewExtractionTask};
