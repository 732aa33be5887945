//! Document-level orchestration.
//!
//! - [`documents`] - Addressing every need of every loaded document
//! - [`report`] - Per-document outcomes and the run verdict

pub mod documents;
pub mod report;

pub use documents::{FailurePolicy, NeedsRunner, RunOptions};
pub use report::{DocumentReport, RunReport, UNNAMED_NEED};
