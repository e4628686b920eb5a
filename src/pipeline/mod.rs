//! Pipeline orchestration for assessment operations.
//!
//! This module provides shared orchestration logic for load → score →
//! roadmap → report workflows, reducing duplication across CLI command
//! handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_assessment, load_recommendations};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{output_roadmap_report, output_score_report};

use crate::error::MaturityError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an answer file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: MaturityError,
    },

    /// Failed to read or parse a recommendation table
    #[error("Recommendation table failed for {path}: {source}")]
    RecommendationsFailed {
        path: String,
        #[source]
        source: MaturityError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall maturity level is below the requested minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// No scored answers for the requested product/user
    pub const NO_DATA: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Map an error from a command handler to a process exit code.
///
/// Missing data anywhere in the chain maps to [`exit_codes::NO_DATA`].
#[must_use]
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    let no_data = err.chain().any(|cause| {
        cause
            .downcast_ref::<MaturityError>()
            .is_some_and(MaturityError::is_no_data)
    });
    if no_data {
        exit_codes::NO_DATA
    } else {
        exit_codes::ERROR
    }
}
