//! Core data model for maturity assessments.
//!
//! Answers are read-only inputs owned by the answer store. Everything else
//! (levels, averages, roadmap items) is derived from them on each request.

mod answer;
mod level;

pub use answer::{Answer, AnswerValue};
pub use level::{level_from_score, validate_score, Grade, MaturityLevel, MAX_SCORE, MIN_SCORE};
