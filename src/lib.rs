//! **Security maturity scoring and improvement roadmaps.**
//!
//! `maturity-roadmap` turns questionnaire answers (letter grades A–E, grouped
//! into sub-dimensions and dimensions in the style of DSOMM) into maturity
//! scores and a time-phased plan of "current level → target level" actions.
//!
//! ## Key Features
//!
//! - **Two-stage scoring**: dimension averages over question scores, overall
//!   score as the equal-weight mean of dimension averages.
//! - **Deterministic levels**: scores map to levels 1–5 by rounding half away
//!   from zero; invalid scores are errors, never clamped.
//! - **Phased roadmaps**: each scored sub-dimension gets one item targeting the
//!   next level, scheduled into 0–3, 3–6 or 6–12 month windows (or maintenance)
//!   by a declarative phase table.
//! - **Injected recommendations**: advice text comes from a
//!   [`RecommendationTable`] (built-in, YAML, or both) with a generic fallback.
//! - **Reporting**: summary, JSON and Markdown output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Answer`], [`Grade`] and [`MaturityLevel`], plus the
//!   score → level mapping.
//! - **[`store`]**: the [`AnswerStore`] seam and the answer-file loader.
//! - **[`scoring`]**: the [`ScoreAggregator`] and narrative findings.
//! - **[`roadmap`]**: phases, recommendation lookup and the [`RoadmapBuilder`].
//! - **[`reports`]**: report generators.
//! - **[`pipeline`]**, **[`config`]**, **[`cli`]**: orchestration used by the
//!   `maturity-roadmap` binary.
//!
//! ## Getting Started
//!
//! ```
//! use maturity_roadmap::{
//!     Answer, AnswerValue, Grade, InMemoryAnswerStore, Phase, RecommendationTable,
//!     RoadmapBuilder,
//! };
//!
//! let answers = vec![
//!     Answer::new("web-shop", "alice", "b1", "Build and Deployment", "Build", AnswerValue::Grade(Grade::B)),
//!     Answer::new("web-shop", "alice", "d1", "Build and Deployment", "Deployment", AnswerValue::Grade(Grade::B)),
//!     Answer::new("web-shop", "alice", "g1", "Culture and Organization", "Design", AnswerValue::Grade(Grade::C)),
//! ];
//!
//! let builder = RoadmapBuilder::new(
//!     InMemoryAnswerStore::from_answers(answers),
//!     RecommendationTable::builtin(),
//! );
//! let roadmap = builder.build_subdimension_roadmap("web-shop", "alice")?;
//!
//! let first_quarter: Vec<&str> = roadmap
//!     .phase(Phase::Immediate)
//!     .iter()
//!     .map(|item| item.sub_dimension.as_str())
//!     .collect();
//! assert_eq!(first_quarter, ["Build", "Deployment"]);
//! # Ok::<(), maturity_roadmap::MaturityError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `maturity-roadmap` binary
//! wraps it with `score`, `roadmap` and `config` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Counts are cast to f64 for averages and completion rates
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are not written per fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod roadmap;
pub mod scoring;
pub mod store;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use config::{BehaviorConfig, OutputConfig, RecommendationsConfig, ScoringConfig};
pub use error::{ErrorContext, MaturityError, MaturityWarning, OptionContext, Result};
pub use model::{level_from_score, Answer, AnswerValue, Grade, MaturityLevel};
pub use reports::{ReportFormat, ReportGenerator, WriterReporter};
pub use roadmap::{
    Phase, PhasePriority, RecommendationResolver, RecommendationTable, RoadmapBuilder,
    RoadmapItem, StrategicRoadmap, SubDimensionRoadmap,
};
pub use scoring::{AggregateScores, DimensionScore, ScoreAggregator, SubDimensionMaturity};
pub use store::{load_answer_file, AnswerStore, InMemoryAnswerStore};
