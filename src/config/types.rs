//! Configuration types for maturity-roadmap operations.
//!
//! Provides the file-backed application configuration and the per-command
//! configuration structs handed to the `score` and `roadmap` handlers.

use crate::model::MaturityLevel;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Score normalization options
    pub scoring: ScoringConfig,
    /// Recommendation table sources
    pub recommendations: RecommendationsConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Accept legacy 20-100 scores.
    pub const fn accept_percent_scale(mut self, accept: bool) -> Self {
        self.config.scoring.accept_percent_scale = accept;
        self
    }

    /// Set a custom recommendation table file.
    pub fn recommendations_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.recommendations.table_file = file;
        self
    }

    /// Include the built-in recommendation table.
    pub const fn use_builtin_recommendations(mut self, use_builtin: bool) -> Self {
        self.config.recommendations.use_builtin = use_builtin;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Fail when the overall level is below this level.
    pub const fn min_overall_level(mut self, level: Option<u8>) -> Self {
        self.config.behavior.min_overall_level = level;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Types
// ============================================================================

/// Score normalization options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Divide numeric scores in (5, 100] by 20 before validation
    pub accept_percent_scale: bool,
}

/// Where recommendation text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecommendationsConfig {
    /// YAML recommendation table layered over the built-in one
    pub table_file: Option<PathBuf>,
    /// Start from the built-in DSOMM table
    pub use_builtin: bool,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the overall level is below this level (1-5)
    #[schemars(range(min = 1, max = 5))]
    pub min_overall_level: Option<u8>,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// The assessment a command operates on
#[derive(Debug, Clone)]
pub struct AssessmentSource {
    /// Answer file (JSON or YAML)
    pub answers_path: PathBuf,
    pub product_id: String,
    pub user_id: String,
}

/// Configuration for the `score` command
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub source: AssessmentSource,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Configuration for the `roadmap` command
#[derive(Debug, Clone)]
pub struct RoadmapConfig {
    pub source: AssessmentSource,
    pub scoring: ScoringConfig,
    pub recommendations: RecommendationsConfig,
    pub output: OutputConfig,
    /// Exit with code 1 if the overall level is below this
    pub min_level: Option<MaturityLevel>,
}
