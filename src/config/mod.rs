//! Configuration module for maturity-roadmap.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use maturity_roadmap::config::{AppConfig, Validatable};
//! use maturity_roadmap::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Markdown)
//!     .min_overall_level(Some(3))
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.maturity-roadmap.yaml` file in your project root or
//! `~/.config/maturity-roadmap/`:
//!
//! ```yaml
//! recommendations:
//!   table_file: ./recommendations.yaml
//! output:
//!   format: markdown
//! behavior:
//!   min_overall_level: 3
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{CONFIG_DIR_NAME, DEFAULT_CONFIG_FILE_NAME, DEFAULT_REPORT_FORMAT};
pub use types::{
    AppConfig, AppConfigBuilder, AssessmentSource, BehaviorConfig, OutputConfig,
    RecommendationsConfig, RoadmapConfig, ScoreConfig, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate `.maturity-roadmap.yaml` files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
