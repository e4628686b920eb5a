//! Report type definitions.

use chrono::Utc;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Compact terminal summary (colored)
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Metadata included in the report header
    pub metadata: ReportMetadata,
    /// Include key findings and general recommendations
    pub include_findings: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            metadata: ReportMetadata::default(),
            include_findings: true,
        }
    }
}

impl ReportConfig {
    /// Report config with metadata stamped now
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: ReportMetadata::new(),
            ..Default::default()
        }
    }

    /// Record the answer file the report was generated from
    #[must_use]
    pub fn with_answers_path(mut self, path: impl Into<String>) -> Self {
        self.metadata.answers_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Answer file path
    pub answers_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Some(Utc::now().to_rfc3339()),
            ..Default::default()
        }
    }
}
