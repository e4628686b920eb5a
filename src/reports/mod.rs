//! Report generation for maturity scores and roadmaps.
//!
//! This module provides multiple output formats:
//! - Summary: Compact shell-friendly output
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Text taken from answer or recommendation files must be escaped before
//! embedding in Markdown reports.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::roadmap::StrategicRoadmap;
use crate::scoring::AggregateScores;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report of aggregated scores (`score` command)
    fn generate_score_report(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a roadmap report (`roadmap` command)
    fn generate_roadmap_report(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Trait for writing reports directly to a [`Write`] sink.
///
/// Every `ReportGenerator` implements this through a blanket impl that
/// renders the full report and then writes it.
pub trait WriterReporter {
    fn write_score_to<W: Write>(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError>;

    fn write_roadmap_to<W: Write>(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError>;
}

impl<T: ReportGenerator + ?Sized> WriterReporter for T {
    fn write_score_to<W: Write>(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        let report = self.generate_score_report(scores, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    fn write_roadmap_to<W: Write>(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        let report = self.generate_roadmap_report(roadmap, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Maturity level color used by terminal output
pub(crate) const fn level_color(level: crate::model::MaturityLevel) -> &'static str {
    use crate::model::MaturityLevel;
    match level {
        MaturityLevel::Initial | MaturityLevel::Developing => "red",
        MaturityLevel::Defined => "yellow",
        MaturityLevel::Managed | MaturityLevel::Optimized => "green",
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Answer, AnswerValue, Grade};
    use crate::roadmap::{RecommendationTable, RoadmapBuilder, StrategicRoadmap};
    use crate::scoring::{aggregate_answers, AggregateScores};
    use crate::store::InMemoryAnswerStore;

    pub fn sample_answers() -> Vec<Answer> {
        let rows = [
            ("b1", "Build and Deployment", "Build", Grade::B),
            ("d1", "Build and Deployment", "Deployment", Grade::B),
            ("g1", "Culture and Organization", "Design", Grade::C),
            ("h1", "Implementation", "Application Hardening", Grade::E),
        ];
        let mut answers: Vec<Answer> = rows
            .iter()
            .map(|(q, dim, sub, grade)| {
                Answer::new("web-shop", "alice", *q, *dim, *sub, AnswerValue::Grade(*grade))
            })
            .collect();
        answers.push(
            Answer::new(
                "web-shop",
                "alice",
                "m1",
                "Information Gathering",
                "Monitoring",
                AnswerValue::Grade(Grade::A),
            )
            .unanswered(),
        );
        answers
    }

    pub fn sample_scores() -> AggregateScores {
        aggregate_answers("web-shop", "alice", sample_answers()).unwrap()
    }

    pub fn sample_roadmap() -> StrategicRoadmap {
        RoadmapBuilder::new(
            InMemoryAnswerStore::from_answers(sample_answers()),
            RecommendationTable::builtin(),
        )
        .build_overall_roadmap("web-shop", "alice")
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_writer_reporter_writes_full_report() {
        let roadmap = test_support::sample_roadmap();
        let reporter = JsonReporter::new();
        let config = ReportConfig::default();

        let mut buf = Vec::new();
        reporter.write_roadmap_to(&roadmap, &config, &mut buf).unwrap();
        let expected = reporter.generate_roadmap_report(&roadmap, &config).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
