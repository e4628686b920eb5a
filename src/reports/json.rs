//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::roadmap::StrategicRoadmap;
use crate::scoring::AggregateScores;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_score_report(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonScoreReport {
            metadata: JsonReportMetadata::from_config(config),
            completion_rate: scores.completion_rate(),
            scores,
        })
    }

    fn generate_roadmap_report(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonRoadmapReport {
            metadata: JsonReportMetadata::from_config(config),
            roadmap,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonScoreReport<'a> {
    metadata: JsonReportMetadata,
    completion_rate: f64,
    #[serde(flatten)]
    scores: &'a AggregateScores,
}

#[derive(Serialize)]
struct JsonRoadmapReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    roadmap: &'a StrategicRoadmap,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answers_file: Option<String>,
}

impl JsonReportMetadata {
    fn from_config(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: "maturity-roadmap".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            title: config.title.clone(),
            generated_at: config.metadata.generated_at.clone(),
            answers_file: config.metadata.answers_path.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{sample_roadmap, sample_scores};

    #[test]
    fn test_score_report_fields() {
        let json = JsonReporter::new()
            .generate_score_report(&sample_scores(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "maturity-roadmap");
        assert_eq!(value["product_id"], "web-shop");
        assert_eq!(value["overall_level"], 3);
        assert_eq!(value["question_count"], 5);
        assert_eq!(value["answered_count"], 4);
        assert_eq!(value["unscored_sub_dimensions"][0], "Monitoring");
    }

    #[test]
    fn test_roadmap_phases_keep_schedule_order() {
        let json = JsonReporter::new()
            .generate_roadmap_report(&sample_roadmap(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let phases: Vec<&String> = value["roadmap"]["phases"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(phases, vec!["0-3 months", "3-6 months", "maintenance"]);

        let first = &value["roadmap"]["phases"]["0-3 months"][0];
        assert_eq!(first["sub_dimension"], "Build");
        assert_eq!(first["target_level"], 3);
        assert_eq!(first["recommendation_source"], "table");
        assert_eq!(value["horizon_months"], 12);
    }

    #[test]
    fn test_compact_output() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate_score_report(&sample_scores(), &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_metadata_from_config() {
        let config = ReportConfig::default().with_answers_path("answers.yaml");
        let json = JsonReporter::new()
            .generate_score_report(&sample_scores(), &config)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["answers_file"], "answers.yaml");
        assert!(value["metadata"].get("generated_at").is_none());
    }
}
