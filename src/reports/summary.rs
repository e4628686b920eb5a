//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{level_color, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::roadmap::{RecommendationSource, StrategicRoadmap};
use crate::scoring::AggregateScores;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str, scores: &HeaderScores<'_>) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        lines.push(format!(
            "{}  {} / {}",
            self.color("Assessment:", "cyan"),
            scores.product_id,
            scores.user_id
        ));
        lines.push(format!(
            "{}     {:.2}  {}",
            self.color("Overall:", "cyan"),
            scores.overall_score,
            self.color(&scores.overall_level.label(), level_color(scores.overall_level))
        ));
        let rate = if scores.question_count == 0 {
            0.0
        } else {
            scores.answered_count as f64 * 100.0 / scores.question_count as f64
        };
        lines.push(format!(
            "{}  {}/{} questions answered ({rate:.0}%)",
            self.color("Completion:", "cyan"),
            scores.answered_count,
            scores.question_count
        ));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

struct HeaderScores<'a> {
    product_id: &'a str,
    user_id: &'a str,
    overall_score: f64,
    overall_level: crate::model::MaturityLevel,
    question_count: usize,
    answered_count: usize,
}

impl ReportGenerator for SummaryReporter {
    fn generate_score_report(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let title = config.title.as_deref().unwrap_or("Security Maturity Scores");
        self.header(
            &mut lines,
            title,
            &HeaderScores {
                product_id: &scores.product_id,
                user_id: &scores.user_id,
                overall_score: scores.overall_score,
                overall_level: scores.overall_level,
                question_count: scores.question_count,
                answered_count: scores.answered_count,
            },
        );

        lines.push(String::new());
        lines.push(self.color("Dimensions:", "bold"));
        let width = scores
            .dimensions
            .iter()
            .map(|d| d.dimension.chars().count())
            .max()
            .unwrap_or(0);
        for dim in &scores.dimensions {
            lines.push(format!(
                "  {:<width$}  {:.2}  {}",
                dim.dimension,
                dim.average_score,
                self.color(&dim.level.to_string(), level_color(dim.level))
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Sub-dimensions:", "bold"));
        let width = scores
            .sub_dimensions
            .iter()
            .map(|s| s.sub_dimension.chars().count())
            .max()
            .unwrap_or(0);
        for sub in &scores.sub_dimensions {
            lines.push(format!(
                "  {:<width$}  {:.2}  {} → {}",
                sub.sub_dimension,
                sub.average_score,
                self.color(&sub.current_level.to_string(), level_color(sub.current_level)),
                sub.target_level
            ));
        }

        if !scores.unscored_sub_dimensions.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                self.color("Not answered:", "dim"),
                scores.unscored_sub_dimensions.join(", ")
            ));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_roadmap_report(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let title = config.title.as_deref().unwrap_or("Security Maturity Roadmap");
        self.header(
            &mut lines,
            title,
            &HeaderScores {
                product_id: &roadmap.product_id,
                user_id: &roadmap.user_id,
                overall_score: roadmap.overall_score,
                overall_level: roadmap.overall_level,
                question_count: roadmap.question_count,
                answered_count: roadmap.answered_count,
            },
        );

        for (phase, items) in &roadmap.roadmap.phases {
            lines.push(String::new());
            let priority = items.first().map(|i| i.priority.name()).unwrap_or_default();
            lines.push(format!(
                "{} {}",
                self.color(phase.label(), "bold"),
                self.color(&format!("({priority} priority)"), "dim")
            ));
            for item in items {
                let marker = match item.recommendation_source {
                    RecommendationSource::Table => "",
                    RecommendationSource::Fallback => " *",
                };
                lines.push(format!(
                    "  {} {}  {}{marker}",
                    self.color(&item.transition(), level_color(item.current_level)),
                    item.sub_dimension,
                    item.recommendation
                ));
            }
        }

        if config.include_findings {
            lines.push(String::new());
            lines.push(self.color("Key findings:", "bold"));
            for finding in &roadmap.key_findings {
                lines.push(format!("  - {finding}"));
            }
        }

        if !roadmap.roadmap.skipped.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                self.color("Skipped (no answers):", "dim"),
                roadmap.roadmap.skipped.join(", ")
            ));
        }

        let missing = roadmap.roadmap.warnings.len();
        if missing > 0 {
            lines.push(self.color(
                &format!("* {missing} transition(s) without a recommendation, generic text used"),
                "yellow",
            ));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
