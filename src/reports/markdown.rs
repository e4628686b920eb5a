//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::roadmap::{ItemKind, RecommendationSource, StrategicRoadmap};
use crate::scoring::{AggregateScores, DimensionScore};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the per-sub-dimension table in roadmap reports
    include_details: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_details: true,
        }
    }

    /// Omit the per-sub-dimension table
    #[must_use]
    pub const fn without_details(mut self) -> Self {
        self.include_details = false;
        self
    }

    fn write_metadata(out: &mut String, config: &ReportConfig) -> std::fmt::Result {
        if let Some(ref generated) = config.metadata.generated_at {
            writeln!(out, "_Generated: {generated}_  ")?;
        }
        if let Some(ref path) = config.metadata.answers_path {
            writeln!(out, "_Answers: `{}`_  ", escape_markdown_table(path))?;
        }
        Ok(())
    }

    fn write_dimensions(out: &mut String, dimensions: &[DimensionScore]) -> std::fmt::Result {
        writeln!(out, "## Dimensions\n")?;
        writeln!(out, "| Dimension | Average | Level | Questions |")?;
        writeln!(out, "|-----------|---------|-------|-----------|")?;
        for dim in dimensions {
            writeln!(
                out,
                "| {} | {:.2} | {} | {} |",
                escape_markdown_table(&dim.dimension),
                dim.average_score,
                dim.level.label(),
                dim.question_count
            )?;
        }
        writeln!(out)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_score_report(
        &self,
        scores: &AggregateScores,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let title = config.title.as_deref().unwrap_or("Security Maturity Scores");

        writeln!(out, "# {}\n", escape_markdown_inline(title))?;
        Self::write_metadata(&mut out, config)?;
        writeln!(
            out,
            "\n**Assessment:** {} / {}  ",
            escape_markdown_inline(&scores.product_id),
            escape_markdown_inline(&scores.user_id)
        )?;
        writeln!(
            out,
            "**Overall score:** {:.2} ({})  ",
            scores.overall_score,
            scores.overall_level.label()
        )?;
        writeln!(
            out,
            "**Completion:** {}/{} questions ({:.0}%)\n",
            scores.answered_count,
            scores.question_count,
            scores.completion_rate() * 100.0
        )?;

        Self::write_dimensions(&mut out, &scores.dimensions)?;

        writeln!(out, "## Sub-dimensions\n")?;
        writeln!(out, "| Sub-dimension | Dimension | Average | Current | Target |")?;
        writeln!(out, "|---------------|-----------|---------|---------|--------|")?;
        for sub in &scores.sub_dimensions {
            writeln!(
                out,
                "| {} | {} | {:.2} | {} | {} |",
                escape_markdown_table(&sub.sub_dimension),
                escape_markdown_table(&sub.dimension),
                sub.average_score,
                sub.current_level,
                sub.target_level
            )?;
        }

        if !scores.unscored_sub_dimensions.is_empty() {
            writeln!(
                out,
                "\n_Not answered:_ {}",
                escape_markdown_inline(&scores.unscored_sub_dimensions.join(", "))
            )?;
        }

        Ok(out)
    }

    fn generate_roadmap_report(
        &self,
        roadmap: &StrategicRoadmap,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let title = config.title.as_deref().unwrap_or("Security Maturity Roadmap");

        writeln!(out, "# {}\n", escape_markdown_inline(title))?;
        Self::write_metadata(&mut out, config)?;
        writeln!(
            out,
            "\n**Assessment:** {} / {}  ",
            escape_markdown_inline(&roadmap.product_id),
            escape_markdown_inline(&roadmap.user_id)
        )?;
        writeln!(
            out,
            "**Overall score:** {:.2} ({})  ",
            roadmap.overall_score,
            roadmap.overall_level.label()
        )?;
        writeln!(
            out,
            "**Completion:** {}/{} questions ({:.0}%)\n",
            roadmap.answered_count,
            roadmap.question_count,
            roadmap.completion_rate() * 100.0
        )?;

        if config.include_findings {
            writeln!(out, "## Key Findings\n")?;
            for finding in &roadmap.key_findings {
                writeln!(out, "- {finding}")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "## {}-Month Plan\n", roadmap.horizon_months)?;
        for line in &roadmap.narrative {
            writeln!(out, "- {}", escape_markdown_inline(line))?;
        }
        writeln!(out)?;

        for (phase, items) in &roadmap.roadmap.phases {
            let priority = items.first().map(|i| i.priority.name()).unwrap_or_default();
            writeln!(out, "### {} ({priority} priority)\n", phase.label())?;
            for item in items {
                let suffix = match (item.kind, item.recommendation_source) {
                    (ItemKind::Maintenance, _) => " _(maintain)_",
                    (_, RecommendationSource::Fallback) => " _(generic)_",
                    _ => "",
                };
                writeln!(
                    out,
                    "- **{}** {}: {}{suffix}",
                    escape_markdown_inline(&item.sub_dimension),
                    item.transition(),
                    escape_markdown_inline(&item.recommendation)
                )?;
            }
            writeln!(out)?;
        }

        if self.include_details {
            Self::write_dimensions(&mut out, &roadmap.dimensions)?;
        }

        if config.include_findings {
            writeln!(out, "## General Recommendations\n")?;
            for (i, rec) in roadmap.general_recommendations.iter().enumerate() {
                writeln!(out, "{}. {rec}", i + 1)?;
            }
            writeln!(out)?;
        }

        if !roadmap.roadmap.skipped.is_empty() {
            writeln!(
                out,
                "_Skipped (no answers):_ {}",
                escape_markdown_inline(&roadmap.roadmap.skipped.join(", "))
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{sample_roadmap, sample_scores};

    #[test]
    fn test_roadmap_sections() {
        let md = MarkdownReporter::new()
            .generate_roadmap_report(&sample_roadmap(), &ReportConfig::default())
            .unwrap();

        assert!(md.starts_with("# Security Maturity Roadmap"));
        assert!(md.contains("## Key Findings"));
        assert!(md.contains("## 12-Month Plan"));
        assert!(md.contains("### 0–3 months (High priority)"));
        assert!(md.contains("- **Build** L2→L3: Build in a CI pipeline with pinned, versioned artifacts"));
        assert!(md.contains("_(maintain)_"));
        assert!(md.contains("## Dimensions"));
        assert!(md.contains("1. Implement automated security monitoring"));
    }

    #[test]
    fn test_findings_can_be_disabled() {
        let config = ReportConfig {
            include_findings: false,
            ..Default::default()
        };
        let md = MarkdownReporter::new()
            .without_details()
            .generate_roadmap_report(&sample_roadmap(), &config)
            .unwrap();
        assert!(!md.contains("## Key Findings"));
        assert!(!md.contains("## General Recommendations"));
        assert!(!md.contains("## Dimensions"));
    }

    #[test]
    fn test_score_table_escapes_cells() {
        let mut scores = sample_scores();
        scores.sub_dimensions[0].sub_dimension = "Build | CI".to_string();
        let md = MarkdownReporter::new()
            .generate_score_report(&scores, &ReportConfig::default())
            .unwrap();
        assert!(md.contains("| Build \\| CI |"));
        assert!(md.contains("**Completion:** 4/5 questions (80%)"));
    }
}
