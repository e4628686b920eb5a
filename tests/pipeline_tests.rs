//! Pipeline and CLI integration tests.
//!
//! These tests exercise the load → score → roadmap → report pipeline,
//! error handling paths, and the CLI command handlers with real fixture files.

use maturity_roadmap::cli::{run_roadmap, run_score};
use maturity_roadmap::config::{
    AssessmentSource, OutputConfig, RecommendationsConfig, RoadmapConfig, ScoreConfig,
    ScoringConfig,
};
use maturity_roadmap::model::MaturityLevel;
use maturity_roadmap::pipeline::{
    exit_code_for_error, exit_codes, load_assessment, load_recommendations, write_output,
    OutputTarget, PipelineError,
};
use maturity_roadmap::reports::ReportFormat;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn source(file: &str, product: &str, user: &str) -> AssessmentSource {
    AssessmentSource {
        answers_path: fixture_path(file),
        product_id: product.to_string(),
        user_id: user.to_string(),
    }
}

fn file_output(path: &Path, format: ReportFormat) -> OutputConfig {
    OutputConfig {
        format,
        file: Some(path.to_path_buf()),
        no_color: true,
    }
}

fn roadmap_config(user: &str, output: OutputConfig) -> RoadmapConfig {
    RoadmapConfig {
        source: source("web-shop.yaml", "web-shop", user),
        scoring: ScoringConfig::default(),
        recommendations: RecommendationsConfig::default(),
        output,
        min_level: None,
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("report should be written");
    serde_json::from_str(&content).expect("report should be valid JSON")
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_yaml_fixture() {
        let store = load_assessment(&fixture_path("web-shop.yaml"), &ScoringConfig::default(), true)
            .expect("load should succeed");
        assert_eq!(store.len(), 8);
        assert_eq!(store.assessments().len(), 3);
    }

    #[test]
    fn load_missing_file_is_load_failed() {
        let err = load_assessment(
            Path::new("/nonexistent/answers.yaml"),
            &ScoringConfig::default(),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::LoadFailed { .. }));
        assert!(err.to_string().contains("answers.yaml"));
    }

    #[test]
    fn recommendations_overlay_builtin() {
        let config = RecommendationsConfig {
            table_file: Some(fixture_path("recommendations.yaml")),
            use_builtin: true,
        };
        let table = load_recommendations(&config).unwrap();
        assert_eq!(
            table.get("Build", MaturityLevel::Developing, MaturityLevel::Defined),
            Some("Move every build onto the shared CI template")
        );
        assert!(table
            .get("Logging", MaturityLevel::Initial, MaturityLevel::Developing)
            .is_some());
    }

    #[test]
    fn recommendations_without_builtin() {
        let config = RecommendationsConfig {
            table_file: Some(fixture_path("recommendations.yaml")),
            use_builtin: false,
        };
        assert_eq!(load_recommendations(&config).unwrap().len(), 2);
    }

    #[test]
    fn missing_recommendation_file_fails() {
        let config = RecommendationsConfig {
            table_file: Some(PathBuf::from("/nonexistent/recs.yaml")),
            use_builtin: true,
        };
        let err = load_recommendations(&config).unwrap_err();
        assert!(matches!(err, PipelineError::RecommendationsFailed { .. }));
    }
}

// ============================================================================
// Output Tests
// ============================================================================

mod output {
    use super::*;

    #[test]
    fn write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}

// ============================================================================
// Command Handler Tests
// ============================================================================

mod score_command {
    use super::*;

    #[test]
    fn score_writes_json_report() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("scores.json");
        let config = ScoreConfig {
            source: source("web-shop.yaml", "web-shop", "alice"),
            scoring: ScoringConfig::default(),
            output: file_output(&out, ReportFormat::Json),
        };

        let code = run_score(config, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = read_json(&out);
        assert_eq!(report["overall_score"], 2.625);
        assert_eq!(report["overall_level"], 3);
        assert_eq!(report["question_count"], 6);
        assert_eq!(report["answered_count"], 5);
        assert_eq!(report["unscored_sub_dimensions"][0], "Logging");
        assert!(report["metadata"]["answers_file"]
            .as_str()
            .unwrap()
            .ends_with("web-shop.yaml"));
    }

    #[test]
    fn score_unknown_user_is_no_data() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("scores.json");
        let config = ScoreConfig {
            source: source("web-shop.yaml", "web-shop", "mallory"),
            scoring: ScoringConfig::default(),
            output: file_output(&out, ReportFormat::Json),
        };

        assert_eq!(run_score(config, true).unwrap(), exit_codes::NO_DATA);
        assert!(!out.exists());
    }

    #[test]
    fn legacy_scale_needs_opt_in() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("scores.json");

        let strict = ScoreConfig {
            source: source("legacy-scale.json", "web-shop", "carol"),
            scoring: ScoringConfig::default(),
            output: file_output(&out, ReportFormat::Json),
        };
        let err = run_score(strict, true).unwrap_err();
        assert_eq!(exit_code_for_error(&err), exit_codes::ERROR);

        let lenient = ScoreConfig {
            source: source("legacy-scale.json", "web-shop", "carol"),
            scoring: ScoringConfig {
                accept_percent_scale: true,
            },
            output: file_output(&out, ReportFormat::Json),
        };
        assert_eq!(run_score(lenient, true).unwrap(), exit_codes::SUCCESS);
        assert_eq!(read_json(&out)["overall_score"], 3.0);
    }
}

mod roadmap_command {
    use super::*;

    #[test]
    fn roadmap_writes_markdown_report() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.md");
        let config = roadmap_config("alice", file_output(&out, ReportFormat::Markdown));

        assert_eq!(run_roadmap(config, true).unwrap(), exit_codes::SUCCESS);

        let md = std::fs::read_to_string(&out).unwrap();
        assert!(md.contains("## 12-Month Plan"));
        assert!(md.contains("Build in a CI pipeline with pinned, versioned artifacts"));
        assert!(md.contains("Logging"));
        assert!(!md.contains("\x1b["));
    }

    #[test]
    fn roadmap_json_uses_custom_table() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.json");
        let mut config = roadmap_config("alice", file_output(&out, ReportFormat::Json));
        config.recommendations.table_file = Some(fixture_path("recommendations.yaml"));

        assert_eq!(run_roadmap(config, true).unwrap(), exit_codes::SUCCESS);

        let report = read_json(&out);
        let immediate = &report["roadmap"]["phases"]["0-3 months"];
        assert_eq!(immediate[0]["sub_dimension"], "Build");
        assert_eq!(
            immediate[0]["recommendation"],
            "Move every build onto the shared CI template"
        );
        let short_term = report["roadmap"]["phases"]["3-6 months"].as_array().unwrap();
        assert_eq!(short_term.len(), 2);
        assert_eq!(report["roadmap"]["skipped"][0], "Logging");
    }

    #[test]
    fn roadmap_below_min_level() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.json");
        let mut config = roadmap_config("alice", file_output(&out, ReportFormat::Json));
        config.min_level = Some(MaturityLevel::Managed);

        assert_eq!(run_roadmap(config, true).unwrap(), exit_codes::BELOW_THRESHOLD);
        // The report is still produced before the gate is applied
        assert!(out.exists());
    }

    #[test]
    fn roadmap_meets_min_level() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.json");
        let mut config = roadmap_config("alice", file_output(&out, ReportFormat::Json));
        config.min_level = Some(MaturityLevel::Defined);

        assert_eq!(run_roadmap(config, true).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn roadmap_unknown_product_is_no_data() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.json");
        let mut config = roadmap_config("alice", file_output(&out, ReportFormat::Json));
        config.source.product_id = "intranet".to_string();

        assert_eq!(run_roadmap(config, true).unwrap(), exit_codes::NO_DATA);
    }

    #[test]
    fn roadmap_with_missing_answers_errors() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roadmap.json");
        let mut config = roadmap_config("alice", file_output(&out, ReportFormat::Json));
        config.source.answers_path = tmp.path().join("missing.yaml");

        let err = run_roadmap(config, true).unwrap_err();
        assert_eq!(exit_code_for_error(&err), exit_codes::ERROR);
    }
}
