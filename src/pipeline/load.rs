//! Input loading stage.
//!
//! Reads the answer file and assembles the recommendation table a command
//! runs against.

use super::PipelineError;
use crate::config::{RecommendationsConfig, ScoringConfig};
use crate::roadmap::RecommendationTable;
use crate::store::InMemoryAnswerStore;
use std::path::Path;

/// Load an answer file into an in-memory store
pub fn load_assessment(
    path: &Path,
    scoring: &ScoringConfig,
    quiet: bool,
) -> Result<InMemoryAnswerStore, PipelineError> {
    if !quiet {
        tracing::info!("Loading answers: {}", path.display());
    }

    let store = crate::store::load_answer_file(path, scoring.accept_percent_scale).map_err(
        |source| PipelineError::LoadFailed {
            path: path.display().to_string(),
            source,
        },
    )?;

    if !quiet {
        tracing::info!(
            "Loaded {} answer(s) for {} assessment(s)",
            store.len(),
            store.assessments().len()
        );
    }
    Ok(store)
}

/// Build the recommendation table: built-in entries (unless disabled)
/// overlaid with the configured table file.
pub fn load_recommendations(
    config: &RecommendationsConfig,
) -> Result<RecommendationTable, PipelineError> {
    let mut table = if config.use_builtin {
        RecommendationTable::builtin()
    } else {
        RecommendationTable::new()
    };

    if let Some(ref path) = config.table_file {
        let custom = RecommendationTable::load(path).map_err(|source| {
            PipelineError::RecommendationsFailed {
                path: path.display().to_string(),
                source,
            }
        })?;
        table.merge(custom);
    }

    if table.is_empty() {
        tracing::warn!("Recommendation table is empty; every item will use generic text");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MaturityLevel;
    use tempfile::TempDir;

    #[test]
    fn test_load_recommendations_builtin_only() {
        let table = load_recommendations(&RecommendationsConfig::default()).unwrap();
        assert_eq!(table, RecommendationTable::builtin());
    }

    #[test]
    fn test_load_recommendations_overlay() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recs.yaml");
        std::fs::write(
            &path,
            "recommendations:\n  - {sub_dimension: Build, current: 2, target: 3, text: Use the golden pipeline}\n",
        )
        .unwrap();

        let config = RecommendationsConfig {
            table_file: Some(path.clone()),
            use_builtin: false,
        };
        let table = load_recommendations(&config).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("Build", MaturityLevel::Developing, MaturityLevel::Defined),
            Some("Use the golden pipeline")
        );
    }

    #[test]
    fn test_load_recommendations_missing_file() {
        let config = RecommendationsConfig {
            table_file: Some("/nonexistent/recs.yaml".into()),
            use_builtin: true,
        };
        let err = load_recommendations(&config).unwrap_err();
        assert!(matches!(err, PipelineError::RecommendationsFailed { .. }));
    }

    #[test]
    fn test_load_assessment_missing_file() {
        let err = load_assessment(
            Path::new("/nonexistent/answers.yaml"),
            &ScoringConfig::default(),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/answers.yaml"));
    }
}
