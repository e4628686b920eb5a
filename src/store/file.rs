//! Answer files on disk (JSON or YAML).

use super::InMemoryAnswerStore;
use crate::error::{ErrorContext, MaturityError, Result};
use crate::model::{Answer, AnswerValue, MAX_SCORE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound of the legacy percentage scale (A=20 … E=100)
const LEGACY_SCALE_MAX: f64 = 100.0;
/// Divisor mapping the legacy percentage scale onto 1-5
const LEGACY_SCALE_DIVISOR: f64 = 20.0;

/// Serialization format of an answer file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFileFormat {
    Json,
    Yaml,
}

impl AnswerFileFormat {
    /// Detect the format from a file extension; unknown extensions are YAML,
    /// which also accepts JSON documents.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Top-level document of an answer file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerFile {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AnswerFile {
    /// Rescale numeric answers recorded on the legacy 20-100 scale.
    ///
    /// Scores in (5, 100] are divided by 20; anything else is left for the
    /// level mapper to accept or reject.
    pub fn normalize_legacy_scale(&mut self) -> usize {
        let mut rescaled = 0;
        for answer in &mut self.answers {
            if let Some(AnswerValue::Score(score)) = answer.answer.as_mut() {
                if *score > MAX_SCORE && *score <= LEGACY_SCALE_MAX {
                    *score /= LEGACY_SCALE_DIVISOR;
                    rescaled += 1;
                }
            }
        }
        rescaled
    }

    /// Move the answers into an in-memory store
    #[must_use]
    pub fn into_store(self) -> InMemoryAnswerStore {
        InMemoryAnswerStore::from_answers(self.answers)
    }
}

/// Parse an answer document from a string.
pub fn parse_answers_str(content: &str, format: AnswerFileFormat) -> Result<AnswerFile> {
    let file: AnswerFile = match format {
        AnswerFileFormat::Json => serde_json::from_str(content)?,
        AnswerFileFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(file)
}

/// Load an answer file into an in-memory store.
///
/// With `accept_percent_scale`, legacy 20-100 scores are rescaled to 1-5.
pub fn load_answer_file(path: &Path, accept_percent_scale: bool) -> Result<InMemoryAnswerStore> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;
    let mut file = parse_answers_str(&content, AnswerFileFormat::from_path(path))
        .with_context(|| format!("answer file {}", path.display()))?;

    if accept_percent_scale {
        let rescaled = file.normalize_legacy_scale();
        if rescaled > 0 {
            tracing::info!("Rescaled {rescaled} answer(s) from the 20-100 scale");
        }
    }

    tracing::debug!(
        "Loaded {} answer(s) from {}",
        file.answers.len(),
        path.display()
    );
    Ok(file.into_store())
}
