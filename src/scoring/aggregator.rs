//! Score aggregation.
//!
//! Turns the answers of one assessment into sub-dimension, dimension and
//! overall maturity scores.
//!
//! The overall score is a two-stage average: each dimension is first
//! averaged over its own questions, then the dimension averages are averaged.
//! Every dimension therefore weighs the same regardless of how many
//! questions it contains. This is intentional and must not be replaced by a
//! flat mean over all answers.

use crate::error::{MaturityError, OptionContext, Result};
use crate::model::{level_from_score, Answer, MaturityLevel};
use crate::store::AnswerStore;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Derived maturity of one sub-dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDimensionMaturity {
    /// Sub-dimension identifier
    pub sub_dimension: String,
    /// Dimension the sub-dimension belongs to
    pub dimension: String,
    /// Mean of the scored answers (1-5)
    pub average_score: f64,
    /// Rounded level of the average
    pub current_level: MaturityLevel,
    /// `current_level + 1`, capped at 5
    pub target_level: MaturityLevel,
    /// Number of scored questions
    pub question_count: usize,
}

/// Average score of one dimension over all of its scored questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Dimension identifier
    pub dimension: String,
    /// Sum of question scores / number of scored questions
    pub average_score: f64,
    /// Rounded level of the average
    pub level: MaturityLevel,
    /// Number of scored questions
    pub question_count: usize,
}

/// Aggregated scores of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AggregateScores {
    pub product_id: String,
    pub user_id: String,
    /// Scored sub-dimensions, sorted by identifier
    pub sub_dimensions: Vec<SubDimensionMaturity>,
    /// Sub-dimensions with questions but no scored answer, sorted
    pub unscored_sub_dimensions: Vec<String>,
    /// Scored dimensions, sorted by identifier
    pub dimensions: Vec<DimensionScore>,
    /// Mean of the dimension averages
    pub overall_score: f64,
    /// Rounded level of the overall score
    pub overall_level: MaturityLevel,
    /// Questions presented (answered or not)
    pub question_count: usize,
    /// Questions with a recorded value
    pub answered_count: usize,
}

impl AggregateScores {
    /// Look up a scored sub-dimension
    #[must_use]
    pub fn sub_dimension(&self, id: &str) -> Option<&SubDimensionMaturity> {
        self.sub_dimensions.iter().find(|s| s.sub_dimension == id)
    }

    /// Average score of a sub-dimension.
    ///
    /// A sub-dimension without scored answers has no average; this returns
    /// [`MaturityError::NoData`] instead of a zero.
    pub fn sub_dimension_average(&self, id: &str) -> Result<f64> {
        self.sub_dimension(id)
            .map(|s| s.average_score)
            .with_context_none(|| format!("sub-dimension '{id}'"))
    }

    /// Look up a scored dimension
    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == id)
    }

    /// Average score of a dimension, [`MaturityError::NoData`] when unscored
    pub fn dimension_average(&self, id: &str) -> Result<f64> {
        self.dimension(id)
            .map(|d| d.average_score)
            .with_context_none(|| format!("dimension '{id}'"))
    }

    /// Share of presented questions that were answered (0.0-1.0)
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.question_count == 0 {
            0.0
        } else {
            self.answered_count as f64 / self.question_count as f64
        }
    }
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Overall maturity score from dimension averages.
///
/// Sum of dimension averages / number of dimensions.
pub fn overall_score(dimension_averages: &[f64]) -> Result<f64> {
    mean(dimension_averages).context_none("overall score (no scored dimensions)")
}

/// Aggregate a snapshot of answers belonging to one product/user pair.
///
/// Pure function over the given answers; their order does not matter.
pub fn aggregate_answers(
    product_id: &str,
    user_id: &str,
    mut answers: Vec<Answer>,
) -> Result<AggregateScores> {
    let scope = format!("product '{product_id}' / user '{user_id}'");
    if answers.is_empty() {
        return Err(MaturityError::no_data(scope));
    }

    // Fixed summation order keeps repeated runs bit-identical
    answers.sort_by(|a, b| {
        (&a.dimension, &a.sub_dimension, &a.question_id).cmp(&(
            &b.dimension,
            &b.sub_dimension,
            &b.question_id,
        ))
    });

    let mut parent_of: BTreeMap<&str, &str> = BTreeMap::new();
    let mut seen_questions: BTreeSet<&str> = BTreeSet::new();
    let mut sub_scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut dim_scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut answered_count = 0;

    for answer in &answers {
        if !seen_questions.insert(answer.question_id.as_str()) {
            return Err(MaturityError::validation(format!(
                "question '{}' appears more than once in {scope}",
                answer.question_id
            )));
        }

        let parent = *parent_of
            .entry(answer.sub_dimension.as_str())
            .or_insert(answer.dimension.as_str());
        if parent != answer.dimension {
            return Err(MaturityError::validation(format!(
                "sub-dimension '{}' is listed under both '{}' and '{}'",
                answer.sub_dimension, parent, answer.dimension
            )));
        }

        let scores = sub_scores.entry(answer.sub_dimension.as_str()).or_default();
        if let Some(score) = answer.score()? {
            answered_count += 1;
            scores.push(score);
            dim_scores
                .entry(answer.dimension.as_str())
                .or_default()
                .push(score);
        }
    }

    let mut sub_dimensions = Vec::new();
    let mut unscored_sub_dimensions = Vec::new();
    for (sub, scores) in &sub_scores {
        let Some(average_score) = mean(scores) else {
            tracing::debug!("Sub-dimension '{sub}' has no scored answers");
            unscored_sub_dimensions.push((*sub).to_string());
            continue;
        };
        let current_level = level_from_score(average_score)?;
        sub_dimensions.push(SubDimensionMaturity {
            sub_dimension: (*sub).to_string(),
            dimension: parent_of.get(sub).copied().unwrap_or_default().to_string(),
            average_score,
            current_level,
            target_level: current_level.target(),
            question_count: scores.len(),
        });
    }

    let mut dimensions = Vec::with_capacity(dim_scores.len());
    for (dim, scores) in &dim_scores {
        let average_score = mean(scores).with_context_none(|| format!("dimension '{dim}'"))?;
        dimensions.push(DimensionScore {
            dimension: (*dim).to_string(),
            average_score,
            level: level_from_score(average_score)?,
            question_count: scores.len(),
        });
    }

    if dimensions.is_empty() {
        return Err(MaturityError::no_data(format!(
            "{scope} (no answered questions)"
        )));
    }

    let averages: Vec<f64> = dimensions.iter().map(|d| d.average_score).collect();
    let overall = overall_score(&averages)?;
    let overall_level = level_from_score(overall)?;

    tracing::debug!(
        "Aggregated {scope}: {} dimension(s), {} sub-dimension(s), overall {overall:.2}",
        dimensions.len(),
        sub_dimensions.len()
    );

    Ok(AggregateScores {
        product_id: product_id.to_string(),
        user_id: user_id.to_string(),
        sub_dimensions,
        unscored_sub_dimensions,
        dimensions,
        overall_score: overall,
        overall_level,
        question_count: answers.len(),
        answered_count,
    })
}

/// Score aggregator reading from an answer store
#[derive(Debug, Clone)]
pub struct ScoreAggregator<S> {
    store: S,
}

impl<S: AnswerStore> ScoreAggregator<S> {
    /// Create an aggregator over the given store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying answer store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Aggregate the stored answers of one product/user pair.
    ///
    /// Read-only against the store. Fails with [`MaturityError::NoData`]
    /// when the pair has no scored answers at all.
    pub fn aggregate(&self, product_id: &str, user_id: &str) -> Result<AggregateScores> {
        let answers = self.store.answers(product_id, user_id)?;
        aggregate_answers(product_id, user_id, answers)
    }
}
