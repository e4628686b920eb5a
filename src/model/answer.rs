//! Questionnaire answers as handed over by the answer store.

use super::level::{validate_score, Grade};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value recorded for a question: a letter grade or a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Letter grade A-E
    Grade(Grade),
    /// Numeric score, expected on the 1-5 scale
    Score(f64),
}

impl AnswerValue {
    /// Raw score without range validation
    #[must_use]
    pub const fn raw_score(&self) -> f64 {
        match self {
            Self::Grade(grade) => grade.score(),
            Self::Score(score) => *score,
        }
    }

    /// Validated score on the 1-5 scale
    pub fn score(&self) -> Result<f64> {
        validate_score(self.raw_score())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grade(grade) => write!(f, "{grade}"),
            Self::Score(score) => write!(f, "{score:.1}"),
        }
    }
}

/// One questionnaire response.
///
/// `answer` is `None` when the question was presented but left unanswered;
/// such entries count toward completion but never toward an average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub product_id: String,
    pub user_id: String,
    pub question_id: String,
    #[serde(alias = "dimension_id")]
    pub dimension: String,
    #[serde(alias = "sub_dimension_id")]
    pub sub_dimension: String,
    #[serde(default)]
    pub answer: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Answer {
    /// Create an answered question
    pub fn new(
        product_id: impl Into<String>,
        user_id: impl Into<String>,
        question_id: impl Into<String>,
        dimension: impl Into<String>,
        sub_dimension: impl Into<String>,
        value: AnswerValue,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            user_id: user_id.into(),
            question_id: question_id.into(),
            dimension: dimension.into(),
            sub_dimension: sub_dimension.into(),
            answer: Some(value),
            comment: None,
        }
    }

    /// Mark the question as unanswered
    #[must_use]
    pub fn unanswered(mut self) -> Self {
        self.answer = None;
        self
    }

    /// Attach a free-text comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether a value was recorded
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Validated score, `None` when unanswered.
    ///
    /// Out-of-range scores surface as [`MaturityError::InvalidScore`](crate::error::MaturityError::InvalidScore).
    pub fn score(&self) -> Result<Option<f64>> {
        let Some(value) = &self.answer else {
            return Ok(None);
        };
        value.score().map(Some).map_err(|e| {
            tracing::debug!(question = %self.question_id, "rejecting answer: {e}");
            e
        })
    }

    /// Whether this answer belongs to the given product and user
    #[must_use]
    pub fn belongs_to(&self, product_id: &str, user_id: &str) -> bool {
        self.product_id == product_id && self.user_id == user_id
    }
}
