//! Answer store seam.
//!
//! The scoring core never owns answers; it asks an [`AnswerStore`] for the
//! responses of one product/user pair and treats the result as an unordered
//! snapshot.

mod file;

pub use file::{load_answer_file, parse_answers_str, AnswerFile, AnswerFileFormat};

use crate::error::Result;
use crate::model::Answer;

/// Read-only source of questionnaire answers.
///
/// Implementations own read consistency: if answers can change while a
/// roadmap is being computed, `answers` must return a consistent snapshot
/// (for example a single transactional read).
pub trait AnswerStore {
    /// Every recorded answer for the product/user pair, in any order.
    ///
    /// An empty result is not an error here; the aggregator reports it as
    /// missing data.
    fn answers(&self, product_id: &str, user_id: &str) -> Result<Vec<Answer>>;
}

impl<S: AnswerStore + ?Sized> AnswerStore for &S {
    fn answers(&self, product_id: &str, user_id: &str) -> Result<Vec<Answer>> {
        (**self).answers(product_id, user_id)
    }
}

/// Answer store backed by a vector held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnswerStore {
    answers: Vec<Answer>,
}

impl InMemoryAnswerStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given answers
    #[must_use]
    pub fn from_answers(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    /// Record an answer
    pub fn insert(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// Total number of stored answers across all products and users
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the store holds no answers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Distinct (product, user) pairs present in the store, sorted
    #[must_use]
    pub fn assessments(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .answers
            .iter()
            .map(|a| (a.product_id.clone(), a.user_id.clone()))
            .collect();
        pairs.sort();
        pairs.dedup();
        pairs
    }
}

impl FromIterator<Answer> for InMemoryAnswerStore {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self::from_answers(iter.into_iter().collect())
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn answers(&self, product_id: &str, user_id: &str) -> Result<Vec<Answer>> {
        Ok(self
            .answers
            .iter()
            .filter(|a| a.belongs_to(product_id, user_id))
            .cloned()
            .collect())
    }
}
