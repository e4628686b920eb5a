//! Maturity scoring.
//!
//! Aggregates questionnaire answers into sub-dimension, dimension and overall
//! maturity scores, and derives narrative findings from the overall score.
//!
//! # Usage
//!
//! ```no_run
//! use maturity_roadmap::scoring::ScoreAggregator;
//! use maturity_roadmap::store::load_answer_file;
//! use std::path::Path;
//!
//! let store = load_answer_file(Path::new("answers.yaml"), false).unwrap();
//! let scores = ScoreAggregator::new(store).aggregate("web-shop", "alice").unwrap();
//!
//! println!("Overall: {:.2} ({})", scores.overall_score, scores.overall_level.label());
//! for dim in &scores.dimensions {
//!     println!("- {}: {:.2}", dim.dimension, dim.average_score);
//! }
//! ```

mod aggregator;
mod findings;

pub use aggregator::{
    aggregate_answers, mean, overall_score, AggregateScores, DimensionScore, ScoreAggregator,
    SubDimensionMaturity,
};
pub use findings::ScoreBand;
