//! Improvement roadmaps.
//!
//! Turns aggregated maturity scores into a phased plan: each scored
//! sub-dimension gets one item targeting the next level, scheduled by its
//! current level and explained by a recommendation table lookup.
//!
//! # Usage
//!
//! ```no_run
//! use maturity_roadmap::roadmap::{RecommendationTable, RoadmapBuilder};
//! use maturity_roadmap::store::load_answer_file;
//! use std::path::Path;
//!
//! let store = load_answer_file(Path::new("answers.yaml"), false).unwrap();
//! let builder = RoadmapBuilder::new(store, RecommendationTable::builtin());
//! let roadmap = builder.build_subdimension_roadmap("web-shop", "alice").unwrap();
//!
//! for (phase, items) in &roadmap.phases {
//!     println!("{phase}");
//!     for item in items {
//!         println!("  {} {}: {}", item.sub_dimension, item.transition(), item.recommendation);
//!     }
//! }
//! ```

mod builder;
mod phase;
mod recommendations;

pub use builder::{
    roadmap_from_scores, strategic_from_roadmap, ItemKind, RoadmapBuilder, RoadmapItem,
    StrategicRoadmap, SubDimensionRoadmap, STRATEGIC_HORIZON_MONTHS,
};
pub use phase::{
    phase_for_level, phase_rule, priority_for_level, Phase, PhasePriority, PhaseRule, PHASE_TABLE,
};
pub use recommendations::{
    fallback_text, RecommendationEntry, RecommendationFile, RecommendationResolver,
    RecommendationSource, RecommendationTable, Resolution,
};
