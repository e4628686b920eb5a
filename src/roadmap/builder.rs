//! Roadmap construction.
//!
//! Combines aggregated scores with recommendation lookups into a phased
//! sub-dimension roadmap, and reshapes that into a 12-month strategic view.

use super::phase::{phase_rule, Phase, PhasePriority};
use super::recommendations::{RecommendationResolver, RecommendationSource, RecommendationTable};
use crate::error::{MaturityError, MaturityWarning, Result};
use crate::model::MaturityLevel;
use crate::scoring::{AggregateScores, DimensionScore, ScoreAggregator, ScoreBand};
use crate::store::AnswerStore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Planning horizon of the strategic roadmap
pub const STRATEGIC_HORIZON_MONTHS: u8 = 12;

/// Whether an item raises a level or keeps the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Improvement,
    Maintenance,
}

/// One planned action for a sub-dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub sub_dimension: String,
    pub dimension: String,
    pub current_level: MaturityLevel,
    pub target_level: MaturityLevel,
    pub average_score: f64,
    pub recommendation: String,
    pub recommendation_source: RecommendationSource,
    pub phase: Phase,
    pub priority: PhasePriority,
    pub kind: ItemKind,
}

impl RoadmapItem {
    /// Transition label, e.g. "L2→L3"
    #[must_use]
    pub fn transition(&self) -> String {
        format!("{}→{}", self.current_level, self.target_level)
    }

    /// Ordering key inside a phase: current level, then sub-dimension id
    fn sort_key(&self) -> (Phase, MaturityLevel, &str) {
        (self.phase, self.current_level, self.sub_dimension.as_str())
    }
}

/// Roadmap items grouped by phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct SubDimensionRoadmap {
    pub product_id: String,
    pub user_id: String,
    /// Non-empty phases in schedule order
    pub phases: IndexMap<Phase, Vec<RoadmapItem>>,
    /// Sub-dimensions left out because they have no scored answers
    pub skipped: Vec<String>,
    /// Non-fatal issues hit while building
    pub warnings: Vec<MaturityWarning>,
}

impl SubDimensionRoadmap {
    /// All items in phase order
    pub fn items(&self) -> impl Iterator<Item = &RoadmapItem> {
        self.phases.values().flatten()
    }

    /// Items of one phase (empty if the phase has none)
    #[must_use]
    pub fn phase(&self, phase: Phase) -> &[RoadmapItem] {
        self.phases.get(&phase).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.phases.values().map(Vec::len).sum()
    }

    /// Items that raise a level (excludes maintenance)
    #[must_use]
    pub fn improvement_count(&self) -> usize {
        self.items()
            .filter(|i| i.kind == ItemKind::Improvement)
            .count()
    }
}

/// 12-month strategic view of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct StrategicRoadmap {
    pub product_id: String,
    pub user_id: String,
    pub overall_score: f64,
    pub overall_level: MaturityLevel,
    pub band: ScoreBand,
    pub horizon_months: u8,
    /// One line per phase
    pub narrative: Vec<String>,
    pub key_findings: Vec<String>,
    pub general_recommendations: Vec<String>,
    pub dimensions: Vec<DimensionScore>,
    pub question_count: usize,
    pub answered_count: usize,
    pub roadmap: SubDimensionRoadmap,
}

impl StrategicRoadmap {
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

/// Build the phased roadmap from aggregated scores.
///
/// Pure: no store access. Fails with [`MaturityError::NoData`] only when no
/// sub-dimension has a score.
pub fn roadmap_from_scores(
    scores: &AggregateScores,
    resolver: &RecommendationResolver,
) -> Result<SubDimensionRoadmap> {
    if scores.sub_dimensions.is_empty() {
        return Err(MaturityError::no_data(format!(
            "product '{}' / user '{}' (no scored sub-dimensions)",
            scores.product_id, scores.user_id
        )));
    }

    let mut warnings = Vec::new();
    let mut items: Vec<RoadmapItem> = scores
        .sub_dimensions
        .iter()
        .map(|sub| {
            let current = sub.current_level;
            let target = current.target();
            let rule = phase_rule(current);
            let (resolution, warning) =
                resolver.resolve_with_warning(&sub.sub_dimension, current, target);
            warnings.extend(warning);

            RoadmapItem {
                sub_dimension: sub.sub_dimension.clone(),
                dimension: sub.dimension.clone(),
                current_level: current,
                target_level: target,
                average_score: sub.average_score,
                recommendation: resolution.text,
                recommendation_source: resolution.source,
                phase: rule.phase,
                priority: rule.priority,
                kind: if current.is_top() {
                    ItemKind::Maintenance
                } else {
                    ItemKind::Improvement
                },
            }
        })
        .collect();

    items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut phases: IndexMap<Phase, Vec<RoadmapItem>> = IndexMap::new();
    for item in items {
        phases.entry(item.phase).or_default().push(item);
    }

    for skipped in &scores.unscored_sub_dimensions {
        tracing::info!("Skipping sub-dimension '{skipped}': no scored answers");
    }

    Ok(SubDimensionRoadmap {
        product_id: scores.product_id.clone(),
        user_id: scores.user_id.clone(),
        phases,
        skipped: scores.unscored_sub_dimensions.clone(),
        warnings,
    })
}

/// Reshape scores and a phased roadmap into the strategic view.
pub fn strategic_from_roadmap(
    scores: &AggregateScores,
    roadmap: SubDimensionRoadmap,
) -> StrategicRoadmap {
    let band = ScoreBand::from_score(scores.overall_score);
    let narrative = roadmap
        .phases
        .iter()
        .map(|(phase, items)| narrative_line(*phase, items))
        .collect();

    StrategicRoadmap {
        product_id: scores.product_id.clone(),
        user_id: scores.user_id.clone(),
        overall_score: scores.overall_score,
        overall_level: scores.overall_level,
        band,
        horizon_months: STRATEGIC_HORIZON_MONTHS,
        narrative,
        key_findings: band.key_findings().iter().map(ToString::to_string).collect(),
        general_recommendations: band
            .general_recommendations()
            .iter()
            .map(ToString::to_string)
            .collect(),
        dimensions: scores.dimensions.clone(),
        question_count: scores.question_count,
        answered_count: scores.answered_count,
        roadmap,
    }
}

fn narrative_line(phase: Phase, items: &[RoadmapItem]) -> String {
    if phase == Phase::Maintenance {
        let subs: Vec<&str> = items.iter().map(|i| i.sub_dimension.as_str()).collect();
        return format!("Ongoing: sustain {} at L5", subs.join(", "));
    }

    let steps: Vec<String> = items
        .iter()
        .map(|i| format!("{} ({})", i.sub_dimension, i.transition()))
        .collect();
    let priority = items
        .first()
        .map_or(PhasePriority::Maintenance, |i| i.priority);
    format!(
        "Months {} ({} priority): {}",
        phase.label().trim_end_matches(" months"),
        priority.name().to_lowercase(),
        steps.join(", ")
    )
}

/// Builds roadmaps for assessments held in an answer store
#[derive(Debug, Clone)]
pub struct RoadmapBuilder<S> {
    aggregator: ScoreAggregator<S>,
    resolver: RecommendationResolver,
}

impl<S: AnswerStore> RoadmapBuilder<S> {
    /// Create a builder over a store and an injected recommendation table
    pub const fn new(store: S, table: RecommendationTable) -> Self {
        Self {
            aggregator: ScoreAggregator::new(store),
            resolver: RecommendationResolver::new(table),
        }
    }

    /// The score aggregator used by this builder
    pub const fn aggregator(&self) -> &ScoreAggregator<S> {
        &self.aggregator
    }

    /// Phased sub-dimension roadmap for one product/user pair
    pub fn build_subdimension_roadmap(
        &self,
        product_id: &str,
        user_id: &str,
    ) -> Result<SubDimensionRoadmap> {
        let scores = self.aggregator.aggregate(product_id, user_id)?;
        roadmap_from_scores(&scores, &self.resolver)
    }

    /// Strategic 12-month roadmap for one product/user pair
    pub fn build_overall_roadmap(&self, product_id: &str, user_id: &str) -> Result<StrategicRoadmap> {
        let scores = self.aggregator.aggregate(product_id, user_id)?;
        let roadmap = roadmap_from_scores(&scores, &self.resolver)?;
        let strategic = strategic_from_roadmap(&scores, roadmap);
        tracing::debug!(
            "Built strategic roadmap for {product_id}/{user_id}: {} item(s), {} warning(s)",
            strategic.roadmap.item_count(),
            strategic.roadmap.warnings.len()
        );
        Ok(strategic)
    }
}
