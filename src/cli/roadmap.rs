//! Roadmap command handler.
//!
//! Implements the `roadmap` subcommand: build the strategic roadmap for one
//! assessment, report it, and optionally gate on a minimum overall level.

use crate::config::RoadmapConfig;
use crate::pipeline::{exit_codes, load_assessment, load_recommendations, output_roadmap_report};
use crate::roadmap::RoadmapBuilder;
use anyhow::{Context, Result};

/// Run the roadmap command, returning the desired exit code.
pub fn run_roadmap(config: RoadmapConfig, quiet: bool) -> Result<i32> {
    let source = &config.source;
    let store = load_assessment(&source.answers_path, &config.scoring, quiet)?;
    let table = load_recommendations(&config.recommendations)?;

    let builder = RoadmapBuilder::new(store, table);
    let roadmap = match builder.build_overall_roadmap(&source.product_id, &source.user_id) {
        Ok(roadmap) => roadmap,
        Err(e) if e.is_no_data() => {
            tracing::error!("{e}");
            return Ok(exit_codes::NO_DATA);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to build roadmap for {} / {}",
                    source.product_id, source.user_id
                )
            })
        }
    };

    if !quiet {
        tracing::info!(
            "Roadmap: {} item(s) across {} phase(s), overall {}",
            roadmap.roadmap.item_count(),
            roadmap.roadmap.phases.len(),
            roadmap.overall_level.label()
        );
    }

    output_roadmap_report(&roadmap, &config.output, &source.answers_path, quiet)?;

    if let Some(min_level) = config.min_level {
        if roadmap.overall_level < min_level {
            tracing::error!(
                "Overall maturity {} is below the required {}",
                roadmap.overall_level.label(),
                min_level.label()
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}
