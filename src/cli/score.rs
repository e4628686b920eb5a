//! Score command handler.
//!
//! Implements the `score` subcommand: aggregate one assessment and report
//! its dimension and overall maturity.

use crate::config::ScoreConfig;
use crate::pipeline::{exit_codes, load_assessment, output_score_report};
use crate::scoring::ScoreAggregator;
use anyhow::{Context, Result};

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig, quiet: bool) -> Result<i32> {
    let source = &config.source;
    let store = load_assessment(&source.answers_path, &config.scoring, quiet)?;

    let scores = match ScoreAggregator::new(store).aggregate(&source.product_id, &source.user_id) {
        Ok(scores) => scores,
        Err(e) if e.is_no_data() => {
            tracing::error!("{e}");
            return Ok(exit_codes::NO_DATA);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to score {} / {}",
                    source.product_id, source.user_id
                )
            })
        }
    };

    if !quiet {
        tracing::info!(
            "Overall maturity {:.2} ({})",
            scores.overall_score,
            scores.overall_level.label()
        );
    }

    output_score_report(&scores, &config.output, &source.answers_path, quiet)?;
    Ok(exit_codes::SUCCESS)
}
