//! Report output stage.
//!
//! Renders scores or a roadmap in the configured format and writes them to
//! stdout or a file.

use super::{should_use_color, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportError, WriterReporter};
use crate::roadmap::StrategicRoadmap;
use crate::scoring::AggregateScores;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Output a score report to the configured destination.
pub fn output_score_report(
    scores: &AggregateScores,
    output: &OutputConfig,
    answers_path: &Path,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter =
        create_reporter_with_options(output.format, should_use_color(output.no_color, &target));
    let config = report_config(answers_path);

    emit(&target, quiet, |writer| {
        reporter.write_score_to(scores, &config, writer)
    })
}

/// Output a roadmap report to the configured destination.
pub fn output_roadmap_report(
    roadmap: &StrategicRoadmap,
    output: &OutputConfig,
    answers_path: &Path,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter =
        create_reporter_with_options(output.format, should_use_color(output.no_color, &target));
    let config = report_config(answers_path);

    emit(&target, quiet, |writer| {
        reporter.write_roadmap_to(roadmap, &config, writer)
    })
}

fn report_config(answers_path: &Path) -> ReportConfig {
    ReportConfig::new().with_answers_path(answers_path.display().to_string())
}

fn emit<F>(target: &OutputTarget, quiet: bool, render: F) -> Result<()>
where
    F: FnOnce(&mut Box<dyn Write>) -> Result<(), ReportError>,
{
    let mut writer = target.writer()?;
    render(&mut writer)
        .and_then(|()| writer.flush().map_err(ReportError::from))
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    if let OutputTarget::File(path) = target {
        if !quiet {
            tracing::info!("Report written to {}", path.display());
        }
    }
    Ok(())
}
