//! Default values for maturity-roadmap configuration.

use super::types::{OutputConfig, RecommendationsConfig};
use crate::reports::ReportFormat;

/// Directory name used under the user config directory.
pub const CONFIG_DIR_NAME: &str = "maturity-roadmap";

/// Preferred config file name.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".maturity-roadmap.yaml";

/// Default output format.
pub const DEFAULT_REPORT_FORMAT: ReportFormat = ReportFormat::Summary;

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            table_file: None,
            use_builtin: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_REPORT_FORMAT,
            file: None,
            no_color: false,
        }
    }
}
