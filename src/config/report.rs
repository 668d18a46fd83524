//! Report output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where and how reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory reports are saved into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Format used when none is given (`txt` or `pdf`)
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl ReportConfig {
    /// Parsed default format
    pub fn export_format(&self) -> Result<ExportFormat, ValidationError> {
        self.default_format
            .parse()
            .map_err(|_| ValidationError::UnsupportedReportFormat(self.default_format.clone()))
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export_format().map(|_| ())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_format() -> String {
    "txt".to_string()
}
