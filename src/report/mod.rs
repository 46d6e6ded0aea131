pub mod json;
pub mod md;

use crate::error::TriageError;
use crate::types::report::TriageReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(raw: &str) -> Option<Self> {
        match raw {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(report: &TriageReport, format: OutputFormat) -> Result<String, TriageError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TriageError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
