use crate::error::TriageError;
use crate::types::scoring::PriorityLevel;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriageConfig {
    pub project: Option<ProjectConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "Expiry Triage".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub min_priority: Option<String>,
    #[serde(default)]
    pub open_only: bool,
}

impl TriageConfig {
    pub fn title(&self) -> String {
        self.project
            .as_ref()
            .map(|project| project.name.clone())
            .unwrap_or_else(default_name)
    }

    pub fn format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn min_priority(&self) -> Option<PriorityLevel> {
        self.report
            .as_ref()
            .and_then(|report| report.min_priority.as_deref())
            .and_then(parse_priority)
    }

    pub fn open_only(&self) -> bool {
        self.report.as_ref().is_some_and(|report| report.open_only)
    }

    pub fn validate(&self) -> Result<(), TriageError> {
        if let Some(report) = &self.report {
            if let Some(format) = &report.format {
                if !matches!(format.as_str(), "json" | "md") {
                    return Err(TriageError::ConfigParse(format!(
                        "unsupported report.format: {format}"
                    )));
                }
            }
            if let Some(min_priority) = &report.min_priority {
                if parse_priority(min_priority).is_none() {
                    return Err(TriageError::ConfigParse(format!(
                        "unsupported report.min_priority: {min_priority}"
                    )));
                }
            }
        }
        if let Some(project) = &self.project {
            if project.name.trim().is_empty() {
                return Err(TriageError::ConfigParse(
                    "project.name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn parse_priority(raw: &str) -> Option<PriorityLevel> {
    match raw {
        "critical" => Some(PriorityLevel::Critical),
        "high" => Some(PriorityLevel::High),
        "medium" => Some(PriorityLevel::Medium),
        "low" => Some(PriorityLevel::Low),
        _ => None,
    }
}
