use crate::types::report::TriageReport;

pub fn to_json(report: &TriageReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
