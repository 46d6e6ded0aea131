use crate::types::report::{AdvisoryKind, ScoredItem, TriageReport};

fn format_days(entry: &ScoredItem) -> String {
    match entry.days_until_expiry {
        Some(days) => format!("{days} days"),
        None => "unknown".to_string(),
    }
}

/// Keeps free text inside a single table cell.
fn escape_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}

fn advisory_tag(kind: AdvisoryKind) -> &'static str {
    match kind {
        AdvisoryKind::Critical => "critical",
        AdvisoryKind::Insight => "insight",
        AdvisoryKind::Warning => "warning",
    }
}

pub fn to_markdown(report: &TriageReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!("As of: {}\n\n", report.as_of));

    output.push_str("## Quality Insights\n\n");
    output.push_str(&format!(
        "- critical: {}\n- warning: {}\n- good: {}\n\n",
        report.insights.critical, report.insights.warning, report.insights.good
    ));

    output.push_str("## Priority Queue\n\n");
    if report.queue.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Priority | Item | Category | Condition | Expires In | Quality | Action |\n");
        output.push_str("|---|---|---|---|---|---|---|\n");
        for entry in &report.queue {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {}% | {} |\n",
                entry.priority.as_str(),
                escape_cell(&entry.item.name),
                entry.item.category.label(),
                entry.item.condition.label(),
                format_days(entry),
                entry.quality_score,
                entry.recommended_action
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if report.advisories.is_empty() {
        output.push_str("- none\n");
    } else {
        for advisory in &report.advisories {
            output.push_str(&format!(
                "- [{}] {}\n",
                advisory_tag(advisory.kind),
                advisory.message
            ));
        }
    }

    output
}
