pub mod expiry;
pub mod insights;
pub mod priority;
pub mod quality;
pub mod queue;

use crate::types::item::FoodItem;
use crate::types::report::TriageReport;
use crate::types::scoring::PriorityLevel;
use chrono::NaiveDateTime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TriageOptions {
    pub title: String,
    pub min_priority: PriorityLevel,
    pub open_only: bool,
}

impl Default for TriageOptions {
    fn default() -> Self {
        Self {
            title: "Expiry Triage".to_string(),
            min_priority: PriorityLevel::Low,
            open_only: false,
        }
    }
}

/// Scores `items` as of `now`. The same inputs always produce the same report.
pub fn triage(items: &[FoodItem], now: NaiveDateTime, options: &TriageOptions) -> TriageReport {
    let candidates = items
        .iter()
        .filter(|item| !options.open_only || item.is_open())
        .cloned()
        .collect::<Vec<_>>();
    debug!(
        total = items.len(),
        triaged = candidates.len(),
        "scoring food items"
    );

    let mut scored = queue::build_priority_queue(&candidates, now);
    let insights = insights::quality_insights(&scored);
    let advisories = insights::advisories(&scored, &insights);

    scored.retain(|entry| entry.priority.at_least(options.min_priority));

    TriageReport {
        title: options.title.clone(),
        as_of: now.date(),
        queue: scored,
        insights,
        advisories,
    }
}
