use crate::types::item::FoodItem;
use crate::types::scoring::{PriorityLevel, Score};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: FoodItem,
    /// `None` when the expiry date could not be parsed.
    pub days_until_expiry: Option<i64>,
    pub quality_score: Score,
    pub priority: PriorityLevel,
    pub recommended_action: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityInsights {
    pub critical: usize,
    pub warning: usize,
    pub good: usize,
}

impl QualityInsights {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.good
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Critical,
    Insight,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, message: String) -> Self {
        Self { kind, message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub title: String,
    pub as_of: NaiveDate,
    pub queue: Vec<ScoredItem>,
    pub insights: QualityInsights,
    pub advisories: Vec<Advisory>,
}

impl TriageReport {
    pub fn has_critical(&self) -> bool {
        self.insights.critical > 0
    }
}
