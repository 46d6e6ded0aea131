use serde::Serialize;

/// Quality score in `[0, 100]`; lower means more urgent.
pub type Score = u8;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn from_score(score: Score) -> Self {
        if score < 40 {
            PriorityLevel::Critical
        } else if score < 70 {
            PriorityLevel::High
        } else if score < 90 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Critical",
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }

    /// True when `self` is at least as urgent as `floor`.
    pub fn at_least(self, floor: PriorityLevel) -> bool {
        self <= floor
    }
}
