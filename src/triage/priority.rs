use crate::types::scoring::Score;

pub const IMMEDIATE: &str = "Immediate distribution required";
pub const WITHIN_DAY: &str = "Distribute within 24 hours";
pub const THIS_WEEK: &str = "Plan for distribution this week";
pub const MONITOR: &str = "Regular monitoring";

/// Items expiring within this many days need distribution planning.
pub const PLANNING_WINDOW_DAYS: i64 = 7;

/// Unknown day counts fall inside the planning window.
pub fn within_planning_window(days: Option<i64>) -> bool {
    days.map_or(true, |days| days <= PLANNING_WINDOW_DAYS)
}

pub fn recommended_action(score: Score, days: Option<i64>) -> &'static str {
    if score < 40 {
        IMMEDIATE
    } else if score < 70 {
        WITHIN_DAY
    } else if within_planning_window(days) {
        THIS_WEEK
    } else {
        MONITOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_take_precedence_over_days() {
        assert_eq!(recommended_action(0, Some(30)), IMMEDIATE);
        assert_eq!(recommended_action(39, Some(30)), IMMEDIATE);
        assert_eq!(recommended_action(40, Some(30)), WITHIN_DAY);
        assert_eq!(recommended_action(69, Some(30)), WITHIN_DAY);
    }

    #[test]
    fn healthy_scores_use_days_until_expiry() {
        assert_eq!(recommended_action(70, Some(7)), THIS_WEEK);
        assert_eq!(recommended_action(80, Some(5)), THIS_WEEK);
        assert_eq!(recommended_action(90, Some(8)), MONITOR);
        assert_eq!(recommended_action(100, Some(15)), MONITOR);
    }

    #[test]
    fn unknown_days_count_as_within_window() {
        assert!(within_planning_window(None));
        assert!(within_planning_window(Some(-2)));
        assert!(!within_planning_window(Some(8)));
    }
}
