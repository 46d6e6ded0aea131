use super::expiry::days_until;
use crate::types::item::{Condition, FoodItem};
use crate::types::scoring::{Score, MAX_SCORE};
use chrono::NaiveDateTime;

const NEAR_EXPIRY_PENALTY: i32 = 20;

/// Deduction for the first matching expiry band, or `None` once expired.
fn expiry_penalty(days: i64) -> Option<i32> {
    match days {
        d if d <= 0 => None,
        d if d <= 3 => Some(60),
        d if d <= 7 => Some(30),
        d if d <= 14 => Some(10),
        _ => Some(0),
    }
}

pub fn score_for_days(days: Option<i64>, condition: Condition) -> Score {
    // An unreadable date is treated as already expired.
    let Some(penalty) = days.and_then(expiry_penalty) else {
        return 0;
    };

    let mut score = i32::from(MAX_SCORE) - penalty;
    if condition == Condition::Near {
        score -= NEAR_EXPIRY_PENALTY;
    }
    score.clamp(0, i32::from(MAX_SCORE)) as Score
}

pub fn quality_score(item: &FoodItem, now: NaiveDateTime) -> Score {
    score_for_days(days_until(&item.expiration_date, now), item.condition)
}
