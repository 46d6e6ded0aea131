use super::expiry::days_until;
use super::priority::recommended_action;
use super::quality::quality_score;
use crate::types::item::FoodItem;
use crate::types::report::ScoredItem;
use crate::types::scoring::PriorityLevel;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

pub fn score_item(item: &FoodItem, now: NaiveDateTime) -> ScoredItem {
    let days_until_expiry = days_until(&item.expiration_date, now);
    let quality_score = quality_score(item, now);
    ScoredItem {
        item: item.clone(),
        days_until_expiry,
        quality_score,
        priority: PriorityLevel::from_score(quality_score),
        recommended_action: recommended_action(quality_score, days_until_expiry),
    }
}

/// Lower score first, then fewer days; unknown days sort as most urgent.
pub fn urgency_order(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    a.quality_score
        .cmp(&b.quality_score)
        .then_with(|| match (a.days_until_expiry, b.days_until_expiry) {
            (Some(a_days), Some(b_days)) => a_days.cmp(&b_days),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

pub fn sort_queue(queue: &mut [ScoredItem]) {
    // sort_by is stable: equal keys keep feed order.
    queue.sort_by(urgency_order);
}

pub fn build_priority_queue(items: &[FoodItem], now: NaiveDateTime) -> Vec<ScoredItem> {
    let mut queue = items
        .iter()
        .map(|item| score_item(item, now))
        .collect::<Vec<_>>();
    sort_queue(&mut queue);
    queue
}
