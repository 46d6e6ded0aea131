use super::priority::{within_planning_window, PLANNING_WINDOW_DAYS};
use crate::types::item::Category;
use crate::types::report::{Advisory, AdvisoryKind, QualityInsights, ScoredItem};

pub fn quality_insights(scored: &[ScoredItem]) -> QualityInsights {
    let mut insights = QualityInsights::default();
    for entry in scored {
        match entry.quality_score {
            score if score < 40 => insights.critical += 1,
            score if score < 70 => insights.warning += 1,
            _ => insights.good += 1,
        }
    }
    insights
}

/// Most frequent category; ties go to the category seen first.
pub fn dominant_category(scored: &[ScoredItem]) -> Option<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for entry in scored {
        match counts
            .iter_mut()
            .find(|(category, _)| *category == entry.item.category)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.item.category, 1)),
        }
    }

    let mut best: Option<(Category, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best
}

pub fn advisories(scored: &[ScoredItem], insights: &QualityInsights) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if insights.critical > 0 {
        advisories.push(Advisory::new(
            AdvisoryKind::Critical,
            format!(
                "{} items require immediate attention. Prioritize distribution of these items.",
                insights.critical
            ),
        ));
    }

    if let Some((category, count)) = dominant_category(scored) {
        advisories.push(Advisory::new(
            AdvisoryKind::Insight,
            format!(
                "{} is the most common category ({} items). Consider diversifying incoming donations.",
                category.label(),
                count
            ),
        ));
    }

    let expiring = scored
        .iter()
        .filter(|entry| within_planning_window(entry.days_until_expiry))
        .count();
    if expiring > 0 {
        advisories.push(Advisory::new(
            AdvisoryKind::Warning,
            format!(
                "Plan distribution for {expiring} items expiring within {PLANNING_WINDOW_DAYS} days."
            ),
        ));
    }

    advisories
}
