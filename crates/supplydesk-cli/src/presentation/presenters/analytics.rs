use supplydesk_engine::{LabelCount, ReliabilityEntry, SupplierAnalytics};

use crate::presentation::view_models::{
    AnalyticsViewModel, CommandResultViewModel, CountEntry, Guidance, ScoreEntry, StatusBadge,
};

pub fn present_analytics(
    analytics: SupplierAnalytics,
) -> CommandResultViewModel<AnalyticsViewModel> {
    let total = analytics.total;

    let content = AnalyticsViewModel {
        total: analytics.total,
        active: analytics.active,
        inactive: analytics.inactive,
        by_importance: analytics.by_importance.into_iter().map(count_entry).collect(),
        by_category: analytics.by_category.into_iter().map(count_entry).collect(),
        avg_delivery_days: analytics.avg_delivery_days,
        avg_on_time_rate: analytics.avg_on_time_rate,
        top_reliability: analytics.top.into_iter().map(score_entry).collect(),
        bottom_reliability: analytics.bottom.into_iter().map(score_entry).collect(),
    };

    if total == 0 {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No suppliers recorded"))
            .with_suggestion(
                Guidance::new("Add a supplier")
                    .with_command("supplydesk supplier add --company-name <NAME>"),
            );
    }

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Summary of {} suppliers", total)))
}

fn count_entry(entry: LabelCount) -> CountEntry {
    CountEntry {
        label: entry.label,
        value: entry.value,
    }
}

fn score_entry(entry: ReliabilityEntry) -> ScoreEntry {
    ScoreEntry {
        id: entry.id.get(),
        label: entry.label,
        score: entry.score,
        percent: entry.percent,
    }
}
