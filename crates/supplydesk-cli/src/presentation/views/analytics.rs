use std::fmt;

use crate::presentation::formatters::{one_decimal, percent, truncate};
use crate::presentation::view_models::{AnalyticsViewModel, CountEntry, ScoreEntry, ViewMode};

pub struct AnalyticsView<'a> {
    data: &'a AnalyticsViewModel,
    mode: ViewMode,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(data: &'a AnalyticsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_counts(f: &mut fmt::Formatter, title: &str, entries: &[CountEntry]) -> fmt::Result {
        writeln!(f, "{}", title)?;
        if entries.is_empty() {
            return writeln!(f, "  (none)");
        }
        for entry in entries {
            writeln!(f, "  {:<24} {:>5}", truncate(&entry.label, 24), entry.value)?;
        }
        Ok(())
    }

    fn render_ranking(f: &mut fmt::Formatter, title: &str, entries: &[ScoreEntry]) -> fmt::Result {
        writeln!(f, "{}", title)?;
        for entry in entries {
            writeln!(
                f,
                "  {:<28} {:>5} {:>7}",
                truncate(&entry.label, 28),
                one_decimal(entry.score),
                percent(entry.percent)
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for AnalyticsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        writeln!(
            f,
            "Suppliers: {} ({} active, {} inactive)",
            data.total, data.active, data.inactive
        )?;
        writeln!(
            f,
            "Average lead time: {} days",
            one_decimal(data.avg_delivery_days)
        )?;
        writeln!(f, "Average on-time rate: {}", percent(data.avg_on_time_rate))?;

        if data.total == 0 || self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f)?;
        Self::render_counts(f, "By importance", &data.by_importance)?;
        writeln!(f)?;
        Self::render_counts(f, "By category", &data.by_category)?;
        writeln!(f)?;
        Self::render_ranking(f, "Most reliable", &data.top_reliability)?;
        writeln!(f)?;
        Self::render_ranking(f, "Least reliable", &data.bottom_reliability)
    }
}
