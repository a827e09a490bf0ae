use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct AnalyticsViewModel {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub by_importance: Vec<CountEntry>,
    pub by_category: Vec<CountEntry>,
    pub avg_delivery_days: f64,
    pub avg_on_time_rate: f64,
    pub top_reliability: Vec<ScoreEntry>,
    pub bottom_reliability: Vec<ScoreEntry>,
}

#[derive(Debug, Serialize)]
pub struct CountEntry {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Serialize)]
pub struct ScoreEntry {
    pub id: i64,
    pub label: String,
    pub score: f64,
    pub percent: f64,
}

impl CreateView for AnalyticsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::analytics::AnalyticsView;
        Box::new(AnalyticsView::new(self, mode))
    }
}
