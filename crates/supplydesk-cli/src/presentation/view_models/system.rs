use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub initialized: bool,
    pub supplier_count: usize,
}

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub db_path: String,
    pub config_path: String,
    pub config_created: bool,
    pub supplier_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub output_path: String,
    pub exported_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ImportResultViewModel {
    pub source_path: String,
    pub created: Vec<i64>,
    pub rejected: Vec<RejectedRowEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RejectedRowEntry {
    pub line: u64,
    pub reason: String,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::InitResultView;
        Box::new(InitResultView::new(self))
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ExportResultView;
        Box::new(ExportResultView::new(self))
    }
}

impl CreateView for ImportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ImportResultView;
        Box::new(ImportResultView::new(self))
    }
}
