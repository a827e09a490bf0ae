pub mod analytics;
pub mod common;
pub mod result;
pub mod supplier;
pub mod system;

pub use analytics::{AnalyticsViewModel, CountEntry, ScoreEntry};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use result::CommandResultViewModel;
pub use supplier::{
    AppliedQuery, CategoryListViewModel, PageRange, SupplierDetail, SupplierDetailViewModel,
    SupplierListViewModel, SupplierRow, SupplierWriteAction, SupplierWriteViewModel,
};
pub use system::{
    ExportResultViewModel, GuidanceViewModel, ImportResultViewModel, InitResultViewModel,
    RejectedRowEntry,
};

use std::fmt;

/// Bridge from a view model to its text rendering
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
