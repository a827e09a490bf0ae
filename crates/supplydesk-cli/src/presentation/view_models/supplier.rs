use serde::Serialize;
use std::fmt;
use supplydesk_engine::PageLink;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct SupplierListViewModel {
    pub suppliers: Vec<SupplierRow>,
    pub total_count: usize,
    pub page_count: usize,
    pub page: usize,
    /// 1-based positions of the first and last visible row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<PageRange>,
    pub has_previous: bool,
    pub has_next: bool,
    pub pages: Vec<PageLink>,
    pub query: AppliedQuery,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
}

#[derive(Debug, Serialize)]
pub struct AppliedQuery {
    pub search: String,
    pub status: String,
    pub importance: String,
    pub category: String,
    pub sort: String,
}

/// One list row. Missing optional values are already resolved to their
/// defaults except `status`, which stays absent.
#[derive(Debug, Serialize)]
pub struct SupplierRow {
    pub id: i64,
    pub supplier_code: Option<String>,
    pub company_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub categories: Vec<String>,
    pub importance: String,
    pub status: Option<String>,
    pub lead_time_days: u32,
    pub reliability_score: f64,
    pub on_time_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct SupplierDetailViewModel {
    pub supplier: SupplierDetail,
}

#[derive(Debug, Serialize)]
pub struct SupplierDetail {
    pub id: i64,
    pub supplier_code: Option<String>,
    pub company_name: Option<String>,
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub categories: Vec<String>,
    pub payment_terms: Option<String>,
    pub importance: String,
    pub status: Option<String>,
    pub lead_time_days: u32,
    pub total_orders: u32,
    pub late_deliveries: u32,
    pub on_time_rate: f64,
    pub reliability_score: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SupplierWriteAction {
    Created,
    Updated,
    Deactivated,
}

#[derive(Debug, Serialize)]
pub struct SupplierWriteViewModel {
    pub action: SupplierWriteAction,
    pub supplier: SupplierDetail,
}

#[derive(Debug, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<String>,
}

impl CreateView for SupplierListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::supplier::SupplierListView;
        Box::new(SupplierListView::new(self, mode))
    }
}

impl CreateView for SupplierDetailViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::supplier::SupplierDetailView;
        Box::new(SupplierDetailView::new(&self.supplier))
    }
}

impl CreateView for SupplierWriteViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::supplier::SupplierDetailView;
        Box::new(SupplierDetailView::new(&self.supplier))
    }
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::supplier::CategoryListView;
        Box::new(CategoryListView::new(self))
    }
}
