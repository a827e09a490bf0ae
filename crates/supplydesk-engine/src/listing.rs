use serde::Serialize;
use std::cmp::Ordering;
use supplydesk_types::{PAGE_SIZE, SortKey, Supplier, SupplierQuery};

use crate::collate::locale_cmp;

/// Visible window of the supplier list plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierListing<'a> {
    /// Records on the requested page, in sorted order
    pub visible: Vec<&'a Supplier>,
    /// Number of records that passed every filter
    pub total_count: usize,
    /// `max(1, ceil(total_count / PAGE_SIZE))`
    pub page_count: usize,
    /// Page that was requested (echoed back, never clamped)
    pub page: usize,
}

/// Derive the visible supplier list from the full collection and a query.
///
/// Pipeline: search → status → importance → category → stable sort → page.
/// Total over any well-formed input; an out-of-range page yields an empty
/// `visible` with the usual counts.
pub fn compute<'a>(records: &'a [Supplier], query: &SupplierQuery) -> SupplierListing<'a> {
    let mut rows = filter(records, query);
    sort(&mut rows, query.sort);

    let total_count = rows.len();
    let page_count = total_count.div_ceil(PAGE_SIZE).max(1);

    let visible = if query.page == 0 {
        Vec::new()
    } else {
        let start = (query.page - 1).saturating_mul(PAGE_SIZE);
        rows.into_iter().skip(start).take(PAGE_SIZE).collect()
    };

    SupplierListing {
        visible,
        total_count,
        page_count,
        page: query.page,
    }
}

/// Apply the search and the three filters, preserving input order.
pub fn filter<'a>(records: &'a [Supplier], query: &SupplierQuery) -> Vec<&'a Supplier> {
    // Blank means "no search", but a non-blank needle is used as typed
    let needle = if query.search.trim().is_empty() {
        None
    } else {
        Some(query.search.to_lowercase())
    };

    records
        .iter()
        .filter(|s| needle.as_deref().is_none_or(|n| matches_search(s, n)))
        .filter(|s| query.status.matches(s.status))
        .filter(|s| query.importance.matches(s.importance()))
        .filter(|s| query.category.matches(s.category.as_deref()))
        .collect()
}

/// Stable sort by the comparator named by `key`.
pub fn sort(rows: &mut [&Supplier], key: SortKey) {
    rows.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &Supplier, b: &Supplier, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => locale_cmp(a.display_name(), b.display_name()),
        SortKey::NameDesc => locale_cmp(b.display_name(), a.display_name()),
        SortKey::ReliabilityDesc => b.reliability().total_cmp(&a.reliability()),
        SortKey::LeadAsc => a.delivery_days().cmp(&b.delivery_days()),
        SortKey::Status => locale_cmp(status_text(a), status_text(b)),
    }
}

fn status_text(supplier: &Supplier) -> &'static str {
    supplier.status.map(|s| s.as_str()).unwrap_or("")
}

/// `needle` is already lower-cased. Phone numbers are matched as stored.
fn matches_search(supplier: &Supplier, needle: &str) -> bool {
    let folded = |field: &Option<String>| {
        field
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
    };

    folded(&supplier.company_name)
        || folded(&supplier.name)
        || folded(&supplier.supplier_code)
        || supplier.phone.as_deref().unwrap_or("").contains(needle)
        || folded(&supplier.category)
        || folded(&supplier.contact_person)
}
