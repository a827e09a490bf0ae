use std::fmt;
use supplydesk_engine::PageLink;

use crate::presentation::formatters::{one_decimal, or_dash, percent, truncate};
use crate::presentation::view_models::{
    CategoryListViewModel, SupplierDetail, SupplierListViewModel, SupplierRow, ViewMode,
};

// --------------------------------------------------------
// Supplier List View
// --------------------------------------------------------

pub struct SupplierListView<'a> {
    data: &'a SupplierListViewModel,
    mode: ViewMode,
}

impl<'a> SupplierListView<'a> {
    pub fn new(data: &'a SupplierListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.suppliers {
            writeln!(f, "{}", row.id)?;
        }
        Ok(())
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.total_count > 0 {
            writeln!(
                f,
                "Page {} is past the last page ({}).",
                self.data.page, self.data.page_count
            )?;
        } else {
            writeln!(f, "No suppliers found.")?;
        }
        self.render_query(f)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<12} {:<28} {:<24} {:<10} STATUS",
            "ID", "CODE", "COMPANY", "CATEGORY", "IMPORTANCE"
        )?;
        writeln!(f, "{}", "-".repeat(90))?;

        for row in &self.data.suppliers {
            writeln!(
                f,
                "{:<6} {:<12} {:<28} {:<24} {:<10} {}",
                row.id,
                or_dash(row.supplier_code.as_deref()),
                truncate(&row.company_name, 28),
                truncate(&categories(row), 24),
                row.importance,
                or_dash(row.status.as_deref())
            )?;
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<12} {:<28} {:<20} {:<16} {:<24} {:<10} {:<8} {:>5} {:>6} {:>8}",
            "ID",
            "CODE",
            "COMPANY",
            "CONTACT",
            "PHONE",
            "CATEGORY",
            "IMPORTANCE",
            "STATUS",
            "LEAD",
            "SCORE",
            "ON-TIME"
        )?;
        writeln!(f, "{}", "-".repeat(152))?;

        for row in &self.data.suppliers {
            writeln!(
                f,
                "{:<6} {:<12} {:<28} {:<20} {:<16} {:<24} {:<10} {:<8} {:>5} {:>6} {:>8}",
                row.id,
                or_dash(row.supplier_code.as_deref()),
                truncate(&row.company_name, 28),
                truncate(or_dash(row.contact_person.as_deref()), 20),
                or_dash(row.phone.as_deref()),
                truncate(&categories(row), 24),
                row.importance,
                or_dash(row.status.as_deref()),
                row.lead_time_days,
                one_decimal(row.reliability_score),
                percent(row.on_time_rate)
            )?;
        }

        Ok(())
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        if let Some(range) = self.data.range {
            writeln!(
                f,
                "Showing {}-{} of {} suppliers",
                range.first, range.last, self.data.total_count
            )?;
        }

        if self.data.page_count > 1 {
            let strip: Vec<String> = self
                .data
                .pages
                .iter()
                .map(|link| match link {
                    PageLink::Page {
                        number,
                        current: true,
                    } => format!("[{}]", number),
                    PageLink::Page { number, .. } => number.to_string(),
                    PageLink::Gap => "...".to_string(),
                })
                .collect();
            writeln!(f, "Pages: {}", strip.join(" "))?;
        }

        if self.mode == ViewMode::Verbose {
            self.render_query(f)?;
        }

        Ok(())
    }

    fn render_query(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let query = &self.data.query;
        if !query.search.trim().is_empty() {
            writeln!(f, "Search: {}", query.search)?;
        }
        writeln!(
            f,
            "Filters: status={} importance={} category={} | sort={}",
            query.status, query.importance, query.category, query.sort
        )
    }
}

impl<'a> fmt::Display for SupplierListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return self.render_minimal(f);
        }

        if self.data.suppliers.is_empty() {
            return self.render_empty(f);
        }

        match self.mode {
            ViewMode::Verbose => self.render_verbose(f)?,
            _ => self.render_compact(f)?,
        }

        self.render_footer(f)
    }
}

fn categories(row: &SupplierRow) -> String {
    if row.categories.is_empty() {
        "-".to_string()
    } else {
        row.categories.join(", ")
    }
}

// --------------------------------------------------------
// Supplier Detail View
// --------------------------------------------------------

pub struct SupplierDetailView<'a> {
    data: &'a SupplierDetail,
}

impl<'a> SupplierDetailView<'a> {
    pub fn new(data: &'a SupplierDetail) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SupplierDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.data;

        writeln!(f, "Supplier #{}", s.id)?;
        field(f, "Code", or_dash(s.supplier_code.as_deref()))?;
        field(f, "Company", or_dash(s.company_name.as_deref()))?;
        field(f, "Trading name", or_dash(s.name.as_deref()))?;
        field(f, "Status", or_dash(s.status.as_deref()))?;
        field(f, "Importance", &s.importance)?;
        let categories = s.categories.join(", ");
        field(f, "Categories", or_dash(Some(&categories)))?;

        writeln!(f)?;
        writeln!(f, "Contact")?;
        field(f, "Person", or_dash(s.contact_person.as_deref()))?;
        field(f, "Email", or_dash(s.email.as_deref()))?;
        field(f, "Phone", or_dash(s.phone.as_deref()))?;
        field(f, "Address", or_dash(s.address.as_deref()))?;
        field(f, "Payment terms", or_dash(s.payment_terms.as_deref()))?;

        writeln!(f)?;
        writeln!(f, "Performance")?;
        field(f, "Lead time", &format!("{} days", s.lead_time_days))?;
        field(f, "Orders", &s.total_orders.to_string())?;
        field(f, "Late", &s.late_deliveries.to_string())?;
        field(f, "On-time rate", &percent(s.on_time_rate))?;
        field(f, "Reliability", &format!("{} / 10", one_decimal(s.reliability_score)))?;

        writeln!(f)?;
        field(f, "Created", or_dash(s.created_at.as_deref()))?;
        field(f, "Updated", or_dash(s.updated_at.as_deref()))?;
        field(f, "Updated by", or_dash(s.updated_by.as_deref()))
    }
}

fn field(f: &mut fmt::Formatter, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {:<16} {}", format!("{}:", label), value)
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.categories.is_empty() {
            return writeln!(f, "No categories recorded.");
        }

        for category in &self.data.categories {
            writeln!(f, "{}", category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{AppliedQuery, PageRange};

    fn row(id: i64, company: &str) -> SupplierRow {
        SupplierRow {
            id,
            supplier_code: Some(format!("SUP-00000{}", id)),
            company_name: company.to_string(),
            contact_person: None,
            phone: None,
            categories: vec!["Dairy".to_string(), "Frozen".to_string()],
            importance: "Critical".to_string(),
            status: Some("Active".to_string()),
            lead_time_days: 2,
            reliability_score: 9.2,
            on_time_rate: 96.0,
        }
    }

    fn listing(
        suppliers: Vec<SupplierRow>,
        total_count: usize,
        page: usize,
    ) -> SupplierListViewModel {
        let page_count = total_count.div_ceil(10).max(1);
        SupplierListViewModel {
            range: (!suppliers.is_empty()).then(|| PageRange {
                first: (page - 1) * 10 + 1,
                last: (page - 1) * 10 + suppliers.len(),
            }),
            suppliers,
            total_count,
            page_count,
            page,
            has_previous: page > 1,
            has_next: page < page_count,
            pages: supplydesk_engine::page_links(page, page_count),
            query: AppliedQuery {
                search: String::new(),
                status: "All".to_string(),
                importance: "All".to_string(),
                category: "All".to_string(),
                sort: "name-asc".to_string(),
            },
        }
    }

    #[test]
    fn test_compact_list_has_header_rows_and_footer() {
        let data = listing(vec![row(1, "Lanka Dairy")], 1, 1);
        let text = SupplierListView::new(&data, ViewMode::Compact).to_string();

        assert!(text.starts_with("ID"));
        assert!(text.contains("Lanka Dairy"));
        assert!(text.contains("Dairy, Frozen"));
        assert!(text.contains("Showing 1-1 of 1 suppliers"));
        assert!(!text.contains("Pages:"));
    }

    #[test]
    fn test_minimal_prints_ids_only() {
        let data = listing(vec![row(4, "Crumb"), row(7, "Island")], 2, 1);
        let text = SupplierListView::new(&data, ViewMode::Minimal).to_string();

        assert_eq!(text, "4\n7\n");
    }

    #[test]
    fn test_pager_strip_marks_current_page() {
        let data = listing(vec![row(11, "Kandy Spice")], 41, 3);
        let text = SupplierListView::new(&data, ViewMode::Compact).to_string();

        assert!(text.contains("Showing 21-21 of 41 suppliers"));
        assert!(text.contains("Pages: 1 2 [3] 4 5"));
    }

    #[test]
    fn test_out_of_range_page_is_explained() {
        let data = listing(Vec::new(), 12, 5);
        let text = SupplierListView::new(&data, ViewMode::Compact).to_string();

        assert!(text.contains("Page 5 is past the last page (2)."));
    }

    #[test]
    fn test_empty_book() {
        let data = listing(Vec::new(), 0, 1);
        let text = SupplierListView::new(&data, ViewMode::Verbose).to_string();

        assert!(text.starts_with("No suppliers found."));
    }
}
