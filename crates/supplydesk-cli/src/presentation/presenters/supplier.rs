use supplydesk_engine::SupplierListing;
use supplydesk_types::{
    CATEGORY_SUGGESTIONS, CategoryFilter, ImportanceFilter, SortKey, StatusFilter, Supplier,
    SupplierQuery,
};

use crate::presentation::view_models::{
    AppliedQuery, CategoryListViewModel, CommandResultViewModel, Guidance, PageRange, StatusBadge,
    SupplierDetail, SupplierDetailViewModel, SupplierListViewModel, SupplierRow,
    SupplierWriteAction, SupplierWriteViewModel,
};

pub fn present_supplier_list(
    listing: &SupplierListing<'_>,
    query: &SupplierQuery,
) -> CommandResultViewModel<SupplierListViewModel> {
    let content = SupplierListViewModel {
        suppliers: listing.visible.iter().map(|s| supplier_row(s)).collect(),
        total_count: listing.total_count,
        page_count: listing.page_count,
        page: listing.page,
        range: listing
            .range()
            .map(|(first, last)| PageRange { first, last }),
        has_previous: listing.has_previous(),
        has_next: listing.has_next(),
        pages: listing.page_links(),
        query: AppliedQuery {
            search: query.search.clone(),
            status: query.status.to_string(),
            importance: query.importance.to_string(),
            category: query.category.to_string(),
            sort: query.sort.to_string(),
        },
    };

    let mut result = CommandResultViewModel::new(content);

    if listing.total_count == 0 {
        if query.is_unfiltered() {
            result = result
                .with_badge(StatusBadge::info("No suppliers recorded"))
                .with_suggestion(
                    Guidance::new("Add a supplier")
                        .with_command("supplydesk supplier add --company-name <NAME>"),
                )
                .with_suggestion(
                    Guidance::new("Or load them from a spreadsheet")
                        .with_command("supplydesk import csv <PATH>"),
                );
        } else {
            result = result
                .with_badge(StatusBadge::info("No suppliers match"))
                .with_suggestion(
                    Guidance::new("Clear the search and filters")
                        .with_command("supplydesk supplier list"),
                );
        }
    } else if listing.visible.is_empty() {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Page {} is out of range",
                listing.page
            )))
            .with_suggestion(
                Guidance::new("Go to the last page")
                    .with_command(list_command(query, listing.page_count)),
            );
    } else {
        let label = if listing.total_count == 1 {
            "1 supplier found".to_string()
        } else {
            format!("{} suppliers found", listing.total_count)
        };
        result = result.with_badge(StatusBadge::success(label));

        if listing.has_next() {
            result = result.with_suggestion(
                Guidance::new("Next page").with_command(list_command(query, listing.page + 1)),
            );
        }
    }

    result
}

pub fn present_supplier_detail(
    supplier: &Supplier,
) -> CommandResultViewModel<SupplierDetailViewModel> {
    let mut result = CommandResultViewModel::new(SupplierDetailViewModel {
        supplier: supplier_detail(supplier),
    });

    if supplier.is_active() {
        result = result.with_suggestion(
            Guidance::new("Mark this supplier inactive")
                .with_command(format!("supplydesk supplier deactivate {}", supplier.id)),
        );
    }

    result
}

pub fn present_supplier_write(
    action: SupplierWriteAction,
    supplier: &Supplier,
) -> CommandResultViewModel<SupplierWriteViewModel> {
    let verb = match action {
        SupplierWriteAction::Created => "Created",
        SupplierWriteAction::Updated => "Updated",
        SupplierWriteAction::Deactivated => "Deactivated",
    };
    let label = match supplier.supplier_code.as_deref() {
        Some(code) => format!("{} supplier #{} ({})", verb, supplier.id, code),
        None => format!("{} supplier #{}", verb, supplier.id),
    };

    CommandResultViewModel::new(SupplierWriteViewModel {
        action,
        supplier: supplier_detail(supplier),
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_categories(
    categories: Vec<String>,
) -> CommandResultViewModel<CategoryListViewModel> {
    if categories.is_empty() {
        CommandResultViewModel::new(CategoryListViewModel { categories }).with_suggestion(
            Guidance::new(format!(
                "Categories come from supplier records. Common tags: {}",
                CATEGORY_SUGGESTIONS.join(", ")
            ))
            .with_command("supplydesk supplier update <ID> --category \"Dairy, Frozen\""),
        )
    } else {
        let label = format!("{} categories in use", categories.len());
        CommandResultViewModel::new(CategoryListViewModel { categories })
            .with_badge(StatusBadge::info(label))
    }
}

fn supplier_row(supplier: &Supplier) -> SupplierRow {
    SupplierRow {
        id: supplier.id.get(),
        supplier_code: supplier.supplier_code.clone(),
        company_name: supplier.display_name().to_string(),
        contact_person: supplier.contact_person.clone(),
        phone: supplier.phone.clone(),
        categories: supplier.category_tags().map(str::to_string).collect(),
        importance: supplier.importance().to_string(),
        status: supplier.status.map(|s| s.to_string()),
        lead_time_days: supplier.delivery_days(),
        reliability_score: supplier.reliability(),
        on_time_rate: supplier.on_time(),
    }
}

fn supplier_detail(supplier: &Supplier) -> SupplierDetail {
    SupplierDetail {
        id: supplier.id.get(),
        supplier_code: supplier.supplier_code.clone(),
        company_name: supplier.company_name.clone(),
        name: supplier.name.clone(),
        contact_person: supplier.contact_person.clone(),
        email: supplier.email.clone(),
        phone: supplier.phone.clone(),
        address: supplier.address.clone(),
        categories: supplier.category_tags().map(str::to_string).collect(),
        payment_terms: supplier.payment_terms.clone(),
        importance: supplier.importance().to_string(),
        status: supplier.status.map(|s| s.to_string()),
        lead_time_days: supplier.delivery_days(),
        total_orders: supplier.orders(),
        late_deliveries: supplier.late(),
        on_time_rate: supplier.on_time(),
        reliability_score: supplier.reliability(),
        created_at: supplier.created_at.clone(),
        updated_at: supplier.updated_at.clone(),
        updated_by: supplier.updated_by.clone(),
    }
}

/// `supplier list` invocation reproducing `query` at another page
fn list_command(query: &SupplierQuery, page: usize) -> String {
    let mut command = String::from("supplydesk supplier list");

    if !query.search.trim().is_empty() {
        command.push_str(&format!(" --search \"{}\"", query.search));
    }
    if query.status != StatusFilter::All {
        command.push_str(&format!(" --status {}", query.status));
    }
    if query.importance != ImportanceFilter::All {
        command.push_str(&format!(" --importance {}", query.importance));
    }
    if let CategoryFilter::Tag(tag) = &query.category {
        command.push_str(&format!(" --category \"{}\"", tag));
    }
    if query.sort != SortKey::default() {
        command.push_str(&format!(" --sort {}", query.sort));
    }
    command.push_str(&format!(" --page {}", page));

    command
}
