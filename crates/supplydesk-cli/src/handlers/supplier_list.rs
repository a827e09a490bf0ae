use crate::args::{OutputFormat, ViewModeArgs};
use anyhow::Result;
use supplydesk_runtime::Workspace;
use supplydesk_types::{ImportanceFilter, SortKey, StatusFilter, SupplierQuery};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    workspace: &Workspace,
    search: String,
    status: StatusFilter,
    importance: ImportanceFilter,
    category: Option<String>,
    sort: Option<SortKey>,
    page: usize,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    use crate::presentation::presenters;
    use crate::presentation::{ConsoleRenderer, Renderer};

    let query = SupplierQuery::new()
        .with_search(search)
        .with_status(status)
        .with_importance(importance)
        .with_category(category.as_deref().unwrap_or_default())
        .with_sort(sort.unwrap_or(workspace.config().desk.default_sort))
        .with_page(page);

    let desk = workspace.desk()?;
    let listing = desk.listing(&query);
    tracing::debug!(
        total = listing.total_count,
        pages = listing.page_count,
        page = listing.page,
        "computed supplier listing"
    );

    let view_model = presenters::present_supplier_list(&listing, &query);
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(view_model)
}
