use crate::args::{OutputFormat, SupplierFieldArgs};
use crate::presentation::presenters;
use crate::presentation::view_models::SupplierWriteAction;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use supplydesk_runtime::Workspace;
use supplydesk_types::{SupplierDraft, SupplierId};

pub fn add(
    workspace: &Workspace,
    company_name: String,
    fields: SupplierFieldArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut draft = SupplierDraft::new(company_name);
    fields.apply(&mut draft);

    let mut desk = workspace.desk()?;
    let created = desk.create(draft)?;

    let view_model = presenters::present_supplier_write(SupplierWriteAction::Created, &created);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}

/// Start from the stored record so flags that are not given keep their value.
pub fn update(
    workspace: &Workspace,
    id: SupplierId,
    company_name: Option<String>,
    fields: SupplierFieldArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut desk = workspace.desk()?;
    let existing = desk
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Supplier {} not found", id))?;

    let mut draft = SupplierDraft::from(existing);
    if let Some(company_name) = company_name {
        draft.company_name = Some(company_name);
    }
    fields.apply(&mut draft);

    let updated = desk.update(id, draft)?;

    let view_model = presenters::present_supplier_write(SupplierWriteAction::Updated, &updated);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}

pub fn deactivate(workspace: &Workspace, id: SupplierId, format: OutputFormat) -> Result<()> {
    let mut desk = workspace.desk()?;
    desk.deactivate(id)?;

    let supplier = desk
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Supplier {} not found", id))?;

    let view_model =
        presenters::present_supplier_write(SupplierWriteAction::Deactivated, supplier);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
