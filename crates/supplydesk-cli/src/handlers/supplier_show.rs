use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use supplydesk_runtime::{SupplierCatalog, Workspace};
use supplydesk_types::SupplierId;

pub fn handle(workspace: &Workspace, id: SupplierId, format: OutputFormat) -> Result<()> {
    let desk = workspace.desk()?;
    let supplier = desk
        .catalog()
        .get_supplier(id)?
        .ok_or_else(|| anyhow::anyhow!("Supplier {} not found", id))?;

    let view_model = presenters::present_supplier_detail(&supplier);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
