use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use std::path::Path;
use supplydesk_runtime::Workspace;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let (initialized, supplier_count) = match Workspace::open(data_dir) {
        Ok(workspace) => (true, workspace.desk()?.suppliers().len()),
        Err(supplydesk_runtime::Error::NotInitialized(_)) => (false, 0),
        Err(err) => return Err(err.into()),
    };

    let view_model = presenters::present_guidance(data_dir, initialized, supplier_count);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
