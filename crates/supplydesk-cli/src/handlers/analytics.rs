use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use supplydesk_runtime::Workspace;

pub fn handle(workspace: &Workspace, format: OutputFormat) -> Result<()> {
    let desk = workspace.desk()?;

    let view_model = presenters::present_analytics(desk.analytics());
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
