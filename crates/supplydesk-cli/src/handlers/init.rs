use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use std::path::Path;
use supplydesk_runtime::Workspace;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let result = Workspace::init(data_dir)?;

    let view_model = presenters::present_init(result);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
