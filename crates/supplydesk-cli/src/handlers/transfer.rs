use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use supplydesk_runtime::Workspace;

/// Without `--output` the CSV itself goes to stdout and nothing else is printed.
pub fn export_csv(
    workspace: &Workspace,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let desk = workspace.desk()?;

    let Some(path) = output else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        supplydesk_runtime::export_csv(desk.suppliers(), &mut handle)?;
        handle.flush()?;
        return Ok(());
    };

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let exported = supplydesk_runtime::export_csv(desk.suppliers(), &mut writer)?;
    writer.flush()?;

    let view_model = presenters::present_export(path, exported);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}

pub fn import_csv(workspace: &Workspace, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut desk = workspace.desk()?;
    let report = supplydesk_runtime::import_csv(&mut desk, BufReader::new(file))?;

    let view_model = presenters::present_import(path, report);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(view_model)
}
