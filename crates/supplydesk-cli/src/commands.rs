use anyhow::Result;
use std::path::Path;
use supplydesk_runtime::{Workspace, resolve_workspace_path};

use super::args::{Cli, Commands, ExportCommand, ImportCommand, SupplierCommand};
use super::handlers;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let format = cli.format;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&data_dir, format);
    };

    match command {
        Commands::Init => handlers::init::handle(&data_dir, format),

        Commands::Supplier { command } => {
            let workspace = open_workspace(&data_dir)?;

            match command {
                SupplierCommand::List {
                    search,
                    status,
                    importance,
                    category,
                    sort,
                    page,
                    view_mode,
                } => handlers::supplier_list::handle(
                    &workspace,
                    search,
                    status,
                    importance,
                    category,
                    sort,
                    page,
                    format,
                    &view_mode,
                ),
                SupplierCommand::Show { id } => {
                    handlers::supplier_show::handle(&workspace, id, format)
                }
                SupplierCommand::Add {
                    company_name,
                    fields,
                } => handlers::supplier_write::add(&workspace, company_name, fields, format),
                SupplierCommand::Update {
                    id,
                    company_name,
                    fields,
                } => {
                    handlers::supplier_write::update(&workspace, id, company_name, fields, format)
                }
                SupplierCommand::Deactivate { id } => {
                    handlers::supplier_write::deactivate(&workspace, id, format)
                }
                SupplierCommand::Categories => handlers::categories::handle(&workspace, format),
            }
        }

        Commands::Analytics => {
            let workspace = open_workspace(&data_dir)?;
            handlers::analytics::handle(&workspace, format)
        }

        Commands::Export { command } => {
            let workspace = open_workspace(&data_dir)?;
            match command {
                ExportCommand::Csv { output } => {
                    handlers::transfer::export_csv(&workspace, output.as_deref(), format)
                }
            }
        }

        Commands::Import { command } => {
            let workspace = open_workspace(&data_dir)?;
            match command {
                ImportCommand::Csv { path } => {
                    handlers::transfer::import_csv(&workspace, &path, format)
                }
            }
        }
    }
}

fn open_workspace(data_dir: &Path) -> Result<Workspace> {
    match Workspace::open(data_dir) {
        Ok(workspace) => Ok(workspace),
        Err(err @ supplydesk_runtime::Error::NotInitialized(_)) => {
            anyhow::bail!("{}\nRun 'supplydesk init' to create it.", err)
        }
        Err(err) => Err(err.into()),
    }
}
