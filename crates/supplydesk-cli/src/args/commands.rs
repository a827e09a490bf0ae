use clap::Subcommand;
use std::path::PathBuf;
use supplydesk_types::{ImportanceFilter, SortKey, StatusFilter, SupplierId};

use super::common::{SupplierFieldArgs, ViewModeArgs, parse_sort_key};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory, config and supplier database")]
    Init,

    #[command(about = "Browse and maintain supplier records")]
    Supplier {
        #[command(subcommand)]
        command: SupplierCommand,
    },

    #[command(about = "Status, importance, category and reliability figures")]
    Analytics,

    #[command(about = "Write supplier records to a file")]
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },

    #[command(about = "Create supplier records from a file")]
    Import {
        #[command(subcommand)]
        command: ImportCommand,
    },
}

#[derive(Subcommand)]
pub enum SupplierCommand {
    #[command(about = "List suppliers, 10 per page")]
    List {
        #[arg(
            long,
            short = 's',
            default_value = "",
            help = "Match company, trading name, code, phone, category or contact"
        )]
        search: String,

        #[arg(long, default_value = "All", help = "All, Active or Inactive")]
        status: StatusFilter,

        #[arg(
            long,
            default_value = "All",
            help = "All, Normal, Preferred or Critical (missing counts as Normal)"
        )]
        importance: ImportanceFilter,

        #[arg(long, help = "Category text to match, e.g. Dairy")]
        category: Option<String>,

        #[arg(
            long,
            value_parser = parse_sort_key,
            help = "name-asc, name-desc, reliability-desc, lead-asc or status [default: from config]"
        )]
        sort: Option<SortKey>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show every field of one supplier")]
    Show { id: SupplierId },

    #[command(about = "Create a supplier")]
    Add {
        #[arg(long)]
        company_name: String,

        #[command(flatten)]
        fields: SupplierFieldArgs,
    },

    #[command(about = "Change fields of an existing supplier")]
    Update {
        id: SupplierId,

        #[arg(long)]
        company_name: Option<String>,

        #[command(flatten)]
        fields: SupplierFieldArgs,
    },

    #[command(about = "Mark a supplier Inactive (records are never removed)")]
    Deactivate { id: SupplierId },

    #[command(about = "List the categories used across all suppliers")]
    Categories,
}

#[derive(Subcommand)]
pub enum ExportCommand {
    #[command(about = "Export every supplier as CSV")]
    Csv {
        #[arg(long, short = 'o', help = "Output file [default: stdout]")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ImportCommand {
    #[command(about = "Create one supplier per CSV row")]
    Csv { path: PathBuf },
}
