// Command layout: `supplier` owns everything that reads or writes single
// records, `analytics` and the `export`/`import` namespaces work on the whole
// book. Every command loads a fresh snapshot from the workspace database and
// renders through the presentation layer (presenter -> view model -> view).

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Cli, Commands, ExportCommand, ImportCommand, LogLevel, OutputFormat, SupplierCommand,
};
pub use commands::run;
