mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "supplydesk")]
#[command(about = "Search, filter and maintain supplier records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory [default: $SUPPLYDESK_PATH, then the platform data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
