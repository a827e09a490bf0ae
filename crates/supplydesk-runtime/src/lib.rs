pub mod catalog;
pub mod config;
pub mod desk;
pub mod error;
pub mod ops;
pub mod workspace;

pub use catalog::{LocalCatalog, SupplierCatalog};
pub use config::{Config, DeskConfig, resolve_workspace_path};
pub use desk::SupplierDesk;
pub use error::{Error, Result};
pub use ops::{ImportReport, RejectedRow, export_csv, import_csv};
pub use workspace::{InitResult, Workspace};
