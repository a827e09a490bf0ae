mod export;
mod import;

pub use export::export_csv;
pub use import::{ImportReport, RejectedRow, import_csv};
