// Engine module - pure derivations over an in-memory supplier collection
// (listing, paging, category vocabulary, analytics, CSV mapping).
// Nothing here performs IO; callers own fetching and re-invocation.

pub mod analytics;
pub mod categories;
pub mod collate;
pub mod export;
pub mod listing;
pub mod pager;

pub use analytics::{summarize, LabelCount, ReliabilityEntry, SupplierAnalytics};
pub use categories::observed_categories;
pub use collate::locale_cmp;
pub use export::{CsvRecord, CSV_HEADERS};
pub use listing::{compute, filter, sort, SupplierListing};
pub use pager::{page_links, PageLink};
