mod analytics;
mod supplier;
mod system;

pub use analytics::present_analytics;
pub use supplier::{
    present_categories, present_supplier_detail, present_supplier_list, present_supplier_write,
};
pub use system::{present_export, present_guidance, present_import, present_init};
