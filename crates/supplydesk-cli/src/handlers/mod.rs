pub mod analytics;
pub mod categories;
pub mod guidance;
pub mod init;
pub mod supplier_list;
pub mod supplier_show;
pub mod supplier_write;
pub mod transfer;
