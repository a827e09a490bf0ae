pub mod analytics;
pub mod supplier;
pub mod system;
