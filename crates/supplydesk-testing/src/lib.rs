//! Testing infrastructure for supplydesk integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks against the JSON envelope the CLI prints
//! - `fixtures`: supplier builders and canned collections

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{SupplierBuilder, active_suppliers, grocery_suppliers, supplier};
pub use world::{CliResult, TestWorld};
