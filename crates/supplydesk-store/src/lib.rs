// SQLite supplier store
// Holds the full supplier book; reads always return complete records

mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
