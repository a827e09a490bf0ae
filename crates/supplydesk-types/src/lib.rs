pub mod draft;
pub mod error;
pub mod query;
pub mod supplier;

pub use draft::*;
pub use error::{Error, FieldError, Result};
pub use query::*;
pub use supplier::*;
