pub mod number;
pub mod text;

pub use number::{one_decimal, percent};
pub use text::{or_dash, truncate};
