//! # Presentation Layer
//!
//! Every command renders through the same pipeline:
//!
//! ```text
//! runtime data -> presenters -> view_models -> views -> renderers
//! ```
//!
//! ### `view_models/` (The Data Contract)
//! * Structs that define *what* a command outputs. Must implement `Serialize`;
//!   the JSON output is the serialized view model.
//! * `CreateView` bridges a view model to its text view.
//!
//! ### `presenters/`
//! * Pure functions from runtime/engine values to view models.
//! * Decides badges and follow-up tips. Does **not** use `formatters`.
//!
//! ### `views/`
//! * `fmt::Display` implementations. Layout, column widths and mode-dependent
//!   hiding live here, using `formatters` for cell text.
//!
//! ### `renderers/`
//! * `ConsoleRenderer` prints JSON or badge + view + tips.
//!
//! ### `formatters/`
//! * Small string helpers used by views (`truncate`, `or_dash`, ...).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{OutputFormat, ViewMode};
