//! Route dataset parsing and loading.
//!
//! The dataset is line-oriented text: a header line declaring how many
//! route entries follow, then one entry per line. Individual bad entries
//! are skipped with a warning; only an unreadable source aborts a load.

mod error;
mod loader;
mod parser;

pub use error::{DatasetError, InvalidRoute, LoadWarning};
pub use loader::{LoadReport, load_path, load_reader};
pub use parser::{RouteEntry, parse_route_line};
