//! Output formatting module
//!
//! Renders the repository report as a bordered text table.

mod repositories;

pub use repositories::{build_repositories_table, output_repositories};
