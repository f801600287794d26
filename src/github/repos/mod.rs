//! Repository module

mod api;
mod commands;
mod models;

pub use commands::{run_repos_command, sort_repositories};
pub use models::{License, Repository};
