//! harold-crick - List a GitHub organization's repositories
//!
//! Fetches every repository of an organization from the GitHub REST API,
//! following `Link: rel="next"` pagination, and prints a table of name,
//! visibility and SPDX license identifier sorted by name.
//!
//! # Example
//!
//! ```bash
//! export GITHUB_API_KEY=ghp_xxx
//! harold-crick my-org
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod ui;

pub use cli::Cli;
pub use error::{RepoError, Result};
pub use github::{
    run_repos_command, sort_repositories, GitHubClient, License, Repository, TokenResolver,
};
pub use output::{build_repositories_table, output_repositories};
