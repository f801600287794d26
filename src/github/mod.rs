//! GitHub API module
//!
//! This module contains the HTTP client, `Link` header pagination and the
//! organization repository listing.

mod client;
mod credentials;
pub mod link;
pub mod repos;

pub use client::GitHubClient;
pub use credentials::TokenResolver;
pub use repos::{run_repos_command, sort_repositories, License, Repository};
