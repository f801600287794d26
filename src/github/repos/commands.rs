//! Repository command handlers

use std::io::{IsTerminal, Write};

use log::{debug, info};

use crate::error::Result;
use crate::github::GitHubClient;
use crate::output::output_repositories;
use crate::ui::{create_spinner, finish_spinner};

use super::models::Repository;

/// Sort repositories by full name, ascending byte order
pub fn sort_repositories(repos: &mut [Repository]) {
    repos.sort_by(|a, b| a.name().cmp(b.name()));
}

/// List, sort and render an organization's repositories
///
/// Nothing is written to `out` unless every page was fetched and decoded.
pub async fn run_repos_command<W: Write>(
    client: &GitHubClient,
    org: &str,
    out: &mut W,
) -> Result<()> {
    let spinner = create_spinner(
        &format!("Fetching repositories for '{}'...", org),
        !std::io::stderr().is_terminal(),
    );

    let result = client.list_org_repos(org).await;
    finish_spinner(spinner);
    let mut repos = result?;

    debug!("Found {} repositories for org '{}'", repos.len(), org);
    sort_repositories(&mut repos);

    output_repositories(&repos, out)?;
    info!("Listed {} repositories for org '{}'", repos.len(), org);
    Ok(())
}
