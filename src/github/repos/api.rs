//! Repository API operations

use log::debug;
use url::Url;

use crate::config::api;
use crate::error::{RepoError, Result};
use crate::github::GitHubClient;

use super::models::Repository;

impl GitHubClient {
    /// Build the first-page URL for an organization's repository listing
    pub(crate) fn org_repos_url(&self, org: &str) -> Result<Url> {
        let base = self.base_url();
        let mut url = Url::parse(&base)?;
        url.path_segments_mut()
            .map_err(|_| RepoError::Config(format!("base URL '{}' cannot be a base", base)))?
            .pop_if_empty()
            .extend([api::ORGS, org, api::REPOS]);
        url.query_pairs_mut()
            .append_pair("per_page", &api::DEFAULT_PAGE_SIZE.to_string());
        Ok(url)
    }

    /// Get all repositories of an organization, in API order
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let url = self.org_repos_url(org)?;
        debug!("Fetching repositories from: {}", url);

        let context = format!("repositories for organization '{}'", org);
        self.fetch_all_pages::<Repository>(url, &context).await
    }
}
