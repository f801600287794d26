//! GitHub HTTP client for API interactions

use log::debug;
use reqwest::header::LINK;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::config::api;
use crate::error::{RepoError, Result};
use crate::github::link;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub API client
pub struct GitHubClient {
    client: Client,
    token: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Maximum number of pages followed before giving up
    max_pages: usize,
}

impl GitHubClient {
    /// Create a new GitHub client authenticating with the given token
    pub fn new(token: String) -> Self {
        Self {
            client: Self::build_http_client(),
            token,
            base_url_override: None,
            max_pages: api::MAX_PAGES,
        }
    }

    /// Create a client against a different API root (e.g. a mock server)
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: Self::build_http_client(),
            token,
            base_url_override: Some(base_url.trim_end_matches('/').to_string()),
            max_pages: api::MAX_PAGES,
        }
    }

    fn build_http_client() -> Client {
        Client::builder()
            // GitHub rejects requests without a User-Agent
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new())
    }

    /// Limit how many pages a single listing may follow
    pub fn set_max_pages(&mut self, max_pages: usize) {
        self.max_pages = max_pages;
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}", api::HOST)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Accept", api::ACCEPT)
            .header("Authorization", format!("Token {}", self.token))
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Fetch every page of a JSON-array endpoint by following `Link: rel="next"`
    ///
    /// Pages are requested one after another and their items appended in the
    /// order received. Any failure aborts the whole listing; no partial result
    /// is returned.
    ///
    /// # Arguments
    /// * `first_url` - URL of the first page
    /// * `error_context` - Context for error messages (e.g., "repositories for organization 'acme'")
    pub async fn fetch_all_pages<T>(&self, first_url: Url, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut visited: HashSet<Url> = HashSet::new();
        let mut next = Some(first_url);
        let mut page_num = 0usize;

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(RepoError::Pagination(format!(
                    "next link for {} points back to already fetched page {}",
                    error_context, url
                )));
            }

            page_num += 1;
            if page_num > self.max_pages {
                return Err(RepoError::Pagination(format!(
                    "{} spans more than {} pages",
                    error_context, self.max_pages
                )));
            }

            let (items, next_url) = self
                .fetch_single_page::<T>(&url, page_num, error_context)
                .await?;
            all_items.extend(items);
            next = next_url;
        }

        debug!(
            "Fetched {} total items across {} pages for {}",
            all_items.len(),
            page_num,
            error_context
        );
        Ok(all_items)
    }

    /// Fetch one page, returning its items and the resolved `next` URL
    async fn fetch_single_page<T>(
        &self,
        url: &Url,
        page_num: usize,
        error_context: &str,
    ) -> Result<(Vec<T>, Option<Url>)>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(RepoError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {} (page {})", error_context, page_num),
            });
        }

        // A response may split `Link` across several header fields
        let mut link_values = Vec::new();
        for value in response.headers().get_all(LINK) {
            let value = value.to_str().map_err(|e| {
                RepoError::Pagination(format!(
                    "unreadable Link header for {} (page {}): {}",
                    error_context, page_num, e
                ))
            })?;
            link_values.push(value);
        }

        // Relative targets are resolved against the page that carried them
        let next_url = link::next_link(&link_values.join(", "))
            .map(|target| url.join(&target))
            .transpose()?;

        let body = response.text().await?;
        let items: Vec<T> = serde_json::from_str(&body).map_err(|e| {
            RepoError::Json(format!(
                "Failed to parse {} (page {}): {}",
                error_context, page_num, e
            ))
        })?;

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((items, next_url))
    }
}

#[cfg(test)]
impl GitHubClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
