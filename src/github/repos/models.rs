//! Repository data models

use serde::Deserialize;

/// License detected by GitHub for a repository
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub spdx_id: Option<String>,
}

/// Repository entry from `GET /orgs/{org}/repos`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub license: Option<License>,
}

impl Repository {
    /// Get the full `owner/name` of the repository
    pub fn name(&self) -> &str {
        &self.full_name
    }

    /// Whether the repository is private
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Get the SPDX license identifier, or "" when none was detected
    pub fn license_id(&self) -> &str {
        self.license
            .as_ref()
            .and_then(|l| l.spdx_id.as_deref())
            .unwrap_or("")
    }
}
