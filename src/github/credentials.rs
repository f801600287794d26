//! GitHub token resolution from the environment

use log::debug;

use crate::config::credentials;
use crate::error::{RepoError, Result};

/// Token resolution from a single environment variable
pub struct TokenResolver {
    env_var: String,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new(credentials::TOKEN_ENV_VAR)
    }
}

impl TokenResolver {
    /// Create a resolver reading the given environment variable
    pub fn new(env_var: &str) -> Self {
        Self {
            env_var: env_var.to_string(),
        }
    }

    /// Resolve the token from the process environment
    ///
    /// An unset variable and an empty (or whitespace-only) one are both errors.
    pub fn resolve(&self) -> Result<String> {
        self.resolve_from(std::env::var(&self.env_var).ok())
    }

    /// Validate a token value obtained elsewhere
    pub fn resolve_from(&self, value: Option<String>) -> Result<String> {
        match value {
            Some(token) if !token.trim().is_empty() => {
                debug!("Using token from {} environment variable", self.env_var);
                Ok(token.trim().to_string())
            }
            _ => Err(RepoError::TokenNotFound(self.token_not_found_message())),
        }
    }

    fn token_not_found_message(&self) -> String {
        format!(
            "You must specify an API key in the environment as `{}`",
            self.env_var
        )
    }
}
