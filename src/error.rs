use std::fmt;

/// Custom error type for repository listing
#[derive(Debug)]
pub enum RepoError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in the environment
    TokenNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Pagination did not terminate
    Pagination(String),
    /// Configuration error
    Config(String),
    /// Writing the report failed
    Output(String),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::Http(e) => write!(f, "HTTP request failed: {}", e),
            RepoError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            RepoError::TokenNotFound(msg) => write!(f, "{}", msg),
            RepoError::Json(msg) => write!(f, "JSON error: {}", msg),
            RepoError::Pagination(msg) => write!(f, "Pagination error: {}", msg),
            RepoError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RepoError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for RepoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepoError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RepoError {
    fn from(err: reqwest::Error) -> Self {
        RepoError::Http(err)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for RepoError {
    fn from(err: std::io::Error) -> Self {
        RepoError::Output(err.to_string())
    }
}

impl From<url::ParseError> for RepoError {
    fn from(err: url::ParseError) -> Self {
        RepoError::Config(format!("invalid URL: {}", err))
    }
}

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, RepoError>;
