/// Configuration constants for the GitHub API
pub mod api {
    /// GitHub REST API host
    pub const HOST: &str = "api.github.com";

    /// Organizations endpoint
    pub const ORGS: &str = "orgs";

    /// Repositories sub-resource of an organization
    pub const REPOS: &str = "repos";

    /// Media type selecting the license-aware repository payload
    pub const ACCEPT: &str = "application/vnd.github.drax-preview+json";

    /// Page size requested on the first page; GitHub carries it into `next` links
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Upper bound on pages followed through `Link` headers
    pub const MAX_PAGES: usize = 1000;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_API_KEY";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level (overridable with RUST_LOG)
    pub const LOG_LEVEL: &str = "warn";
}

/// Process exit codes
pub mod exit_codes {
    /// Usage, credential or fatal fetch error
    pub const FAILURE: i32 = 1;
}
