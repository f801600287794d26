//! CLI argument parsing

use clap::Parser;

/// Repository license lister CLI
#[derive(Parser, Debug)]
#[command(name = "harold-crick")]
#[command(version)]
#[command(about = "List an organization's GitHub repositories with visibility and license", long_about = None)]
#[command(
    after_help = "Environment:\n  GITHUB_API_KEY  API token used to authenticate (required)\n  RUST_LOG        Log filter (default: warn)"
)]
pub struct Cli {
    /// Organization whose repositories are listed
    #[arg(value_name = "ORG")]
    pub org: String,

    /// Arguments after ORG are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,

    /// API root override, used to point the tool at a mock server
    #[arg(long, hide = true, value_name = "URL")]
    pub api_url: Option<String>,
}
