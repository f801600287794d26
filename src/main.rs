//! harold-crick - Main entry point

use std::process;

use clap::Parser;
use log::{debug, info};

use harold_crick::config::{defaults, exit_codes};
use harold_crick::{run_repos_command, Cli, GitHubClient, TokenResolver};

#[tokio::main]
async fn main() {
    // Usage errors exit with 1 rather than clap's default of 2
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(exit_codes::FAILURE);
        }
        e.exit()
    });

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(defaults::LOG_LEVEL))
        .init();

    info!("Starting harold-crick v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: org={:?}", cli.org);
    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    let token = match TokenResolver::default().resolve() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(exit_codes::FAILURE);
        }
    };

    let client = match cli.api_url {
        Some(ref base_url) => GitHubClient::with_base_url(token, base_url.clone()),
        None => GitHubClient::new(token),
    };
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = run_repos_command(&client, &cli.org, &mut stdout).await {
        debug!("Failed to list repositories for '{}': {:?}", cli.org, e);
        eprintln!("Error: {}", e);
        process::exit(exit_codes::FAILURE);
    }

    info!("Completed successfully");
}
