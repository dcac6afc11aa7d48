use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use github_projects_page::cli::Cli;
use github_projects_page::github::GitHubClient;
use github_projects_page::render::render_page;
use std::fs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Projects Page".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::with_endpoint(cli.token.clone(), cli.api_url.clone())
        .context("Failed to create GitHub client")?;

    println!("📡 Fetching repositories for {}...", cli.login.bold());
    let repos = client
        .fetch_user_repositories(&cli.login)
        .await
        .with_context(|| format!("Failed to fetch repositories for {}", cli.login))?;

    println!("📊 Found {} repositories", repos.len());

    let page = render_page(&repos);
    fs::write(&cli.output, page)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("✅ Wrote {}", cli.output.display().to_string().bold());

    Ok(())
}
