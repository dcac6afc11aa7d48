use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "github-projects-page")]
#[command(about = "GitHub Projects Page - Renders a user's repositories as a styled HTML page")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub login whose repositories are rendered
    #[arg(long, env = "GITHUB_LOGIN")]
    pub login: String,

    /// GitHub API token with read access to the user's repositories
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Path the rendered page is written to
    #[arg(long, default_value = "index.html")]
    pub output: PathBuf,

    /// GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = "https://api.github.com/graphql")]
    pub api_url: Url,
}
