use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectsPageError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("GraphQL query failed: {0}")]
    QueryFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectsPageError>;
