use crate::error::{ProjectsPageError, Result};
use crate::query::repositories_request;
use crate::types::{GraphQlResponse, RateLimitState, Repository};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use std::time::{Duration, SystemTime};
use tokio::time::sleep;
use tracing::warn;
use url::Url;

const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
const MAX_RETRIES: u32 = 3;

pub struct GitHubClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let endpoint = Url::parse(GRAPHQL_ENDPOINT)
            .map_err(|e| ProjectsPageError::ApiError(format!("Invalid endpoint URL: {}", e)))?;
        Self::with_endpoint(token, endpoint)
    }

    /// Build a client against a non-default GraphQL endpoint (proxies, test
    /// servers).
    pub fn with_endpoint(token: String, endpoint: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent("GitHub Projects Page/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, endpoint, token })
    }

    async fn execute(&self, body: &serde_json::Value) -> Result<Response> {
        let mut retries = 0;

        loop {
            let response = self
                .client
                .post(self.endpoint.clone())
                .header("Accept", "application/json")
                .header("Authorization", format!("bearer {}", self.token))
                .json(body)
                .send()
                .await?;

            let rate_limit = self.get_rate_limit_state(&response);

            match response.status() {
                reqwest::StatusCode::OK => {
                    // Add delay if rate limit is low
                    if rate_limit.remaining < 10 {
                        warn!(remaining = rate_limit.remaining, "Rate limit low. Adding delay...");
                        sleep(Duration::from_secs(1)).await;
                    }
                    return Ok(response);
                }
                reqwest::StatusCode::UNAUTHORIZED => {
                    return Err(ProjectsPageError::AuthError(
                        "Token rejected by the GitHub API".to_string(),
                    ));
                }
                reqwest::StatusCode::NOT_FOUND => {
                    return Err(ProjectsPageError::NotFound(format!(
                        "Resource not found: {}",
                        self.endpoint
                    )));
                }
                reqwest::StatusCode::FORBIDDEN => {
                    if rate_limit.is_limited {
                        let reset: SystemTime = SystemTime::UNIX_EPOCH
                            + Duration::from_secs(rate_limit.reset_time.timestamp().max(0) as u64);
                        let wait_time = reset
                            .duration_since(SystemTime::now())
                            .unwrap_or(Duration::from_secs(0));

                        if wait_time > Duration::from_secs(60) {
                            return Err(ProjectsPageError::RateLimitExceeded(format!(
                                "API rate limit exceeded. Reset at: {}",
                                rate_limit.reset_time
                            )));
                        } else {
                            warn!(
                                seconds = wait_time.as_secs() + 1,
                                "Rate limit reached. Waiting for reset..."
                            );
                            sleep(wait_time + Duration::from_secs(1)).await;
                            continue;
                        }
                    } else {
                        let error_text = response.text().await.unwrap_or_default();
                        return Err(ProjectsPageError::ApiError(format!(
                            "Forbidden: {}",
                            error_text
                        )));
                    }
                }
                status if status.is_server_error() && retries < MAX_RETRIES => {
                    warn!(%status, "Server error. Retrying in 2 seconds...");
                    sleep(Duration::from_secs(2)).await;
                    retries += 1;
                    continue;
                }
                status => {
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(ProjectsPageError::ApiError(format!(
                        "API request failed with status {}: {}",
                        status, error_text
                    )));
                }
            }
        }
    }

    /// Get current rate limit state from a response's headers
    pub fn get_rate_limit_state(&self, response: &Response) -> RateLimitState {
        let headers = response.headers();

        let remaining = headers
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(0);

        let limit = headers
            .get("X-RateLimit-Limit")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5000);

        let reset = headers
            .get("X-RateLimit-Reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok())
            .map(|timestamp| DateTime::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        RateLimitState {
            remaining,
            limit,
            reset_time: reset,
            is_limited: remaining == 0,
        }
    }

    /// Fetch a user's repositories, in API return order.
    ///
    /// Runs the fixed repositories query once; the result is the complete
    /// data set for a page build.
    pub async fn fetch_user_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        let body = repositories_request(login);
        let response = self.execute(&body).await?;
        let graph: GraphQlResponse = response.json().await?;

        if !graph.errors.is_empty() {
            let messages: Vec<String> =
                graph.errors.into_iter().map(|e| e.message).collect();
            return Err(ProjectsPageError::QueryFailed(messages.join("; ")));
        }

        let user = graph
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| ProjectsPageError::NotFound(format!("User not found: {}", login)))?;

        Ok(user.repositories.nodes)
    }
}
