use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub GraphQL response structures, shaped exactly like the query in
// `crate::query`. Nullable API fields are `Option`s; everything else is
// guaranteed by the schema.

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<QueryData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
pub struct UserNode {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    pub nodes: Vec<Repository>,
}

/// A single repository record as returned by the API, in return order.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "forkCount")]
    pub fork_count: u32,
    #[serde(rename = "openGraphImageUrl")]
    pub open_graph_image_url: String,
    pub stargazers: StargazerCount,
    pub readme: Option<ReadmeBlob>,
    #[serde(rename = "licenseInfo")]
    pub license_info: Option<LicenseInfo>,
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<Language>,
    pub languages: LanguageConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StargazerCount {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
}

/// Readme file content from the aliased `object(...)` lookup. The object is
/// null when the path does not exist, and `text` is null when it resolves to
/// something other than a blob.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeBlob {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseInfo {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConnection {
    pub nodes: Vec<Language>,
}

impl Repository {
    /// Readme text, if the blob exists and carried any.
    pub fn readme_text(&self) -> Option<&str> {
        self.readme.as_ref().and_then(|blob| blob.text.as_deref())
    }

    pub fn primary_language_name(&self) -> Option<&str> {
        self.primary_language.as_ref().map(|lang| lang.name.as_str())
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.nodes.iter().map(|lang| lang.name.as_str()).collect()
    }
}

/// Rate limit state parsed from the last response's headers.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            remaining: 5000,
            limit: 5000,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
