use serde_json::{json, Value};

/// GraphQL document sent to the hosting API. Takes a single `$login`
/// variable; everything else is fixed, including the first-10 caps on
/// repositories and languages.
pub const REPOSITORIES_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    repositories(first: 10) {
      nodes {
        id
        name
        description
        url
        updatedAt
        forkCount
        openGraphImageUrl
        stargazers {
          totalCount
        }
        readme: object(expression: "master:README.md") {
          ... on Blob {
            text
          }
        }
        licenseInfo {
          id
        }
        primaryLanguage {
          name
        }
        languages(first: 10) {
          nodes {
            name
          }
        }
      }
    }
  }
}
"#;

/// Build the request body for a user's repositories.
///
/// Pure value construction. An empty login is passed through as-is; the
/// API rejects it, not this function.
pub fn repositories_request(login: &str) -> Value {
    json!({
        "query": REPOSITORIES_QUERY,
        "variables": {
            "login": login,
        },
    })
}
