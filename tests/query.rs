use github_projects_page::query::{repositories_request, REPOSITORIES_QUERY};

#[test]
fn test_query_shape() {
    assert!(REPOSITORIES_QUERY.contains("user(login: $login)"));
    assert!(REPOSITORIES_QUERY.contains("repositories(first: 10)"));
    assert!(REPOSITORIES_QUERY.contains("languages(first: 10)"));
    assert!(REPOSITORIES_QUERY.contains("master:README.md"));
    assert!(REPOSITORIES_QUERY.contains("openGraphImageUrl"));
    assert!(REPOSITORIES_QUERY.contains("totalCount"));
}

#[test]
fn test_request_body() {
    let body = repositories_request("octocat");

    assert_eq!(body["query"], REPOSITORIES_QUERY);
    assert_eq!(body["variables"]["login"], "octocat");
}

#[test]
fn test_request_body_passes_empty_login_through() {
    // Empty logins are rejected by the API, not locally
    let body = repositories_request("");
    assert_eq!(body["variables"]["login"], "");
}
