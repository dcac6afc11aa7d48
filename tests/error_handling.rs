use github_projects_page::error::{ProjectsPageError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = ProjectsPageError::RateLimitExceeded("Rate limit hit".to_string());
    assert_eq!(format!("{}", error), "Rate limit exceeded: Rate limit hit");

    let error = ProjectsPageError::NotFound("User not found".to_string());
    assert_eq!(format!("{}", error), "Resource not found: User not found");

    let error = ProjectsPageError::ApiError("API failed".to_string());
    assert_eq!(format!("{}", error), "GitHub API error: API failed");

    let error = ProjectsPageError::QueryFailed("Bad login".to_string());
    assert_eq!(format!("{}", error), "GraphQL query failed: Bad login");

    let error = ProjectsPageError::AuthError("Token rejected".to_string());
    assert_eq!(format!("{}", error), "Authentication error: Token rejected");
}

#[test]
fn test_error_source() {
    let error = ProjectsPageError::RateLimitExceeded("Rate limit hit".to_string());
    assert!(error.source().is_none());
}

#[test]
fn test_error_conversion() {
    // Test that we can convert from other error types
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: ProjectsPageError = io_error.into();
    assert!(matches!(error, ProjectsPageError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: ProjectsPageError = json_error.into();
    assert!(matches!(error, ProjectsPageError::JsonError(_)));
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(ProjectsPageError::NotFound("Not found".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
