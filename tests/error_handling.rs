use github_networking::error::{ConfigError, GitHubApiError, Result, TransportError};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = GitHubApiError::UserNotFound;
    assert_eq!(format!("{}", error), "User not found. Please enter another name.");

    let error = GitHubApiError::NetworkError;
    assert_eq!(
        format!("{}", error),
        "A network error has occurred. Check your Internet connection and try again later."
    );

    let error = GitHubApiError::DecodingError;
    assert_eq!(format!("{}", error), "Failed to decode the response from the server.");
}

#[test]
fn test_error_source() {
    for error in [
        GitHubApiError::UserNotFound,
        GitHubApiError::NetworkError,
        GitHubApiError::DecodingError,
    ] {
        assert!(error.source().is_none());
    }
}

#[test]
fn test_error_conversion() {
    let error: GitHubApiError = TransportError::Other("connection reset".to_string()).into();
    assert_eq!(error, GitHubApiError::NetworkError);

    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: GitHubApiError = json_error.into();
    assert_eq!(error, GitHubApiError::DecodingError);
}

#[test]
fn test_config_error_keeps_cause() {
    let source = url::Url::parse("not a url").unwrap_err();
    let error = ConfigError::InvalidBaseUrl {
        url: "not a url".to_string(),
        source,
    };

    assert_eq!(
        format!("{}", error),
        "Invalid base URL 'not a url': relative URL without a base"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_transport_error_display() {
    let error = TransportError::Other("socket closed".to_string());
    assert_eq!(format!("{}", error), "Transport failure: socket closed");
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
        Err(GitHubApiError::UserNotFound)
    }

    let result = returns_error();
    assert_eq!(result, Err(GitHubApiError::UserNotFound));
}
