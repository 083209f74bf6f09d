use thiserror::Error;

/// Failures surfaced by the fetch operations.
///
/// The set is closed and carries no diagnostic payload; the `Display` text is
/// meant to be shown to an end user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubApiError {
    #[error("User not found. Please enter another name.")]
    UserNotFound,

    #[error("A network error has occurred. Check your Internet connection and try again later.")]
    NetworkError,

    #[error("Failed to decode the response from the server.")]
    DecodingError,
}

impl From<TransportError> for GitHubApiError {
    fn from(_: TransportError) -> Self {
        GitHubApiError::NetworkError
    }
}

impl From<serde_json::Error> for GitHubApiError {
    fn from(_: serde_json::Error) -> Self {
        GitHubApiError::DecodingError
    }
}

/// Errors raised while building a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Base URL cannot carry path segments: {0}")]
    CannotBeABase(String),

    #[error("Repositories path must not be empty")]
    EmptyRepositoriesPath,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors reported by a [`Transport`](crate::transport::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GitHubApiError>;
