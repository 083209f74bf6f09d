//! Async client for two read-only GitHub REST endpoints: a user's profile and
//! a user's repository list.
//!
//! Requests go through a [`Transport`], so tests (or callers with their own
//! HTTP stack) can swap the network layer out.

pub mod error;
pub mod github;
pub mod transport;
pub mod types;

pub use error::{ConfigError, GitHubApiError, Result, TransportError};
pub use github::{GitHubApi, GitHubClient, GitHubClientBuilder, DEFAULT_BASE_URL, REPOSITORIES_PATH};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use types::{Repository, User};
