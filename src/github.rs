use crate::error::{ConfigError, GitHubApiError, Result};
use crate::transport::{ReqwestTransport, Transport, TransportResponse};
use crate::types::{Repository, User};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{instrument, trace};
use url::Url;

/// Prefix under which the per-user endpoints live.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users/";
/// Path appended to `{base}/{username}` to list repositories.
pub const REPOSITORIES_PATH: &str = "repos";

/// The two read-only operations offered over the users API.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetches the profile of `username`.
    ///
    /// # Errors
    ///
    /// [`GitHubApiError::UserNotFound`] on a 404, [`GitHubApiError::DecodingError`]
    /// when the body is not a user object, and [`GitHubApiError::NetworkError`]
    /// for everything else that is not a 200.
    async fn fetch_user(&self, username: &str) -> Result<User>;

    /// Fetches the public repositories of `username`, in the order GitHub
    /// returns them. A user without repositories yields an empty list.
    ///
    /// # Errors
    ///
    /// Same as [`GitHubApi::fetch_user`].
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>>;
}

/// [`GitHubApi`] implementation over a pluggable [`Transport`].
///
/// ```no_run
/// use github_networking::{GitHubApi, GitHubClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GitHubClient::new()?;
/// let user = client.fetch_user("octocat").await?;
/// println!("{}", user.login());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: Url,
    repositories_path: String,
    transport: Arc<dyn Transport>,
}

impl GitHubClient {
    /// Client for the public GitHub API using the reqwest transport.
    pub fn new() -> std::result::Result<Self, ConfigError> {
        Self::builder().build()
    }

    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::default()
    }

    /// Effective base URL, always ending with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn repositories_path(&self) -> &str {
        &self.repositories_path
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(|_| GitHubApiError::NetworkError)
    }

    async fn fetch_decodable<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.transport.get(&url).await?;
        validate_response(&response)?;
        let decoded = serde_json::from_slice(response.body())?;
        Ok(decoded)
    }
}

fn validate_response(response: &TransportResponse) -> Result<()> {
    trace!(status = ?response.status(), "validating response");
    match response.status() {
        Some(StatusCode::OK) => Ok(()),
        Some(StatusCode::NOT_FOUND) => Err(GitHubApiError::UserNotFound),
        _ => Err(GitHubApiError::NetworkError),
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_user(&self, username: &str) -> Result<User> {
        let url = self.endpoint(username)?;
        self.fetch_decodable(url).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.endpoint(&format!("{}/{}", username, self.repositories_path))?;
        self.fetch_decodable(url).await
    }
}

/// Builder for [`GitHubClient`]. Every setting is optional.
#[derive(Debug, Default)]
pub struct GitHubClientBuilder {
    base_url: Option<String>,
    repositories_path: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl GitHubClientBuilder {
    /// Overrides [`DEFAULT_BASE_URL`], e.g. to point at a mock server. An
    /// empty string keeps the default.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn repositories_path(mut self, path: impl Into<String>) -> Self {
        self.repositories_path = Some(path.into());
        self
    }

    pub fn transport<T: Transport + 'static>(self, transport: T) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> std::result::Result<GitHubClient, ConfigError> {
        let base_url = match self.base_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_base_url(raw)?,
            _ => parse_base_url(DEFAULT_BASE_URL)?,
        };

        let repositories_path = self
            .repositories_path
            .unwrap_or_else(|| REPOSITORIES_PATH.to_string());
        let repositories_path = repositories_path.trim_matches('/').to_string();
        if repositories_path.is_empty() {
            return Err(ConfigError::EmptyRepositoriesPath);
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(GitHubClient {
            base_url,
            repositories_path,
            transport,
        })
    }
}

fn parse_base_url(raw: &str) -> std::result::Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(raw.to_string()));
    }

    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
