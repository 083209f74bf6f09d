use crate::error::{ConfigError, TransportError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const USER_AGENT: &str = "github-networking/0.1.0";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw bytes and response metadata for a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl TransportResponse {
    /// A response received over HTTP.
    pub fn http(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }

    /// A response that was not produced by an HTTP exchange and so has no
    /// status code.
    pub fn non_http(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: None,
            body: body.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Performs a single GET against a URL.
///
/// Implementations are shared between concurrent callers and must be safe
/// to invoke from several tasks at once.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(ReqwestTransport { client })
    }

    /// Wraps a preconfigured client. GitHub rejects requests that carry no
    /// `User-Agent`, so the client should set one.
    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip(self), fields(url = %url))]
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!(%status, "received response");

        let body = response.bytes().await?;
        Ok(TransportResponse::http(status, body.to_vec()))
    }
}
