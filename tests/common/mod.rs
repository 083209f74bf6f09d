#![allow(dead_code)]

use async_trait::async_trait;
use github_networking::{GitHubClient, Transport, TransportError, TransportResponse};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use url::Url;

pub const OCTOCAT_JSON: &str = r#"{
    "login": "octocat",
    "avatar_url": "https://github.com/images/error/octocat_happy.gif",
    "name": "The Octocat"
}"#;

#[derive(Debug, Clone)]
enum Reply {
    Respond(TransportResponse),
    Fail(String),
}

/// In-memory transport returning one canned reply and recording every URL
/// it was asked for.
#[derive(Debug, Clone)]
pub struct StubTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        Self::with_reply(Reply::Respond(TransportResponse::http(status, body.as_bytes())))
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, "")
    }

    pub fn non_http(body: &str) -> Self {
        Self::with_reply(Reply::Respond(TransportResponse::non_http(body.as_bytes())))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(TransportError::Other(message.clone())),
        }
    }
}

/// Client using the default base URL over the given stub.
pub fn client_with(transport: &StubTransport) -> GitHubClient {
    GitHubClient::builder()
        .transport(transport.clone())
        .build()
        .expect("Failed to create client")
}
