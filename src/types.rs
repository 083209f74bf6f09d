use serde::{Deserialize, Serialize};

// GitHub API response structures

/// A GitHub account as returned by `GET /users/{username}`.
///
/// Only the fields this crate needs are kept; everything else in the
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl User {
    pub fn new(login: impl Into<String>, avatar_url: Option<String>, name: Option<String>) -> Self {
        Self {
            login: login.into(),
            avatar_url,
            name,
        }
    }

    /// The account name used in URLs.
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Display name, if the user set one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Repository {
    pub fn new(name: impl Into<String>, language: Option<String>) -> Self {
        Self {
            name: name.into(),
            language,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary language; `None` when GitHub reports none.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
