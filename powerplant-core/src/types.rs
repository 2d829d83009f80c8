use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub username: String,
    pub password: String,
    /// Serialized client settings from a previous login, if the caller kept one.
    pub session_blob: Option<String>,
}

impl SessionCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            session_blob: None,
        }
    }

    pub fn with_session_blob(mut self, blob: impl Into<String>) -> Self {
        self.session_blob = Some(blob.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub caption: String,
    pub topic: String,
}

/// Platform-assigned identifier of a published item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostHandle(pub String);

impl PostHandle {
    pub fn new(pk: impl Into<String>) -> Self {
        Self(pk.into())
    }
}

impl fmt::Display for PostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostAnalytics {
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
}
