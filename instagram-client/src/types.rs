use powerplant_core::{PlatformError, PostHandle};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShort {
    pub pk: UserId,
    pub username: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub pk: PostHandle,
    pub code: Option<String>,
    pub user: UserShort,
    pub caption_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub pk: PostHandle,
    pub like_count: u64,
    pub comment_count: u64,
    /// Only reported for video media.
    pub view_count: Option<u64>,
}

/// Opaque client settings that let a later process resume a login.
///
/// The blob form is plain JSON. Nothing here encrypts it; callers that store
/// the blob somewhere untrusted must encrypt it themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSettings(pub Map<String, Value>);

impl SessionSettings {
    pub fn from_blob(blob: &str) -> Result<Self, PlatformError> {
        let value: Value =
            serde_json::from_str(blob).map_err(|e| PlatformError::InvalidSession {
                details: e.to_string(),
            })?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(PlatformError::InvalidSession {
                details: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
