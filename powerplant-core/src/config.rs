use crate::error::ConfigError;
use crate::types::SessionCredentials;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_LLM_MODEL: &str = "claude-3-5-sonnet-20241022";

pub const ENV_USERNAME: &str = "INSTAGRAM_USERNAME";
pub const ENV_PASSWORD: &str = "INSTAGRAM_PASSWORD";
pub const ENV_SESSION: &str = "INSTAGRAM_SESSION";
pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub instagram_username: Option<String>,
    pub instagram_password: Option<String>,
    pub session_blob: Option<String>,
    pub anthropic_api_key: String,
    pub llm: LlmSettings,
    pub pacing: PacingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    /// Randomized delay the platform client waits between requests, in seconds.
    pub request_delay_secs: [u64; 2],
    /// Randomized delay after each follow, in seconds.
    pub follow_delay_secs: [u64; 2],
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            request_delay_secs: [2, 5],
            follow_delay_secs: [10, 15],
        }
    }
}

impl AppConfig {
    /// Reads the optional TOML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_with(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup(ENV_USERNAME) {
            self.instagram_username = Some(username);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.instagram_password = Some(password);
        }
        if let Some(blob) = lookup(ENV_SESSION).filter(|b| !b.is_empty()) {
            self.session_blob = Some(blob);
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.anthropic_api_key = api_key;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.llm.base_url = base_url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.llm.base_url).map_err(|_| ConfigError::InvalidValue {
            field: "llm.base_url".to_string(),
            value: self.llm.base_url.clone(),
        })?;

        if self.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens".to_string(),
                value: "0".to_string(),
            });
        }

        for (field, [min, max]) in [
            ("pacing.request_delay_secs", self.pacing.request_delay_secs),
            ("pacing.follow_delay_secs", self.pacing.follow_delay_secs),
        ] {
            if min > max {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("[{}, {}]", min, max),
                });
            }
        }

        Ok(())
    }

    pub fn credentials(&self) -> Result<SessionCredentials, ConfigError> {
        let username = self
            .instagram_username
            .clone()
            .ok_or_else(|| ConfigError::MissingField {
                field: "instagram_username".to_string(),
            })?;
        let password = self
            .instagram_password
            .clone()
            .ok_or_else(|| ConfigError::MissingField {
                field: "instagram_password".to_string(),
            })?;

        Ok(SessionCredentials {
            username,
            password,
            session_blob: self.session_blob.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.llm.base_url, DEFAULT_LLM_ENDPOINT);
        assert_eq!(config.llm.max_tokens, 500);
        assert_eq!(config.llm.timeout(), Duration::from_secs(30));
        assert_eq!(config.pacing.request_delay_secs, [2, 5]);
        assert_eq!(config.pacing.follow_delay_secs, [10, 15]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            instagram_username = "powerplant"

            [llm]
            max_tokens = 300
            "#,
        )
        .unwrap();

        assert_eq!(config.instagram_username.as_deref(), Some("powerplant"));
        assert_eq!(config.llm.max_tokens, 300);
        assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
        assert_eq!(config.pacing.follow_delay_secs, [10, 15]);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig::from_toml_str(r#"anthropic_api_key = "from-file""#).unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, "from-env"),
            (ENV_USERNAME, "env_user"),
            (ENV_SESSION, ""),
        ]
        .into_iter()
        .collect();

        config.apply_env_with(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.anthropic_api_key, "from-env");
        assert_eq!(config.instagram_username.as_deref(), Some("env_user"));
        assert!(config.session_blob.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.llm.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "llm.base_url"
        ));

        let mut config = AppConfig::default();
        config.pacing.follow_delay_secs = [15, 10];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_require_username_and_password() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingField { field }) if field == "instagram_username"
        ));

        config.instagram_username = Some("user".to_string());
        config.instagram_password = Some("pass".to_string());
        config.session_blob = Some("{}".to_string());
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.session_blob.as_deref(), Some("{}"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pacing]\nfollow_delay_secs = [1, 2]").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.pacing.follow_delay_secs, [1, 2]);

        let missing = AppConfig::from_file(Path::new("/nonexistent/powerplant.toml"));
        assert!(matches!(missing, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = AppConfig::from_toml_str("llm = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
