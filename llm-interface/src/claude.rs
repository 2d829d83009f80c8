use crate::LlmProvider;
use powerplant_core::{ConfigError, CoreError, LlmError, LlmSettings};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const PROVIDER: &str = "anthropic";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClaudeProvider {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeProvider {
    pub fn from_settings(
        api_key: impl Into<String>,
        settings: &LlmSettings,
    ) -> Result<Self, CoreError> {
        url::Url::parse(&settings.base_url).map_err(|_| ConfigError::InvalidValue {
            field: "llm.base_url".to_string(),
            value: settings.base_url.clone(),
        })?;

        let http_client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    fn status_error(status: StatusCode, retry_after: Option<u64>) -> LlmError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::InvalidApiKey {
                provider: PROVIDER.to_string(),
            },
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded {
                provider: PROVIDER.to_string(),
                retry_after: retry_after.unwrap_or(60),
            },
            s if s.is_server_error() => LlmError::ServiceUnavailable {
                provider: PROVIDER.to_string(),
            },
            s => LlmError::UnexpectedStatus {
                provider: PROVIDER.to_string(),
                status_code: s.as_u16(),
            },
        }
    }
}

impl LlmProvider for ClaudeProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn complete(&self, prompt: &str) -> Result<String, CoreError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        info!("Requesting completion from {} ({})", PROVIDER, self.model);
        let response = self
            .http_client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Network error calling {}: {}", PROVIDER, e);
                if e.is_timeout() {
                    CoreError::Llm(LlmError::RequestTimeout {
                        provider: PROVIDER.to_string(),
                    })
                } else {
                    CoreError::Network(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            warn!("{} responded with status {}", PROVIDER, status);
            return Err(Self::status_error(status, retry_after).into());
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            error!("Failed to parse {} response: {}", PROVIDER, e);
            LlmError::InvalidResponseFormat {
                provider: PROVIDER.to_string(),
            }
        })?;

        let text = body
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| LlmError::InvalidResponseFormat {
                provider: PROVIDER.to_string(),
            })?;

        debug!("Received {} characters from {}", text.len(), PROVIDER);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = MessagesRequest {
            model: "claude-3-5-sonnet-20241022",
            max_tokens: 500,
            messages: vec![Message {
                role: "user",
                content: "hello",
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ClaudeProvider::status_error(StatusCode::UNAUTHORIZED, None),
            LlmError::InvalidApiKey { .. }
        ));
        assert!(matches!(
            ClaudeProvider::status_error(StatusCode::TOO_MANY_REQUESTS, Some(12)),
            LlmError::RateLimitExceeded { retry_after: 12, .. }
        ));
        assert!(matches!(
            ClaudeProvider::status_error(StatusCode::BAD_GATEWAY, None),
            LlmError::ServiceUnavailable { .. }
        ));
        assert!(matches!(
            ClaudeProvider::status_error(StatusCode::CREATED, None),
            LlmError::UnexpectedStatus {
                status_code: 201,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let settings = LlmSettings {
            base_url: "::nope::".to_string(),
            ..LlmSettings::default()
        };
        let result = ClaudeProvider::from_settings("key", &settings);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
