use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Instagram platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[error("Challenge required: {reason}")]
    ChallengeRequired { reason: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Login required")]
    LoginRequired,

    #[error("Invalid session settings: {details}")]
    InvalidSession { details: String },

    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("Media not found: {media_pk}")]
    MediaNotFound { media_pk: String },

    #[error("Upload failed: {reason}")]
    UploadFailed { reason: String },

    #[error("Rate limited by platform. Retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("Platform request failed: {reason}")]
    RequestFailed { reason: String },
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API key invalid or missing for {provider}")]
    InvalidApiKey { provider: String },

    #[error("Rate limit exceeded for {provider}. Retry after {retry_after} seconds")]
    RateLimitExceeded { provider: String, retry_after: u64 },

    #[error("Provider service unavailable: {provider}")]
    ServiceUnavailable { provider: String },

    #[error("Request timeout for {provider}")]
    RequestTimeout { provider: String },

    #[error("Invalid response format from {provider}")]
    InvalidResponseFormat { provider: String },

    #[error("Unexpected status {status_code} from {provider}")]
    UnexpectedStatus { provider: String, status_code: u16 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
