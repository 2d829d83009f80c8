use crate::error::*;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    /// Fatal errors are raised to the caller; everything else degrades to a safe default.
    fn is_fatal(&self) -> bool;
    fn requires_manual_action(&self) -> bool {
        false
    }
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Platform(e) => {
                error!("Platform error details: {:?}", e);
            }
            CoreError::Llm(e) => {
                error!("LLM error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        match self {
            CoreError::Platform(e) => e.is_fatal(),
            CoreError::Llm(e) => e.is_fatal(),
            CoreError::Config(e) => e.is_fatal(),
            _ => false,
        }
    }

    fn requires_manual_action(&self) -> bool {
        match self {
            CoreError::Platform(e) => e.requires_manual_action(),
            _ => false,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Platform(e) => e.user_friendly_message(),
            CoreError::Llm(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            _ => "An unexpected error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Platform(_) => "PLATFORM".to_string(),
            CoreError::Llm(_) => "LLM".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
        }
    }
}

impl ErrorExt for PlatformError {
    fn log_error(&self) -> &Self {
        error!("PlatformError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("PlatformError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlatformError::ChallengeRequired { .. } | PlatformError::AuthenticationFailed { .. }
        )
    }

    fn requires_manual_action(&self) -> bool {
        matches!(self, PlatformError::ChallengeRequired { .. })
    }

    fn user_friendly_message(&self) -> String {
        match self {
            PlatformError::ChallengeRequired { .. } => {
                "2FA or challenge required. Please complete manually.".to_string()
            }
            PlatformError::AuthenticationFailed { .. } => {
                "Instagram login failed. Please check your credentials.".to_string()
            }
            PlatformError::LoginRequired => {
                "Instagram session expired. Please log in again.".to_string()
            }
            PlatformError::InvalidSession { .. } => {
                "Stored session could not be restored. A fresh login is needed.".to_string()
            }
            PlatformError::UserNotFound { username } => {
                format!("Instagram user '{}' not found.", username)
            }
            PlatformError::MediaNotFound { .. } => {
                "The requested post could not be found.".to_string()
            }
            PlatformError::RateLimited { retry_after } => format!(
                "Too many actions. Please wait {} seconds before trying again.",
                retry_after
            ),
            _ => "Instagram request failed. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            PlatformError::ChallengeRequired { .. } => "IG_CHALLENGE_REQUIRED".to_string(),
            PlatformError::AuthenticationFailed { .. } => "IG_AUTH_FAILED".to_string(),
            PlatformError::LoginRequired => "IG_LOGIN_REQUIRED".to_string(),
            PlatformError::InvalidSession { .. } => "IG_INVALID_SESSION".to_string(),
            PlatformError::UserNotFound { .. } => "IG_USER_NOT_FOUND".to_string(),
            PlatformError::MediaNotFound { .. } => "IG_MEDIA_NOT_FOUND".to_string(),
            PlatformError::UploadFailed { .. } => "IG_UPLOAD_FAILED".to_string(),
            PlatformError::RateLimited { .. } => "IG_RATE_LIMITED".to_string(),
            PlatformError::RequestFailed { .. } => "IG_REQUEST_FAILED".to_string(),
        }
    }
}

impl ErrorExt for LlmError {
    fn log_error(&self) -> &Self {
        error!("LlmError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("LlmError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        false
    }

    fn user_friendly_message(&self) -> String {
        match self {
            LlmError::InvalidApiKey { provider } => format!(
                "Invalid API key for {}. Please update your credentials.",
                provider
            ),
            LlmError::RateLimitExceeded {
                provider,
                retry_after,
            } => format!(
                "Rate limit exceeded for {}. Please wait {} seconds.",
                provider, retry_after
            ),
            LlmError::ServiceUnavailable { provider } => format!(
                "{} service is temporarily unavailable. Please try again later.",
                provider
            ),
            _ => "AI service error occurred. A template caption was used instead.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            LlmError::InvalidApiKey { .. } => "LLM_INVALID_API_KEY".to_string(),
            LlmError::RateLimitExceeded { .. } => "LLM_RATE_LIMIT".to_string(),
            LlmError::ServiceUnavailable { .. } => "LLM_SERVICE_UNAVAILABLE".to_string(),
            LlmError::RequestTimeout { .. } => "LLM_TIMEOUT".to_string(),
            LlmError::InvalidResponseFormat { .. } => "LLM_INVALID_RESPONSE".to_string(),
            LlmError::UnexpectedStatus { .. } => "LLM_UNEXPECTED_STATUS".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        true
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file '{}' not found.", path)
            }
            ConfigError::MissingField { field } => {
                format!("Required configuration field '{}' is missing.", field)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::Parse(_) => {
                "Configuration file could not be parsed. Please check the TOML syntax.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

/// Logs a fatal error with its code and the message shown to the operator.
#[derive(Debug, Default)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report_error(&self, error: &CoreError) {
        error.log_error();
        info!("Error code: {}", error.error_code());
        info!("User message: {}", error.user_friendly_message());
        if error.requires_manual_action() {
            info!("Manual intervention required before retrying");
        }
    }
}

/// Converts a failed external call into a safe default after logging it.
pub trait DegradeExt<T> {
    fn or_degrade(self, context: &str, fallback: T) -> T;
}

impl<T, E> DegradeExt<T> for Result<T, E>
where
    E: ErrorExt + std::fmt::Display,
{
    fn or_degrade(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!("{}: {} ({})", context, e, e.error_code());
                fallback
            }
        }
    }
}
