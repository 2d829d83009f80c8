use powerplant_core::{
    ConfigError, CoreError, DegradeExt, ErrorExt, ErrorReporter, LlmError, PlatformError,
};

#[test]
fn test_error_codes() {
    let platform_error = CoreError::Platform(PlatformError::LoginRequired);
    assert_eq!(platform_error.error_code(), "PLATFORM");

    let llm_error = CoreError::Llm(LlmError::InvalidApiKey {
        provider: "anthropic".to_string(),
    });
    assert_eq!(llm_error.error_code(), "LLM");

    let config_error = CoreError::Config(ConfigError::MissingField {
        field: "api_key".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    assert_eq!(
        PlatformError::ChallengeRequired {
            reason: "2fa".to_string()
        }
        .error_code(),
        "IG_CHALLENGE_REQUIRED"
    );
}

#[test]
fn test_fatal_errors() {
    let challenge = CoreError::Platform(PlatformError::ChallengeRequired {
        reason: "two_factor_required".to_string(),
    });
    assert!(challenge.is_fatal());
    assert!(challenge.requires_manual_action());

    let auth = CoreError::Platform(PlatformError::AuthenticationFailed {
        reason: "bad password".to_string(),
    });
    assert!(auth.is_fatal());
    assert!(!auth.requires_manual_action());

    let transient = CoreError::Platform(PlatformError::RequestFailed {
        reason: "connection reset".to_string(),
    });
    assert!(!transient.is_fatal());

    let llm = CoreError::Llm(LlmError::ServiceUnavailable {
        provider: "anthropic".to_string(),
    });
    assert!(!llm.is_fatal());
}

#[test]
fn test_user_friendly_messages() {
    let challenge = CoreError::Platform(PlatformError::ChallengeRequired {
        reason: "checkpoint".to_string(),
    });
    assert!(challenge
        .user_friendly_message()
        .contains("Please complete manually"));

    let config_error = CoreError::Config(ConfigError::MissingField {
        field: "api_key".to_string(),
    });
    let message = config_error.user_friendly_message();
    assert!(!message.is_empty());
    assert!(message.contains("api_key"));
}

#[test]
fn test_degrade_returns_fallback_on_error() {
    let failed: Result<Vec<String>, PlatformError> = Err(PlatformError::RequestFailed {
        reason: "timeout".to_string(),
    });
    assert!(failed.or_degrade("search failed", Vec::new()).is_empty());

    let ok: Result<u64, PlatformError> = Ok(7);
    assert_eq!(ok.or_degrade("lookup failed", 0), 7);
}

#[test]
fn test_error_reporter() {
    let reporter = ErrorReporter::new();
    let error = CoreError::Platform(PlatformError::ChallengeRequired {
        reason: "checkpoint".to_string(),
    });

    // This test just ensures reporting doesn't panic
    reporter.report_error(&error);
}
