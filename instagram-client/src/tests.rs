#[cfg(test)]
mod tests {
    use crate::mock::{MockCall, MockPlatformClient};
    use crate::pacing::{DelayRange, Pacer, PacingConfig};
    use crate::{PlatformClient, SessionSettings};
    use powerplant_core::{PacingSettings, PlatformError, PostHandle};
    use std::time::Duration;

    #[test]
    fn test_session_settings_roundtrip_through_blob() {
        let blob = r#"{"uuids":{"phone_id":"abc"},"authorization_data":{"ds_user_id":"42"}}"#;
        let settings = SessionSettings::from_blob(blob).unwrap();
        assert!(settings.get("uuids").is_some());

        let reparsed = SessionSettings::from_blob(&settings.to_blob().unwrap()).unwrap();
        assert_eq!(reparsed, settings);
    }

    #[test]
    fn test_corrupt_session_blob_is_invalid_session() {
        let result = SessionSettings::from_blob("{not json");
        assert!(matches!(result, Err(PlatformError::InvalidSession { .. })));

        let result = SessionSettings::from_blob("[1, 2, 3]");
        if let Err(PlatformError::InvalidSession { details }) = result {
            assert!(details.contains("an array"));
        } else {
            panic!("Expected InvalidSession error");
        }
    }

    #[test]
    fn test_delay_range_normalizes_bounds() {
        let range = DelayRange::from_secs([15, 10]);
        assert_eq!(range.min(), Duration::from_secs(10));
        assert_eq!(range.max(), Duration::from_secs(15));
    }

    #[test]
    fn test_delay_range_samples_stay_in_bounds() {
        let range = DelayRange::from_secs([10, 15]);
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_pacing_config_from_settings() {
        let config = PacingConfig::from(&PacingSettings::default());
        assert_eq!(config.request_delay, DelayRange::from_secs([2, 5]));
        assert_eq!(config.follow_delay, DelayRange::from_secs([10, 15]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacer_waits_within_follow_range() {
        let pacer = Pacer::with_rng(PacingConfig::instagram(), fastrand::Rng::with_seed(3));

        let start = tokio::time::Instant::now();
        let waited = pacer.after_follow().await;
        let elapsed = start.elapsed();

        assert!(DelayRange::from_secs([10, 15]).contains(waited));
        assert!(elapsed >= waited);

        let status = pacer.status();
        assert_eq!(status.waits, 1);
        assert_eq!(status.last_wait, Some(waited));
    }

    #[test]
    fn test_immediate_pacing_does_not_wait() {
        let pacer = Pacer::new(PacingConfig::immediate());
        let waited = tokio_test::block_on(pacer.after_follow());
        assert_eq!(waited, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mut client = MockPlatformClient::new().with_user("qantas", "77");
        client.set_delay_range(DelayRange::from_secs([2, 5]));
        client.login("powerplant", "secret").await.unwrap();
        let user_id = client.user_id_from_username("qantas").await.unwrap();
        client.user_follow(&user_id).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 4);
        assert!(matches!(calls[0], MockCall::SetDelayRange(_)));
        assert_eq!(
            calls[1],
            MockCall::Login {
                username: "powerplant".to_string(),
                with_settings: false
            }
        );
        assert_eq!(calls[3], MockCall::UserFollow(user_id));
    }

    #[tokio::test]
    async fn test_mock_login_populates_settings() {
        let mut client = MockPlatformClient::new();
        assert!(client.dump_settings().is_empty());
        client.login("powerplant", "secret").await.unwrap();
        assert!(client.dump_settings().get("authorization_data").is_some());
    }

    #[tokio::test]
    async fn test_mock_missing_media_is_not_found() {
        let client = MockPlatformClient::new();
        let result = client.media_info(&PostHandle::new("404")).await;
        assert!(matches!(result, Err(PlatformError::MediaNotFound { .. })));
    }
}
