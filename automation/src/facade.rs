//! One authenticated Instagram session plus the content helpers around it.
//!
//! Each method performs a single external call. Login problems are raised;
//! everything after login degrades to a safe default and is only logged.

use crate::hashtags::{self, unique_in_order};
use crate::imagery;
use instagram_client::pacing::Pacer;
use instagram_client::{PacingConfig, PlatformClient, SessionSettings};
use powerplant_core::{
    AppConfig, CoreError, DegradeExt, GeneratedPost, LlmSettings, PlatformError,
    PostAnalytics, PostHandle, SessionCredentials, DISCOVERY_HASHTAGS, SEED_ACCOUNTS,
};
use std::path::Path;
use tracing::{debug, error, info, warn};

const DISCOVERY_LIMIT: usize = 10;

pub struct InstagramAutomation<C> {
    client: C,
    username: String,
    password: String,
    pacer: Pacer,
    llm: LlmSettings,
}

impl<C: PlatformClient> InstagramAutomation<C> {
    /// Authenticates, preferring the stored session blob when one is supplied.
    pub async fn connect(
        client: C,
        credentials: SessionCredentials,
        pacing: PacingConfig,
    ) -> Result<Self, CoreError> {
        Self::connect_with_pacer(client, credentials, Pacer::new(pacing)).await
    }

    pub async fn connect_with_pacer(
        mut client: C,
        credentials: SessionCredentials,
        pacer: Pacer,
    ) -> Result<Self, CoreError> {
        client.set_delay_range(pacer.config().request_delay);

        let SessionCredentials {
            username,
            password,
            session_blob,
        } = credentials;

        let mut automation = Self {
            client,
            username,
            password,
            pacer,
            llm: LlmSettings::default(),
        };

        match session_blob {
            Some(blob) => {
                if let Err(e) = automation.restore_session(&blob).await {
                    warn!("Failed to load session, logging in fresh: {}", e);
                    automation.login().await?;
                }
            }
            None => automation.login().await?,
        }

        Ok(automation)
    }

    pub async fn from_config(client: C, config: &AppConfig) -> Result<Self, CoreError> {
        let credentials = config.credentials()?;
        let automation = Self::connect(client, credentials, (&config.pacing).into()).await?;
        Ok(automation.with_llm_settings(config.llm.clone()))
    }

    pub fn with_llm_settings(mut self, settings: LlmSettings) -> Self {
        self.llm = settings;
        self
    }

    async fn restore_session(&mut self, blob: &str) -> Result<(), PlatformError> {
        let settings = SessionSettings::from_blob(blob)?;
        self.client.load_settings(settings)?;
        self.client.login(&self.username, &self.password).await?;
        info!("Resumed session for {}", self.username);
        Ok(())
    }

    /// Fresh credential login. A challenge is reported as-is so the caller can
    /// stop and ask for manual verification; anything else is an auth failure.
    pub async fn login(&mut self) -> Result<(), CoreError> {
        match self.client.login(&self.username, &self.password).await {
            Ok(()) => {
                info!("Successfully logged in as {}", self.username);
                Ok(())
            }
            Err(e @ PlatformError::ChallengeRequired { .. }) => {
                error!("Challenge required for {}: {}", self.username, e);
                Err(e.into())
            }
            Err(e @ PlatformError::AuthenticationFailed { .. }) => {
                error!("Login failed: {}", e);
                Err(e.into())
            }
            Err(e) => {
                error!("Login failed: {}", e);
                Err(PlatformError::AuthenticationFailed {
                    reason: e.to_string(),
                }
                .into())
            }
        }
    }

    /// Current client settings as a JSON blob. The blob is not encrypted.
    pub fn session_data(&self) -> Result<String, CoreError> {
        Ok(self.client.dump_settings().to_blob()?)
    }

    pub async fn generate_content(&self, topic: &str, api_key: &str) -> GeneratedPost {
        llm_interface::generate_post(api_key, &self.llm, topic).await
    }

    pub fn generate_image_prompt(&self, topic: &str, caption: &str) -> &'static str {
        imagery::image_prompt(topic, caption)
    }

    pub fn select_hashtags(&self, topic: &str, count: usize) -> Vec<String> {
        hashtags::select_hashtags(topic, count)
    }

    pub async fn post_image(
        &self,
        image_path: &Path,
        caption: &str,
        hashtags: &[String],
    ) -> Option<PostHandle> {
        let full_caption = compose_caption(caption, hashtags);

        self.client
            .photo_upload(image_path, &full_caption)
            .await
            .map(|media| {
                info!("Successfully posted: {}", media.pk);
                Some(media.pk)
            })
            .or_degrade(
                &format!("Failed to post image {}", image_path.display()),
                None,
            )
    }

    /// Follows `username`, then pauses for the follow delay before returning.
    pub async fn follow_user(&self, username: &str) -> bool {
        let context = format!("Failed to follow {}", username);

        let Some(user_id) = self
            .client
            .user_id_from_username(username)
            .await
            .map(Some)
            .or_degrade(&context, None)
        else {
            return false;
        };

        let Some(confirmed) = self
            .client
            .user_follow(&user_id)
            .await
            .map(Some)
            .or_degrade(&context, None)
        else {
            return false;
        };

        if !confirmed {
            debug!("Follow of {} was not confirmed by the platform", username);
        }
        info!("Followed: {}", username);
        self.pacer.after_follow().await;
        true
    }

    /// Usernames behind recent posts under `hashtag`, first-seen order, at most `limit`.
    pub async fn search_users_by_hashtag(&self, hashtag: &str, limit: usize) -> Vec<String> {
        let tag = hashtag.trim_start_matches('#');

        let medias = self
            .client
            .hashtag_medias_recent(tag, limit)
            .await
            .or_degrade(&format!("Failed to search hashtag {}", tag), Vec::new());

        let mut usernames = unique_in_order(medias.into_iter().map(|m| m.user.username));
        usernames.truncate(limit);
        usernames
    }

    /// Seed industry accounts followed by posters found under the discovery hashtags.
    pub async fn trending_accounts(&self) -> Vec<String> {
        let mut accounts: Vec<String> = SEED_ACCOUNTS.iter().map(|a| a.to_string()).collect();

        for hashtag in DISCOVERY_HASHTAGS {
            accounts.extend(self.search_users_by_hashtag(hashtag, DISCOVERY_LIMIT).await);
        }

        unique_in_order(accounts)
    }

    pub async fn post_analytics(&self, media_pk: &PostHandle) -> Option<PostAnalytics> {
        self.client
            .media_info(media_pk)
            .await
            .map(|info| {
                Some(PostAnalytics {
                    likes: info.like_count,
                    comments: info.comment_count,
                    views: info.view_count.unwrap_or(0),
                })
            })
            .or_degrade(&format!("Failed to get analytics for {}", media_pk), None)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }
}

pub fn compose_caption(caption: &str, hashtags: &[String]) -> String {
    format!("{}\n\n{}", caption, hashtags.join(" "))
}
