//! The platform automation client seen from this crate.
//!
//! Login, challenge handling, uploads and hashtag search all live behind
//! [`PlatformClient`]; implementations wrap whatever automation library talks
//! to Instagram. This workspace only passes parameters through it.

use crate::pacing::DelayRange;
use crate::types::{Media, MediaInfo, SessionSettings, UserId};
use powerplant_core::{PlatformError, PostHandle};
use std::path::Path;

pub trait PlatformClient {
    /// Randomized wait the client inserts between its own requests.
    fn set_delay_range(&mut self, range: DelayRange);

    fn load_settings(&mut self, settings: SessionSettings) -> Result<(), PlatformError>;

    fn dump_settings(&self) -> SessionSettings;

    /// Logs in, reusing any loaded settings. A checkpoint or 2FA prompt must be
    /// reported as [`PlatformError::ChallengeRequired`].
    async fn login(&mut self, username: &str, password: &str) -> Result<(), PlatformError>;

    async fn photo_upload(&self, path: &Path, caption: &str) -> Result<Media, PlatformError>;

    async fn user_id_from_username(&self, username: &str) -> Result<UserId, PlatformError>;

    async fn user_follow(&self, user_id: &UserId) -> Result<bool, PlatformError>;

    async fn hashtag_medias_recent(
        &self,
        hashtag: &str,
        amount: usize,
    ) -> Result<Vec<Media>, PlatformError>;

    async fn media_info(&self, media_pk: &PostHandle) -> Result<MediaInfo, PlatformError>;
}
