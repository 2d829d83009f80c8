//! In-memory [`PlatformClient`] that records every call.

use crate::client::PlatformClient;
use crate::pacing::DelayRange;
use crate::types::{Media, MediaInfo, SessionSettings, UserId, UserShort};
use powerplant_core::{PlatformError, PostHandle};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    SetDelayRange(DelayRange),
    LoadSettings,
    Login { username: String, with_settings: bool },
    PhotoUpload { path: PathBuf, caption: String },
    UserIdFromUsername(String),
    UserFollow(UserId),
    HashtagMediasRecent { hashtag: String, amount: usize },
    MediaInfo(PostHandle),
}

#[derive(Debug, Default)]
pub struct MockPlatformClient {
    calls: Mutex<Vec<MockCall>>,
    settings: SessionSettings,
    login_results: VecDeque<Result<(), PlatformError>>,
    reject_settings: bool,
    upload_result: Option<Result<Media, PlatformError>>,
    users: HashMap<String, UserId>,
    follow_error: Option<PlatformError>,
    hashtag_medias: HashMap<String, Result<Vec<Media>, PlatformError>>,
    media_infos: HashMap<PostHandle, MediaInfo>,
    media_info_error: Option<PlatformError>,
}

impl MockPlatformClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues results for successive `login` calls; once drained, logins succeed.
    pub fn with_login_results(
        mut self,
        results: impl IntoIterator<Item = Result<(), PlatformError>>,
    ) -> Self {
        self.login_results = results.into_iter().collect();
        self
    }

    pub fn rejecting_settings(mut self) -> Self {
        self.reject_settings = true;
        self
    }

    pub fn with_upload_result(mut self, result: Result<Media, PlatformError>) -> Self {
        self.upload_result = Some(result);
        self
    }

    pub fn with_user(mut self, username: &str, user_id: &str) -> Self {
        self.users
            .insert(username.to_string(), UserId(user_id.to_string()));
        self
    }

    pub fn with_follow_error(mut self, error: PlatformError) -> Self {
        self.follow_error = Some(error);
        self
    }

    pub fn with_hashtag_posters(mut self, hashtag: &str, usernames: &[&str]) -> Self {
        let medias = usernames
            .iter()
            .enumerate()
            .map(|(i, username)| media(&format!("{}_{}", hashtag, i), username))
            .collect();
        self.hashtag_medias.insert(hashtag.to_string(), Ok(medias));
        self
    }

    pub fn with_hashtag_error(mut self, hashtag: &str, error: PlatformError) -> Self {
        self.hashtag_medias.insert(hashtag.to_string(), Err(error));
        self
    }

    pub fn with_media_info(mut self, info: MediaInfo) -> Self {
        self.media_infos.insert(info.pk.clone(), info);
        self
    }

    pub fn with_media_info_error(mut self, error: PlatformError) -> Self {
        self.media_info_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn login_calls(&self) -> Vec<MockCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, MockCall::Login { .. }))
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

pub fn media(pk: &str, username: &str) -> Media {
    Media {
        pk: PostHandle::new(pk),
        code: None,
        user: UserShort {
            pk: UserId(format!("id_{}", username)),
            username: username.to_string(),
            full_name: None,
        },
        caption_text: String::new(),
    }
}

impl PlatformClient for MockPlatformClient {
    fn set_delay_range(&mut self, range: DelayRange) {
        self.record(MockCall::SetDelayRange(range));
    }

    fn load_settings(&mut self, settings: SessionSettings) -> Result<(), PlatformError> {
        self.record(MockCall::LoadSettings);
        if self.reject_settings {
            return Err(PlatformError::InvalidSession {
                details: "settings rejected".to_string(),
            });
        }
        self.settings = settings;
        Ok(())
    }

    fn dump_settings(&self) -> SessionSettings {
        self.settings.clone()
    }

    async fn login(&mut self, username: &str, _password: &str) -> Result<(), PlatformError> {
        self.record(MockCall::Login {
            username: username.to_string(),
            with_settings: !self.settings.is_empty(),
        });
        let result = self.login_results.pop_front().unwrap_or(Ok(()));
        if result.is_ok() {
            self.settings
                .insert("authorization_data", serde_json::json!({ "ds_user": username }));
        }
        result
    }

    async fn photo_upload(&self, path: &Path, caption: &str) -> Result<Media, PlatformError> {
        self.record(MockCall::PhotoUpload {
            path: path.to_path_buf(),
            caption: caption.to_string(),
        });
        self.upload_result
            .clone()
            .unwrap_or_else(|| Ok(media("1000", "powerplant")))
    }

    async fn user_id_from_username(&self, username: &str) -> Result<UserId, PlatformError> {
        self.record(MockCall::UserIdFromUsername(username.to_string()));
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| PlatformError::UserNotFound {
                username: username.to_string(),
            })
    }

    async fn user_follow(&self, user_id: &UserId) -> Result<bool, PlatformError> {
        self.record(MockCall::UserFollow(user_id.clone()));
        match &self.follow_error {
            Some(error) => Err(error.clone()),
            None => Ok(true),
        }
    }

    async fn hashtag_medias_recent(
        &self,
        hashtag: &str,
        amount: usize,
    ) -> Result<Vec<Media>, PlatformError> {
        self.record(MockCall::HashtagMediasRecent {
            hashtag: hashtag.to_string(),
            amount,
        });
        match self.hashtag_medias.get(hashtag) {
            Some(Ok(medias)) => Ok(medias.iter().take(amount).cloned().collect()),
            Some(Err(error)) => Err(error.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn media_info(&self, media_pk: &PostHandle) -> Result<MediaInfo, PlatformError> {
        self.record(MockCall::MediaInfo(media_pk.clone()));
        if let Some(error) = &self.media_info_error {
            return Err(error.clone());
        }
        self.media_infos
            .get(media_pk)
            .cloned()
            .ok_or_else(|| PlatformError::MediaNotFound {
                media_pk: media_pk.to_string(),
            })
    }
}
