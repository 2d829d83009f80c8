pub mod facade;
pub mod hashtags;
pub mod imagery;

pub use facade::InstagramAutomation;
pub use hashtags::{select_hashtags, select_hashtags_with, DEFAULT_HASHTAG_COUNT};
pub use imagery::image_prompt;
