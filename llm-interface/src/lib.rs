pub mod caption;
pub mod claude;

pub use caption::{caption_prompt, fallback_caption, generate_post, CaptionGenerator};
pub use claude::ClaudeProvider;

use powerplant_core::CoreError;

pub trait LlmProvider {
    fn name(&self) -> &str;

    /// Sends a single user-role prompt and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, CoreError>;
}
