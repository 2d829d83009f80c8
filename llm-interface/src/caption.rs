use crate::{ClaudeProvider, LlmProvider};
use powerplant_core::{ErrorExt, GeneratedPost, LlmSettings};
use tracing::{info, warn};

pub fn caption_prompt(topic: &str) -> String {
    format!(
        "Create an engaging Instagram post about: {topic}

Focus on PowerPlant Energy's work in sustainable fuels, SAF, bioenergy, and renewable energy in Australia.

Requirements:
- Write 2-3 short paragraphs (max 200 words)
- Include 1-2 key facts or statistics
- Professional yet accessible tone
- End with a call-to-action or thought-provoking question
- DO NOT include hashtags in the caption (they will be added separately)

Format as plain text, no markdown."
    )
}

/// Template caption used whenever the provider cannot produce one.
pub fn fallback_caption(topic: &str) -> String {
    format!(
        "Exciting developments in {topic}! PowerPlant Energy is leading the way in sustainable energy solutions for Australia. 🌱 #Innovation #Sustainability"
    )
}

pub struct CaptionGenerator<P> {
    provider: P,
}

impl<P: LlmProvider> CaptionGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Always yields a usable caption: provider failures fall back to the template.
    pub async fn generate(&self, topic: &str) -> GeneratedPost {
        let caption = match self.provider.complete(&caption_prompt(topic)).await {
            Ok(text) if !text.trim().is_empty() => {
                info!("Generated caption for topic '{}'", topic);
                text.trim().to_string()
            }
            Ok(_) => {
                warn!("{} returned an empty caption, using template", self.provider.name());
                fallback_caption(topic)
            }
            Err(e) => {
                warn!(
                    "Content generation failed ({}): {}",
                    e.error_code(),
                    e.user_friendly_message()
                );
                fallback_caption(topic)
            }
        };

        GeneratedPost {
            caption,
            topic: topic.to_string(),
        }
    }
}

/// Builds a Claude-backed generator for one request; never fails.
pub async fn generate_post(api_key: &str, settings: &LlmSettings, topic: &str) -> GeneratedPost {
    match ClaudeProvider::from_settings(api_key, settings) {
        Ok(provider) => CaptionGenerator::new(provider).generate(topic).await,
        Err(e) => {
            warn!("Could not set up LLM provider: {}", e);
            GeneratedPost {
                caption: fallback_caption(topic),
                topic: topic.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerplant_core::{CoreError, LlmError};

    struct FixedProvider(Result<&'static str, ()>);

    impl LlmProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, CoreError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::ServiceUnavailable {
                    provider: "fixed".to_string(),
                }
                .into()),
            }
        }
    }

    #[test]
    fn test_prompt_embeds_topic_and_brand() {
        let prompt = caption_prompt("Bamboo biomass");
        assert!(prompt.starts_with("Create an engaging Instagram post about: Bamboo biomass"));
        assert!(prompt.contains("PowerPlant Energy"));
        assert!(prompt.contains("DO NOT include hashtags"));
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let generator = CaptionGenerator::new(FixedProvider(Ok("\n  Fly greener.  \n")));
        let post = generator.generate("SAF").await;
        assert_eq!(post.caption, "Fly greener.");
        assert_eq!(post.topic, "SAF");
    }

    #[tokio::test]
    async fn test_provider_failure_uses_template() {
        let generator = CaptionGenerator::new(FixedProvider(Err(())));
        let post = generator.generate("ARENA funding").await;
        assert_eq!(post.caption, fallback_caption("ARENA funding"));
        assert!(post.caption.contains("ARENA funding"));
    }

    #[tokio::test]
    async fn test_blank_completion_uses_template() {
        let generator = CaptionGenerator::new(FixedProvider(Ok("   ")));
        let post = generator.generate("Biofuel").await;
        assert!(post.caption.starts_with("Exciting developments in Biofuel!"));
    }

    #[tokio::test]
    async fn test_generate_post_with_bad_endpoint_uses_template() {
        let settings = LlmSettings {
            base_url: "not a url".to_string(),
            ..LlmSettings::default()
        };
        let post = generate_post("key", &settings, "Biofuel partnerships").await;
        assert_eq!(post.caption, fallback_caption("Biofuel partnerships"));
    }
}
