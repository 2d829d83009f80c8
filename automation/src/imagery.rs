use powerplant_core::{DEFAULT_IMAGE_PROMPT, IMAGE_PROMPTS};

/// Picks an image prompt by case-insensitive category match against the topic.
///
/// The caption is accepted so richer matching can use it later; today only the
/// topic decides.
pub fn image_prompt(topic: &str, _caption: &str) -> &'static str {
    let topic = topic.to_lowercase();
    IMAGE_PROMPTS
        .iter()
        .find(|(category, _)| topic.contains(&category.to_lowercase()))
        .map(|(_, prompt)| *prompt)
        .unwrap_or(DEFAULT_IMAGE_PROMPT)
}
