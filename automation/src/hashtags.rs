use powerplant_core::HashtagCategory;
use std::collections::HashSet;

pub const DEFAULT_HASHTAG_COUNT: usize = 15;

/// Categories drawn for every post regardless of topic.
const ALWAYS_DRAWN: &[HashtagCategory] = &[HashtagCategory::Australian];

pub fn select_hashtags(topic: &str, count: usize) -> Vec<String> {
    select_hashtags_with(topic, count, &mut fastrand::Rng::new())
}

/// Samples tags from each category the topic triggers plus the regional set,
/// then removes duplicates keeping first occurrence and truncates to `count`.
pub fn select_hashtags_with(topic: &str, count: usize, rng: &mut fastrand::Rng) -> Vec<String> {
    let mut selected = Vec::new();

    for category in triggered_categories(topic)
        .into_iter()
        .chain(ALWAYS_DRAWN.iter().copied())
    {
        selected.extend(sample_category(category, rng));
    }

    let mut tags = unique_in_order(selected);
    tags.truncate(count);
    tags
}

pub fn triggered_categories(topic: &str) -> Vec<HashtagCategory> {
    HashtagCategory::ALL
        .into_iter()
        .filter(|category| category.triggers().iter().any(|t| t.matches(topic)))
        .collect()
}

fn sample_category(category: HashtagCategory, rng: &mut fastrand::Rng) -> Vec<String> {
    let mut tags: Vec<&str> = category.tags().to_vec();
    rng.shuffle(&mut tags);
    if let Some(cap) = category.sample_cap() {
        tags.truncate(cap);
    }
    tags.into_iter().map(str::to_string).collect()
}

pub(crate) fn unique_in_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
