//! Static content tables: brand topics, hashtag sets and image prompts.
//!
//! Everything here is immutable for the life of the process.

use serde::Serialize;

pub const CONTENT_TOPICS: &[&str] = &[
    "Sustainable Aviation Fuel (SAF) breakthroughs and industry adoption",
    "Bioenergy policy updates in Australia and government initiatives",
    "Renewable energy technology innovations and electrification advances",
    "Low-carbon liquid fuels development and circular economy",
    "Bamboo biomass conversion to SAF and graphite technologies",
    "ARENA funding announcements for clean energy projects",
    "Australian government renewable energy targets and commitments",
    "Biofuel industry partnerships and commercial deployments",
    "Energy transition success stories in aviation sector",
    "Next-generation battery materials from sustainable sources",
];

/// Keyword that pulls a hashtag category into a post. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Must appear as a whole word, so `saf` does not fire on "safety".
    Word(&'static str),
    /// May appear anywhere, so `renewable` also fires on "renewables".
    Phrase(&'static str),
}

impl Trigger {
    pub fn matches(self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        match self {
            Trigger::Word(word) => topic
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == word),
            Trigger::Phrase(phrase) => topic.contains(phrase),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HashtagCategory {
    Saf,
    Bioenergy,
    Renewables,
    PowerPlant,
    Australian,
}

impl HashtagCategory {
    pub const ALL: [HashtagCategory; 5] = [
        HashtagCategory::Saf,
        HashtagCategory::Bioenergy,
        HashtagCategory::Renewables,
        HashtagCategory::PowerPlant,
        HashtagCategory::Australian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashtagCategory::Saf => "SAF",
            HashtagCategory::Bioenergy => "Bioenergy",
            HashtagCategory::Renewables => "Renewables",
            HashtagCategory::PowerPlant => "PowerPlant",
            HashtagCategory::Australian => "Australian",
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            HashtagCategory::Saf => &[
                "#SustainableAviationFuel",
                "#SAF",
                "#CleanAviation",
                "#GreenAviation",
                "#AviationInnovation",
                "#SustainableFuture",
                "#EcoFriendly",
                "#NetZero",
            ],
            HashtagCategory::Bioenergy => &[
                "#biofuel",
                "#biodiesel",
                "#bioenergy",
                "#biomass",
                "#renewablefuels",
                "#circulareconomy",
                "#wastetonenergy",
                "#biorefinery",
            ],
            HashtagCategory::Renewables => &[
                "#renewableenergy",
                "#cleanenergy",
                "#greenenergy",
                "#sustainability",
                "#climateaction",
                "#energytransition",
                "#decarbonization",
                "#cleantech",
            ],
            HashtagCategory::PowerPlant => &[
                "#powerplant",
                "#powergeneration",
                "#energyinfrastructure",
                "#electricity",
                "#energyinnovation",
                "#greentechnology",
                "#sustainabletech",
            ],
            HashtagCategory::Australian => &[
                "#AustralianEnergy",
                "#AusRenewables",
                "#CleanEnergyAustralia",
                "#ARENA",
                "#AustraliaNetZero",
            ],
        }
    }

    /// Categories with no triggers are only drawn explicitly.
    pub fn triggers(self) -> &'static [Trigger] {
        match self {
            HashtagCategory::Saf => &[Trigger::Word("saf"), Trigger::Phrase("aviation")],
            HashtagCategory::Bioenergy => {
                &[Trigger::Phrase("bioenergy"), Trigger::Phrase("biomass")]
            }
            HashtagCategory::Renewables => {
                &[Trigger::Phrase("renewable"), Trigger::Phrase("clean energy")]
            }
            HashtagCategory::PowerPlant | HashtagCategory::Australian => &[],
        }
    }

    /// Upper bound on tags sampled from this category for one post.
    /// `PowerPlant` has no trigger and is never drawn, so it has no cap.
    pub fn sample_cap(self) -> Option<usize> {
        match self {
            HashtagCategory::Saf => Some(5),
            HashtagCategory::Bioenergy | HashtagCategory::Renewables => Some(4),
            HashtagCategory::Australian => Some(2),
            HashtagCategory::PowerPlant => None,
        }
    }
}

/// Ordered category to image prompt table; the first substring hit wins.
pub const IMAGE_PROMPTS: &[(&str, &str)] = &[
    (
        "SAF",
        "Modern sustainable aviation fuel facility with aircraft in background, clean energy concept, professional photography style",
    ),
    (
        "Bioenergy",
        "Bamboo biomass processing plant, renewable energy infrastructure, industrial photography",
    ),
    (
        "Renewables",
        "Solar panels and wind turbines in Australian landscape, clean energy future, bright and optimistic",
    ),
    (
        "PowerPlant",
        "Modern power generation facility with green technology, sustainable infrastructure",
    ),
    (
        "Technology",
        "High-tech laboratory with renewable energy research, innovation and science",
    ),
];

pub const DEFAULT_IMAGE_PROMPT: &str =
    "Sustainable energy infrastructure in Australia, modern and professional photography";

/// Industry accounts always considered when building a follow list.
pub const SEED_ACCOUNTS: &[&str] = &[
    "cleanenergycouncil",
    "arenagovau",
    "qantas",
    "boeing",
    "airbus",
    "iata",
    "bioenergy_australia",
    "renewableenergyworld",
    "greentechmedia",
    "cleantech",
    "sustainableaviation",
    "neste_corporation",
    "worldbioenergy",
];

pub const DISCOVERY_HASHTAGS: &[&str] = &["SAF", "bioenergy", "renewableenergy", "cleantech"];

pub fn default_topic() -> &'static str {
    CONTENT_TOPICS[0]
}

pub fn random_topic() -> &'static str {
    CONTENT_TOPICS[fastrand::usize(..CONTENT_TOPICS.len())]
}
