//! Static keyword tables for the category analyzers
//!
//! These tables are configuration data, not behaviour: the analyzers only
//! consume them through substring checks, so extending a business category or
//! adding a location never touches decision logic. All entries are lowercase;
//! the analyzers lowercase their inputs before matching.

use once_cell::sync::Lazy;

/// Keyword tables consulted by the four category analyzers
pub struct KeywordTables {
    /// Businesses whose day-to-day operation is strongly weather-driven
    pub weather_high: Vec<&'static str>,
    /// Businesses where weather is a useful but secondary angle
    pub weather_medium: Vec<&'static str>,
    /// Businesses whose content should never lean on weather
    pub weather_independent: Vec<&'static str>,
    /// Locations where weather is broadly worth a low-priority mention
    pub weather_friendly_locations: Vec<&'static str>,

    /// Business keywords indicating a B2B audience
    pub b2b: Vec<&'static str>,
    /// Business keywords indicating a B2C audience
    pub b2c: Vec<&'static str>,
    /// Event tags preferred for B2B audiences
    pub b2b_event_tags: Vec<&'static str>,
    /// Event tags preferred for B2C audiences
    pub b2c_event_tags: Vec<&'static str>,
    /// Fallback event tag set when the audience is unclear
    pub default_event_tags: Vec<&'static str>,
    /// Locations with a dense enough event scene to chase events for B2B
    pub event_centric_locations: Vec<&'static str>,

    /// Businesses that live and die by trends
    pub trend_dependent: Vec<&'static str>,
    pub tech_trend_tags: Vec<&'static str>,
    pub food_trend_tags: Vec<&'static str>,
    pub fitness_trend_tags: Vec<&'static str>,
    pub default_trend_tags: Vec<&'static str>,

    /// Businesses serving a local walk-in audience, where cultural framing
    /// matters most
    pub local_business: Vec<&'static str>,
    pub kenyan_cultural_elements: Vec<&'static str>,
    pub new_york_cultural_elements: Vec<&'static str>,
    pub london_cultural_elements: Vec<&'static str>,
    pub default_cultural_elements: Vec<&'static str>,
}

pub static TABLES: Lazy<KeywordTables> = Lazy::new(|| KeywordTables {
    weather_high: vec![
        "restaurant",
        "cafe",
        "food",
        "dining",
        "fitness",
        "gym",
        "sports",
        "outdoor",
        "retail",
        "shopping",
        "fashion",
        "tourism",
        "travel",
        "hotel",
        "construction",
        "agriculture",
        "delivery",
        "transportation",
    ],
    weather_medium: vec![
        "beauty",
        "spa",
        "wellness",
        "entertainment",
        "events",
        "real estate",
        "automotive",
    ],
    weather_independent: vec![
        "financial technology software",
        "fintech",
        "banking",
        "software",
        "technology",
        "saas",
        "consulting",
        "legal",
        "accounting",
        "insurance",
        "healthcare",
        "education",
        "digital marketing",
        "design",
    ],
    weather_friendly_locations: vec!["nairobi", "kenya", "tropical"],

    b2b: vec![
        "networking",
        "consulting",
        "marketing",
        "business services",
        "financial technology",
        "fintech",
        "real estate",
        "insurance",
        "legal",
        "software",
        "technology",
    ],
    b2c: vec![
        "restaurant",
        "entertainment",
        "retail",
        "fitness",
        "beauty",
        "tourism",
    ],
    b2b_event_tags: vec![
        "business",
        "networking",
        "conference",
        "workshop",
        "professional",
    ],
    b2c_event_tags: vec![
        "community",
        "festival",
        "entertainment",
        "cultural",
        "local",
    ],
    default_event_tags: vec!["community"],
    event_centric_locations: vec!["nairobi", "new york", "london"],

    trend_dependent: vec![
        "marketing",
        "social media",
        "content",
        "entertainment",
        "fashion",
        "beauty",
        "technology",
        "startup",
    ],
    tech_trend_tags: vec!["technology", "business", "innovation", "startup"],
    food_trend_tags: vec!["food", "lifestyle", "local", "cultural"],
    fitness_trend_tags: vec!["health", "wellness", "lifestyle", "sports"],
    default_trend_tags: vec!["business", "local", "community"],

    local_business: vec![
        "restaurant",
        "retail",
        "fitness",
        "beauty",
        "real estate",
        "healthcare",
        "education",
    ],
    kenyan_cultural_elements: vec![
        "ubuntu philosophy",
        "harambee spirit",
        "swahili expressions",
        "community values",
    ],
    new_york_cultural_elements: vec![
        "diversity",
        "hustle culture",
        "innovation",
        "fast-paced lifestyle",
    ],
    london_cultural_elements: vec![
        "tradition",
        "multiculturalism",
        "business etiquette",
        "dry humor",
    ],
    default_cultural_elements: vec![
        "local customs",
        "community values",
        "regional preferences",
    ],
});

/// True when `haystack` (already lowercased) contains any table entry.
pub fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
