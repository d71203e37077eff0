//! Data models for item relevance scoring

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Timestamp fields a signal item may carry
///
/// The upstream feeds disagree on which field holds the publication time, so
/// all known names are kept and probed in a fixed order: pubDate, createdAt,
/// updatedAt, date, timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// The first timestamp present, in the fixed probe order.
    pub fn primary(&self) -> Option<DateTime<Utc>> {
        self.pub_date
            .or(self.created_at)
            .or(self.updated_at)
            .or(self.date)
            .or(self.timestamp)
    }

    /// Number of timestamp fields present
    pub fn count(&self) -> usize {
        [
            self.pub_date,
            self.created_at,
            self.updated_at,
            self.date,
            self.timestamp,
        ]
        .iter()
        .filter(|t| t.is_some())
        .count()
    }

    /// Extract and parse the known timestamp fields of a raw record.
    ///
    /// Unparseable values are dropped; the item simply earns no recency
    /// contribution later.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            pub_date: record.get("pubDate").and_then(parse_timestamp),
            created_at: record.get("createdAt").and_then(parse_timestamp),
            updated_at: record.get("updatedAt").and_then(parse_timestamp),
            date: record.get("date").and_then(parse_timestamp),
            timestamp: record.get("timestamp").and_then(parse_timestamp),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Lenient timestamp parsing: RFC 3339, then RFC 2822 (RSS pubDate), then a
/// numeric value treated as Unix milliseconds.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_rfc2822(s))
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| DateTime::<Utc>::from_timestamp_millis(ms)),
        _ => None,
    }
}

/// An article-shaped item (title + description)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Timestamps::is_empty")]
    pub timestamps: Timestamps,
}

/// A named-entity item (name + description), e.g. an event or venue record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Timestamps::is_empty")]
    pub timestamps: Timestamps,
}

/// A weather-reading item (condition + temperature)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Timestamps::is_empty")]
    pub timestamps: Timestamps,
}

/// A service-shaped item (serviceName + description)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    #[serde(rename = "serviceName", skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Timestamps::is_empty")]
    pub timestamps: Timestamps,
}

/// One candidate signal item to be scored
///
/// The upstream feeds deliver loosely-shaped JSON; the known shapes get their
/// own variant, everything else falls back to `Record`, which is reflected
/// over its string-valued fields at extraction time. No shape ever fails to
/// construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContextItem {
    Text(String),
    Article(ArticleItem),
    Entity(EntityItem),
    Weather(WeatherItem),
    Service(ServiceItem),
    Record(Map<String, Value>),
}

impl ContextItem {
    /// Classify a raw JSON value into the best-fitting item shape.
    ///
    /// Probe order mirrors the feed conventions: title, name,
    /// condition/temperature, serviceName; anything else stays a generic
    /// record. Non-object, non-string values degrade to empty text rather
    /// than failing.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => ContextItem::Text(s),
            Value::Object(record) => Self::from_record(record),
            _ => ContextItem::Text(String::new()),
        }
    }

    fn from_record(record: Map<String, Value>) -> Self {
        let timestamps = Timestamps::from_record(&record);

        if record.contains_key("title") {
            ContextItem::Article(ArticleItem {
                title: string_field(&record, "title"),
                description: string_field(&record, "description"),
                extra: extra_fields(&record, &["title", "description"]),
                timestamps,
            })
        } else if record.contains_key("name") {
            ContextItem::Entity(EntityItem {
                name: string_field(&record, "name"),
                description: string_field(&record, "description"),
                extra: extra_fields(&record, &["name", "description"]),
                timestamps,
            })
        } else if record.contains_key("condition") || record.contains_key("temperature") {
            ContextItem::Weather(WeatherItem {
                condition: string_field(&record, "condition"),
                temperature: record.get("temperature").and_then(Value::as_f64),
                extra: extra_fields(&record, &["condition", "temperature"]),
                timestamps,
            })
        } else if record.contains_key("serviceName") {
            ContextItem::Service(ServiceItem {
                service_name: string_field(&record, "serviceName"),
                description: string_field(&record, "description"),
                extra: extra_fields(&record, &["serviceName", "description"]),
                timestamps,
            })
        } else {
            ContextItem::Record(record)
        }
    }

    /// Timestamps carried by the item, if any.
    pub fn timestamps(&self) -> Option<&Timestamps> {
        match self {
            ContextItem::Text(_) => None,
            ContextItem::Article(a) => Some(&a.timestamps),
            ContextItem::Entity(e) => Some(&e.timestamps),
            ContextItem::Weather(w) => Some(&w.timestamps),
            ContextItem::Service(s) => Some(&s.timestamps),
            ContextItem::Record(_) => None,
        }
    }

    /// The timestamp used for recency scoring: first present field in the
    /// fixed probe order.
    pub fn primary_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ContextItem::Record(record) => Timestamps::from_record(record).primary(),
            other => other.timestamps().and_then(Timestamps::primary),
        }
    }

    /// Number of top-level fields the original record carried.
    ///
    /// Plain text has no fields; structured shapes count their populated
    /// pattern fields plus every retained extra field (string or not) plus
    /// parsed timestamp fields.
    pub fn field_count(&self) -> usize {
        fn populated(fields: &[bool]) -> usize {
            fields.iter().filter(|p| **p).count()
        }

        match self {
            ContextItem::Text(_) => 0,
            ContextItem::Article(a) => {
                populated(&[a.title.is_some(), a.description.is_some()])
                    + a.extra.len()
                    + a.timestamps.count()
            }
            ContextItem::Entity(e) => {
                populated(&[e.name.is_some(), e.description.is_some()])
                    + e.extra.len()
                    + e.timestamps.count()
            }
            ContextItem::Weather(w) => {
                populated(&[w.condition.is_some(), w.temperature.is_some()])
                    + w.extra.len()
                    + w.timestamps.count()
            }
            ContextItem::Service(s) => {
                populated(&[s.service_name.is_some(), s.description.is_some()])
                    + s.extra.len()
                    + s.timestamps.count()
            }
            ContextItem::Record(record) => record.len(),
        }
    }
}

impl From<&str> for ContextItem {
    fn from(text: &str) -> Self {
        ContextItem::Text(text.to_string())
    }
}

impl From<String> for ContextItem {
    fn from(text: String) -> Self {
        ContextItem::Text(text)
    }
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

const TIMESTAMP_KEYS: [&str; 5] = ["pubDate", "createdAt", "updatedAt", "date", "timestamp"];

/// Fields not consumed by the shape pattern, kept whole so unrecognized keys
/// still contribute searchable text and count toward record richness. A
/// timestamp key is consumed only when its value actually parsed; an
/// unparseable `pubDate` string stays here and reaches the text blob.
fn extra_fields(record: &Map<String, Value>, consumed: &[&str]) -> BTreeMap<String, Value> {
    record
        .iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .filter(|(key, value)| {
            !(TIMESTAMP_KEYS.contains(&key.as_str()) && parse_timestamp(value).is_some())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The kind of content being generated for the business
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Caption,
    Hashtags,
    Headline,
    #[default]
    General,
}

impl ContentType {
    /// Parse a free-text content type; unknown values fall back to `General`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "caption" => ContentType::Caption,
            "hashtags" => ContentType::Hashtags,
            "headline" => ContentType::Headline,
            _ => ContentType::General,
        }
    }
}

/// The business a piece of content is being generated for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub business_type: String,
    pub location: String,
    pub platform: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Weekday>,
}

impl BusinessContext {
    pub fn new(
        business_type: impl Into<String>,
        location: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            location: location.into(),
            platform: platform.into(),
            content_type: ContentType::General,
            day_of_week: None,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_day_of_week(mut self, day: Weekday) -> Self {
        self.day_of_week = Some(day);
        self
    }

    /// Whether the target day is a Saturday or Sunday; false when unknown.
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week, Some(Weekday::Sat) | Some(Weekday::Sun))
    }
}

/// Relevance tier of a scored item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    Irrelevant,
    Low,
    Medium,
    High,
}

/// Composite relevance verdict for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceScore {
    /// Weighted composite score in [0, 1]
    pub score: f64,
    /// Tier derived from the score via the configured thresholds
    pub tier: RelevanceTier,
    /// Human-readable audit trail of which signals contributed
    pub reasoning: String,
}

impl RelevanceScore {
    pub fn new(score: f64, tier: RelevanceTier, reasoning: String) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            tier,
            reasoning,
        }
    }
}

/// An item paired with its relevance verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: ContextItem,
    pub relevance: RelevanceScore,
}

/// Aggregate statistics over a partitioned collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub irrelevant_count: usize,
    pub total: usize,
    /// Arithmetic mean of all scores; 0.0 for an empty collection, never NaN
    pub mean_score: f64,
}

/// The four-tier partition of a scored item collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredContextualData {
    pub high: Vec<ScoredItem>,
    pub medium: Vec<ScoredItem>,
    pub low: Vec<ScoredItem>,
    pub irrelevant: Vec<ScoredItem>,
    pub summary: ContextSummary,
}
