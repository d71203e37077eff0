//! Data models for raw category data and the final selection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather observation from the upstream weather lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub condition: String,
    pub temperature_c: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_kph: Option<f64>,
}

impl WeatherReading {
    pub fn new(condition: impl Into<String>, temperature_c: f64) -> Self {
        Self {
            condition: condition.into(),
            temperature_c,
            humidity: None,
            wind_kph: None,
        }
    }
}

/// A local event from the upstream events fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalEvent {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl LocalEvent {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: None,
            venue: None,
            date: None,
        }
    }
}

/// A trending topic from the upstream trends fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendTopic {
    pub topic: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl TrendTopic {
    pub fn new(topic: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            category: category.into(),
            volume: None,
        }
    }
}

/// Cultural notes for the business's location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub nuances: Vec<String>,
}

impl CulturalProfile {
    pub fn new(nuances: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            nuances: nuances.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything the upstream fetchers delivered for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReading>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<LocalEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trends: Vec<TrendTopic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural: Option<CulturalProfile>,
}

/// The bounded, filtered selection handed to the prompt builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReading>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<LocalEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trends: Vec<TrendTopic>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cultural_nuances: Vec<String>,
    /// Natural-language rendering of the category decisions, embedded
    /// verbatim into the downstream prompt
    pub instructions: String,
}
