//! Data models for category decisions

use serde::{Deserialize, Serialize};

/// The four signal categories the engine reasons about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Weather,
    Events,
    Trends,
    Cultural,
}

impl SignalCategory {
    /// Fixed rendering order for the instruction block.
    pub const ORDERED: [SignalCategory; 4] = [
        SignalCategory::Weather,
        SignalCategory::Events,
        SignalCategory::Trends,
        SignalCategory::Cultural,
    ];
}

/// How strongly a signal category should be used downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPriority {
    Ignore,
    Low,
    Medium,
    High,
}

/// Verdict for one signal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDecision {
    /// Whether the category should be used at all
    pub use_category: bool,
    pub priority: CategoryPriority,
    /// Human-readable audit trail for the verdict
    pub reasoning: String,
    /// Preferred sub-category tags used by the selector to filter raw data.
    /// Empty for weather, which has no sub-categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CategoryDecision {
    pub fn skip(reasoning: impl Into<String>) -> Self {
        Self {
            use_category: false,
            priority: CategoryPriority::Ignore,
            reasoning: reasoning.into(),
            tags: Vec::new(),
        }
    }

    pub fn useful(priority: CategoryPriority, reasoning: impl Into<String>) -> Self {
        Self {
            use_category: true,
            priority,
            reasoning: reasoning.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The full set of per-category verdicts for one business context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDecisions {
    pub weather: CategoryDecision,
    pub events: CategoryDecision,
    pub trends: CategoryDecision,
    pub cultural: CategoryDecision,
}

impl CategoryDecisions {
    pub fn get(&self, category: SignalCategory) -> &CategoryDecision {
        match category {
            SignalCategory::Weather => &self.weather,
            SignalCategory::Events => &self.events,
            SignalCategory::Trends => &self.trends,
            SignalCategory::Cultural => &self.cultural,
        }
    }
}
