//! Contextual relevance engine for marketing signal data
//!
//! Given heterogeneous signal items (trending topics, local events, weather
//! readings, cultural notes) and the business context they should serve, this
//! crate scores each item for relevance, partitions items into priority tiers,
//! decides per signal category whether and how strongly that category should be
//! used, filters the raw category data down to a bounded selection, and renders
//! the category decisions into an instruction block for a downstream prompt
//! builder.
//!
//! The whole pipeline is pure computation: no I/O, no persistence, no shared
//! mutable state. Identical inputs always produce identical outputs.

pub mod category;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod relevance;
pub mod selection;

pub use category::{CategoryDecision, CategoryDecisions, CategoryPriority, SignalCategory};
pub use config::{EngineConfig, ScoringWeights, SelectionCaps, TierThresholds};
pub use error::{RelevanceError, Result};
pub use pipeline::{ContextRelevanceEngine, EngineOutput};
pub use relevance::{
    BusinessContext, ContentType, ContextItem, ContextSummary, FilteredContextualData,
    RelevanceScore, RelevanceTier, ScoredItem,
};
pub use selection::{
    AvailableContext, CulturalProfile, LocalEvent, SelectedContext, TrendTopic, WeatherReading,
};
