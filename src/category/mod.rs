//! Per-category relevance decisions
//!
//! Four independent rule-based analyzers decide, from the business context
//! alone, whether each signal category (weather, events, trends, cultural)
//! should be used at all and at what priority.

pub mod analyzer;
pub mod keywords;
pub mod models;

pub use analyzer::{
    analyze_all, analyze_cultural, analyze_events, analyze_trends, analyze_weather,
};
pub use models::{CategoryDecision, CategoryDecisions, CategoryPriority, SignalCategory};
