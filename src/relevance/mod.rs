//! Item-level relevance: text extraction, scoring and tier partitioning

pub mod extractor;
pub mod models;
pub mod partitioner;
pub mod scorer;

pub use extractor::extract_text;
pub use models::{
    BusinessContext, ContentType, ContextItem, ContextSummary, FilteredContextualData,
    RelevanceScore, RelevanceTier, ScoredItem, Timestamps,
};
pub use partitioner::partition;
pub use scorer::RelevanceScorer;
