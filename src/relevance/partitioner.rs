//! Tier partitioning
//!
//! Routes scored items into the four relevance buckets and computes the
//! aggregate summary. The buckets partition the input exactly: every item
//! lands in one bucket, determined by the tier already on its score.

use super::models::{ContextSummary, FilteredContextualData, RelevanceTier, ScoredItem};
use tracing::debug;

/// Partition scored items into the four tier buckets.
///
/// An empty input produces zero counts and a mean of 0.0, never NaN.
pub fn partition(items: Vec<ScoredItem>) -> FilteredContextualData {
    let total = items.len();
    let score_sum: f64 = items.iter().map(|s| s.relevance.score).sum();

    let mut data = FilteredContextualData::default();
    for scored in items {
        match scored.relevance.tier {
            RelevanceTier::High => data.high.push(scored),
            RelevanceTier::Medium => data.medium.push(scored),
            RelevanceTier::Low => data.low.push(scored),
            RelevanceTier::Irrelevant => data.irrelevant.push(scored),
        }
    }

    data.summary = ContextSummary {
        high_count: data.high.len(),
        medium_count: data.medium.len(),
        low_count: data.low.len(),
        irrelevant_count: data.irrelevant.len(),
        total,
        mean_score: if total == 0 {
            0.0
        } else {
            score_sum / total as f64
        },
    };

    debug!(
        "Partitioned {} items: {} high, {} medium, {} low, {} irrelevant (mean {:.3})",
        total,
        data.summary.high_count,
        data.summary.medium_count,
        data.summary.low_count,
        data.summary.irrelevant_count,
        data.summary.mean_score
    );

    data
}
