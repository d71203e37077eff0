//! Context filtering and selection
//!
//! Applies the per-category decisions to the raw available data. A category
//! whose decision says not to use it is omitted entirely, regardless of what
//! data is available; used categories are filtered down to items matching the
//! decision's preferred tags and truncated to the configured caps.

use super::instructions::synthesize_instructions;
use super::models::{AvailableContext, SelectedContext};
use crate::category::{CategoryDecision, CategoryDecisions, CategoryPriority};
use crate::config::SelectionCaps;
use tracing::debug;

/// Produce the bounded selection for one request.
pub fn select_context(
    decisions: &CategoryDecisions,
    available: &AvailableContext,
    caps: &SelectionCaps,
) -> SelectedContext {
    let weather = if decisions.weather.use_category {
        available.weather.clone()
    } else {
        None
    };

    let events = if decisions.events.use_category {
        let cap = if decisions.events.priority == CategoryPriority::High {
            caps.events_high
        } else {
            caps.events_default
        };
        let mut events: Vec<_> = available
            .events
            .iter()
            .filter(|e| tag_match(&decisions.events, &[e.category.as_str(), e.name.as_str()]))
            .cloned()
            .collect();
        events.truncate(cap);
        events
    } else {
        Vec::new()
    };

    let trends = if decisions.trends.use_category {
        let cap = if decisions.trends.priority == CategoryPriority::High {
            caps.trends_high
        } else {
            caps.trends_default
        };
        let mut trends: Vec<_> = available
            .trends
            .iter()
            .filter(|t| tag_match(&decisions.trends, &[t.category.as_str(), t.topic.as_str()]))
            .cloned()
            .collect();
        trends.truncate(cap);
        trends
    } else {
        Vec::new()
    };

    let cultural_nuances = if decisions.cultural.use_category {
        let mut nuances: Vec<String> = available
            .cultural
            .iter()
            .flat_map(|profile| profile.nuances.iter())
            .filter(|nuance| tag_match(&decisions.cultural, &[nuance.as_str()]))
            .cloned()
            .collect();
        nuances.truncate(caps.cultural);
        nuances
    } else {
        Vec::new()
    };

    debug!(
        "Selected context: weather={}, {} events, {} trends, {} nuances",
        weather.is_some(),
        events.len(),
        trends.len(),
        cultural_nuances.len()
    );

    SelectedContext {
        weather,
        events,
        trends,
        cultural_nuances,
        instructions: synthesize_instructions(decisions),
    }
}

/// True when any of the item's fields contains any decision tag,
/// case-insensitively.
fn tag_match(decision: &CategoryDecision, fields: &[&str]) -> bool {
    decision.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&tag))
    })
}
