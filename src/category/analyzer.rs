//! Rule-based category analyzers
//!
//! Each analyzer is a pure function of the business context. The keyword
//! tables it consults live in [`keywords`](super::keywords); the precedence
//! chains here are the behaviour.

use super::keywords::{matches_any, TABLES};
use super::models::{CategoryDecision, CategoryDecisions, CategoryPriority};
use crate::relevance::BusinessContext;
use tracing::debug;

/// Run all four analyzers for one business context.
pub fn analyze_all(context: &BusinessContext) -> CategoryDecisions {
    let decisions = CategoryDecisions {
        weather: analyze_weather(context),
        events: analyze_events(context),
        trends: analyze_trends(context),
        cultural: analyze_cultural(context),
    };
    debug!(
        "Category decisions for {}: weather={:?}, events={:?}, trends={:?}, cultural={:?}",
        context.business_type,
        decisions.weather.priority,
        decisions.events.priority,
        decisions.trends.priority,
        decisions.cultural.priority
    );
    decisions
}

/// Decide whether weather conditions should colour the content.
///
/// Precedence: weather-driven business > weather-adjacent business >
/// weather-independent business > weather-friendly location > skip.
pub fn analyze_weather(context: &BusinessContext) -> CategoryDecision {
    let business = context.business_type.to_lowercase();
    let location = context.location.to_lowercase();

    if matches_any(&business, &TABLES.weather_high) {
        return CategoryDecision::useful(
            CategoryPriority::High,
            "business operations are directly affected by weather",
        );
    }
    if matches_any(&business, &TABLES.weather_medium) {
        return CategoryDecision::useful(
            CategoryPriority::Medium,
            "weather is a useful secondary angle for this business",
        );
    }
    if matches_any(&business, &TABLES.weather_independent) {
        return CategoryDecision::skip("business is weather-independent");
    }
    if matches_any(&location, &TABLES.weather_friendly_locations) {
        return CategoryDecision::useful(
            CategoryPriority::Low,
            "location lends itself to occasional weather mentions",
        );
    }
    CategoryDecision::skip("no weather relevance for this business or location")
}

/// Decide whether local events are worth referencing, and which kinds.
pub fn analyze_events(context: &BusinessContext) -> CategoryDecision {
    let business = context.business_type.to_lowercase();
    let location = context.location.to_lowercase();

    let is_b2b = matches_any(&business, &TABLES.b2b);
    let is_b2c = matches_any(&business, &TABLES.b2c);
    let event_centric = matches_any(&location, &TABLES.event_centric_locations);

    // A business can serve both audiences; preferred tags accumulate.
    let mut tags: Vec<&'static str> = Vec::new();
    if is_b2b {
        tags.extend(&TABLES.b2b_event_tags);
    }
    if is_b2c {
        tags.extend(&TABLES.b2c_event_tags);
    }

    if is_b2b && event_centric {
        return CategoryDecision::useful(
            CategoryPriority::High,
            "B2B audience in an event-centric location",
        )
        .with_tags(tags);
    }
    if is_b2c {
        return CategoryDecision::useful(
            CategoryPriority::Medium,
            "consumer audience responds to local happenings",
        )
        .with_tags(tags);
    }
    if event_centric {
        CategoryDecision::useful(
            CategoryPriority::Low,
            "event-centric location, unclear audience",
        )
        .with_tags(TABLES.default_event_tags.clone())
    } else {
        CategoryDecision::skip("no event affinity for this business or location")
            .with_tags(TABLES.default_event_tags.iter().copied())
    }
}

/// Trends are considered broadly useful; only the strength and the preferred
/// sub-categories vary by business type.
pub fn analyze_trends(context: &BusinessContext) -> CategoryDecision {
    let business = context.business_type.to_lowercase();

    let tags: &[&str] = if business.contains("technology") || business.contains("fintech") {
        &TABLES.tech_trend_tags
    } else if business.contains("restaurant") || business.contains("food") {
        &TABLES.food_trend_tags
    } else if business.contains("fitness") {
        &TABLES.fitness_trend_tags
    } else {
        &TABLES.default_trend_tags
    };

    let (priority, reasoning) = if matches_any(&business, &TABLES.trend_dependent) {
        (
            CategoryPriority::High,
            "business depends on staying current with trends",
        )
    } else {
        (
            CategoryPriority::Medium,
            "trends add general topical relevance",
        )
    };

    CategoryDecision::useful(priority, reasoning).with_tags(tags.iter().copied())
}

/// Cultural context is always used; local businesses and non-US locations get
/// it at high priority.
pub fn analyze_cultural(context: &BusinessContext) -> CategoryDecision {
    let business = context.business_type.to_lowercase();
    let location = context.location.to_lowercase();

    let elements: &[&str] = if location.contains("nairobi") || location.contains("kenya") {
        &TABLES.kenyan_cultural_elements
    } else if location.contains("new york") {
        &TABLES.new_york_cultural_elements
    } else if location.contains("london") {
        &TABLES.london_cultural_elements
    } else {
        &TABLES.default_cultural_elements
    };

    let local_business = matches_any(&business, &TABLES.local_business);
    let (priority, reasoning) = if local_business || !location.contains("united states") {
        (
            CategoryPriority::High,
            "local audience expects culturally grounded content",
        )
    } else {
        (
            CategoryPriority::Medium,
            "cultural framing adds polish but is not essential",
        )
    };

    CategoryDecision::useful(priority, reasoning).with_tags(elements.iter().copied())
}
