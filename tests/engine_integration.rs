//! End-to-end tests for the relevance pipeline
//!
//! These exercise the full engine surface the way the prompt builder consumes
//! it: loose JSON items in, filtered buckets, category decisions, bounded
//! selection and instruction block out.

use chrono::{Duration, Utc};
use context_relevance::{
    AvailableContext, BusinessContext, CategoryPriority, ContextItem, ContextRelevanceEngine,
    CulturalProfile, LocalEvent, RelevanceTier, TrendTopic, WeatherReading,
};
use serde_json::json;

/// Surface the engine's debug events when a test run needs them
/// (RUST_LOG=debug). Safe to call from every test; only the first
/// initialization wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn nairobi_restaurant() -> BusinessContext {
    BusinessContext::new("Restaurant", "Nairobi, Kenya", "instagram")
}

fn sample_available() -> AvailableContext {
    AvailableContext {
        weather: Some(WeatherReading::new("sunny", 26.0)),
        events: vec![
            LocalEvent::new("Nairobi street food festival", "festival"),
            LocalEvent::new("Community farmers market", "community"),
            LocalEvent::new("Quarterly earnings call", "finance"),
        ],
        trends: vec![
            TrendTopic::new("nyama choma week", "food"),
            TrendTopic::new("local produce boxes", "local"),
            TrendTopic::new("quantum computing", "science"),
        ],
        cultural: Some(CulturalProfile::new([
            "Harambee spirit shapes community fundraising",
            "Swahili expressions resonate in captions",
            "Community values guide buying decisions",
        ])),
    }
}

#[test]
fn test_full_pipeline_for_nairobi_restaurant() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let now = Utc::now();

    let items = vec![
        ContextItem::from_value(json!({
            "title": "New taco truck opens in Nairobi",
            "description": "Local restaurant scene buzzing",
            "pubDate": now.to_rfc3339(),
        })),
        ContextItem::from_value(json!({
            "title": "Unrelated tech conference",
            "description": "software meetup",
            "pubDate": (now - Duration::days(8)).to_rfc3339(),
        })),
    ];

    let output = engine.run(items, &nairobi_restaurant(), &sample_available(), now);

    // Item 1 carries business, location and recency signal; item 2 none.
    let fresh = output
        .filtered
        .high
        .iter()
        .chain(&output.filtered.medium)
        .find(|s| {
            matches!(&s.item, ContextItem::Article(a) if a.title.as_deref() == Some("New taco truck opens in Nairobi"))
        })
        .expect("fresh local item should land in an upper bucket");
    let stale_buckets: Vec<_> = output
        .filtered
        .low
        .iter()
        .chain(&output.filtered.irrelevant)
        .collect();
    assert_eq!(stale_buckets.len(), 1);
    assert!(fresh.relevance.score > stale_buckets[0].relevance.score);
    assert_eq!(output.filtered.summary.total, 2);

    // Category decisions for a Nairobi restaurant.
    assert!(output.decisions.weather.use_category);
    assert_eq!(output.decisions.weather.priority, CategoryPriority::High);
    assert!(output.decisions.events.use_category);
    assert_eq!(output.decisions.events.priority, CategoryPriority::Medium);

    // Weather reading passed through verbatim.
    assert_eq!(
        output.selected.weather.as_ref().map(|w| w.condition.as_str()),
        Some("sunny")
    );

    // Instruction block: 4 lines, fixed order, high-priority weather phrasing.
    let lines: Vec<&str> = output.selected.instructions.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Weather:"));
    assert!(lines[1].starts_with("Events:"));
    assert!(lines[2].starts_with("Trends:"));
    assert!(lines[3].starts_with("Cultural:"));
    assert!(lines[0].contains("prominently"));
}

#[test]
fn test_pipeline_is_idempotent() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let now = Utc::now();
    let items = vec![
        ContextItem::from("Nairobi restaurant week returns"),
        ContextItem::from_value(json!({
            "name": "Food festival",
            "description": "community event",
            "createdAt": (now - Duration::hours(10)).to_rfc3339(),
        })),
    ];

    let first = engine.run(
        items.clone(),
        &nairobi_restaurant(),
        &sample_available(),
        now,
    );
    let second = engine.run(items, &nairobi_restaurant(), &sample_available(), now);

    assert_eq!(first, second);
    // Byte-identical once serialized, too.
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_scores_stay_bounded_across_malformed_items() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let now = Utc::now();
    let items: Vec<ContextItem> = [
        json!(""),
        json!(null),
        json!(42),
        json!([1, 2, 3]),
        json!({}),
        json!({ "pubDate": "not a date" }),
        json!({ "condition": "sunny" }),
        json!({ "unknownKey": "restaurant nairobi", "other": 7 }),
    ]
    .into_iter()
    .map(ContextItem::from_value)
    .collect();

    let filtered = engine.filter_items(items, &nairobi_restaurant(), now);
    assert_eq!(filtered.summary.total, 8);
    let all = filtered
        .high
        .iter()
        .chain(&filtered.medium)
        .chain(&filtered.low)
        .chain(&filtered.irrelevant);
    for scored in all {
        assert!((0.0..=1.0).contains(&scored.relevance.score));
        assert!(!scored.relevance.reasoning.is_empty());
    }
    assert!(!filtered.summary.mean_score.is_nan());
}

#[test]
fn test_empty_input_produces_zeroed_summary() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let filtered = engine.filter_items(Vec::new(), &nairobi_restaurant(), Utc::now());
    assert_eq!(filtered.summary.total, 0);
    assert_eq!(filtered.summary.high_count, 0);
    assert_eq!(filtered.summary.medium_count, 0);
    assert_eq!(filtered.summary.low_count, 0);
    assert_eq!(filtered.summary.irrelevant_count, 0);
    assert_eq!(filtered.summary.mean_score, 0.0);
}

#[test]
fn test_partition_is_consistent_with_thresholds() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let now = Utc::now();
    let items: Vec<ContextItem> = (0..12)
        .map(|i| {
            ContextItem::from_value(json!({
                "title": format!("restaurant nairobi kenya item {i}"),
                "description": "professional quality service for customers",
                "pubDate": (now - Duration::hours(i * 20)).to_rfc3339(),
            }))
        })
        .collect();

    let filtered = engine.filter_items(items, &nairobi_restaurant(), now);
    let thresholds = engine.config().thresholds;

    for scored in &filtered.high {
        assert!(scored.relevance.score >= thresholds.high);
        assert_eq!(scored.relevance.tier, RelevanceTier::High);
    }
    for scored in &filtered.medium {
        assert!(scored.relevance.score >= thresholds.medium);
        assert!(scored.relevance.score < thresholds.high);
    }
    for scored in &filtered.low {
        assert!(scored.relevance.score >= thresholds.low);
        assert!(scored.relevance.score < thresholds.medium);
    }
    for scored in &filtered.irrelevant {
        assert!(scored.relevance.score < thresholds.low);
    }
    let bucketed = filtered.high.len()
        + filtered.medium.len()
        + filtered.low.len()
        + filtered.irrelevant.len();
    assert_eq!(bucketed, filtered.summary.total);
}

#[test]
fn test_selector_never_exceeds_caps_or_returns_unmatched_events() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();

    // High-priority events: B2B business in an event-centric location.
    let b2b = BusinessContext::new("Software consulting", "Nairobi", "linkedin");
    let decisions = engine.analyze_categories(&b2b);
    assert_eq!(decisions.events.priority, CategoryPriority::High);

    let available = AvailableContext {
        events: (0..10)
            .map(|i| LocalEvent::new(format!("Networking breakfast {i}"), "networking"))
            .chain(std::iter::once(LocalEvent::new("Llama parade", "animals")))
            .collect(),
        ..Default::default()
    };
    let selected = engine.select_context(&decisions, &available);
    assert!(selected.events.len() <= 3);
    for event in &selected.events {
        assert!(decisions.events.tags.iter().any(|tag| {
            event.category.to_lowercase().contains(&tag.to_lowercase())
                || event.name.to_lowercase().contains(&tag.to_lowercase())
        }));
    }

    // Medium priority caps events at one.
    let b2c = BusinessContext::new("Restaurant", "Kisumu", "instagram");
    let decisions = engine.analyze_categories(&b2c);
    let available = AvailableContext {
        events: (0..5)
            .map(|i| LocalEvent::new(format!("Community fair {i}"), "community"))
            .collect(),
        ..Default::default()
    };
    let selected = engine.select_context(&decisions, &available);
    assert_eq!(selected.events.len(), 1);
}

#[test]
fn test_disabled_category_is_omitted_despite_available_data() {
    init_tracing();
    let engine = ContextRelevanceEngine::default();
    let fintech = BusinessContext::new("Fintech startup", "Berlin", "linkedin");
    let decisions = engine.analyze_categories(&fintech);
    assert!(!decisions.weather.use_category);

    let available = AvailableContext {
        weather: Some(WeatherReading::new("hailstorm", 2.0)),
        ..Default::default()
    };
    let selected = engine.select_context(&decisions, &available);
    assert!(selected.weather.is_none());
    assert!(selected.instructions.lines().next().unwrap().contains("skip"));
}
