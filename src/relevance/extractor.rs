//! Item text extraction
//!
//! Normalizes any [`ContextItem`] into a single text blob suitable for
//! substring search. Case handling is left to the scorer. Unextractable
//! input yields an empty string; nothing here can fail.

use super::models::ContextItem;
use serde_json::{Map, Value};

/// Flatten an item into one searchable string.
///
/// Strings pass through unchanged. Structured shapes concatenate their
/// pattern fields, then every other string-valued field, so unrecognized
/// keys still contribute signal.
pub fn extract_text(item: &ContextItem) -> String {
    match item {
        ContextItem::Text(text) => text.clone(),
        ContextItem::Article(a) => join_parts(
            [a.title.as_deref(), a.description.as_deref()],
            a.extra.values().filter_map(Value::as_str),
        ),
        ContextItem::Entity(e) => join_parts(
            [e.name.as_deref(), e.description.as_deref()],
            e.extra.values().filter_map(Value::as_str),
        ),
        ContextItem::Weather(w) => {
            let temperature = w.temperature.map(|t| t.to_string());
            join_parts(
                [w.condition.as_deref(), temperature.as_deref()],
                w.extra.values().filter_map(Value::as_str),
            )
        }
        ContextItem::Service(s) => join_parts(
            [s.service_name.as_deref(), s.description.as_deref()],
            s.extra.values().filter_map(Value::as_str),
        ),
        ContextItem::Record(record) => record_text(record),
    }
}

fn join_parts<'a>(
    pattern_fields: impl IntoIterator<Item = Option<&'a str>>,
    extras: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut parts: Vec<&str> = pattern_fields.into_iter().flatten().collect();
    parts.extend(extras);
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// Generic records are reflected over their string-valued top-level fields.
/// `serde_json::Map` iterates in key order, so the blob is deterministic.
fn record_text(record: &Map<String, Value>) -> String {
    let parts: Vec<&str> = record
        .values()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    parts.join(" ")
}
