//! Relevance scoring
//!
//! Computes a weighted composite relevance score for one item against the
//! business context, with a human-readable reasoning trace recording which
//! signals contributed. Weights come from [`ScoringWeights`]; the defaults
//! preserve the production tuning.

use super::extractor::extract_text;
use super::models::{BusinessContext, ContentType, ContextItem, RelevanceScore};
use crate::config::{ScoringWeights, TierThresholds};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Keyword sets the content-type signal matches against, per content type.
const CAPTION_KEYWORDS: &[&str] = &[
    "story",
    "narrative",
    "experience",
    "journey",
    "customer",
    "testimonial",
];
const HASHTAG_KEYWORDS: &[&str] = &[
    "trending",
    "popular",
    "viral",
    "tag",
    "social",
    "community",
];
const HEADLINE_KEYWORDS: &[&str] = &[
    "breaking",
    "news",
    "announcement",
    "launch",
    "update",
    "alert",
];
const GENERAL_KEYWORDS: &[&str] = &[
    "business",
    "service",
    "product",
    "customer",
    "quality",
    "professional",
];

/// Keywords the quality heuristic treats as markers of professional copy.
const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "professional",
    "quality",
    "expert",
    "certified",
    "experienced",
    "reliable",
];

/// Recency window: anything older than 7 days contributes nothing.
const RECENCY_WINDOW_HOURS: f64 = 7.0 * 24.0;

const NO_SIGNAL_REASONING: &str = "No specific relevance indicators found";

/// Scores items for relevance against a business context
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    weights: ScoringWeights,
    thresholds: TierThresholds,
}

impl RelevanceScorer {
    pub fn new(weights: ScoringWeights, thresholds: TierThresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    /// Score one item. `now` is explicit so scoring stays a pure function;
    /// use [`score_now`](Self::score_now) when the wall clock is fine.
    pub fn score(
        &self,
        item: &ContextItem,
        context: &BusinessContext,
        now: DateTime<Utc>,
    ) -> RelevanceScore {
        let text = extract_text(item).to_lowercase();
        let mut total = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        let business = keyword_fraction(&text, context.business_type.split_whitespace());
        if business > 0.0 {
            let contribution = business * self.weights.business_type;
            total += contribution;
            reasons.push(format!("business-type match contributed {contribution:.2}"));
        }

        let location = keyword_fraction(&text, context.location.split_whitespace());
        if location > 0.0 {
            let contribution = location * self.weights.location;
            total += contribution;
            reasons.push(format!("location match contributed {contribution:.2}"));
        }

        let content = keyword_fraction(
            &text,
            content_type_keywords(context.content_type).iter().copied(),
        );
        if content > 0.0 {
            let contribution = content * self.weights.content_type;
            total += contribution;
            reasons.push(format!("content-type relevance contributed {contribution:.2}"));
        }

        let recency = recency_fraction(item, now);
        if recency > 0.0 {
            let contribution = recency * self.weights.recency;
            total += contribution;
            reasons.push(format!("recency contributed {contribution:.2}"));
        }

        let quality = quality_fraction(item, &text);
        if quality > 0.0 {
            let contribution = quality * self.weights.quality;
            total += contribution;
            reasons.push(format!("quality indicators contributed {contribution:.2}"));
        }

        let score = total.clamp(0.0, 1.0);
        let tier = self.thresholds.tier_for(score);
        let reasoning = if reasons.is_empty() {
            NO_SIGNAL_REASONING.to_string()
        } else {
            reasons.join("; ")
        };

        debug!("Scored item at {:.3} ({:?}): {}", score, tier, reasoning);

        RelevanceScore::new(score, tier, reasoning)
    }

    /// Score against the current wall clock.
    pub fn score_now(&self, item: &ContextItem, context: &BusinessContext) -> RelevanceScore {
        self.score(item, context, Utc::now())
    }
}

/// Fraction of the given keywords found as substrings of `text`.
///
/// `text` must already be lowercased; keywords are lowercased and stripped of
/// edge punctuation here ("Nairobi," matches as "nairobi"). An empty keyword
/// set yields 0.0, not a division error.
fn keyword_fraction<'a>(text: &str, keywords: impl Iterator<Item = &'a str>) -> f64 {
    let mut total = 0usize;
    let mut matched = 0usize;
    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        let keyword = keyword.trim_matches(|c: char| !c.is_alphanumeric());
        if keyword.is_empty() {
            continue;
        }
        total += 1;
        if text.contains(&keyword) {
            matched += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

fn content_type_keywords(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Caption => CAPTION_KEYWORDS,
        ContentType::Hashtags => HASHTAG_KEYWORDS,
        ContentType::Headline => HEADLINE_KEYWORDS,
        ContentType::General => GENERAL_KEYWORDS,
    }
}

/// Linear decay from 1.0 (just published) to 0.0 at the 7-day window edge.
/// Missing or unparseable timestamps contribute nothing; future timestamps
/// count as age zero.
fn recency_fraction(item: &ContextItem, now: DateTime<Utc>) -> f64 {
    let Some(timestamp) = item.primary_timestamp() else {
        return 0.0;
    };
    let hours = ((now - timestamp).num_seconds() as f64 / 3600.0).max(0.0);
    (1.0 - hours / RECENCY_WINDOW_HOURS).max(0.0)
}

/// Structural quality heuristic: reasonable text length, professional
/// vocabulary, and a record rich enough to carry real metadata. Capped at
/// 1.0 before weighting.
fn quality_fraction(item: &ContextItem, text: &str) -> f64 {
    let mut quality = 0.0;

    let length = text.chars().count();
    if (50..=500).contains(&length) {
        quality += 0.3;
    }

    quality += 0.4 * keyword_fraction(text, PROFESSIONAL_KEYWORDS.iter().copied());

    if item.field_count() >= 3 {
        quality += 0.3;
    }

    quality.min(1.0)
}
