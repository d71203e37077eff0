//! Engine facade
//!
//! Ties the scorer, partitioner, category analyzers and selector together
//! behind one validated entry point. The engine holds only immutable
//! configuration, so a single instance can serve concurrent requests without
//! coordination.

use crate::category::{analyze_all, CategoryDecisions};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::relevance::{
    partition, BusinessContext, ContextItem, FilteredContextualData, RelevanceScorer, ScoredItem,
};
use crate::selection::{select_context, AvailableContext, SelectedContext};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Everything one full pipeline run produces
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineOutput {
    pub filtered: FilteredContextualData,
    pub decisions: CategoryDecisions,
    pub selected: SelectedContext,
}

/// The contextual relevance engine
#[derive(Debug, Clone)]
pub struct ContextRelevanceEngine {
    config: EngineConfig,
    scorer: RelevanceScorer,
}

impl ContextRelevanceEngine {
    /// Create an engine, validating the configuration up front so scoring
    /// itself can never fail.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let scorer = RelevanceScorer::new(config.weights, config.thresholds);
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every item and partition the collection into relevance tiers.
    pub fn filter_items(
        &self,
        items: Vec<ContextItem>,
        context: &BusinessContext,
        now: DateTime<Utc>,
    ) -> FilteredContextualData {
        let scored: Vec<ScoredItem> = items
            .into_iter()
            .map(|item| {
                let relevance = self.scorer.score(&item, context, now);
                ScoredItem { item, relevance }
            })
            .collect();
        partition(scored)
    }

    /// Decide, per signal category, whether and how strongly to use it.
    pub fn analyze_categories(&self, context: &BusinessContext) -> CategoryDecisions {
        analyze_all(context)
    }

    /// Apply category decisions to the raw available data.
    pub fn select_context(
        &self,
        decisions: &CategoryDecisions,
        available: &AvailableContext,
    ) -> SelectedContext {
        select_context(decisions, available, &self.config.caps)
    }

    /// Run the full pipeline: score and partition the items, analyze the
    /// categories, and produce the bounded selection with its instruction
    /// block.
    pub fn run(
        &self,
        items: Vec<ContextItem>,
        context: &BusinessContext,
        available: &AvailableContext,
        now: DateTime<Utc>,
    ) -> EngineOutput {
        debug!(
            "Running relevance pipeline for {} ({}) on {}",
            context.business_type, context.location, context.platform
        );
        let filtered = self.filter_items(items, context, now);
        let decisions = self.analyze_categories(context);
        let selected = self.select_context(&decisions, available);
        EngineOutput {
            filtered,
            decisions,
            selected,
        }
    }
}

impl Default for ContextRelevanceEngine {
    fn default() -> Self {
        // The default configuration always validates.
        Self::new(EngineConfig::default()).expect("default engine configuration is valid")
    }
}
