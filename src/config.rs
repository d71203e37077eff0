//! Engine configuration
//!
//! The scoring weights, tier thresholds and selection caps were tuned
//! empirically in production rather than derived from first principles, so
//! they live here as configuration with behaviour-compatible defaults instead
//! of being hard-baked into the scoring logic.

use crate::error::{RelevanceError, Result};
use crate::relevance::RelevanceTier;
use serde::{Deserialize, Serialize};

/// Weights for the five relevance signals
///
/// Each weight scales a signal fraction in [0, 1]; the weighted sum is the
/// composite score, clamped to [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub business_type: f64,
    pub location: f64,
    pub content_type: f64,
    pub recency: f64,
    pub quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            business_type: 0.40,
            location: 0.25,
            content_type: 0.20,
            recency: 0.10,
            quality: 0.05,
        }
    }
}

impl ScoringWeights {
    /// Validate that every weight is a sane fraction and the sum cannot push
    /// a composite score past 1.0 before clamping.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("business_type", self.business_type),
            ("location", self.location),
            ("content_type", self.content_type),
            ("recency", self.recency),
            ("quality", self.quality),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RelevanceError::WeightOutOfRange { name, value });
            }
        }

        let sum = self.business_type
            + self.location
            + self.content_type
            + self.recency
            + self.quality;
        if sum > 1.0 + 1e-9 {
            return Err(RelevanceError::WeightSumExceeded { sum });
        }

        Ok(())
    }
}

/// Score thresholds that split items into the four relevance tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 0.7,
            medium: 0.4,
            low: 0.2,
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> Result<()> {
        let ordered = self.low > 0.0
            && self.low < self.medium
            && self.medium < self.high
            && self.high <= 1.0;
        if !ordered || !self.low.is_finite() || !self.medium.is_finite() || !self.high.is_finite()
        {
            return Err(RelevanceError::ThresholdsNotOrdered {
                high: self.high,
                medium: self.medium,
                low: self.low,
            });
        }
        Ok(())
    }

    /// Map a composite score onto its relevance tier.
    pub fn tier_for(&self, score: f64) -> RelevanceTier {
        if score >= self.high {
            RelevanceTier::High
        } else if score >= self.medium {
            RelevanceTier::Medium
        } else if score >= self.low {
            RelevanceTier::Low
        } else {
            RelevanceTier::Irrelevant
        }
    }
}

/// Upper bounds on how many items the selector keeps per category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionCaps {
    /// Events kept when the events decision is high priority
    pub events_high: usize,
    /// Events kept at any other priority
    pub events_default: usize,
    /// Trend topics kept when the trends decision is high priority
    pub trends_high: usize,
    /// Trend topics kept at any other priority
    pub trends_default: usize,
    /// Cultural nuance strings kept
    pub cultural: usize,
}

impl Default for SelectionCaps {
    fn default() -> Self {
        Self {
            events_high: 3,
            events_default: 1,
            trends_high: 5,
            trends_default: 3,
            cultural: 3,
        }
    }
}

impl SelectionCaps {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("events_high", self.events_high),
            ("events_default", self.events_default),
            ("trends_high", self.trends_high),
            ("trends_default", self.trends_default),
            ("cultural", self.cultural),
        ] {
            if value == 0 {
                return Err(RelevanceError::CapIsZero { name });
            }
        }
        Ok(())
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub thresholds: TierThresholds,
    #[serde(default)]
    pub caps: SelectionCaps,
}

impl EngineConfig {
    /// Validate that the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        self.caps.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_weights_match_production_tuning() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.business_type, 0.40);
        assert_eq!(weights.location, 0.25);
        assert_eq!(weights.content_type, 0.20);
        assert_eq!(weights.recency, 0.10);
        assert_eq!(weights.quality, 0.05);
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        let weights = ScoringWeights {
            business_type: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(RelevanceError::WeightOutOfRange { name: "business_type", .. })
        ));
    }

    #[test]
    fn test_weight_sum_exceeding_one_rejected() {
        let weights = ScoringWeights {
            business_type: 0.9,
            location: 0.9,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(RelevanceError::WeightSumExceeded { .. })
        ));
    }

    #[test]
    fn test_tier_mapping_at_boundaries() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.tier_for(0.7), RelevanceTier::High);
        assert_eq!(thresholds.tier_for(0.699), RelevanceTier::Medium);
        assert_eq!(thresholds.tier_for(0.4), RelevanceTier::Medium);
        assert_eq!(thresholds.tier_for(0.2), RelevanceTier::Low);
        assert_eq!(thresholds.tier_for(0.199), RelevanceTier::Irrelevant);
        assert_eq!(thresholds.tier_for(0.0), RelevanceTier::Irrelevant);
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let thresholds = TierThresholds {
            high: 0.3,
            medium: 0.4,
            low: 0.2,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let caps = SelectionCaps {
            events_high: 0,
            ..Default::default()
        };
        assert!(matches!(
            caps.validate(),
            Err(RelevanceError::CapIsZero { name: "events_high" })
        ));
    }
}
