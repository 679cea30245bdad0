//! Scoring configuration.
//!
//! Provides [`ScoringConfig`] with defaults matching the published scoring
//! contract. Every field is optional when deserializing; missing fields take
//! their default value.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FRAUD_THRESHOLD, DEFAULT_MAX_SAMPLE_SIZE, DEFAULT_MIN_SAMPLE_SIZE,
    DEFAULT_REJECTION_FRAUD_PROBABILITY, DEFAULT_REVENUE_PERIODS,
};
use crate::error::ConfigError;

/// One rung of the fraud ladder: divergence rates up to and including
/// `max_rate` map to `probability`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderStep {
    pub max_rate: f64,
    pub probability: u8,
}

/// Threshold ladder mapping the divergence rate (chi-square divergence per
/// histogram sample) to an integer fraud probability.
///
/// Steps are scanned from the tightest to the widest; the first step whose
/// `max_rate` is at or above the rate wins. Rates past the last step map to
/// `ceiling`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudLadder {
    pub steps: Vec<LadderStep>,
    pub ceiling: u8,
}

impl Default for FraudLadder {
    fn default() -> Self {
        Self {
            steps: vec![
                LadderStep { max_rate: 0.05, probability: 5 },
                LadderStep { max_rate: 0.15, probability: 20 },
                LadderStep { max_rate: 0.30, probability: 40 },
                LadderStep { max_rate: 0.60, probability: 60 },
                LadderStep { max_rate: 1.20, probability: 80 },
            ],
            ceiling: 95,
        }
    }
}

impl FraudLadder {
    /// Map a divergence rate to its fraud probability.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamcredit_core::config::FraudLadder;
    ///
    /// let ladder = FraudLadder::default();
    /// assert_eq!(ladder.probability_for(0.0), 5);
    /// assert_eq!(ladder.probability_for(0.05), 5);
    /// assert_eq!(ladder.probability_for(0.0501), 20);
    /// assert_eq!(ladder.probability_for(1.2), 80);
    /// assert_eq!(ladder.probability_for(1.25), 95);
    /// ```
    pub fn probability_for(&self, rate: f64) -> u8 {
        self.steps
            .iter()
            .find(|step| rate <= step.max_rate)
            .map_or(self.ceiling, |step| step.probability)
    }

    /// Check that the ladder is non-empty, strictly ascending in rate
    /// and non-decreasing in probability (so the mapping is monotonic).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.probability > 100 {
                return Err(ConfigError::ProbabilityOutOfRange(step.probability));
            }
            if !step.max_rate.is_finite() {
                return Err(ConfigError::LadderNotAscending { index });
            }
            if index > 0 {
                let prev = &self.steps[index - 1];
                if step.max_rate <= prev.max_rate {
                    return Err(ConfigError::LadderNotAscending { index });
                }
                if step.probability < prev.probability {
                    return Err(ConfigError::LadderNotMonotonic { index });
                }
            }
        }
        if self.ceiling > 100 {
            return Err(ConfigError::ProbabilityOutOfRange(self.ceiling));
        }
        let last = self.steps.len() - 1;
        if self.ceiling < self.steps[last].probability {
            return Err(ConfigError::LadderNotMonotonic { index: last + 1 });
        }
        Ok(())
    }
}

/// Configuration for the risk engine (streamcredit-risk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fraud probability above which `is_fraud` is set.
    pub fraud_threshold: u8,
    /// Fraud probability above which credit is always rejected.
    pub rejection_fraud_probability: u8,
    /// Minimum histogram samples (after dropping zero magnitudes).
    pub min_sample_size: usize,
    /// Maximum input length accepted.
    pub max_sample_size: usize,
    /// Divisor turning total revenue into a monthly average.
    pub revenue_periods: u32,
    pub ladder: FraudLadder,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fraud_threshold: DEFAULT_FRAUD_THRESHOLD,
            rejection_fraud_probability: DEFAULT_REJECTION_FRAUD_PROBABILITY,
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
            revenue_periods: DEFAULT_REVENUE_PERIODS,
            ladder: FraudLadder::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fraud_threshold > 100 {
            return Err(ConfigError::ProbabilityOutOfRange(self.fraud_threshold));
        }
        if self.rejection_fraud_probability > 100 {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.rejection_fraud_probability,
            ));
        }
        if self.revenue_periods == 0 {
            return Err(ConfigError::ZeroRevenuePeriods);
        }
        if self.max_sample_size == 0 || self.min_sample_size > self.max_sample_size {
            return Err(ConfigError::SampleBounds {
                min: self.min_sample_size,
                max: self.max_sample_size,
            });
        }
        self.ladder.validate()
    }
}
