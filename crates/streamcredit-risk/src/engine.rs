//! Risk engine implementing the [`FraudAnalyzer`] and [`CreditScorer`] traits.
//!
//! Validates input, builds the digit histogram, maps the per-sample
//! Benford divergence to a fraud probability and, for credit requests, synthesizes the decision.
//! The engine holds only its immutable configuration and is safe to share
//! across threads.

use streamcredit_core::config::ScoringConfig;
use streamcredit_core::constants::MAX_AMOUNT;
use streamcredit_core::error::ScoringError;
use streamcredit_core::traits::{CreditScorer, FraudAnalyzer};
use streamcredit_core::types::{CreditAssessment, Decision, FraudAssessment};
use tracing::{debug, warn};

use crate::credit;
use crate::fraud;
use crate::histogram::build_histogram;

/// The production fraud and credit scoring engine.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Override the fraud threshold used for `is_fraud`. Values above 100
    /// are capped at 100.
    pub fn with_fraud_threshold(mut self, threshold: u8) -> Self {
        self.config.fraud_threshold = threshold.min(100);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Reject oversized input and amounts that are not finite or exceed
    /// [`MAX_AMOUNT`].
    fn validate_amounts(&self, amounts: &[f64]) -> Result<(), ScoringError> {
        if amounts.len() > self.config.max_sample_size {
            warn!(
                size = amounts.len(),
                max = self.config.max_sample_size,
                "risk: sample limit exceeded"
            );
            return Err(ScoringError::SampleLimitExceeded {
                size: amounts.len(),
                max: self.config.max_sample_size,
            });
        }

        if let Some((index, &value)) = amounts
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite() || a.abs() > MAX_AMOUNT)
        {
            warn!(index, %value, "risk: invalid amount");
            return Err(ScoringError::InvalidAmount { index, value });
        }

        Ok(())
    }

    /// Fraud assessment using `fraud_threshold` for this call only. Values
    /// above 100 are capped at 100. The configured threshold is unchanged.
    pub fn assess_fraud_with_threshold(
        &self,
        amounts: &[f64],
        fraud_threshold: u8,
    ) -> Result<FraudAssessment, ScoringError> {
        self.validate_amounts(amounts)?;

        let (histogram, skipped) = build_histogram(amounts);
        let valid = histogram.total() as usize;
        let required = self.config.min_sample_size.max(1);
        if valid < required {
            warn!(
                valid,
                provided = amounts.len(),
                required,
                "risk: insufficient sample"
            );
            return Err(ScoringError::InsufficientSample {
                required,
                valid,
                provided: amounts.len(),
            });
        }

        let assessment = fraud::assess(
            histogram,
            skipped,
            fraud_threshold.min(100),
            &self.config.ladder,
        )
        .ok_or(ScoringError::InsufficientSample {
            required,
            valid,
            provided: amounts.len(),
        })?;

        debug!(
            sample_count = assessment.sample_count,
            skipped = assessment.skipped_count,
            divergence = assessment.divergence,
            divergence_rate = assessment.divergence_rate,
            deviation = assessment.deviation,
            fraud_probability = assessment.fraud_probability,
            is_fraud = assessment.is_fraud,
            "risk: fraud assessed"
        );

        Ok(assessment)
    }
}

impl FraudAnalyzer for RiskEngine {
    fn assess_fraud(&self, amounts: &[f64]) -> Result<FraudAssessment, ScoringError> {
        self.assess_fraud_with_threshold(amounts, self.config.fraud_threshold)
    }
}

impl CreditScorer for RiskEngine {
    fn assess_credit(&self, amounts: &[f64]) -> Result<CreditAssessment, ScoringError> {
        let fraud = self.assess_fraud(amounts)?;
        let assessment = credit::synthesize(
            amounts,
            fraud,
            self.config.revenue_periods,
            self.config.rejection_fraud_probability,
        )?;

        if assessment.decision == Decision::Rejected {
            warn!(
                score = assessment.credit_score,
                fraud_probability = assessment.fraud.fraud_probability,
                "risk: credit rejected"
            );
        } else {
            debug!(
                score = assessment.credit_score,
                decision = ?assessment.decision,
                credit_limit = assessment.credit_limit,
                "risk: credit assessed"
            );
        }

        Ok(assessment)
    }
}
