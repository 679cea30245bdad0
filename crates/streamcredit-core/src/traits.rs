//! Trait interfaces for the StreamCredit risk engine.
//!
//! These traits define the contracts between crates:
//! - [`FraudAnalyzer`]: Benford fraud analysis (streamcredit-risk implements)
//! - [`CreditScorer`]: credit decisioning (streamcredit-risk implements)

use crate::error::ScoringError;
use crate::types::{CreditAssessment, FraudAssessment};

/// Pure fraud analysis over a set of transaction amounts.
///
/// Implementations must be deterministic: the same amounts always yield the
/// same assessment.
pub trait FraudAnalyzer: Send + Sync {
    /// Assess how far the amounts' leading digits depart from Benford's Law.
    ///
    /// Fails with [`ScoringError::InsufficientSample`] when too few amounts
    /// have a leading digit in 1–9, and with [`ScoringError::InvalidAmount`]
    /// for non-finite input.
    fn assess_fraud(&self, amounts: &[f64]) -> Result<FraudAssessment, ScoringError>;
}

/// Credit decisioning built on top of a [`FraudAnalyzer`].
pub trait CreditScorer: FraudAnalyzer {
    /// Score the amounts and derive a decision and credit limit.
    ///
    /// Runs [`assess_fraud`](FraudAnalyzer::assess_fraud) first and shares
    /// its failure modes.
    fn assess_credit(&self, amounts: &[f64]) -> Result<CreditAssessment, ScoringError>;
}
