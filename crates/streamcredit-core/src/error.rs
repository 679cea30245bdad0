//! Error types for the StreamCredit risk engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("revenue_periods must be at least 1")] ZeroRevenuePeriods,
    #[error("invalid sample bounds: min {min}, max {max}")] SampleBounds { min: usize, max: usize },
    #[error("fraud ladder has no steps")] EmptyLadder,
    #[error("fraud ladder step {index} does not raise max_rate")]
    LadderNotAscending { index: usize },
    #[error("fraud ladder step {index} lowers the fraud probability")]
    LadderNotMonotonic { index: usize },
    #[error("probability out of range: {0} > 100")] ProbabilityOutOfRange(u8),
}

/// Errors returned by fraud and credit assessment.
///
/// None of these are retryable with the same input: the engine is
/// deterministic, so the caller must supply different data or config.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Fewer usable samples than the configured minimum.
    ///
    /// `valid` counts amounts with a leading digit in 1–9; `provided` is the
    /// raw input length.
    #[error("insufficient sample: {valid} valid of {provided} provided, need {required}")]
    InsufficientSample {
        required: usize,
        valid: usize,
        provided: usize,
    },

    /// An amount is NaN, infinite, or beyond [`MAX_AMOUNT`](crate::constants::MAX_AMOUNT).
    #[error("invalid amount at index {index}: {value}")]
    InvalidAmount { index: usize, value: f64 },

    /// Input longer than the configured maximum.
    #[error("sample too large: {size} > {max}")]
    SampleLimitExceeded { size: usize, max: usize },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
