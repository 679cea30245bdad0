//! Assessment records produced by the risk engine.
//!
//! Every record is created fresh per request from the input amounts and
//! carries no state between calls.

use serde::{Deserialize, Serialize};

use crate::constants::{LOW_RISK_MAX_PROBABILITY, MEDIUM_RISK_MAX_PROBABILITY};

// ---------------------------------------------------------------------------
// DigitHistogram
// ---------------------------------------------------------------------------

/// Leading-digit occurrence counts for digits 1–9.
///
/// # Invariants
///
/// * `counts.iter().sum() == total`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitHistogram {
    counts: [u64; 9],
    total: u64,
}

impl DigitHistogram {
    /// An empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `digit`. Returns `false` (and records nothing)
    /// when `digit` is outside `1..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamcredit_core::types::DigitHistogram;
    ///
    /// let mut h = DigitHistogram::new();
    /// assert!(h.record(1));
    /// assert!(!h.record(0));
    /// assert_eq!(h.count(1), 1);
    /// assert_eq!(h.total(), 1);
    /// ```
    pub fn record(&mut self, digit: u8) -> bool {
        if !(1..=9).contains(&digit) {
            return false;
        }
        self.counts[usize::from(digit - 1)] += 1;
        self.total += 1;
        true
    }

    /// Occurrences of `digit`; zero outside `1..=9`.
    pub fn count(&self, digit: u8) -> u64 {
        match digit {
            1..=9 => self.counts[usize::from(digit - 1)],
            _ => 0,
        }
    }

    /// Counts indexed by `digit - 1`.
    pub fn counts(&self) -> &[u64; 9] {
        &self.counts
    }

    /// Number of recorded samples.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Observed share of `digit` in `[0, 1]`. Zero for an empty histogram.
    pub fn share(&self, digit: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(digit) as f64 / self.total as f64
    }

    /// Share of leading digit 1, in percent.
    pub fn digit_one_share(&self) -> f64 {
        self.share(1) * 100.0
    }
}

// ---------------------------------------------------------------------------
// Fraud assessment
// ---------------------------------------------------------------------------

/// Per-digit comparison of observed and Benford-expected frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitDetail {
    pub digit: u8,
    pub observed_count: u64,
    pub expected_count: f64,
    pub observed_pct: f64,
    pub expected_pct: f64,
    /// `observed_pct - expected_pct`, in percentage points.
    pub deviation_pct: f64,
}

/// Audit indicators. They never feed into the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlags {
    /// Divergence exceeds the 8-DoF chi-square critical value (α = 0.05).
    pub chi_square_violation: bool,
    /// Share of leading digit 1 outside `[25%, 35%]`.
    pub digit_one_violation: bool,
}

impl RedFlags {
    pub fn any(&self) -> bool {
        self.chi_square_violation || self.digit_one_violation
    }
}

/// Qualitative band of a fraud probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpretation {
    /// `<= 10`
    Excellent,
    /// `<= 20`
    Good,
    /// `<= 40`
    Warning,
    /// `> 40`
    Danger,
}

impl Interpretation {
    /// # Examples
    ///
    /// ```
    /// use streamcredit_core::types::Interpretation;
    /// assert_eq!(Interpretation::from_probability(10), Interpretation::Excellent);
    /// assert_eq!(Interpretation::from_probability(11), Interpretation::Good);
    /// assert_eq!(Interpretation::from_probability(40), Interpretation::Warning);
    /// assert_eq!(Interpretation::from_probability(41), Interpretation::Danger);
    /// ```
    pub fn from_probability(fraud_probability: u8) -> Self {
        match fraud_probability {
            0..=10 => Self::Excellent,
            11..=20 => Self::Good,
            21..=40 => Self::Warning,
            _ => Self::Danger,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - follows Benford's Law",
            Self::Good => "Good - minor deviations",
            Self::Warning => "Warning - significant deviations",
            Self::Danger => "Danger - likely fraudulent data",
        }
    }
}

/// Coarse traffic-light status for quick checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FraudStatus {
    Safe,
    Danger,
}

/// Result of Benford analysis over a transaction set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Integer risk in `[0, 100]`. At a fixed sample count it never
    /// decreases as `divergence` grows.
    pub fraud_probability: u8,
    /// `fraud_probability > fraud_threshold`.
    pub is_fraud: bool,
    pub fraud_threshold: u8,
    pub interpretation: Interpretation,
    /// Chi-square statistic against the expected distribution.
    pub divergence: f64,
    /// `divergence / sample_count`, the ladder input. Comparable across
    /// sample sizes.
    pub divergence_rate: f64,
    /// Mean absolute deviation from the expected shares, in percentage
    /// points. Reported for audit only.
    pub deviation: f64,
    pub histogram: DigitHistogram,
    pub details: Vec<DigitDetail>,
    pub red_flags: RedFlags,
    /// Amounts that contributed a leading digit.
    pub sample_count: usize,
    /// Amounts whose floored magnitude was zero.
    pub skipped_count: usize,
}

impl FraudAssessment {
    pub fn status(&self) -> FraudStatus {
        if self.is_fraud {
            FraudStatus::Danger
        } else {
            FraudStatus::Safe
        }
    }
}

// ---------------------------------------------------------------------------
// Credit assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Review,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// # Examples
    ///
    /// ```
    /// use streamcredit_core::types::RiskLevel;
    /// assert_eq!(RiskLevel::from_fraud_probability(20), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_fraud_probability(50), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_fraud_probability(51), RiskLevel::High);
    /// ```
    pub fn from_fraud_probability(fraud_probability: u8) -> Self {
        if fraud_probability <= LOW_RISK_MAX_PROBABILITY {
            Self::Low
        } else if fraud_probability <= MEDIUM_RISK_MAX_PROBABILITY {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Credit decision for a merchant's transaction history.
///
/// # Invariants
///
/// * `credit_score <= 100`
/// * `decision == Rejected` implies `credit_limit == 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAssessment {
    pub credit_score: u8,
    pub decision: Decision,
    /// Whole currency units.
    pub credit_limit: u64,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
    pub total_revenue: f64,
    pub monthly_average_revenue: f64,
    pub average_order_value: f64,
    pub order_count: usize,
    pub fraud: FraudAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn histogram_ignores_zero_and_out_of_range() {
        let mut h = DigitHistogram::new();
        assert!(!h.record(0));
        assert!(!h.record(10));
        assert!(h.is_empty());
        assert_eq!(h.count(0), 0);
        assert_eq!(h.count(42), 0);
    }

    #[test]
    fn histogram_share() {
        let mut h = DigitHistogram::new();
        h.record(1);
        h.record(1);
        h.record(9);
        h.record(5);
        assert_eq!(h.share(1), 0.5);
        assert_eq!(h.share(9), 0.25);
        assert_eq!(h.share(2), 0.0);
    }

    #[test]
    fn empty_histogram_share_is_zero() {
        assert_eq!(DigitHistogram::new().share(1), 0.0);
        assert_eq!(DigitHistogram::new().digit_one_share(), 0.0);
    }

    #[test]
    fn digit_one_share_in_percent() {
        let mut h = DigitHistogram::new();
        h.record(1);
        h.record(2);
        h.record(3);
        h.record(4);
        assert_eq!(h.digit_one_share(), 25.0);
    }

    #[test]
    fn interpretation_ordered_by_severity() {
        assert!(Interpretation::Excellent < Interpretation::Good);
        assert!(Interpretation::Good < Interpretation::Warning);
        assert!(Interpretation::Warning < Interpretation::Danger);
        assert_eq!(Interpretation::from_probability(0), Interpretation::Excellent);
        assert_eq!(Interpretation::from_probability(100), Interpretation::Danger);
    }

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_fraud_probability(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_fraud_probability(21), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_fraud_probability(95), RiskLevel::High);
    }

    #[test]
    fn enums_serialize_screaming_case() {
        assert_eq!(serde_json::to_string(&Decision::Approved).unwrap(), "\"APPROVED\"");
        assert_eq!(serde_json::to_string(&Decision::Review).unwrap(), "\"REVIEW\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(serde_json::to_string(&FraudStatus::Safe).unwrap(), "\"SAFE\"");
        assert_eq!(
            serde_json::to_string(&Interpretation::Danger).unwrap(),
            "\"DANGER\""
        );
    }

    #[test]
    fn red_flags_any() {
        assert!(!RedFlags::default().any());
        let flags = RedFlags {
            chi_square_violation: false,
            digit_one_violation: true,
        };
        assert!(flags.any());
    }

    proptest! {
        #[test]
        fn histogram_conservation(digits in proptest::collection::vec(0u8..12, 0..200)) {
            let mut h = DigitHistogram::new();
            let mut accepted = 0u64;
            for d in &digits {
                if h.record(*d) {
                    accepted += 1;
                }
            }
            prop_assert_eq!(h.counts().iter().sum::<u64>(), h.total());
            prop_assert_eq!(h.total(), accepted);
            prop_assert!(h.total() as usize <= digits.len());
        }

        #[test]
        fn interpretation_monotonic(a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                Interpretation::from_probability(lo) <= Interpretation::from_probability(hi)
            );
            prop_assert!(
                RiskLevel::from_fraud_probability(lo) <= RiskLevel::from_fraud_probability(hi)
            );
        }
    }
}
