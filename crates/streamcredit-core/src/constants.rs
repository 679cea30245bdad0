//! Engine constants. Monetary values are in whole currency units (e.g. USD)
//! with cent precision carried in the fractional part.

/// Expected first-digit proportions under Benford's Law, indexed by `digit - 1`.
///
/// Rounded to three decimals so the table sums to exactly 1.000.
///
/// # Examples
///
/// ```
/// use streamcredit_core::constants::BENFORD_EXPECTED;
/// let sum: f64 = BENFORD_EXPECTED.iter().sum();
/// assert!((sum - 1.0).abs() < 1e-9);
/// ```
pub const BENFORD_EXPECTED: [f64; 9] = [
    0.301, // 1
    0.176, // 2
    0.125, // 3
    0.097, // 4
    0.079, // 5
    0.067, // 6
    0.058, // 7
    0.051, // 8
    0.046, // 9
];

/// Exact theoretical Benford probability `log10(1 + 1/d)` for a leading digit.
///
/// Returns `None` outside `1..=9`.
///
/// # Examples
///
/// ```
/// use streamcredit_core::constants::benford_probability;
/// let p1 = benford_probability(1).unwrap();
/// assert!((p1 - 0.30103).abs() < 1e-5);
/// assert_eq!(benford_probability(0), None);
/// ```
pub fn benford_probability(digit: u8) -> Option<f64> {
    if !(1..=9).contains(&digit) {
        return None;
    }
    Some((1.0 + 1.0 / f64::from(digit)).log10())
}

/// Chi-square critical value for 8 degrees of freedom at α = 0.05.
pub const CHI_SQUARE_CRITICAL_8DOF: f64 = 15.507;

/// Lower bound (percent) of the acceptable share of leading digit 1.
pub const DIGIT_ONE_MIN_SHARE_PCT: f64 = 25.0;

/// Upper bound (percent) of the acceptable share of leading digit 1.
pub const DIGIT_ONE_MAX_SHARE_PCT: f64 = 35.0;

/// Largest accepted amount magnitude: `2^53` cents, the point past which an
/// `f64` can no longer resolve whole cents.
pub const MAX_AMOUNT: f64 = 90_071_992_547_409.91;

// ---------------------------------------------------------------------------
// Configuration defaults
// ---------------------------------------------------------------------------

/// Fraud probability above which an assessment is flagged `is_fraud`.
pub const DEFAULT_FRAUD_THRESHOLD: u8 = 20;

/// Fraud probability above which credit is rejected outright.
pub const DEFAULT_REJECTION_FRAUD_PROBABILITY: u8 = 40;

/// Minimum number of histogram samples required to score.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 10;

/// Maximum accepted input length.
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 1_000_000;

/// Periods the total revenue is spread over to get the monthly average.
pub const DEFAULT_REVENUE_PERIODS: u32 = 12;

// ---------------------------------------------------------------------------
// Credit scoring
// ---------------------------------------------------------------------------

/// Starting credit score before adjustments.
pub const BASE_CREDIT_SCORE: i32 = 50;

/// Upper clamp of the credit score.
pub const MAX_CREDIT_SCORE: i32 = 100;

/// Score at or above which the enhanced limit factor applies.
pub const EXCELLENT_SCORE: u8 = 70;

/// Score at or above which credit is approved.
pub const APPROVAL_SCORE: u8 = 50;

/// Score at or above which the application goes to manual review.
pub const REVIEW_SCORE: u8 = 30;

/// Share of monthly revenue granted to an approved borrower.
pub const APPROVED_LIMIT_FACTOR: f64 = 0.30;

/// Multiplier on [`APPROVED_LIMIT_FACTOR`] for excellent scores.
pub const EXCELLENT_LIMIT_MULTIPLIER: f64 = 1.5;

/// Share of monthly revenue granted while under review.
pub const REVIEW_LIMIT_FACTOR: f64 = 0.15;

/// Fraud probability at or below which risk is LOW.
pub const LOW_RISK_MAX_PROBABILITY: u8 = 20;

/// Fraud probability at or below which risk is MEDIUM.
pub const MEDIUM_RISK_MAX_PROBABILITY: u8 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_table_sums_to_one() {
        let sum: f64 = BENFORD_EXPECTED.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
    }

    #[test]
    fn expected_table_strictly_positive_and_decreasing() {
        for (i, &p) in BENFORD_EXPECTED.iter().enumerate() {
            assert!(p > 0.0, "digit {} has non-positive share", i + 1);
            if i > 0 {
                assert!(p < BENFORD_EXPECTED[i - 1], "table not decreasing at digit {}", i + 1);
            }
        }
    }

    #[test]
    fn expected_table_tracks_theoretical_law() {
        for d in 1..=9u8 {
            let exact = benford_probability(d).unwrap();
            let rounded = BENFORD_EXPECTED[usize::from(d) - 1];
            assert!((exact - rounded).abs() < 0.001, "digit {d}: {exact} vs {rounded}");
        }
    }

    #[test]
    fn theoretical_probabilities_sum_to_one() {
        let sum: f64 = (1..=9u8).filter_map(benford_probability).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn benford_probability_rejects_non_digits() {
        assert_eq!(benford_probability(0), None);
        assert_eq!(benford_probability(10), None);
    }

    #[test]
    fn score_bands_ordered() {
        assert!(REVIEW_SCORE < APPROVAL_SCORE);
        assert!(APPROVAL_SCORE < EXCELLENT_SCORE);
        assert!(LOW_RISK_MAX_PROBABILITY < MEDIUM_RISK_MAX_PROBABILITY);
    }

    #[test]
    fn max_amount_resolves_cents() {
        let cents = (MAX_AMOUNT * 100.0).round();
        assert!(cents <= 2f64.powi(53));
    }
}
