//! Benford's Law comparison statistics.
//!
//! Given a non-empty [`DigitHistogram`], computes:
//! - the chi-square divergence `Σ (observed − expected)² / expected`, where
//!   `expected = BENFORD_EXPECTED[d] × total`;
//! - the divergence rate `divergence / total`, which does not grow with the
//!   sample size;
//! - the mean absolute deviation of observed shares from expected shares,
//!   in percentage points;
//! - a per-digit breakdown and the audit red flags.
//!
//! Every function returns `None` for an empty histogram: with no samples
//! there is no distribution to compare.

use streamcredit_core::constants::{
    BENFORD_EXPECTED, CHI_SQUARE_CRITICAL_8DOF, DIGIT_ONE_MAX_SHARE_PCT, DIGIT_ONE_MIN_SHARE_PCT,
};
use streamcredit_core::types::{DigitDetail, DigitHistogram, RedFlags};

/// All comparison statistics for one histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct BenfordStats {
    pub divergence: f64,
    pub divergence_rate: f64,
    pub deviation: f64,
    pub details: Vec<DigitDetail>,
    pub red_flags: RedFlags,
}

/// Chi-square divergence from the expected distribution.
///
/// All expected proportions are strictly positive, so no term divides by
/// zero once the histogram is non-empty.
///
/// # Examples
///
/// ```
/// use streamcredit_core::types::DigitHistogram;
/// use streamcredit_risk::benford::chi_square;
///
/// assert_eq!(chi_square(&DigitHistogram::new()), None);
/// ```
pub fn chi_square(histogram: &DigitHistogram) -> Option<f64> {
    if histogram.is_empty() {
        return None;
    }
    let total = histogram.total() as f64;

    let divergence = histogram
        .counts()
        .iter()
        .zip(BENFORD_EXPECTED.iter())
        .map(|(&observed, &p)| {
            let expected = p * total;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    Some(divergence)
}

/// Mean absolute deviation of observed from expected digit shares, in
/// percentage points.
pub fn mean_absolute_deviation(histogram: &DigitHistogram) -> Option<f64> {
    if histogram.is_empty() {
        return None;
    }

    let sum: f64 = (1..=9u8)
        .zip(BENFORD_EXPECTED.iter())
        .map(|(digit, &p)| (histogram.share(digit) - p).abs() * 100.0)
        .sum();

    Some(sum / 9.0)
}

/// Per-digit observed-versus-expected breakdown. Empty for an empty histogram.
pub fn digit_details(histogram: &DigitHistogram) -> Vec<DigitDetail> {
    if histogram.is_empty() {
        return Vec::new();
    }
    let total = histogram.total() as f64;

    (1..=9u8)
        .zip(BENFORD_EXPECTED.iter())
        .map(|(digit, &p)| {
            let observed_pct = histogram.share(digit) * 100.0;
            let expected_pct = p * 100.0;
            DigitDetail {
                digit,
                observed_count: histogram.count(digit),
                expected_count: p * total,
                observed_pct,
                expected_pct,
                deviation_pct: observed_pct - expected_pct,
            }
        })
        .collect()
}

/// Audit red flags for a histogram with the given divergence.
pub fn red_flags(histogram: &DigitHistogram, divergence: f64) -> RedFlags {
    let digit_one_pct = histogram.digit_one_share();
    RedFlags {
        chi_square_violation: divergence > CHI_SQUARE_CRITICAL_8DOF,
        digit_one_violation: !(DIGIT_ONE_MIN_SHARE_PCT..=DIGIT_ONE_MAX_SHARE_PCT)
            .contains(&digit_one_pct),
    }
}

/// Compute every statistic in one call.
pub fn analyze(histogram: &DigitHistogram) -> Option<BenfordStats> {
    let divergence = chi_square(histogram)?;
    let deviation = mean_absolute_deviation(histogram)?;
    Some(BenfordStats {
        divergence,
        divergence_rate: divergence / histogram.total() as f64,
        deviation,
        details: digit_details(histogram),
        red_flags: red_flags(histogram, divergence),
    })
}
