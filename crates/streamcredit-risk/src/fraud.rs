//! Fraud probability mapping.
//!
//! The ladder input is the divergence rate: chi-square divergence divided by
//! the histogram sample count. Raw chi-square grows linearly with sample
//! count, so a single ladder cannot serve both 10 and 10 000 transactions.
//! Dividing by a fixed count keeps the order, so at any given sample count a
//! larger divergence never maps to a lower probability.

use streamcredit_core::config::FraudLadder;
use streamcredit_core::types::{DigitHistogram, FraudAssessment, Interpretation};

use crate::benford;

/// Map a divergence rate to a fraud probability through `ladder`.
///
/// Non-decreasing in `divergence_rate` for any ladder that passes
/// [`FraudLadder::validate`].
pub fn fraud_probability(divergence_rate: f64, ladder: &FraudLadder) -> u8 {
    ladder.probability_for(divergence_rate)
}

/// Build the full fraud assessment for a histogram.
///
/// Returns `None` for an empty histogram.
pub fn assess(
    histogram: DigitHistogram,
    skipped: usize,
    fraud_threshold: u8,
    ladder: &FraudLadder,
) -> Option<FraudAssessment> {
    let stats = benford::analyze(&histogram)?;
    let probability = fraud_probability(stats.divergence_rate, ladder);

    Some(FraudAssessment {
        fraud_probability: probability,
        is_fraud: probability > fraud_threshold,
        fraud_threshold,
        interpretation: Interpretation::from_probability(probability),
        divergence: stats.divergence,
        divergence_rate: stats.divergence_rate,
        deviation: stats.deviation,
        histogram,
        details: stats.details,
        red_flags: stats.red_flags,
        sample_count: histogram.total() as usize,
        skipped_count: skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::build_histogram;
    use streamcredit_core::config::LadderStep;
    use streamcredit_core::types::FraudStatus;

    #[test]
    fn default_ladder_points() {
        let ladder = FraudLadder::default();
        assert_eq!(fraud_probability(0.01, &ladder), 5);
        assert_eq!(fraud_probability(0.1, &ladder), 20);
        assert_eq!(fraud_probability(0.2, &ladder), 40);
        assert_eq!(fraud_probability(0.5, &ladder), 60);
        assert_eq!(fraud_probability(1.0, &ladder), 80);
        assert_eq!(fraud_probability(5.0, &ladder), 95);
    }

    #[test]
    fn empty_histogram_yields_nothing() {
        assert_eq!(assess(DigitHistogram::new(), 3, 20, &FraudLadder::default()), None);
    }

    #[test]
    fn single_digit_mass_is_high_risk() {
        let (h, skipped) = build_histogram(&[100.0; 10]);
        let a = assess(h, skipped, 20, &FraudLadder::default()).unwrap();
        assert_eq!(a.fraud_probability, 95);
        assert!(a.is_fraud);
        assert_eq!(a.interpretation, Interpretation::Danger);
        assert_eq!(a.status(), FraudStatus::Danger);
        assert_eq!(a.sample_count, 10);
        assert_eq!(a.skipped_count, 0);
    }

    #[test]
    fn threshold_is_strict() {
        // Flat ladder pins the probability at 20, which is not above 20.
        let ladder = FraudLadder {
            steps: vec![LadderStep { max_rate: 1000.0, probability: 20 }],
            ceiling: 20,
        };
        let (h, skipped) = build_histogram(&[100.0; 10]);
        let a = assess(h, skipped, 20, &ladder).unwrap();
        assert_eq!(a.fraud_probability, 20);
        assert!(!a.is_fraud);
        assert_eq!(a.status(), FraudStatus::Safe);

        let a = assess(h, skipped, 19, &ladder).unwrap();
        assert!(a.is_fraud);
    }

    fn histogram_from_counts(counts: [u64; 9]) -> DigitHistogram {
        let mut h = DigitHistogram::new();
        for (i, &c) in counts.iter().enumerate() {
            for _ in 0..c {
                h.record(i as u8 + 1);
            }
        }
        h
    }

    #[test]
    fn larger_divergence_never_lowers_probability() {
        // Same 1000 samples: 60 moved from digit 1 to digit 9 versus 95
        // moved from digit 1 to digit 2.
        let ladder = FraudLadder::default();
        let to_nine = histogram_from_counts([241, 176, 125, 97, 79, 67, 58, 51, 106]);
        let to_two = histogram_from_counts([206, 271, 125, 97, 79, 67, 58, 51, 46]);
        let a = assess(to_nine, 0, 20, &ladder).unwrap();
        let b = assess(to_two, 0, 20, &ladder).unwrap();

        assert_eq!(a.sample_count, b.sample_count);
        assert!(a.divergence > b.divergence);
        assert!(a.divergence_rate > b.divergence_rate);
        assert!(a.fraud_probability >= b.fraud_probability);
        // Mean absolute deviation orders these two the other way round.
        assert!(a.deviation < b.deviation);
    }

    #[test]
    fn skipped_count_carried_through() {
        let mut amounts = vec![100.0; 10];
        amounts.extend([0.5, 0.25]);
        let (h, skipped) = build_histogram(&amounts);
        let a = assess(h, skipped, 20, &FraudLadder::default()).unwrap();
        assert_eq!(a.sample_count, 10);
        assert_eq!(a.skipped_count, 2);
    }
}
