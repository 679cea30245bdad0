//! Credit score synthesis and decisioning.
//!
//! Score starts at [`BASE_CREDIT_SCORE`] and receives exactly one adjustment
//! from each of three bands (revenue, order count, fraud probability), then
//! is clamped to `0–100`. The decision is taken in strict order: high fraud
//! probability rejects regardless of score.

use streamcredit_core::constants::{
    APPROVAL_SCORE, APPROVED_LIMIT_FACTOR, BASE_CREDIT_SCORE, CHI_SQUARE_CRITICAL_8DOF,
    DIGIT_ONE_MAX_SHARE_PCT, DIGIT_ONE_MIN_SHARE_PCT, EXCELLENT_LIMIT_MULTIPLIER,
    EXCELLENT_SCORE, MAX_CREDIT_SCORE, REVIEW_LIMIT_FACTOR, REVIEW_SCORE,
};
use streamcredit_core::error::ScoringError;
use streamcredit_core::types::{CreditAssessment, Decision, FraudAssessment, RiskLevel};

/// Revenue and volume aggregates of a transaction set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueAggregate {
    pub total_revenue: f64,
    pub order_count: usize,
    pub monthly_average_revenue: f64,
    pub average_order_value: f64,
}

impl RevenueAggregate {
    /// Aggregate `amounts` over `periods` months.
    ///
    /// Signed amounts are summed as-is, so refunds reduce revenue.
    /// `periods` of zero is treated as one.
    pub fn from_amounts(amounts: &[f64], periods: u32) -> Self {
        let total_revenue: f64 = amounts.iter().sum();
        let order_count = amounts.len();
        let average_order_value = if order_count == 0 {
            0.0
        } else {
            total_revenue / order_count as f64
        };

        Self {
            total_revenue,
            order_count,
            monthly_average_revenue: total_revenue / f64::from(periods.max(1)),
            average_order_value,
        }
    }
}

/// Score adjustment for monthly average revenue.
///
/// | Monthly revenue | Adjustment |
/// |-----------------|------------|
/// | > 50 000        | +20        |
/// | > 20 000        | +15        |
/// | > 10 000        | +10        |
/// | > 5 000         | +5         |
/// | otherwise       | −10        |
pub fn revenue_adjustment(monthly_average_revenue: f64) -> i32 {
    if monthly_average_revenue > 50_000.0 {
        20
    } else if monthly_average_revenue > 20_000.0 {
        15
    } else if monthly_average_revenue > 10_000.0 {
        10
    } else if monthly_average_revenue > 5_000.0 {
        5
    } else {
        -10
    }
}

/// Score adjustment for order count.
///
/// # Examples
///
/// ```
/// use streamcredit_risk::credit::order_count_adjustment;
/// assert_eq!(order_count_adjustment(501), 15);
/// assert_eq!(order_count_adjustment(500), 10);
/// assert_eq!(order_count_adjustment(101), 5);
/// assert_eq!(order_count_adjustment(100), -5);
/// ```
pub fn order_count_adjustment(order_count: usize) -> i32 {
    match order_count {
        501.. => 15,
        201..=500 => 10,
        101..=200 => 5,
        _ => -5,
    }
}

/// Score adjustment for fraud probability.
pub fn fraud_adjustment(fraud_probability: u8) -> i32 {
    match fraud_probability {
        0..=10 => 15,
        11..=20 => 10,
        21..=30 => 0,
        31..=50 => -10,
        _ => -25,
    }
}

/// Blend the three adjustments into a score in `0–100`.
pub fn credit_score(aggregate: &RevenueAggregate, fraud_probability: u8) -> u8 {
    let score = BASE_CREDIT_SCORE
        + revenue_adjustment(aggregate.monthly_average_revenue)
        + order_count_adjustment(aggregate.order_count)
        + fraud_adjustment(fraud_probability);
    score.clamp(0, MAX_CREDIT_SCORE) as u8
}

/// Round a raw limit to whole units, never below zero.
fn round_limit(raw: f64) -> u64 {
    let rounded = raw.round();
    if rounded > 0.0 { rounded as u64 } else { 0 }
}

/// Decision, credit limit and reasons for a score.
///
/// `rejection_fraud_probability` is checked first; a fraud probability above
/// it rejects with a zero limit whatever the score.
pub fn decide(
    score: u8,
    fraud_probability: u8,
    monthly_average_revenue: f64,
    rejection_fraud_probability: u8,
) -> (Decision, u64, Vec<String>) {
    if fraud_probability > rejection_fraud_probability {
        return (
            Decision::Rejected,
            0,
            vec![
                "High fraud probability detected".to_string(),
                format!(
                    "Benford fraud probability {fraud_probability} exceeds threshold \
                     {rejection_fraud_probability}"
                ),
            ],
        );
    }

    if score >= EXCELLENT_SCORE {
        (
            Decision::Approved,
            round_limit(
                monthly_average_revenue * APPROVED_LIMIT_FACTOR * EXCELLENT_LIMIT_MULTIPLIER,
            ),
            vec!["Excellent credit profile".to_string()],
        )
    } else if score >= APPROVAL_SCORE {
        (
            Decision::Approved,
            round_limit(monthly_average_revenue * APPROVED_LIMIT_FACTOR),
            vec!["Good credit profile".to_string()],
        )
    } else if score >= REVIEW_SCORE {
        (
            Decision::Review,
            round_limit(monthly_average_revenue * REVIEW_LIMIT_FACTOR),
            vec!["Manual review required".to_string()],
        )
    } else {
        (
            Decision::Rejected,
            0,
            vec![format!("Credit score {score} below minimum {REVIEW_SCORE}")],
        )
    }
}

/// Audit reasons for each raised red flag, in flag order.
pub fn red_flag_reasons(fraud: &FraudAssessment) -> Vec<String> {
    let mut reasons = Vec::new();
    if fraud.red_flags.chi_square_violation {
        reasons.push(format!(
            "Statistical anomaly: chi-square {:.2} exceeds critical value \
             {CHI_SQUARE_CRITICAL_8DOF}",
            fraud.divergence
        ));
    }
    if fraud.red_flags.digit_one_violation {
        reasons.push(format!(
            "Digit-1 frequency {:.1}% outside {DIGIT_ONE_MIN_SHARE_PCT}-{DIGIT_ONE_MAX_SHARE_PCT}%",
            fraud.histogram.digit_one_share()
        ));
    }
    reasons
}

/// Combine aggregates and a fraud assessment into a credit assessment.
///
/// An empty `amounts` slice is a precondition violation and returns
/// [`ScoringError::InsufficientSample`]; callers are expected to have
/// enforced the minimum sample size already.
pub fn synthesize(
    amounts: &[f64],
    fraud: FraudAssessment,
    revenue_periods: u32,
    rejection_fraud_probability: u8,
) -> Result<CreditAssessment, ScoringError> {
    if amounts.is_empty() {
        return Err(ScoringError::InsufficientSample {
            required: 1,
            valid: 0,
            provided: 0,
        });
    }

    let aggregate = RevenueAggregate::from_amounts(amounts, revenue_periods);
    let score = credit_score(&aggregate, fraud.fraud_probability);
    let (decision, credit_limit, mut reasons) = decide(
        score,
        fraud.fraud_probability,
        aggregate.monthly_average_revenue,
        rejection_fraud_probability,
    );
    if fraud.fraud_probability > rejection_fraud_probability {
        reasons.extend(red_flag_reasons(&fraud));
    }

    Ok(CreditAssessment {
        credit_score: score,
        decision,
        credit_limit,
        risk_level: RiskLevel::from_fraud_probability(fraud.fraud_probability),
        reasons,
        total_revenue: aggregate.total_revenue,
        monthly_average_revenue: aggregate.monthly_average_revenue,
        average_order_value: aggregate.average_order_value,
        order_count: aggregate.order_count,
        fraud,
    })
}
