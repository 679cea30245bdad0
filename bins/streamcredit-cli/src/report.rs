//! Human-readable summaries of assessments.

use std::fmt::Write;

use streamcredit_core::types::{CreditAssessment, Decision, FraudAssessment, RiskLevel};

fn decision_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => "APPROVED",
        Decision::Review => "REVIEW",
        Decision::Rejected => "REJECTED",
    }
}

fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "LOW",
        RiskLevel::Medium => "MEDIUM",
        RiskLevel::High => "HIGH",
    }
}

/// Multi-line fraud summary with the per-digit breakdown.
pub fn fraud_text(fraud: &FraudAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fraud probability: {}% ({})",
        fraud.fraud_probability,
        fraud.interpretation.description()
    );
    let _ = writeln!(
        out,
        "Flagged: {} (threshold {}%)",
        if fraud.is_fraud { "yes" } else { "no" },
        fraud.fraud_threshold
    );
    let _ = writeln!(
        out,
        "Samples: {} used, {} skipped",
        fraud.sample_count, fraud.skipped_count
    );
    let _ = writeln!(
        out,
        "Chi-square: {:.3} ({:.4} per sample)  Mean deviation: {:.2} pts",
        fraud.divergence, fraud.divergence_rate, fraud.deviation
    );
    if fraud.red_flags.chi_square_violation {
        let _ = writeln!(out, "Red flag: chi-square above critical value");
    }
    if fraud.red_flags.digit_one_violation {
        let _ = writeln!(out, "Red flag: leading digit 1 share outside 25-35%");
    }
    let _ = writeln!(out, "Digit  Observed  Expected  Deviation");
    for d in &fraud.details {
        let _ = writeln!(
            out,
            "{:>5}  {:>7.2}%  {:>7.2}%  {:>+8.2}",
            d.digit, d.observed_pct, d.expected_pct, d.deviation_pct
        );
    }
    out
}

/// Credit summary followed by the fraud summary.
pub fn credit_text(credit: &CreditAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Decision: {}  Score: {}/100  Risk: {}",
        decision_label(credit.decision),
        credit.credit_score,
        risk_label(credit.risk_level)
    );
    let _ = writeln!(out, "Credit limit: {}", credit.credit_limit);
    let _ = writeln!(
        out,
        "Revenue: {:.2} total, {:.2} monthly, {:.2} per order over {} orders",
        credit.total_revenue,
        credit.monthly_average_revenue,
        credit.average_order_value,
        credit.order_count
    );
    for reason in &credit.reasons {
        let _ = writeln!(out, "- {reason}");
    }
    out.push('\n');
    out.push_str(&fraud_text(&credit.fraud));
    out
}
