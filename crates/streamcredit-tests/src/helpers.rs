//! Shared builders for scenario and adversarial tests.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use streamcredit_risk::synthetic::{self, Profile};

/// First-digit counts that match the expected distribution exactly at
/// 1000 samples.
pub const BENFORD_COUNTS_1000: [usize; 9] = [301, 176, 125, 97, 79, 67, 58, 51, 46];

/// Round amounts used by wash traders.
pub const ROUND_AMOUNTS: [f64; 6] = [1000.0, 2000.0, 5000.0, 10000.0, 20000.0, 25000.0];

/// Fixed clock for reproducible order timestamps.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

/// Amounts with `counts[d - 1]` entries of leading digit `d`.
///
/// Each digit `d` contributes amounts `d × 1000 + 500`, so every amount sits
/// in the four-digit range and keeps its leading digit.
pub fn amounts_from_counts(counts: &[usize; 9]) -> Vec<f64> {
    counts
        .iter()
        .enumerate()
        .flat_map(|(i, &count)| {
            let digit = (i + 1) as f64;
            std::iter::repeat_n(digit * 1000.0 + 500.0, count)
        })
        .collect()
}

/// Amounts whose first digits follow [`BENFORD_COUNTS_1000`] exactly.
pub fn exact_benford_amounts() -> Vec<f64> {
    amounts_from_counts(&BENFORD_COUNTS_1000)
}

/// `count` amounts cycling through [`ROUND_AMOUNTS`].
pub fn round_number_amounts(count: usize) -> Vec<f64> {
    (0..count).map(|i| ROUND_AMOUNTS[i % ROUND_AMOUNTS.len()]).collect()
}

/// Fifty amounts with a near-Benford digit spread (15, 9, 6, 5, 4, 3, 3, 3, 2)
/// totalling exactly 96 000, i.e. 8 000 per month over 12 months.
pub fn mid_market_amounts() -> Vec<f64> {
    let mut amounts = Vec::with_capacity(50);
    amounts.extend(std::iter::repeat_n(100.0, 14));
    amounts.push(10_500.0);
    amounts.extend(std::iter::repeat_n(2_000.0, 9));
    amounts.extend(std::iter::repeat_n(3_000.0, 6));
    amounts.extend(std::iter::repeat_n(4_000.0, 5));
    amounts.extend(std::iter::repeat_n(5_000.0, 4));
    amounts.extend(std::iter::repeat_n(600.0, 3));
    amounts.extend(std::iter::repeat_n(700.0, 3));
    amounts.extend(std::iter::repeat_n(800.0, 3));
    amounts.extend(std::iter::repeat_n(900.0, 2));
    amounts
}

/// Amounts of `count` synthetic orders for `profile`, seeded.
pub fn synthetic_amounts(profile: Profile, count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let orders = synthetic::generate_orders(profile, count, fixed_now(), &mut rng);
    synthetic::amounts(&orders)
}
