//! Synthetic merchant order histories for demos, benches and tests.
//!
//! Two profiles:
//! - [`Profile::Honest`]: first digits drawn from the Benford distribution,
//!   2–4 integer digits plus random cents, spread over a year and many
//!   customers.
//! - [`Profile::WashTrading`]: round and repeated amounts from a small
//!   pattern set, concentrated in 90 days across five customers.
//!
//! Generation is driven by a caller-supplied RNG and clock so output is
//! reproducible with a seeded generator.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use streamcredit_core::constants::BENFORD_EXPECTED;

/// Amount patterns typical of wash trading.
pub const WASH_TRADING_PATTERNS: [f64; 15] = [
    1000.0, 2000.0, 5000.0, 10000.0, 20000.0, 25000.0, 9999.0, 19999.0, 29999.0, 11111.0,
    22222.0, 33333.0, 15000.0, 18000.0, 12345.0,
];

const HONEST_LOOKBACK_DAYS: i64 = 365;
const HONEST_CUSTOMERS: u32 = 500;
const WASH_LOOKBACK_DAYS: i64 = 90;
const WASH_CUSTOMERS: u32 = 5;

/// Merchant behaviour to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Honest,
    WashTrading,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Honest => f.write_str("honest"),
            Self::WashTrading => f.write_str("wash-trading"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "honest" => Ok(Self::Honest),
            "wash-trading" | "wash_trading" | "fraud" => Ok(Self::WashTrading),
            other => Err(format!("unknown profile: {other}")),
        }
    }
}

/// A single merchant order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub customer_id: String,
}

/// Draw a first digit according to [`BENFORD_EXPECTED`].
pub fn benford_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let draw: f64 = rng.r#gen();
    let mut cumulative = 0.0;
    for (i, &p) in BENFORD_EXPECTED.iter().enumerate() {
        cumulative += p;
        if draw <= cumulative {
            return i as u8 + 1;
        }
    }
    9
}

/// An amount whose first digit follows Benford's Law: 2–4 integer digits
/// plus cents.
pub fn honest_amount<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let digits = rng.gen_range(2..=4);
    let mut value = u64::from(benford_digit(rng));
    for _ in 1..digits {
        value = value * 10 + rng.gen_range(0..10);
    }
    let cents: u64 = rng.gen_range(0..100);
    (value * 100 + cents) as f64 / 100.0
}

/// A round or repeated amount from [`WASH_TRADING_PATTERNS`].
pub fn wash_trading_amount<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    *WASH_TRADING_PATTERNS
        .choose(rng)
        .unwrap_or(&WASH_TRADING_PATTERNS[0])
}

/// Generate `count` orders for `profile`, timestamped before `now`.
pub fn generate_orders<R: Rng + ?Sized>(
    profile: Profile,
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Order> {
    let (tag, lookback, customers) = match profile {
        Profile::Honest => ("H", HONEST_LOOKBACK_DAYS, HONEST_CUSTOMERS),
        Profile::WashTrading => ("F", WASH_LOOKBACK_DAYS, WASH_CUSTOMERS),
    };

    (0..count)
        .map(|i| {
            let amount = match profile {
                Profile::Honest => honest_amount(rng),
                Profile::WashTrading => wash_trading_amount(rng),
            };
            let days_ago = rng.gen_range(0..lookback);
            Order {
                order_id: format!("ORD-{tag}-{:06}", i + 1),
                amount,
                timestamp: now - Duration::days(days_ago),
                customer_id: format!("CUST-{}", rng.gen_range(1..=customers)),
            }
        })
        .collect()
}

/// Amounts of `orders`, in order.
pub fn amounts(orders: &[Order]) -> Vec<f64> {
    orders.iter().map(|o| o.amount).collect()
}

/// Render orders as CSV with an `Amount` column.
pub fn orders_to_csv(orders: &[Order], profile: Profile) -> String {
    let mut out = String::from("Order ID,Amount,Timestamp,Customer ID,Profile Type\n");
    for order in orders {
        out.push_str(&format!(
            "{},{:.2},{},{},{}\n",
            order.order_id,
            order.amount,
            order.timestamp.to_rfc3339(),
            order.customer_id,
            profile
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::leading_digit;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn profile_parse_and_display() {
        assert_eq!("honest".parse::<Profile>().unwrap(), Profile::Honest);
        assert_eq!("Wash-Trading".parse::<Profile>().unwrap(), Profile::WashTrading);
        assert_eq!("fraud".parse::<Profile>().unwrap(), Profile::WashTrading);
        assert!("other".parse::<Profile>().is_err());
        assert_eq!(Profile::WashTrading.to_string(), "wash-trading");
    }

    #[test]
    fn honest_amount_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = honest_amount(&mut rng);
            assert!((10.0..10_000.0).contains(&a), "amount {a} out of range");
            assert!(leading_digit(a).is_some());
            // At most two fraction digits.
            assert!(((a * 100.0).round() - a * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn wash_amounts_come_from_patterns() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(WASH_TRADING_PATTERNS.contains(&wash_trading_amount(&mut rng)));
        }
    }

    #[test]
    fn benford_digit_in_range_and_favours_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 9];
        for _ in 0..10_000 {
            let d = benford_digit(&mut rng);
            assert!((1..=9).contains(&d));
            counts[usize::from(d - 1)] += 1;
        }
        assert!(counts[0] > counts[8] * 4);
    }

    #[test]
    fn generation_is_reproducible() {
        let a = generate_orders(Profile::Honest, 50, fixed_now(), &mut StdRng::seed_from_u64(1));
        let b = generate_orders(Profile::Honest, 50, fixed_now(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert_eq!(a[0].order_id, "ORD-H-000001");
    }

    #[test]
    fn wash_trading_orders_concentrated() {
        let now = fixed_now();
        let orders = generate_orders(Profile::WashTrading, 100, now, &mut StdRng::seed_from_u64(3));
        for o in &orders {
            assert!(now - o.timestamp < Duration::days(WASH_LOOKBACK_DAYS));
            let n: u32 = o.customer_id.trim_start_matches("CUST-").parse().unwrap();
            assert!((1..=WASH_CUSTOMERS).contains(&n));
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut rng = StdRng::seed_from_u64(9);
        let orders = generate_orders(Profile::WashTrading, 3, fixed_now(), &mut rng);
        let csv = orders_to_csv(&orders, Profile::WashTrading);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Order ID,Amount,Timestamp,Customer ID,Profile Type");
        assert!(lines[1].starts_with("ORD-F-000001,"));
        assert!(lines[1].ends_with(",wash-trading"));
    }

    #[test]
    fn amounts_preserve_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let orders = generate_orders(Profile::Honest, 5, fixed_now(), &mut rng);
        let a = amounts(&orders);
        assert_eq!(a.len(), 5);
        for (o, x) in orders.iter().zip(&a) {
            assert_eq!(o.amount, *x);
        }
    }
}
