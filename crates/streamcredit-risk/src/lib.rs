//! # streamcredit-risk: Benford fraud detection and credit scoring.
//!
//! The engine is a pure function pipeline with no state between calls:
//! - **Histogram**: leading decimal digit of each floored absolute amount;
//!   amounts below 1 contribute no sample.
//! - **Benford statistics**: chi-square divergence and mean absolute
//!   percentage deviation against the expected first-digit distribution.
//! - **Fraud mapping**: chi-square per sample is mapped through a monotonic
//!   threshold ladder to an integer fraud probability.
//! - **Credit synthesis**: revenue, order count and fraud probability are
//!   blended into a 0–100 score, a decision and a credit limit.

pub mod benford;
pub mod credit;
pub mod engine;
pub mod fraud;
pub mod histogram;
pub mod synthetic;

pub use engine::RiskEngine;
pub use histogram::{build_histogram, leading_digit};
pub use synthetic::{Order, Profile};
