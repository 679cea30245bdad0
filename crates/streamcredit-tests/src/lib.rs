//! Scenario and adversarial test suite for the StreamCredit risk engine.
//!
//! This crate holds integration tests that drive the public engine API with
//! realistic merchant histories (Benford-compliant, wash trading, thin
//! histories) and with adversarial randomized input.

pub mod helpers;
