//! # streamcredit-core
//! Foundation types, constants and traits for the StreamCredit risk engine.

pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
