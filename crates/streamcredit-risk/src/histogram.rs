//! First-digit histogram construction.
//!
//! Each amount contributes the leading decimal digit of `floor(|amount|)`.
//! Amounts whose floored magnitude is zero have no leading digit in 1–9 and
//! are skipped without error.

use streamcredit_core::types::DigitHistogram;

/// Leading decimal digit of `floor(|amount|)`.
///
/// Returns `None` when the floored magnitude is zero or the amount is not
/// finite. Magnitudes are exact up to `2^128`; the engine rejects anything
/// past [`MAX_AMOUNT`](streamcredit_core::constants::MAX_AMOUNT) before
/// reaching this point.
///
/// # Examples
///
/// ```
/// use streamcredit_risk::leading_digit;
///
/// assert_eq!(leading_digit(123.45), Some(1));
/// assert_eq!(leading_digit(-987.0), Some(9));
/// assert_eq!(leading_digit(0.99), None);
/// assert_eq!(leading_digit(f64::NAN), None);
/// ```
pub fn leading_digit(amount: f64) -> Option<u8> {
    if !amount.is_finite() {
        return None;
    }
    let magnitude = amount.abs().floor();
    if magnitude < 1.0 {
        return None;
    }

    let mut n = magnitude as u128;
    while n >= 10 {
        n /= 10;
    }
    Some(n as u8)
}

/// Build the digit histogram for `amounts`.
///
/// Returns the histogram and the number of amounts skipped for having no
/// leading digit. `histogram.total() + skipped == amounts.len()`.
pub fn build_histogram(amounts: &[f64]) -> (DigitHistogram, usize) {
    let mut histogram = DigitHistogram::new();
    let mut skipped = 0usize;

    for &amount in amounts {
        match leading_digit(amount) {
            Some(digit) => {
                histogram.record(digit);
            }
            None => skipped += 1,
        }
    }

    (histogram, skipped)
}
