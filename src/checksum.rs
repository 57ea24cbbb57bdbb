//! Mod-10 check digit used by library Codabar identifiers
//!
//! Digits at even 0-based positions are doubled (with 9 subtracted when the
//! product reaches 10), digits at odd positions are added as-is. The check
//! digit brings the total up to the next multiple of ten.

use crate::{Error, Result};

/// Compute the check digit over `digits`
///
/// Every element must be a value in `0..=9`.
pub fn compute(digits: &[u8]) -> u8 {
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            debug_assert!(d <= 9, "digit out of range: {d}");
            let d = d as u32;
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled >= 10 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    match total % 10 {
        0 => 0,
        rem => (10 - rem) as u8,
    }
}

/// Convert an ASCII digit string into digit values
pub(crate) fn parse_digits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(Error::InvalidDigit(c))
        })
        .collect()
}

/// Compute the check digit over a string of decimal digits
pub fn compute_str(digits: &str) -> Result<u8> {
    Ok(compute(&parse_digits(digits)?))
}
