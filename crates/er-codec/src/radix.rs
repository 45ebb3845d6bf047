//! Uppercase base-36 rendering of packed values.

use crate::bigint::PackedInt;

pub const BASE36: u32 = 36;

/// Render `value` with digits `0-9A-Z`, most significant first.
#[must_use]
pub fn to_base36(value: &PackedInt) -> String {
    if value.is_zero() {
        return String::from("0");
    }
    let mut remaining = value.clone();
    let mut digits = Vec::new();
    while !remaining.is_zero() {
        digits.push(digit_char(remaining.divmod_small(BASE36)));
    }
    digits.iter().rev().collect()
}

/// Parse a base-36 string. Returns `None` on any character outside `0-9A-Za-z`.
#[must_use]
pub fn from_base36(text: &str) -> Option<PackedInt> {
    let mut value = PackedInt::zero();
    for ch in text.chars() {
        value.mul_add_small(BASE36, ch.to_digit(BASE36)?);
    }
    Some(value)
}

/// Uppercase character for a single digit below 36.
#[must_use]
pub fn digit_char(digit: u32) -> char {
    char::from_digit(digit, BASE36).map_or('0', |ch| ch.to_ascii_uppercase())
}
