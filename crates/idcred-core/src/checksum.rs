//! Weighted mod-11 check digit.
//!
//! Weights cycle 7,6,5,4,3,2 over the first twelve digits. The check digit is
//! `11 - (sum mod 11)`, with 10 and 11 folded to 0.

use crate::types::Uin;

/// Weight for digit position `i` (0-indexed).
pub const fn weight(i: usize) -> u32 {
    7 - (i % 6) as u32
}

/// Compute the check digit for the first twelve digits.
pub fn check_digit(body: &[u8; 12]) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * weight(i))
        .sum();

    let check = 11 - sum % 11;
    if check > 9 {
        0
    } else {
        check as u8
    }
}

/// Check that the trailing digit matches the computed check digit.
pub fn is_valid(uin: &Uin) -> bool {
    check_digit(&uin.body()) == uin.check_digit()
}
