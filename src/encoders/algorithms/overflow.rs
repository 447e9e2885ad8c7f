//! Packing the four per-word quotients into the three trailing symbols.
//!
//! Each quotient is below 22, so the four of them form a mixed-radix number
//! `q0 + 22*q1 + 22^2*q2 + 22^3*q3` whose maximum, 234255, is just under
//! 62^3 = 238328. The remaining 4073 trailer codes are never produced.

use super::word::QUOTIENT_RADIX;
use crate::core::alphabet::BASE;

/// Number of words in a 256-bit value, and so of quotients to pack.
pub const WORDS: usize = 4;

/// Symbols used by the packed quotients.
pub const TRAILER_DIGITS: usize = 3;

/// Largest composite the packer can produce: 22^4 - 1.
pub const MAX_COMPOSITE: u32 = (QUOTIENT_RADIX as u32).pow(WORDS as u32) - 1;

const TRAILER_CAPACITY: u32 = (BASE as u32).pow(TRAILER_DIGITS as u32);

const _: () = assert!(MAX_COMPOSITE < TRAILER_CAPACITY);

/// Combines four quotients into three least-significant-first base62 digits.
#[inline]
pub fn pack(quotients: [u8; WORDS]) -> [u8; TRAILER_DIGITS] {
    let radix = QUOTIENT_RADIX as u32;
    let mut composite = quotients.iter().rev().fold(0u32, |acc, &q| {
        debug_assert!(u32::from(q) < radix, "quotient {} out of range", q);
        acc * radix + u32::from(q)
    });
    debug_assert!(composite <= MAX_COMPOSITE);

    let mut digits = [0u8; TRAILER_DIGITS];
    for digit in digits.iter_mut() {
        *digit = (composite % BASE as u32) as u8;
        composite /= BASE as u32;
    }
    digits
}

/// Recovers the four quotients from three least-significant-first digits.
///
/// Trailers outside the packer's range yield a fourth quotient of 22, which
/// the word composer then rejects as overflow.
#[inline]
pub fn unpack(digits: &[u8; TRAILER_DIGITS]) -> [u8; WORDS] {
    let mut composite = digits
        .iter()
        .rev()
        .fold(0u32, |acc, &d| acc * BASE as u32 + u32::from(d));

    let radix = QUOTIENT_RADIX as u32;
    let mut quotients = [0u8; WORDS];
    let mut power = radix.pow(WORDS as u32 - 1);
    for quotient in quotients.iter_mut().rev() {
        *quotient = (composite / power) as u8;
        composite %= power;
        power /= radix;
    }
    quotients
}
