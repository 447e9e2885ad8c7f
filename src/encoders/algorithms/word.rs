//! Splitting a 64-bit word into ten base62 digits plus a small quotient,
//! and putting it back together.

use crate::core::alphabet::BASE;

/// Digits peeled off each word.
pub const WORD_DIGITS: usize = 10;

/// 62^10, the value range covered by a word's ten digits.
pub const WORD_SPAN: u64 = BASE.pow(WORD_DIGITS as u32);

/// Exclusive upper bound on a word's quotient.
pub const QUOTIENT_RADIX: u64 = 22;

// 2^64 / 62^10 is about 21.98: every quotient fits below 22 and nothing is wasted.
const _: () = assert!(u64::MAX / WORD_SPAN == QUOTIENT_RADIX - 1);

/// Peels the ten least significant base62 digits off `word`.
///
/// Digits come back least significant first, along with the remaining
/// quotient, so that `word == quotient * 62^10 + Σ digits[k] * 62^k`.
#[inline]
pub fn split_word(word: u64) -> ([u8; WORD_DIGITS], u8) {
    let mut digits = [0u8; WORD_DIGITS];
    let mut rest = word;
    for digit in digits.iter_mut() {
        *digit = (rest % BASE) as u8;
        rest /= BASE;
    }
    debug_assert!(rest < QUOTIENT_RADIX, "quotient {} out of range", rest);
    (digits, rest as u8)
}

/// Rebuilds a word from its quotient and ten least-significant-first digits.
///
/// Returns `None` when the result would not fit in 64 bits, which can only
/// happen for digit/quotient combinations `split_word` never produces.
#[inline]
pub fn compose_word(quotient: u8, digits: &[u8; WORD_DIGITS]) -> Option<u64> {
    digits.iter().rev().try_fold(u64::from(quotient), |acc, &digit| {
        acc.checked_mul(BASE)?.checked_add(u64::from(digit))
    })
}
