use std::sync::atomic::{AtomicU64, Ordering};

use crate::encoders::algorithms::errors::DecodeError;

/// Number of symbols in the alphabet.
pub const BASE: u64 = 62;

/// Length of every encoded value in symbols.
pub const ENCODED_LEN: usize = 43;

/// Symbols in digit order: `0-9`, then `A-Z`, then `a-z`.
pub const ALPHABET: [u8; BASE as usize] =
    *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Converts a digit in `0..62` to its symbol.
///
/// # Panics
///
/// Panics if `digit >= 62`. The codec never produces such a digit, so this
/// only fires on misuse by a caller.
#[inline]
pub fn digit_to_char(digit: u8) -> char {
    assert!(
        u64::from(digit) < BASE,
        "base62 digit out of range: {}",
        digit
    );
    char::from(ALPHABET[digit as usize])
}

/// Converts a symbol back to its digit.
///
/// Errors carry position 0 since a lone character has no context; the codec
/// reports the real position.
pub fn char_to_digit(c: char) -> Result<u8, DecodeError> {
    decode_symbol(c).ok_or_else(|| DecodeError::invalid_symbol(c, 0, ""))
}

#[inline]
pub(crate) fn decode_symbol(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        'a'..='z' => Some(c as u8 - b'a' + 36),
        _ => None,
    }
}

/// Receives every digit emitted by an encode, before it becomes a symbol.
///
/// Observers are passed explicitly to [`encode_with`](crate::encode_with) and
/// take `&self`, so one observer can be shared across threads.
pub trait SymbolObserver {
    fn observe(&self, digit: u8);
}

/// Observer that ignores everything. Used by plain [`encode`](crate::encode).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SymbolObserver for NoopObserver {
    #[inline]
    fn observe(&self, _digit: u8) {}
}

impl<T: SymbolObserver + ?Sized> SymbolObserver for &T {
    #[inline]
    fn observe(&self, digit: u8) {
        (**self).observe(digit)
    }
}

/// Per-symbol usage counts, safe to update from many threads at once.
#[derive(Debug)]
pub struct SymbolHistogram {
    counts: [AtomicU64; BASE as usize],
}

impl SymbolHistogram {
    pub fn new() -> Self {
        Self {
            counts: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current counts, indexed by digit.
    pub fn counts(&self) -> [u64; BASE as usize] {
        std::array::from_fn(|i| self.counts[i].load(Ordering::Relaxed))
    }

    /// Snapshot the counts and reset them to zero.
    pub fn drain(&self) -> [u64; BASE as usize] {
        std::array::from_fn(|i| self.counts[i].swap(0, Ordering::Relaxed))
    }

    pub fn total(&self) -> u64 {
        self.counts().iter().sum()
    }
}

impl Default for SymbolHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolObserver for SymbolHistogram {
    #[inline]
    fn observe(&self, digit: u8) {
        self.counts[digit as usize].fetch_add(1, Ordering::Relaxed);
    }
}
