//! Fixed-width 256-bit codec.
//!
//! Layout of the 43 symbols, all least significant digit first:
//!
//! | symbols | content                       |
//! |---------|-------------------------------|
//! | 0..10   | low ten digits of word 0      |
//! | 10..20  | low ten digits of word 1      |
//! | 20..30  | low ten digits of word 2      |
//! | 30..40  | low ten digits of word 3      |
//! | 40..43  | the four quotients, packed    |

use crate::core::alphabet::{
    ENCODED_LEN, NoopObserver, SymbolObserver, decode_symbol, digit_to_char,
};
use crate::core::value::{EncodedString, Value256};
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::overflow::{self, TRAILER_DIGITS, WORDS};
use crate::encoders::algorithms::word::{WORD_DIGITS, compose_word, split_word};

const TRAILER_START: usize = WORDS * WORD_DIGITS;

const _: () = assert!(TRAILER_START + TRAILER_DIGITS == ENCODED_LEN);

/// Encodes a 256-bit value as 43 base62 symbols. Never fails.
pub fn encode(value: &Value256) -> EncodedString {
    encode_with(value, &NoopObserver)
}

/// Like [`encode`], reporting each emitted digit to `observer`.
pub fn encode_with<O: SymbolObserver + ?Sized>(value: &Value256, observer: &O) -> EncodedString {
    let mut symbols = [0u8; ENCODED_LEN];
    let mut quotients = [0u8; WORDS];

    let spans = symbols[..TRAILER_START].chunks_exact_mut(WORD_DIGITS);
    for ((span, &word), quotient) in spans.zip(value.words()).zip(quotients.iter_mut()) {
        let (digits, q) = split_word(word);
        emit(span, &digits, observer);
        *quotient = q;
    }

    let trailer = overflow::pack(quotients);
    emit(&mut symbols[TRAILER_START..], &trailer, observer);

    EncodedString::from_symbols(symbols)
}

#[inline]
fn emit<O: SymbolObserver + ?Sized>(out: &mut [u8], digits: &[u8], observer: &O) {
    for (slot, &digit) in out.iter_mut().zip(digits) {
        observer.observe(digit);
        *slot = digit_to_char(digit) as u8;
    }
}

/// Decodes 43 base62 symbols back into the value they encode.
///
/// Fails with [`DecodeError::WrongLength`] unless the input is exactly 43
/// characters, with [`DecodeError::InvalidSymbol`] at the first character
/// outside `[0-9A-Za-z]`, and with [`DecodeError::Overflow`] for well-formed
/// strings that no value encodes to.
pub fn decode(text: &str) -> Result<Value256, DecodeError> {
    let actual = text.chars().count();
    if actual != ENCODED_LEN {
        return Err(DecodeError::WrongLength { actual });
    }

    let mut digits = [0u8; ENCODED_LEN];
    for ((position, c), digit) in text.chars().enumerate().zip(digits.iter_mut()) {
        *digit = decode_symbol(c).ok_or_else(|| DecodeError::invalid_symbol(c, position, text))?;
    }

    let mut trailer = [0u8; TRAILER_DIGITS];
    trailer.copy_from_slice(&digits[TRAILER_START..]);
    let quotients = overflow::unpack(&trailer);

    let mut words = [0u64; WORDS];
    for (index, (span, word)) in digits[..TRAILER_START]
        .chunks_exact(WORD_DIGITS)
        .zip(words.iter_mut())
        .enumerate()
    {
        let mut run = [0u8; WORD_DIGITS];
        run.copy_from_slice(span);
        *word = compose_word(quotients[index], &run).ok_or(DecodeError::Overflow { word: index })?;
    }

    Ok(Value256::new(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::SymbolHistogram;

    #[test]
    fn test_layout_word_spans() {
        let encoded = encode(&Value256::new([1, 2, 3, 62]));
        let text = encoded.as_str();
        assert_eq!(&text[0..10], "1000000000");
        assert_eq!(&text[10..20], "2000000000");
        assert_eq!(&text[20..30], "3000000000");
        assert_eq!(&text[30..40], "0100000000");
        assert_eq!(&text[40..], "000");
    }

    #[test]
    fn test_observer_sees_every_digit() {
        let histogram = SymbolHistogram::new();
        encode_with(&Value256::ZERO, &histogram);
        assert_eq!(histogram.counts()[0], ENCODED_LEN as u64);

        encode_with(&Value256::new([61, 0, 0, 0]), &histogram);
        let counts = histogram.counts();
        assert_eq!(counts[61], 1);
        assert_eq!(histogram.total(), 2 * ENCODED_LEN as u64);
    }

    #[test]
    fn test_symbols_validated_before_arithmetic() {
        // Lowest bad position wins even if the trailer is also bad.
        let mut text = "0".repeat(ENCODED_LEN);
        text.replace_range(5..6, "!");
        text.replace_range(41..42, "_");
        assert_eq!(decode(&text).unwrap_err().position(), Some(5));
    }

    #[test]
    fn test_non_ascii_length_counts_characters() {
        let text = format!("{}é", "0".repeat(ENCODED_LEN - 1));
        match decode(&text) {
            Err(DecodeError::InvalidSymbol { symbol, position, .. }) => {
                assert_eq!(symbol, 'é');
                assert_eq!(position, ENCODED_LEN - 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
