use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use super::alphabet::ENCODED_LEN;
use crate::encoders::algorithms::errors::{DecodeError, ParseValueError};
use crate::encoders::algorithms::overflow::WORDS;

/// Bytes in a 256-bit value.
pub const VALUE_BYTES: usize = 32;

/// A 256-bit value held as four independent 64-bit words.
///
/// The codec never treats the words as one big integer; `w[0]` is simply the
/// first word written and the first one encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value256 {
    words: [u64; WORDS],
}

impl Value256 {
    pub const ZERO: Value256 = Value256 { words: [0; WORDS] };
    pub const MAX: Value256 = Value256 {
        words: [u64::MAX; WORDS],
    };

    pub const fn new(words: [u64; WORDS]) -> Self {
        Self { words }
    }

    pub const fn words(&self) -> &[u64; WORDS] {
        &self.words
    }

    pub const fn word(&self, index: usize) -> u64 {
        self.words[index]
    }

    /// Builds a value from 32 bytes, each word read big-endian in order.
    pub fn from_bytes(bytes: [u8; VALUE_BYTES]) -> Self {
        let mut words = [0u64; WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_be_bytes(buf);
        }
        Self { words }
    }

    pub fn to_bytes(&self) -> [u8; VALUE_BYTES] {
        let mut bytes = [0u8; VALUE_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Parses exactly 64 hex digits (either case), the layout of [`to_bytes`](Self::to_bytes).
    pub fn from_hex(text: &str) -> Result<Self, ParseValueError> {
        let actual = text.chars().count();
        if actual != VALUE_BYTES * 2 {
            return Err(ParseValueError::WrongLength { actual });
        }
        // hex indexes bytes, so multi-byte characters are reported here by char position
        if let Some((position, symbol)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(ParseValueError::InvalidHex { symbol, position });
        }

        let mut bytes = [0u8; VALUE_BYTES];
        hex::decode_to_slice(text, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => ParseValueError::InvalidHex {
                symbol: c,
                position: index,
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                ParseValueError::WrongLength { actual }
            }
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Encodes this value. Shorthand for [`encode`](crate::encode).
    pub fn encode(&self) -> EncodedString {
        crate::encode(self)
    }
}

impl From<[u64; WORDS]> for Value256 {
    fn from(words: [u64; WORDS]) -> Self {
        Self::new(words)
    }
}

impl From<[u8; VALUE_BYTES]> for Value256 {
    fn from(bytes: [u8; VALUE_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Value256 {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Value256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{:016x}", word)?;
        }
        Ok(())
    }
}

impl Distribution<Value256> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value256 {
        Value256::new(rng.random())
    }
}

/// Exactly 43 symbols from `[0-9A-Za-z]` that decode to a [`Value256`].
///
/// Values of this type only come from [`encode`](crate::encode) or from a
/// successful parse, so they are always canonical.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedString([u8; ENCODED_LEN]);

impl EncodedString {
    /// Wraps symbols the codec has already produced.
    pub(crate) fn from_symbols(symbols: [u8; ENCODED_LEN]) -> Self {
        debug_assert!(symbols.iter().all(u8::is_ascii_alphanumeric));
        Self(symbols)
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("encoded symbols are ASCII alphanumeric")
    }

    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.0
    }

    /// Decodes back to the value. Cannot fail: the string is canonical.
    pub fn decode(&self) -> Value256 {
        crate::decode(self.as_str()).expect("EncodedString holds only canonical encodings")
    }
}

impl FromStr for EncodedString {
    type Err = DecodeError;

    /// Accepts only canonical encodings, so `s.parse::<EncodedString>()?.as_str() == s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::decode(s)?.encode())
    }
}

impl AsRef<str> for EncodedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EncodedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for EncodedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedString").field(&self.as_str()).finish()
    }
}

impl From<EncodedString> for String {
    fn from(encoded: EncodedString) -> Self {
        encoded.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HEX: &str = "0123456789abcdeffedcba9876543210deadbeefcafebabe0000000000000001";

    #[test]
    fn test_bytes_are_big_endian_per_word() {
        let mut bytes = [0u8; VALUE_BYTES];
        bytes[7] = 1;
        bytes[8] = 0x80;
        let value = Value256::from_bytes(bytes);
        assert_eq!(value.words(), &[1, 0x8000_0000_0000_0000, 0, 0]);
        assert_eq!(value.to_bytes(), bytes);
    }

    #[test]
    fn test_hex_round_trip() {
        let value: Value256 = SAMPLE_HEX.parse().unwrap();
        assert_eq!(
            value.words(),
            &[
                0x0123_4567_89ab_cdef,
                0xfedc_ba98_7654_3210,
                0xdead_beef_cafe_babe,
                1
            ]
        );
        assert_eq!(value.to_hex(), SAMPLE_HEX);
        assert_eq!(value.to_string(), SAMPLE_HEX);
    }

    #[test]
    fn test_hex_accepts_uppercase() {
        let value = Value256::from_hex(&SAMPLE_HEX.to_uppercase()).unwrap();
        assert_eq!(value.to_hex(), SAMPLE_HEX);
    }

    #[test]
    fn test_hex_wrong_length() {
        assert_eq!(
            Value256::from_hex("abcd"),
            Err(ParseValueError::WrongLength { actual: 4 })
        );
        assert_eq!(
            Value256::from_hex(&"0".repeat(65)),
            Err(ParseValueError::WrongLength { actual: 65 })
        );
    }

    #[test]
    fn test_hex_invalid_digit() {
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            Value256::from_hex(&text),
            Err(ParseValueError::InvalidHex {
                symbol: 'g',
                position: 10
            })
        );
    }

    #[test]
    fn test_hex_non_ascii_is_invalid_digit() {
        let text = format!("{}é", "0".repeat(63));
        assert_eq!(
            Value256::from_hex(&text),
            Err(ParseValueError::InvalidHex {
                symbol: 'é',
                position: 63
            })
        );

        let text = format!("ab{}ü{}", "0".repeat(10), "1".repeat(51));
        assert_eq!(
            Value256::from_hex(&text),
            Err(ParseValueError::InvalidHex {
                symbol: 'ü',
                position: 12
            })
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Value256::default(), Value256::ZERO);
    }

    #[test]
    fn test_encoded_string_parse_is_canonical() {
        let encoded = Value256::MAX.encode();
        let parsed: EncodedString = encoded.as_str().parse().unwrap();
        assert_eq!(parsed, encoded);
        assert_eq!(parsed.decode(), Value256::MAX);
        assert_eq!(format!("{:?}", parsed), format!("EncodedString({:?})", encoded.as_str()));
    }

    #[test]
    fn test_encoded_string_decode_returns_its_value() {
        let value: Value256 = SAMPLE_HEX.parse().unwrap();
        let encoded = value.encode();
        assert_eq!(encoded.decode(), value);
        assert_ne!(encoded.decode(), Value256::ZERO);
        assert_eq!(encoded.as_str().len(), ENCODED_LEN);
        assert_eq!(encoded.as_str().as_bytes(), encoded.as_bytes());
    }

    #[test]
    fn test_encoded_string_parse_rejects_garbage() {
        assert!("hello".parse::<EncodedString>().is_err());
    }
}
