//! Fixed-width base62 codec for 256-bit values.
//!
//! Any 256-bit value, held as four 64-bit words, encodes to exactly 43
//! symbols from `[0-9A-Za-z]` and decodes back unchanged. 62^43 exceeds 2^256
//! by less than 10%, so rather than converting one big integer the codec
//! peels ten base62 digits off each word and packs the four leftover
//! quotients (each below 22) into three more symbols.
//!
//! ```
//! use base62_256::{Value256, decode, encode};
//!
//! let encoded = encode(&Value256::ZERO);
//! assert_eq!(encoded.as_str(), "0".repeat(43));
//! assert_eq!(decode(encoded.as_str()), Ok(Value256::ZERO));
//! ```

mod config;
mod core;
mod encoders;
mod features;

pub mod prelude;

pub use config::{LoadedSettings, Settings, SettingsOverlay};
pub use crate::core::alphabet::{
    ALPHABET, BASE, ENCODED_LEN, NoopObserver, SymbolHistogram, SymbolObserver, char_to_digit,
    digit_to_char,
};
pub use crate::core::value::{EncodedString, VALUE_BYTES, Value256};
pub use encoders::algorithms::{DecodeError, ParseValueError};
pub use encoders::{decode, encode, encode_with};
pub use features::{
    HashAlgorithm, Mismatch, SelfTestOptions, SelfTestReport, UnknownHashError, hash, hash_encode,
};

/// Round-trip harness, see [`selftest::run`].
pub mod selftest {
    pub use crate::features::selftest::{boundary_values, run};
}
