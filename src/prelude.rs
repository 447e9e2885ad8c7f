//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base62_256::prelude::*;
//!
//! let value = Value256::new([1, 2, 3, 4]);
//! let encoded = encode(&value);
//! assert_eq!(decode(encoded.as_str()), Ok(value));
//! ```

pub use crate::{
    DecodeError,
    EncodedString,
    // Features
    HashAlgorithm,
    SymbolHistogram,
    SymbolObserver,
    Value256,

    // Core encoding/decoding
    decode,
    encode,
    encode_with,
    hash_encode,
};
