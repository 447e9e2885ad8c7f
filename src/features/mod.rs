//! Optional features module.
//!
//! Functionality layered on top of the codec: digest encoding and the
//! round-trip self-test. Neither is needed to encode or decode.

pub mod hashing;
pub mod selftest;

// Re-export main types and functions for convenience
pub use hashing::{HashAlgorithm, UnknownHashError, hash, hash_encode};
pub use selftest::{Mismatch, SelfTestOptions, SelfTestReport};
