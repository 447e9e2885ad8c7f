pub mod errors;
pub mod overflow;
pub mod word;

// Re-export error types for public API
pub use errors::{DecodeError, ParseValueError};
