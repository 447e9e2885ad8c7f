pub mod algorithms;
pub mod codec;

pub use codec::{decode, encode, encode_with};
