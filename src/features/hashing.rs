use std::fmt;

use blake2::Blake2s256;
use sha2::{Digest, Sha256};
use sha3::{Keccak256, Sha3_256};

use crate::core::value::{EncodedString, VALUE_BYTES, Value256};

/// 256-bit hash algorithms, whose digests encode to exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha3_256,
    Keccak256,
    Blake2s,
    Blake3,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Blake2s,
        HashAlgorithm::Blake3,
    ];

    /// Parse hash algorithm from string. Case-insensitive; `-` and `_` are ignored.
    pub fn from_str(s: &str) -> Result<Self, UnknownHashError> {
        let name: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha3256" => Ok(HashAlgorithm::Sha3_256),
            "keccak256" => Ok(HashAlgorithm::Keccak256),
            "blake2s" | "blake2s256" => Ok(HashAlgorithm::Blake2s),
            "blake3" => Ok(HashAlgorithm::Blake3),
            _ => Err(UnknownHashError {
                name: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a hash algorithm name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHashError {
    pub name: String,
}

impl fmt::Display for UnknownHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.as_str()).collect();
        write!(
            f,
            "unknown hash algorithm '{}' (supported: {})",
            self.name,
            supported.join(", ")
        )
    }
}

impl std::error::Error for UnknownHashError {}

/// Compute the 32-byte digest of data using the specified algorithm.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> [u8; VALUE_BYTES] {
    match algorithm {
        HashAlgorithm::Sha256 => digest::<Sha256>(data),
        HashAlgorithm::Sha3_256 => digest::<Sha3_256>(data),
        HashAlgorithm::Keccak256 => digest::<Keccak256>(data),
        HashAlgorithm::Blake2s => digest::<Blake2s256>(data),
        HashAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
    }
}

fn digest<D: Digest>(data: &[u8]) -> [u8; VALUE_BYTES] {
    let mut hasher = D::new();
    hasher.update(data);
    let mut out = [0u8; VALUE_BYTES];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hash data and encode the digest.
pub fn hash_encode(data: &[u8], algorithm: HashAlgorithm) -> EncodedString {
    Value256::from_bytes(hash(data, algorithm)).encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let digest = hash(b"hello world", HashAlgorithm::Sha256);
        assert_eq!(
            hex::encode(digest),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(
            hash_encode(b"hello world", HashAlgorithm::Sha256).as_str(),
            "WwVI9RN0Muqno2XndlFBsoTHFqdB4s1aUP8Oe6MP1LZ"
        );
    }

    #[test]
    fn test_sha3_256() {
        assert_eq!(
            hash_encode(b"hello world", HashAlgorithm::Sha3_256).as_str(),
            "auchf0cAsbZUzZLPyJ6pkzKw8JotbNklc0d9lOE0Eve"
        );
    }

    #[test]
    fn test_blake2s() {
        let digest = hash(b"hello world", HashAlgorithm::Blake2s);
        assert_eq!(
            hex::encode(digest),
            "9aec6806794561107e594b1f6a8a6b0c92a0cba9acf5e5e93cca06f781813b0b"
        );
        assert_eq!(
            hash_encode(b"hello world", HashAlgorithm::Blake2s).as_str(),
            "icms2gnXeI4SwFbCmCYqdH39IiDsUaHhm09ytuZD9QF"
        );
    }

    #[test]
    fn test_every_algorithm_round_trips() {
        for algo in HashAlgorithm::ALL {
            let digest = hash(b"base62", algo);
            let encoded = hash_encode(b"base62", algo);
            assert_eq!(encoded.decode().to_bytes(), digest, "{}", algo);
        }
    }

    #[test]
    fn test_algorithms_differ() {
        let a = hash(b"x", HashAlgorithm::Sha3_256);
        let b = hash(b"x", HashAlgorithm::Keccak256);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(HashAlgorithm::from_str("SHA-256"), Ok(HashAlgorithm::Sha256));
        assert_eq!(HashAlgorithm::from_str("sha3_256"), Ok(HashAlgorithm::Sha3_256));
        assert_eq!(HashAlgorithm::from_str("blake3"), Ok(HashAlgorithm::Blake3));
        for algo in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_str(algo.as_str()), Ok(algo));
        }
    }

    #[test]
    fn test_from_str_separators_optional() {
        let aliases = [
            ("sha-256", HashAlgorithm::Sha256),
            ("sha3-256", HashAlgorithm::Sha3_256),
            ("sha3_256", HashAlgorithm::Sha3_256),
            ("keccak-256", HashAlgorithm::Keccak256),
            ("blake2s-256", HashAlgorithm::Blake2s),
            ("blake2s_256", HashAlgorithm::Blake2s),
        ];
        for (alias, algo) in aliases {
            assert_eq!(HashAlgorithm::from_str(alias), Ok(algo), "{}", alias);
            let bare = alias.replace(['-', '_'], "");
            assert_eq!(HashAlgorithm::from_str(&bare), Ok(algo), "{}", bare);
            assert_eq!(HashAlgorithm::from_str(&bare.to_uppercase()), Ok(algo), "{}", bare);
        }
        assert_eq!(HashAlgorithm::from_str("blake2s256"), Ok(HashAlgorithm::Blake2s));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = HashAlgorithm::from_str("md5").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'md5'"));
        assert!(message.contains("sha256, sha3-256"));
    }
}
