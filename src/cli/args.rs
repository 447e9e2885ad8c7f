use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding values
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Value as 64 hex digits (reads one value per line from input if not provided)
    pub value: Option<String>,

    /// Input file (reads from stdin if not provided)
    #[arg(short = 'f', long, conflicts_with = "value")]
    pub file: Option<PathBuf>,

    /// Treat input as raw bytes, 32 per value
    #[arg(short = 'b', long, conflicts_with = "value")]
    pub binary: bool,
}

/// Arguments for decoding values
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded value, 43 symbols (reads one per line from input if not provided)
    pub text: Option<String>,

    /// Input file (reads from stdin if not provided)
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for hashing data
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Hash algorithm (sha256, sha3-256, keccak256, blake2s, blake3)
    #[arg(short = 'a', long, value_name = "ALG")]
    pub algorithm: Option<String>,

    /// Also print the digest as hex on stderr
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for the round-trip self-test
#[derive(Args, Debug)]
pub struct SelfTestArgs {
    /// Number of random values to round-trip
    #[arg(short = 'n', long)]
    pub cycles: Option<u64>,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
