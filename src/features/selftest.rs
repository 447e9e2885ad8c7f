//! Randomized round-trip harness.
//!
//! Checks the alphabet bijection, a fixed set of boundary values and any
//! number of random values, and collects a symbol histogram along the way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::alphabet::{ALPHABET, BASE, SymbolHistogram, char_to_digit, digit_to_char};
use crate::core::value::Value256;
use crate::encoders::algorithms::word::WORD_SPAN;
use crate::encoders::codec::{decode, encode_with};

/// How many random values to try and where their randomness comes from.
#[derive(Debug, Clone, Default)]
pub struct SelfTestOptions {
    pub cycles: u64,
    /// Fixed seed for reproducible runs; OS entropy otherwise.
    pub seed: Option<u64>,
}

/// A value that did not survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub source: String,
    pub encoded: String,
    /// Decoded value in hex, when decoding succeeded.
    pub decoded: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub cycles: u64,
    pub boundary_cases: usize,
    pub seed: Option<u64>,
    pub alphabet_ok: bool,
    pub mismatches: Vec<Mismatch>,
    /// Symbol usage across every encode, indexed by digit.
    pub histogram: Vec<u64>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.alphabet_ok && self.mismatches.is_empty()
    }

    /// Symbols paired with their counts, in alphabet order.
    pub fn symbol_counts(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ALPHABET
            .iter()
            .map(|&b| char::from(b))
            .zip(self.histogram.iter().copied())
    }
}

/// Values at the edges of the word and quotient ranges.
pub fn boundary_values() -> Vec<Value256> {
    let max_quotient = WORD_SPAN * 21;
    let mut values = vec![
        Value256::ZERO,
        Value256::MAX,
        Value256::new([WORD_SPAN - 1; 4]),
        Value256::new([WORD_SPAN; 4]),
        Value256::new([max_quotient; 4]),
        Value256::new([max_quotient, u64::MAX, max_quotient, u64::MAX]),
        Value256::new([u64::MAX - 1, 1, WORD_SPAN + 1, WORD_SPAN - 2]),
    ];
    for index in 0..4 {
        let mut words = [0u64; 4];
        words[index] = u64::MAX;
        values.push(Value256::new(words));
        words[index] = 1;
        values.push(Value256::new(words));
    }
    values
}

/// Runs the harness.
pub fn run(options: &SelfTestOptions) -> SelfTestReport {
    let histogram = SymbolHistogram::new();
    let mut mismatches = Vec::new();

    let alphabet_ok = (0..BASE as u8).all(|digit| char_to_digit(digit_to_char(digit)) == Ok(digit));

    let boundaries = boundary_values();
    for value in &boundaries {
        check(value, &histogram, &mut mismatches);
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    for _ in 0..options.cycles {
        let value: Value256 = rng.random();
        check(&value, &histogram, &mut mismatches);
    }

    SelfTestReport {
        cycles: options.cycles,
        boundary_cases: boundaries.len(),
        seed: options.seed,
        alphabet_ok,
        mismatches,
        histogram: histogram.drain().to_vec(),
    }
}

fn check(value: &Value256, histogram: &SymbolHistogram, mismatches: &mut Vec<Mismatch>) {
    let encoded = encode_with(value, histogram);
    match decode(encoded.as_str()) {
        Ok(decoded) if decoded == *value => {}
        Ok(decoded) => mismatches.push(Mismatch {
            source: value.to_hex(),
            encoded: encoded.to_string(),
            decoded: Some(decoded.to_hex()),
            error: None,
        }),
        Err(err) => mismatches.push(Mismatch {
            source: value.to_hex(),
            encoded: encoded.to_string(),
            decoded: None,
            error: Some(format!("{:?}", err)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::ENCODED_LEN;

    #[test]
    fn test_seeded_run_passes() {
        let report = run(&SelfTestOptions {
            cycles: 2_000,
            seed: Some(42),
        });
        assert!(report.passed());
        assert_eq!(report.cycles, 2_000);
        assert_eq!(report.boundary_cases, boundary_values().len());

        let encodes = 2_000 + report.boundary_cases as u64;
        let total: u64 = report.histogram.iter().sum();
        assert_eq!(total, encodes * ENCODED_LEN as u64);
    }

    #[test]
    fn test_seed_makes_histogram_reproducible() {
        let options = SelfTestOptions {
            cycles: 500,
            seed: Some(7),
        };
        assert_eq!(run(&options).histogram, run(&options).histogram);
    }

    #[test]
    fn test_zero_cycles_still_checks_boundaries() {
        let report = run(&SelfTestOptions::default());
        assert!(report.passed());
        assert!(report.histogram.iter().sum::<u64>() > 0);
    }

    #[test]
    fn test_symbol_counts_follow_alphabet() {
        let report = run(&SelfTestOptions {
            cycles: 0,
            seed: Some(1),
        });
        let pairs: Vec<(char, u64)> = report.symbol_counts().collect();
        assert_eq!(pairs.len(), 62);
        assert_eq!(pairs[0].0, '0');
        assert_eq!(pairs[61].0, 'z');
    }

    #[test]
    fn test_report_serializes() {
        let report = run(&SelfTestOptions {
            cycles: 10,
            seed: Some(3),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cycles"], 10);
        assert_eq!(json["seed"], 3);
        assert_eq!(json["histogram"].as_array().unwrap().len(), 62);
        assert!(json["mismatches"].as_array().unwrap().is_empty());
    }
}
