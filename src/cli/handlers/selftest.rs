use crate::cli::{args::SelfTestArgs, global::GlobalArgs};
use base62_256::{SelfTestOptions, SelfTestReport, Settings, selftest};

/// Width of the longest histogram bar
const BAR_WIDTH: u64 = 40;

pub fn handle(
    args: SelfTestArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = SelfTestOptions {
        cycles: args.cycles.unwrap_or(settings.selftest_cycles),
        seed: args.seed.or(settings.selftest_seed),
    };

    if !global.quiet && !args.json {
        eprintln!(
            "Notice: round-tripping {} random values{}",
            options.cycles,
            options
                .seed
                .map(|seed| format!(" (seed {})", seed))
                .unwrap_or_default()
        );
    }

    let report = selftest::run(&options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.passed() {
        Ok(())
    } else {
        Err(format!(
            "Self-test failed: {} of {} values did not round-trip",
            report.mismatches.len(),
            report.cycles + report.boundary_cases as u64
        )
        .into())
    }
}

fn print_report(report: &SelfTestReport) {
    for mismatch in &report.mismatches {
        println!("Source:  {}", mismatch.source);
        println!("Encoded: {}", mismatch.encoded);
        match (&mismatch.decoded, &mismatch.error) {
            (Some(decoded), _) => println!("Decoded: {}", decoded),
            (None, Some(error)) => println!("Error:   {}", error),
            (None, None) => {}
        }
        println!();
    }

    println!(
        "Alphabet bijection: {}",
        if report.alphabet_ok { "ok" } else { "BROKEN" }
    );
    println!(
        "Round trips: {} boundary + {} random, {} mismatches",
        report.boundary_cases,
        report.cycles,
        report.mismatches.len()
    );
    println!();
    println!("Symbol usage:");

    let max = report.histogram.iter().copied().max().unwrap_or(0).max(1);
    for (symbol, count) in report.symbol_counts() {
        let bar = (count * BAR_WIDTH).div_ceil(max) as usize;
        println!("  {}  {:>12}  {}", symbol, count, "#".repeat(bar));
    }
}
