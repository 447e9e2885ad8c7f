use crate::cli::args::ConfigArgs;
use base62_256::{HashAlgorithm, LoadedSettings};

pub fn handle(args: ConfigArgs, loaded: &LoadedSettings) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &loaded.settings;
    let sources: Vec<String> = loaded
        .sources
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let hashes: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.as_str()).collect();

    // JSON output
    if args.json {
        let output = serde_json::json!({
            "settings": settings,
            "sources": sources,
            "hashes": hashes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Settings:");
    println!("  default_hash: {}", settings.default_hash);
    println!("  selftest_cycles: {}", settings.selftest_cycles);
    match settings.selftest_seed {
        Some(seed) => println!("  selftest_seed: {}", seed),
        None => println!("  selftest_seed: (random)"),
    }

    if sources.is_empty() {
        println!("Sources: built-in defaults only");
    } else {
        println!("Sources: built-in defaults, then");
        for source in &sources {
            println!("  {}", source);
        }
    }
    println!("Hash algorithms: {}", hashes.join(", "));

    Ok(())
}
