use crate::cli::{args::HashArgs, global::GlobalArgs, input::read_bytes};
use base62_256::{HashAlgorithm, Settings, Value256};
use std::io::{self, Write};

pub fn handle(
    args: HashArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse hash algorithm, falling back to the configured default
    let hash_algo = match &args.algorithm {
        Some(name) => HashAlgorithm::from_str(name)?,
        None => settings.hash_algorithm()?,
    };

    let input_data = read_bytes(args.file.as_ref())?;
    let digest = base62_256::hash(&input_data, hash_algo);

    if global.raw {
        // Raw binary output
        io::stdout().write_all(&digest)?;
    } else {
        println!("{}", Value256::from_bytes(digest).encode());
    }

    if args.hex {
        eprintln!("Hash ({}): {}", hash_algo, hex::encode(digest));
    }

    Ok(())
}
