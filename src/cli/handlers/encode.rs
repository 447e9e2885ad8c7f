use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    input::{read_bytes, read_lines},
};
use base62_256::{VALUE_BYTES, Value256};
use std::io::{self, Write};

pub fn handle(args: EncodeArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Binary input: fixed 32-byte records
    if args.binary {
        let data = read_bytes(args.file.as_ref())?;
        if data.is_empty() || data.len() % VALUE_BYTES != 0 {
            return Err(format!(
                "Binary input is {} bytes, expected a non-zero multiple of {}",
                data.len(),
                VALUE_BYTES
            )
            .into());
        }

        for record in data.chunks_exact(VALUE_BYTES) {
            let mut bytes = [0u8; VALUE_BYTES];
            bytes.copy_from_slice(record);
            writeln!(out, "{}", Value256::from_bytes(bytes).encode())?;
        }
        return Ok(());
    }

    // Hex input: one value per line
    let lines = read_lines(args.value, args.file.as_ref())?;
    for (index, line) in lines.iter().enumerate() {
        let value = Value256::from_hex(line).inspect_err(|_| {
            if !global.quiet && lines.len() > 1 {
                eprintln!("Notice: stopped at input value {}", index + 1);
            }
        })?;
        writeln!(out, "{}", value.encode())?;
    }

    Ok(())
}
