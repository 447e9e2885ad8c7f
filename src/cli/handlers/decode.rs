use crate::cli::{args::DecodeArgs, global::GlobalArgs, input::read_lines};
use std::io::{self, Write};

pub fn handle(args: DecodeArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let lines = read_lines(args.text, args.file.as_ref())?;
    for (index, line) in lines.iter().enumerate() {
        let value = base62_256::decode(line).inspect_err(|_| {
            if !global.quiet && lines.len() > 1 {
                eprintln!("Notice: stopped at input value {}", index + 1);
            }
        })?;

        if global.raw {
            // Raw binary output
            out.write_all(&value.to_bytes())?;
        } else {
            writeln!(out, "{}", value.to_hex())?;
        }
    }

    Ok(())
}
