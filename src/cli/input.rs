use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read raw input data from a file, or stdin if none given
pub fn read_bytes(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Collect the trimmed, non-empty lines to process.
///
/// A positional argument wins; otherwise the file or stdin is read as UTF-8.
pub fn read_lines(
    inline: Option<String>,
    file: Option<&PathBuf>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = match inline {
        Some(value) => value,
        None => String::from_utf8(read_bytes(file)?)
            .map_err(|_| "Input data is not valid UTF-8 text")?,
    };

    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err("No input values".into());
    }
    Ok(lines)
}
