use std::fmt;

use crate::core::alphabet::{ALPHABET, ENCODED_LEN};

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not exactly [`ENCODED_LEN`] characters long
    WrongLength { actual: usize },
    /// The input contains a character outside `[0-9A-Za-z]`
    InvalidSymbol {
        symbol: char,
        position: usize,
        /// Offending input, truncated for display. Empty for standalone lookups.
        input: String,
    },
    /// The symbols are valid but describe a word that does not fit in 64 bits.
    /// Such strings are never produced by `encode`.
    Overflow { word: usize },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context
    pub fn invalid_symbol(symbol: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: display_input,
        }
    }

    /// Position of the offending character, if the error points at one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidSymbol { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Renders the message with or without ANSI color, ignoring the terminal.
    pub fn render(&self, use_color: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, use_color);
        out
    }

    fn write_to<W: fmt::Write>(&self, f: &mut W, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::WrongLength { actual } => {
                write_header(f, use_color, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} characters, expected {}",
                    actual, ENCODED_LEN
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "encoded values are always exactly 43 characters; \
                     check for truncation or stray whitespace",
                )
            }
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid symbol {:?} at position {}", symbol, position),
                )?;
                writeln!(f)?;

                // Caret under the offending character, only when we have the input
                if !input.is_empty() && *position < input.chars().count() {
                    writeln!(f, "  {}", input)?;
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                    writeln!(f)?;
                }

                let alphabet = std::str::from_utf8(&ALPHABET).unwrap_or("0-9A-Za-z");
                write_hint(f, use_color, &format!("valid symbols: {}", alphabet))
            }
            DecodeError::Overflow { word } => {
                write_header(
                    f,
                    use_color,
                    &format!("word {} does not fit in 64 bits", word),
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "the input uses valid symbols but is not the encoding of any 256-bit value",
                )
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, should_use_color())
    }
}

impl std::error::Error for DecodeError {}

/// Error returned when parsing a [`Value256`](crate::Value256) from hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    /// Input was not exactly 64 hex digits
    WrongLength { actual: usize },
    /// Input contained a non-hex character
    InvalidHex { symbol: char, position: usize },
}

impl ParseValueError {
    /// Renders the message with or without ANSI color, ignoring the terminal.
    pub fn render(&self, use_color: bool) -> String {
        let mut out = String::new();
        let _ = self.write_to(&mut out, use_color);
        out
    }

    fn write_to<W: fmt::Write>(&self, f: &mut W, use_color: bool) -> fmt::Result {
        match self {
            ParseValueError::WrongLength { actual } => {
                write_header(
                    f,
                    use_color,
                    &format!("expected 64 hex digits, got {}", actual),
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "a 256-bit value is four 16-digit hex words")
            }
            ParseValueError::InvalidHex { symbol, position } => write_header(
                f,
                use_color,
                &format!("invalid hex digit {:?} at position {}", symbol, position),
            ),
        }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, should_use_color())
    }
}

impl std::error::Error for ParseValueError {}

fn write_header<W: fmt::Write>(f: &mut W, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        writeln!(f, "error: {}", message)
    }
}

fn write_hint<W: fmt::Write>(f: &mut W, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
