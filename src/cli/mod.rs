mod args;
mod global;
mod handlers;
mod input;

use base62_256::{DecodeError, ParseValueError, Settings};
use clap::{Parser, Subcommand};

use args::{ConfigArgs, DecodeArgs, EncodeArgs, HashArgs, SelfTestArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base62-256")]
#[command(version)]
#[command(about = "Encode 256-bit values as 43 base62 symbols and back", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode hex or binary 256-bit values
    Encode(EncodeArgs),
    /// Decode 43-symbol strings back to hex or binary
    Decode(DecodeArgs),
    /// Hash data with a 256-bit digest and encode the result
    Hash(HashArgs),
    /// Round-trip random and boundary values, reporting symbol usage
    Selftest(SelfTestArgs),
    /// Show effective settings and where they came from
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let no_color = cli.global.no_color;
    dispatch(cli).map_err(|err| {
        if no_color {
            uncolored(err)
        } else {
            err
        }
    })
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Load settings with user overrides
    let loaded = Settings::load_with_overrides(cli.global.config.as_deref(), cli.global.quiet)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global),
        Commands::Hash(args) => handlers::hash::handle(args, &cli.global, &loaded.settings),
        Commands::Selftest(args) => {
            handlers::selftest::handle(args, &cli.global, &loaded.settings)
        }
        Commands::Config(args) => handlers::config::handle(args, &loaded),
    }
}

/// Re-renders codec errors without ANSI escapes for `--no-color`.
fn uncolored(err: Box<dyn std::error::Error>) -> Box<dyn std::error::Error> {
    if let Some(decode) = err.downcast_ref::<DecodeError>() {
        return decode.render(false).into();
    }
    if let Some(parse) = err.downcast_ref::<ParseValueError>() {
        return parse.render(false).into();
    }
    err
}
