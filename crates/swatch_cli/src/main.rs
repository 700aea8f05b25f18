//! Swatch CLI - validate, resolve and merge design-token themes

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use swatch_theme::Mode;

use config::OutputFormat;

/// Design-token theme tool
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(about = "Validate, resolve and merge design-token themes")]
#[command(version)]
struct Cli {
    /// Config file or directory containing swatch.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a preset theme as JSON
    Init {
        /// Preset id (see `swatch presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List built-in presets
    Presets,

    /// Report dangling or malformed references
    Validate {
        /// Theme JSON file (falls back to the configured theme or preset)
        theme: Option<PathBuf>,
    },

    /// Print the theme resolved for one mode
    Resolve {
        /// Theme JSON file (falls back to the configured theme or preset)
        theme: Option<PathBuf>,

        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Treat a scale on a foundation reference as unresolvable
        #[arg(long)]
        strict: bool,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Merge a partial theme onto a base theme
    Merge {
        /// Base theme JSON file
        base: PathBuf,

        /// Partial theme JSON file
        partial: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse().map_err(|err: swatch_theme::ThemeError| err.to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
