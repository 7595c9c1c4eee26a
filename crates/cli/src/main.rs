use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokenmap_core::format::{to_pretty_json, today_iso};
use tokenmap_core::{IndexConfig, TokenIndex, build_dataset, parse_auto};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tokenmap", about = "Resolve design-token colors per theme")]
struct Cli {
    /// Theme export (object of themes) or flat token list (array).
    dataset: PathBuf,

    /// Brand worked into brand color style names.
    #[arg(long, default_value = "")]
    brand: String,

    /// TOML file overriding theme ids, path markers and collection names.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the entry for NAME under a theme.
    Resolve {
        name: String,
        #[arg(long, default_value = "Dark")]
        theme: String,
    },
    /// Report whether NAME differs between the dark and light themes.
    Themed { name: String },
    /// Find the unthemed color with the given hex value.
    NameFor { hex: String },
    /// Dump the whole token map.
    Map,
    /// Dump the unthemed colors.
    Unthemed,
    /// Print today's date.
    Date,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => IndexConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => IndexConfig::default(),
    };

    let data = std::fs::read(&cli.dataset)
        .with_context(|| format!("reading {}", cli.dataset.display()))?;
    let dataset = parse_auto(&data)?;

    let mut index = TokenIndex::with_config(config);
    let source_path = cli.dataset.to_string_lossy();
    build_dataset(&mut index, &dataset, &source_path, &cli.brand);

    let mut out = std::io::stdout().lock();
    let found = match &cli.command {
        Command::Resolve { name, theme } => match index.resolve(name, theme) {
            Some(entry) => {
                writeln!(out, "{}", to_pretty_json(entry)?)?;
                true
            }
            None => false,
        },
        Command::Themed { name } => {
            writeln!(out, "{}", index.is_themed(name))?;
            index.entries(name).is_some()
        }
        Command::NameFor { hex } => match index.name_for_hex(hex) {
            Some(name) => {
                writeln!(out, "{name}")?;
                true
            }
            None => false,
        },
        Command::Map => {
            writeln!(out, "{}", to_pretty_json(index.color_map())?)?;
            true
        }
        Command::Unthemed => {
            writeln!(out, "{}", to_pretty_json(index.unthemed())?)?;
            true
        }
        Command::Date => {
            writeln!(out, "{}", today_iso())?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
