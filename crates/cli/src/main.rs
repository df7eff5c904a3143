//! Cache placement simulator CLI.
//!
//! This binary is the presentation layer around `cachesim-core`. It performs:
//! 1. **Input:** Sizing flags, an optional JSON config file, and addresses from the
//!    command line and/or a trace file.
//! 2. **Simulation:** One call to the core runner for all three cache organizations.
//! 3. **Output:** Fixed-width text tables (optionally padded, with hit/miss summaries) or JSON.
//!
//! Any input error is reported on stderr with exit code 1 before anything is printed.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{GeometryCheck, SimConfig};
use cachesim_core::sim::{load_trace_file, parse_trace};
use cachesim_core::{SimResult, run};

use crate::render::RenderOptions;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Replay an address trace through direct-mapped, fully-associative and set-associative caches",
    long_about = "Replay an address trace through direct-mapped, fully-associative and set-associative caches and report the tag/index/offset split and hit or miss of every access.\n\nExamples:\n  cachesim -c 32 -b 2 -w 2 0 8 0 16 24 0\n  cachesim --config cache.json --trace addrs.txt --format json\n  cachesim -c 64 -b 4 -w 1 --pad --stats 3 7 19 3"
)]
struct Cli {
    /// Total cache capacity in bytes.
    #[arg(short = 'c', long)]
    cache_size: Option<u64>,

    /// Number of blocks per set (the set-associative way count).
    #[arg(short = 'b', long = "blocks")]
    blocks_or_ways: Option<u64>,

    /// Number of 4-byte words per block.
    #[arg(short = 'w', long)]
    words_per_block: Option<u64>,

    /// JSON configuration file; explicit flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File of whitespace-separated addresses, replayed before any positional addresses.
    #[arg(short = 't', long)]
    trace: Option<PathBuf>,

    /// Reject block sizes and set counts that are not powers of two.
    #[arg(long)]
    strict: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Zero-pad binary address, index and offset columns to their field widths.
    #[arg(long)]
    pad: bool,

    /// Append a hit/miss summary to each table.
    #[arg(long)]
    stats: bool,

    /// Word addresses to replay, in order.
    #[arg(allow_negative_numbers = true)]
    addresses: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width tables.
    Text,
    /// Pretty-printed JSON report.
    Json,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let output = match simulate(&cli) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Error: could not write output: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolves the configuration, loads the trace, runs the simulation and renders it.
///
/// Nothing is rendered unless every input parses and the geometry is valid.
fn simulate(cli: &Cli) -> SimResult<String> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved configuration");

    let mut trace = match &cli.trace {
        Some(path) => load_trace_file(path)?,
        None => Vec::new(),
    };
    trace.extend(parse_trace(&cli.addresses.join(" "))?);

    let report = run(&config, &trace)?;
    match cli.format {
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render::render_report(
            &report,
            RenderOptions {
                pad: cli.pad,
                stats: cli.stats,
            },
        )),
    }
}

/// Layers command-line flags over the config file (or the defaults).
fn resolve_config(cli: &Cli) -> SimResult<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(cache_size) = cli.cache_size {
        config.cache_size = cache_size;
    }
    if let Some(blocks_or_ways) = cli.blocks_or_ways {
        config.blocks_or_ways = blocks_or_ways;
    }
    if let Some(words_per_block) = cli.words_per_block {
        config.words_per_block = words_per_block;
    }
    if cli.strict {
        config.geometry_check = GeometryCheck::Strict;
    }
    Ok(config)
}
