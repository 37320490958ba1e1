//! RV32I pipeline simulator CLI.
//!
//! This binary runs the simulator over one input directory. It performs:
//! 1. **Setup:** Parses arguments, installs logging, and loads an optional JSON config.
//! 2. **Run:** Simulates the selected cores over `imem.txt` and `dmem.txt`.
//! 3. **Report:** Writes the result files and prints a statistics summary per core.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rv5s_core::config::{Config, CoreSelection};
use rv5s_core::sim::run_all;
use rv5s_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "rv5s",
    author,
    version,
    about = "Cycle-accurate RV32I five-stage pipeline simulator",
    long_about = "Simulate the programs in an input directory on a single-stage and a five-stage core.\n\nThe directory must contain imem.txt and dmem.txt (one 8-digit binary byte per line).\nResults are written next to them unless --outdir is given.\n\nExamples:\n  rv5s --iodir tests/tc0\n  rv5s --iodir tests/tc0 --core five --trace\n  rv5s --iodir tests/tc0 --config rv5s.json"
)]
struct Cli {
    /// Directory containing imem.txt and dmem.txt.
    #[arg(long)]
    iodir: PathBuf,

    /// Directory for result files (defaults to --iodir).
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Cores to simulate (overrides the config file).
    #[arg(long, value_enum)]
    core: Option<CoreArg>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cycle budget per core (overrides the config file).
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Log every pipeline stage at debug level.
    #[arg(long)]
    trace: bool,

    /// Statistics sections to print, comma separated (default: all).
    #[arg(long, value_delimiter = ',', value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS.iter().copied()))]
    stats: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CoreArg {
    /// Single-stage core only.
    Single,
    /// Five-stage core only.
    Five,
    /// Both cores.
    Both,
}

impl From<CoreArg> for CoreSelection {
    fn from(arg: CoreArg) -> Self {
        match arg {
            CoreArg::Single => Self::Single,
            CoreArg::Five => Self::Five,
            CoreArg::Both => Self::Both,
        }
    }
}

/// Installs the `tracing` subscriber; `RUST_LOG` wins over the defaults.
fn init_logging(trace: bool) {
    let default = if trace { "warn,rv5s=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(2);
        }),
        None => Config::default(),
    };
    if let Some(core) = cli.core {
        config.general.cores = core.into();
    }
    if let Some(max) = cli.max_cycles {
        config.general.max_cycles = max;
    }
    config.general.trace_instructions |= cli.trace;

    println!("IO Directory: {}", cli.iodir.display());

    match run_all(&cli.iodir, cli.outdir.as_deref(), &config) {
        Ok(reports) => {
            let sections: Vec<&str> = cli.stats.iter().map(String::as_str).collect();
            for (kind, stats) in &reports {
                stats.print_sections(kind.title(), &sections);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
