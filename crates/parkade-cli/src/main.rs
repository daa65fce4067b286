#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "parkade: deterministic parking lot simulator",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (default: pretty on a terminal, text when piped).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Simulate every configured lot",
        long_about = "Simulate each configured lot in order on one shared random stream and\n\
                      print admitted, refused, hours parked, revenue and average stay per lot.",
        after_help = "EXAMPLES:\n    # Reference run: lots of 50..250 slots for 31 days, seed 314159\n    parkade run\n\n\
                      # Custom lots and duration\n    parkade run --lots 10,20,30 --days 7\n\n\
                      # Machine-readable output\n    parkade run --format json"
    )]
    Run(cmd::run::RunArgs),

    #[command(
        about = "Show the hourly trace of one lot",
        long_about = "Replay one lot from the configured campaign with the exact random state\n\
                      it had there, printing departures, arrivals and occupancy for every hour.",
        after_help = "EXAMPLES:\n    # Trace the first lot\n    parkade trace\n\n\
                      # Trace the third lot, skipping idle hours\n    parkade trace --lot 2 --active-only\n\n\
                      # Machine-readable output\n    parkade trace --lot 1 --json"
    )]
    Trace(cmd::trace::TraceArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("PARKADE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "parkade=debug,info"
        } else {
            "parkade=info,warn"
        })
    });

    let format = env::var("PARKADE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let working_dir = env::current_dir()?;
    let output = output::resolve_output_mode(cli.format, cli.json);
    debug!(?output, "resolved output mode");

    match &cli.command {
        Commands::Run(args) => cmd::run::run_run(args, output, &working_dir),
        Commands::Trace(args) => cmd::trace::run_trace(args, output, &working_dir),
    }
}
