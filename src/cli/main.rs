//! Num Kernels CLI
//!
//! Runs one kernel once and prints its result.

use num_kernels::commands::{self, TrapezoidParams};
use num_kernels::{telemetry, Config, Result};

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Num Kernels
#[derive(Parser, Debug)]
#[command(name = "num-kernels")]
#[command(about = "Naive numeric micro-kernels: prime sieve and trapezoidal integration")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "NUM_KERNELS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Enable JSON log format
    #[arg(long, env = "JSON_LOGS", global = true)]
    json_logs: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every prime up to N
    Sieve {
        /// Inclusive upper bound
        n: usize,

        /// Print only the number of primes
        #[arg(long)]
        count_only: bool,
    },

    /// Integrate x² over [A, B] with the trapezoidal rule
    Trapezoid {
        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,

        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,

        /// Number of subintervals
        #[arg(short, long)]
        n: Option<usize>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        if e.is_broken_pipe() {
            return;
        }
        tracing::error!(category = e.category(), "{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    // Apply command line overrides
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json = true;
    }

    config.validate()?;
    telemetry::init_logging(&config.logging)?;

    info!("num-kernels v{}", num_kernels::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Sieve { n, count_only } => {
            commands::run_sieve(&mut out, &config, n, count_only, args.json)?
        }
        Command::Trapezoid { a, b, n } => {
            let params = TrapezoidParams::resolve(&config.trapezoid, a, b, n);
            commands::run_trapezoid(&mut out, params, args.json)?
        }
    }

    out.flush()?;
    Ok(())
}
