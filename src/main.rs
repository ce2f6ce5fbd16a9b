//! Command-line interface for kv-workload.
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a three-file harness DSL workload (32-bit keys)
//! kv-workload generate \
//!   --entries 1000000 --queries 1000000 \
//!   --key-distribution uniform --value-distribution uniform \
//!   --read-percentage 50 --selectivity 100 \
//!   --data-file data.csv --query-file queries.dsl --expected-file test.exp
//!
//! # Generate a two-file inline CSV workload (64-bit keys)
//! kv-workload generate \
//!   --format inline-csv --entries 1000 --queries 1000 \
//!   --query-file queries.csv
//!
//! # Validate an emitted file set
//! kv-workload check --format inline-csv \
//!   --data-file data.csv --query-file queries.csv
//! ```

use clap::{Parser, Subcommand};
use kv_workload::{run_check, run_generate, CheckArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "kv-workload")]
#[command(about = "Reproducible workload generator for benchmarking key-value stores")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset, query stream, and expected results
    Generate(GenerateArgs),
    /// Validate an emitted workload file set
    Check(CheckArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
    }
}
