//! `check` command: validate an emitted workload file set.

use crate::generate::OutputFormat;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use workload_emit::{check_harness_dsl, check_inline_csv, CheckReport};

/// Arguments for `kv-workload check`.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Format the files were emitted in
    #[arg(long, value_enum, default_value = "harness-dsl")]
    pub format: OutputFormat,

    /// Data file to validate
    #[arg(long, default_value = "data.csv")]
    pub data_file: PathBuf,

    /// Query file to validate
    #[arg(long, default_value = "queries.dsl")]
    pub query_file: PathBuf,

    /// Expected-results file (harness-dsl format only)
    #[arg(long, default_value = "test.exp")]
    pub expected_file: PathBuf,
}

pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let report: CheckReport = match args.format {
        OutputFormat::HarnessDsl => {
            check_harness_dsl(&args.data_file, &args.query_file, &args.expected_file)
                .context("harness DSL workload failed validation")?
        }
        OutputFormat::InlineCsv => check_inline_csv(&args.data_file, &args.query_file)
            .context("inline CSV workload failed validation")?,
    };

    info!(
        "check passed: {} entries, {} queries ({} reads, {} writes), {} expected results",
        report.entries, report.queries, report.reads, report.writes, report.expected_results
    );
    println!(
        "OK: {} entries, {} queries ({} reads / {} writes), {} expected results",
        report.entries, report.queries, report.reads, report.writes, report.expected_results
    );
    Ok(())
}
