//! `generate` command: synthesize a workload and emit it.

use crate::summary::RunSummary;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use workload_emit::{EmitMetrics, HarnessDslEmitter, InlineCsvEmitter};
use workload_engine::{KeyDistribution, ValueDistribution, WorkloadKey, WorkloadSession};
use workload_types::QueryRecord;

/// Output format, which also fixes the key/value width.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// 32-bit keys; data, query, and expected-results files.
    HarnessDsl,
    /// 64-bit keys; data and query files with expected values inlined.
    InlineCsv,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDistributionArg {
    Uniform,
    Sequential,
    Normal,
}

impl From<KeyDistributionArg> for KeyDistribution {
    fn from(arg: KeyDistributionArg) -> Self {
        match arg {
            KeyDistributionArg::Uniform => KeyDistribution::Uniform,
            KeyDistributionArg::Sequential => KeyDistribution::Sequential,
            KeyDistributionArg::Normal => KeyDistribution::Normal,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueDistributionArg {
    Uniform,
    SameAsKey,
}

impl From<ValueDistributionArg> for ValueDistribution {
    fn from(arg: ValueDistributionArg) -> Self {
        match arg {
            ValueDistributionArg::Uniform => ValueDistribution::Uniform,
            ValueDistributionArg::SameAsKey => ValueDistribution::SameAsKey,
        }
    }
}

/// Arguments for `kv-workload generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of entries to start the dataset with
    #[arg(long, short = 'N', default_value_t = 10_000_000)]
    pub entries: u64,

    /// Number of top-level query steps to generate
    #[arg(long, default_value_t = 10_000_000)]
    pub queries: u64,

    /// Distribution of generated keys
    #[arg(long, value_enum, default_value = "uniform")]
    pub key_distribution: KeyDistributionArg,

    /// Distribution of generated values
    #[arg(long, value_enum, default_value = "uniform")]
    pub value_distribution: ValueDistributionArg,

    /// Percentage of reads that target an existing key
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100), default_value_t = 100)]
    pub selectivity: u32,

    /// Percentage of query steps that are reads
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100), default_value_t = 50)]
    pub read_percentage: u32,

    /// Output format (also selects the key width)
    #[arg(long, value_enum, default_value = "harness-dsl")]
    pub format: OutputFormat,

    /// File to write the dataset to
    #[arg(long, default_value = "data.csv")]
    pub data_file: PathBuf,

    /// File to write the query stream to
    #[arg(long, default_value = "queries.dsl")]
    pub query_file: PathBuf,

    /// File to write expected results to (harness-dsl format only)
    #[arg(long, default_value = "test.exp")]
    pub expected_file: PathBuf,

    /// Random seed; the same seed and configuration reproduce the workload
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Optional JSON run summary
    #[arg(long)]
    pub summary_file: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    info!(
        "generating workload: {} entries, {} query steps, format {:?}, seed {}",
        args.entries, args.queries, args.format, args.seed
    );

    let (summary, metrics) = match args.format {
        OutputFormat::HarnessDsl => {
            let (session, records, mut summary) = synthesize::<i32>(&args)?;
            let emitter =
                HarnessDslEmitter::new(&args.data_file, &args.query_file, &args.expected_file);
            let metrics = emitter.emit(session.dataset(), &records)?;
            summary.final_entries = session.dataset().len() as u64;
            (summary, metrics)
        }
        OutputFormat::InlineCsv => {
            let (session, records, mut summary) = synthesize::<u64>(&args)?;
            let emitter = InlineCsvEmitter::new(&args.data_file, &args.query_file);
            let metrics = emitter.emit(session.dataset(), &records)?;
            summary.final_entries = session.dataset().len() as u64;
            (summary, metrics)
        }
    };

    if let Some(path) = &args.summary_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        info!("run summary written to {}", path.display());
    }

    report(&summary, &metrics);
    Ok(())
}

type Synthesized<T> = (WorkloadSession<T>, Vec<QueryRecord<T>>, RunSummary);

fn synthesize<T: WorkloadKey>(args: &GenerateArgs) -> anyhow::Result<Synthesized<T>> {
    let mut session = WorkloadSession::<T>::new(
        args.key_distribution.into(),
        args.value_distribution.into(),
        args.seed,
    )?;

    session
        .build_dataset(args.entries)
        .context("initial dataset generation failed")?;

    let read_ratio = f64::from(args.read_percentage) / 100.0;
    let selectivity = f64::from(args.selectivity) / 100.0;
    let records = session
        .synthesize_queries(args.queries, read_ratio, selectivity)
        .context("query stream synthesis failed")?;

    let mut summary = RunSummary {
        seed: args.seed,
        format: format_name(args.format).to_string(),
        key_distribution: format!("{:?}", args.key_distribution).to_lowercase(),
        value_distribution: match args.value_distribution {
            ValueDistributionArg::Uniform => "uniform".to_string(),
            ValueDistributionArg::SameAsKey => "same-as-key".to_string(),
        },
        initial_entries: args.entries,
        final_entries: 0,
        query_steps: 0,
        hit_reads: 0,
        miss_reads: 0,
        writes: 0,
        verification_reads: 0,
    };
    summary.tally(&records);

    Ok((session, records, summary))
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::HarnessDsl => "harness-dsl",
        OutputFormat::InlineCsv => "inline-csv",
    }
}

fn report(summary: &RunSummary, metrics: &EmitMetrics) {
    info!(
        "workload complete: {} entries ({} initial), {} query steps \
         ({} hits, {} misses, {} writes, {} verification reads), \
         {} bytes emitted in {:?}",
        summary.final_entries,
        summary.initial_entries,
        summary.query_steps,
        summary.hit_reads,
        summary.miss_reads,
        summary.writes,
        summary.verification_reads,
        metrics.bytes_written,
        metrics.duration
    );
}
