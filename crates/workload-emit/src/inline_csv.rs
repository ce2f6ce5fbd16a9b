//! Two-file inline CSV emitter (64-bit format).

use crate::data_file::write_data_file;
use crate::error::EmitError;
use crate::metrics::EmitMetrics;
use crate::WRITE_BUFFER_SIZE;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use workload_engine::WorkloadKey;
use workload_types::{Entry, ExpectedResult, Query, QueryRecord};

/// Emits the two-file inline CSV format. Expected results ride along on the
/// query lines, so there is no separate expected-results file:
///
/// - `READ,<key>,<value>` when the expected value is known;
/// - `READ,<key>` for a deliberate miss;
/// - `WRITE,<key>,<value>` for writes.
pub struct InlineCsvEmitter {
    data_file: PathBuf,
    query_file: PathBuf,
}

impl InlineCsvEmitter {
    pub fn new<P: AsRef<Path>>(data_file: P, query_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            query_file: query_file.as_ref().to_path_buf(),
        }
    }

    /// Render the full dataset and query stream, one flush per stream.
    pub fn emit<T: WorkloadKey>(
        &self,
        dataset: &[Entry<T>],
        records: &[QueryRecord<T>],
    ) -> Result<EmitMetrics, EmitError> {
        let start = Instant::now();
        let mut metrics = EmitMetrics::default();

        metrics.entries_written = write_data_file(&self.data_file, dataset)?;

        let query_file = File::create(&self.query_file)?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, query_file);
        for record in records {
            match (record.query, record.expected) {
                (Query::Read { key }, Some(ExpectedResult::Present(value))) => {
                    writeln!(writer, "READ,{key},{value}")?;
                }
                (Query::Read { key }, _) => writeln!(writer, "READ,{key}")?,
                (Query::Write { key, value }, _) => writeln!(writer, "WRITE,{key},{value}")?,
            }
            metrics.queries_written += 1;
        }
        writer.flush()?;

        metrics.bytes_written = std::fs::metadata(&self.data_file)?.len()
            + std::fs::metadata(&self.query_file)?.len();
        metrics.duration = start.elapsed();

        info!(
            "inline CSV emit complete: {} entries, {} queries, {} bytes in {:?}",
            metrics.entries_written, metrics.queries_written, metrics.bytes_written, metrics.duration
        );
        Ok(metrics)
    }
}
