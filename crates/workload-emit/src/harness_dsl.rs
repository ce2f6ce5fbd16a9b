//! Three-file harness DSL emitter (32-bit format).

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

/// Emits the three-file harness DSL format:
///
/// - data file: `<key>,<value>` per entry;
/// - query file: a `load <dataFile>` directive, then `read <key>` /
///   `write <key> <value>` lines in generation order;
/// - expected file: one `<value>` line per read whose expected value is
///   known (hits and verification reads), positionally aligned with those
///   read lines.
pub struct HarnessDslEmitter {
    data_file: PathBuf,
    query_file: PathBuf,
    expected_file: PathBuf,
}

impl HarnessDslEmitter {
    pub fn new<P: AsRef<Path>>(data_file: P, query_file: P, expected_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            query_file: query_file.as_ref().to_path_buf(),
            expected_file: expected_file.as_ref().to_path_buf(),
        }
    }

    /// Render the full dataset and query stream. Each output stream is
    /// flushed once after all of its records are written.
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
        writeln!(writer, "load {}", self.data_file.display())?;
        for record in records {
            match record.query {
                Query::Read { key } => writeln!(writer, "read {key}")?,
                Query::Write { key, value } => writeln!(writer, "write {key} {value}")?,
            }
            metrics.queries_written += 1;
        }
        writer.flush()?;

        let expected_file = File::create(&self.expected_file)?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, expected_file);
        for record in records {
            if let (Query::Read { .. }, Some(ExpectedResult::Present(value))) =
                (record.query, record.expected)
            {
                writeln!(writer, "{value}")?;
                metrics.expected_written += 1;
            }
        }
        writer.flush()?;

        metrics.bytes_written = std::fs::metadata(&self.data_file)?.len()
            + std::fs::metadata(&self.query_file)?.len()
            + std::fs::metadata(&self.expected_file)?.len();
        metrics.duration = start.elapsed();

        info!(
            "harness DSL emit complete: {} entries, {} queries, {} expected lines, {} bytes in {:?}",
            metrics.entries_written,
            metrics.queries_written,
            metrics.expected_written,
            metrics.bytes_written,
            metrics.duration
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use workload_types::ExpectedResult;

    #[test]
    fn test_emit_grammar() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data.csv");
        let queries = dir.path().join("queries.dsl");
        let expected = dir.path().join("test.exp");

        let dataset = vec![Entry::new(0i32, 10), Entry::new(1, 11), Entry::new(2, 12)];
        let records = vec![
            QueryRecord::read(1, ExpectedResult::Present(11)),
            QueryRecord::read(99, ExpectedResult::Absent),
            QueryRecord::write(2, 12),
            QueryRecord::read(2, ExpectedResult::Present(12)),
        ];

        let emitter = HarnessDslEmitter::new(&data, &queries, &expected);
        let metrics = emitter.emit(&dataset, &records).unwrap();

        assert_eq!(metrics.entries_written, 3);
        assert_eq!(metrics.queries_written, 4);
        assert_eq!(metrics.expected_written, 2);

        assert_eq!(
            std::fs::read_to_string(&data).unwrap(),
            "0,10\n1,11\n2,12\n"
        );
        assert_eq!(
            std::fs::read_to_string(&queries).unwrap(),
            format!(
                "load {}\nread 1\nread 99\nwrite 2 12\nread 2\n",
                data.display()
            )
        );
        // One line per hit read and per verification read; none for the miss.
        assert_eq!(std::fs::read_to_string(&expected).unwrap(), "11\n12\n");
    }

    #[test]
    fn test_unwritable_output_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir").join("data.csv");
        let emitter = HarnessDslEmitter::new(
            missing.clone(),
            dir.path().join("q.dsl"),
            dir.path().join("t.exp"),
        );
        let result = emitter.emit::<i32>(&[], &[]);
        assert!(matches!(result, Err(EmitError::Io(_))));
    }
}
