//! Machine-readable run summary.

use workload_types::{Query, QueryRecord};

/// Summary of one generation run, written as JSON when `--summary-file` is
/// given. Counts are exact; verification reads are reported separately from
/// the top-level query steps.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub format: String,
    pub key_distribution: String,
    pub value_distribution: String,
    /// Initial dataset size.
    pub initial_entries: u64,
    /// Dataset size after write synthesis.
    pub final_entries: u64,
    /// Top-level query steps requested and produced.
    pub query_steps: u64,
    /// Hit reads (expected value known, selectivity-driven).
    pub hit_reads: u64,
    /// Deliberate miss reads.
    pub miss_reads: u64,
    /// Write queries.
    pub writes: u64,
    /// Synthetic reads paired with writes, additional to `query_steps`.
    pub verification_reads: u64,
}

impl RunSummary {
    /// Tally a query stream. A read immediately following a write of the
    /// same key is the write's verification read; every other read with a
    /// known value is a hit.
    pub fn tally<T: Copy + Eq>(&mut self, records: &[QueryRecord<T>]) {
        let mut previous_write: Option<T> = None;
        for record in records {
            match record.query {
                Query::Write { key, .. } => {
                    self.writes += 1;
                    previous_write = Some(key);
                }
                Query::Read { key } => {
                    if previous_write == Some(key) {
                        self.verification_reads += 1;
                    } else if record.has_known_value() {
                        self.hit_reads += 1;
                    } else {
                        self.miss_reads += 1;
                    }
                    previous_write = None;
                }
            }
        }
        self.query_steps = self.writes + self.hit_reads + self.miss_reads;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workload_types::ExpectedResult;

    fn empty_summary() -> RunSummary {
        RunSummary {
            seed: 42,
            format: "inline-csv".to_string(),
            key_distribution: "sequential".to_string(),
            value_distribution: "same-as-key".to_string(),
            initial_entries: 0,
            final_entries: 0,
            query_steps: 0,
            hit_reads: 0,
            miss_reads: 0,
            writes: 0,
            verification_reads: 0,
        }
    }

    #[test]
    fn test_tally_separates_verification_reads() {
        let records = vec![
            QueryRecord::write(3u64, 3),
            QueryRecord::read(3, ExpectedResult::Present(3)),
            QueryRecord::read(1, ExpectedResult::Present(1)),
            QueryRecord::read(999, ExpectedResult::Absent),
        ];
        let mut summary = empty_summary();
        summary.tally(&records);

        assert_eq!(summary.writes, 1);
        assert_eq!(summary.verification_reads, 1);
        assert_eq!(summary.hit_reads, 1);
        assert_eq!(summary.miss_reads, 1);
        assert_eq!(summary.query_steps, 3);
    }
}
