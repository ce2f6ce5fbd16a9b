//! Emission metrics.

use std::time::Duration;

/// Metrics from one emit operation.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Dataset entries written to the data file.
    pub entries_written: u64,
    /// Query records written to the query file.
    pub queries_written: u64,
    /// Expected-result lines written (harness DSL only).
    pub expected_written: u64,
    /// Total bytes across all output files.
    pub bytes_written: u64,
    /// Wall-clock time for the emit.
    pub duration: Duration,
}

impl EmitMetrics {
    /// Records written per second, across all streams.
    pub fn records_per_second(&self) -> f64 {
        let records = self.entries_written + self.queries_written + self.expected_written;
        if self.duration.as_secs_f64() > 0.0 {
            records as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_per_second() {
        let metrics = EmitMetrics {
            entries_written: 600,
            queries_written: 300,
            expected_written: 100,
            bytes_written: 8000,
            duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.records_per_second(), 100.0);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(EmitMetrics::default().records_per_second(), 0.0);
    }
}
