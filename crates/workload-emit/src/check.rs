//! Validation of emitted file sets.
//!
//! `check` replays an emitted workload against the invariants the engine
//! guarantees: every data-file key is unique, every query line conforms to
//! the grammar, writes never collide with existing keys, and every recorded
//! expected result matches the state of the dataset at that point in the
//! stream.

use crate::error::EmitError;
use crate::parse::{parse_csv_query_line, parse_data_line, parse_dsl_query_line};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;
use workload_engine::WorkloadKey;
use workload_types::{ExpectedResult, Query};

/// Counters from a successful validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Entries in the data file.
    pub entries: u64,
    /// Query lines in the query file.
    pub queries: u64,
    /// Read query lines.
    pub reads: u64,
    /// Write query lines.
    pub writes: u64,
    /// Expected-result lines consumed (harness DSL) or inlined (CSV).
    pub expected_results: u64,
}

fn read_lines(path: &Path) -> Result<Vec<String>, EmitError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn load_dataset<T: WorkloadKey>(path: &Path) -> Result<HashMap<T, T>, EmitError> {
    let mut dataset = HashMap::new();
    for (number, line) in read_lines(path)?.iter().enumerate() {
        let entry = parse_data_line::<T>(line)
            .map_err(|e| EmitError::Parse(format!("data line {}: {e}", number + 1)))?;
        if dataset.insert(entry.key, entry.value).is_some() {
            return Err(EmitError::Validation(format!(
                "data line {}: duplicate key {}",
                number + 1,
                entry.key
            )));
        }
    }
    Ok(dataset)
}

/// Validate a three-file harness DSL workload.
///
/// Expected-result lines are consumed positionally: one per read whose key
/// exists in the dataset, in query order.
pub fn check_harness_dsl<P: AsRef<Path>>(
    data_file: P,
    query_file: P,
    expected_file: P,
) -> Result<CheckReport, EmitError> {
    let dataset = load_dataset::<i32>(data_file.as_ref())?;
    let mut report = CheckReport {
        entries: dataset.len() as u64,
        ..CheckReport::default()
    };

    let expected_lines = read_lines(expected_file.as_ref())?;
    let mut expected = expected_lines.iter().enumerate();

    let query_lines = read_lines(query_file.as_ref())?;
    let mut lines = query_lines.iter().enumerate();

    match lines.next() {
        Some((_, first)) if first.starts_with("load ") => {}
        _ => {
            return Err(EmitError::Validation(
                "query file must begin with a load directive".to_string(),
            ))
        }
    }

    // Keys already present in the data file must not be written again; the
    // data file carries the final dataset, so a written key resolves to its
    // value through the same map.
    let mut written: HashMap<i32, i32> = HashMap::new();
    for (number, line) in lines {
        let query = parse_dsl_query_line::<i32>(line)
            .map_err(|e| EmitError::Parse(format!("query line {}: {e}", number + 1)))?;
        report.queries += 1;
        match query {
            Query::Read { key } => {
                report.reads += 1;
                if let Some(value) = dataset.get(&key) {
                    let (expected_number, expected_line) = expected.next().ok_or_else(|| {
                        EmitError::Validation(format!(
                            "query line {}: read of {key} has no expected-result line",
                            number + 1
                        ))
                    })?;
                    let expected_value: i32 = expected_line.parse().map_err(|e| {
                        EmitError::Parse(format!("expected line {}: {e}", expected_number + 1))
                    })?;
                    if expected_value != *value {
                        return Err(EmitError::Validation(format!(
                            "expected line {}: read of {key} expects {expected_value} but the dataset holds {value}",
                            expected_number + 1
                        )));
                    }
                    report.expected_results += 1;
                }
            }
            Query::Write { key, value } => {
                report.writes += 1;
                if written.insert(key, value).is_some() {
                    return Err(EmitError::Validation(format!(
                        "query line {}: key {key} written twice",
                        number + 1
                    )));
                }
                match dataset.get(&key) {
                    Some(dataset_value) if *dataset_value == value => {}
                    Some(dataset_value) => {
                        return Err(EmitError::Validation(format!(
                            "query line {}: write of {key}={value} disagrees with dataset value {dataset_value}",
                            number + 1
                        )))
                    }
                    None => {
                        return Err(EmitError::Validation(format!(
                            "query line {}: written key {key} missing from data file",
                            number + 1
                        )))
                    }
                }
            }
        }
    }

    if let Some((number, _)) = expected.next() {
        return Err(EmitError::Validation(format!(
            "expected file has unconsumed lines starting at line {}",
            number + 1
        )));
    }

    info!(
        "harness DSL check passed: {} entries, {} queries ({} reads, {} writes), {} expected results",
        report.entries, report.queries, report.reads, report.writes, report.expected_results
    );
    Ok(report)
}

/// Validate a two-file inline CSV workload.
pub fn check_inline_csv<P: AsRef<Path>>(
    data_file: P,
    query_file: P,
) -> Result<CheckReport, EmitError> {
    let dataset = load_dataset::<u64>(data_file.as_ref())?;
    let mut report = CheckReport {
        entries: dataset.len() as u64,
        ..CheckReport::default()
    };

    let mut written: HashMap<u64, u64> = HashMap::new();
    for (number, line) in read_lines(query_file.as_ref())?.iter().enumerate() {
        let record = parse_csv_query_line::<u64>(line)
            .map_err(|e| EmitError::Parse(format!("query line {}: {e}", number + 1)))?;
        report.queries += 1;
        match (record.query, record.expected) {
            (Query::Read { key }, Some(ExpectedResult::Present(value))) => {
                report.reads += 1;
                report.expected_results += 1;
                match dataset.get(&key) {
                    Some(dataset_value) if *dataset_value == value => {}
                    Some(dataset_value) => {
                        return Err(EmitError::Validation(format!(
                            "query line {}: read of {key} expects {value} but the dataset holds {dataset_value}",
                            number + 1
                        )))
                    }
                    None => {
                        return Err(EmitError::Validation(format!(
                            "query line {}: read of {key} expects {value} but the key is absent",
                            number + 1
                        )))
                    }
                }
            }
            (Query::Read { key }, _) => {
                report.reads += 1;
                if dataset.contains_key(&key) {
                    return Err(EmitError::Validation(format!(
                        "query line {}: miss read of {key} but the key exists in the dataset",
                        number + 1
                    )));
                }
            }
            (Query::Write { key, value }, _) => {
                report.writes += 1;
                if written.insert(key, value).is_some() {
                    return Err(EmitError::Validation(format!(
                        "query line {}: key {key} written twice",
                        number + 1
                    )));
                }
                match dataset.get(&key) {
                    Some(dataset_value) if *dataset_value == value => {}
                    _ => {
                        return Err(EmitError::Validation(format!(
                            "query line {}: write of {key}={value} disagrees with the data file",
                            number + 1
                        )))
                    }
                }
            }
        }
    }

    info!(
        "inline CSV check passed: {} entries, {} queries ({} reads, {} writes)",
        report.entries, report.queries, report.reads, report.writes
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_check_harness_dsl_accepts_consistent_set() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n1,1\n2,2\n3,3\n");
        let queries = write_file(
            &dir,
            "queries.dsl",
            "load data.csv\nread 1\nread 500\nwrite 3 3\nread 3\n",
        );
        let expected = write_file(&dir, "test.exp", "1\n3\n");

        let report = check_harness_dsl(&data, &queries, &expected).unwrap();
        assert_eq!(report.entries, 4);
        assert_eq!(report.queries, 4);
        assert_eq!(report.reads, 3);
        assert_eq!(report.writes, 1);
        assert_eq!(report.expected_results, 2);
    }

    #[test]
    fn test_check_harness_dsl_rejects_missing_load() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n");
        let queries = write_file(&dir, "queries.dsl", "read 0\n");
        let expected = write_file(&dir, "test.exp", "0\n");
        assert!(matches!(
            check_harness_dsl(&data, &queries, &expected),
            Err(EmitError::Validation(_))
        ));
    }

    #[test]
    fn test_check_harness_dsl_rejects_misaligned_expected() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n1,1\n");
        let queries = write_file(&dir, "queries.dsl", "load data.csv\nread 1\n");
        let expected = write_file(&dir, "test.exp", "9\n");
        assert!(matches!(
            check_harness_dsl(&data, &queries, &expected),
            Err(EmitError::Validation(_))
        ));
    }

    #[test]
    fn test_check_rejects_duplicate_data_keys() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n0,9\n");
        let queries = write_file(&dir, "queries.csv", "");
        assert!(matches!(
            check_inline_csv(&data, &queries),
            Err(EmitError::Validation(_))
        ));
    }

    #[test]
    fn test_check_inline_csv_accepts_consistent_set() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n1,1\n2,2\n3,3\n4,4\n");
        let queries = write_file(
            &dir,
            "queries.csv",
            "WRITE,3,3\nREAD,3,3\nWRITE,4,4\nREAD,4,4\nREAD,999\n",
        );

        let report = check_inline_csv(&data, &queries).unwrap();
        assert_eq!(report.entries, 5);
        assert_eq!(report.queries, 5);
        assert_eq!(report.reads, 3);
        assert_eq!(report.writes, 2);
        assert_eq!(report.expected_results, 2);
    }

    #[test]
    fn test_check_inline_csv_rejects_stale_expected_value() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n1,1\n");
        let queries = write_file(&dir, "queries.csv", "READ,1,7\n");
        assert!(matches!(
            check_inline_csv(&data, &queries),
            Err(EmitError::Validation(_))
        ));
    }

    #[test]
    fn test_check_inline_csv_rejects_existing_miss_key() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "data.csv", "0,0\n1,1\n");
        let queries = write_file(&dir, "queries.csv", "READ,1\n");
        assert!(matches!(
            check_inline_csv(&data, &queries),
            Err(EmitError::Validation(_))
        ));
    }
}
