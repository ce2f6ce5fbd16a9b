//! Line parsers for the emitted grammars.
//!
//! These invert the emitters field-for-field and back the `check`
//! validators and the round-trip tests.

use crate::error::EmitError;
use workload_engine::WorkloadKey;
use workload_types::{Entry, ExpectedResult, Query, QueryRecord};

fn parse_int<T: WorkloadKey>(field: &str) -> Result<T, EmitError> {
    field
        .parse()
        .map_err(|e| EmitError::Parse(format!("invalid integer '{field}': {e}")))
}

/// Parse a `<key>,<value>` data-file line.
pub fn parse_data_line<T: WorkloadKey>(line: &str) -> Result<Entry<T>, EmitError> {
    let (key, value) = line
        .split_once(',')
        .ok_or_else(|| EmitError::Parse(format!("malformed data line '{line}'")))?;
    Ok(Entry::new(parse_int(key)?, parse_int(value)?))
}

/// Parse a harness DSL query line (`read <key>` or `write <key> <value>`).
pub fn parse_dsl_query_line<T: WorkloadKey>(line: &str) -> Result<Query<T>, EmitError> {
    let mut fields = line.split(' ');
    let query = match (fields.next(), fields.next(), fields.next()) {
        (Some("read"), Some(key), None) => Query::Read {
            key: parse_int(key)?,
        },
        (Some("write"), Some(key), Some(value)) => Query::Write {
            key: parse_int(key)?,
            value: parse_int(value)?,
        },
        _ => return Err(EmitError::Parse(format!("malformed query line '{line}'"))),
    };
    if fields.next().is_some() {
        return Err(EmitError::Parse(format!(
            "trailing fields in query line '{line}'"
        )));
    }
    Ok(query)
}

/// Parse an inline CSV query line, reconstructing the expected result.
pub fn parse_csv_query_line<T: WorkloadKey>(line: &str) -> Result<QueryRecord<T>, EmitError> {
    let mut fields = line.split(',');
    let record = match (fields.next(), fields.next(), fields.next()) {
        (Some("READ"), Some(key), None) => {
            QueryRecord::read(parse_int(key)?, ExpectedResult::Absent)
        }
        (Some("READ"), Some(key), Some(value)) => {
            QueryRecord::read(parse_int(key)?, ExpectedResult::Present(parse_int(value)?))
        }
        (Some("WRITE"), Some(key), Some(value)) => {
            QueryRecord::write(parse_int(key)?, parse_int(value)?)
        }
        _ => return Err(EmitError::Parse(format!("malformed query line '{line}'"))),
    };
    if fields.next().is_some() {
        return Err(EmitError::Parse(format!(
            "trailing fields in query line '{line}'"
        )));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_line() {
        assert_eq!(parse_data_line::<i32>("3,-7").unwrap(), Entry::new(3, -7));
        assert!(parse_data_line::<i32>("3").is_err());
        assert!(parse_data_line::<i32>("a,b").is_err());
    }

    #[test]
    fn test_parse_dsl_query_line() {
        assert_eq!(
            parse_dsl_query_line::<i32>("read 42").unwrap(),
            Query::Read { key: 42 }
        );
        assert_eq!(
            parse_dsl_query_line::<i32>("write 1 2").unwrap(),
            Query::Write { key: 1, value: 2 }
        );
        assert!(parse_dsl_query_line::<i32>("read").is_err());
        assert!(parse_dsl_query_line::<i32>("write 1").is_err());
        assert!(parse_dsl_query_line::<i32>("write 1 2 3").is_err());
        assert!(parse_dsl_query_line::<i32>("delete 1").is_err());
    }

    #[test]
    fn test_parse_csv_query_line() {
        assert_eq!(
            parse_csv_query_line::<u64>("READ,5").unwrap(),
            QueryRecord::read(5, ExpectedResult::Absent)
        );
        assert_eq!(
            parse_csv_query_line::<u64>("READ,5,9").unwrap(),
            QueryRecord::read(5, ExpectedResult::Present(9))
        );
        assert_eq!(
            parse_csv_query_line::<u64>("WRITE,5,9").unwrap(),
            QueryRecord::write(5, 9)
        );
        assert!(parse_csv_query_line::<u64>("WRITE,5").is_err());
        assert!(parse_csv_query_line::<u64>("READ,5,9,1").is_err());
        assert!(parse_csv_query_line::<u64>("UPSERT,5,9").is_err());
    }
}
