//! Dataset entries, queries, and expected results.

/// A single key/value pair in the generated dataset.
///
/// Keys are unique across the entire lifetime of a generation run: the
/// initial dataset plus every key introduced by a synthesized write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T> {
    pub key: T,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn new(key: T, value: T) -> Self {
        Self { key, value }
    }
}

/// A synthesized store query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<T> {
    /// Point lookup of `key`.
    Read { key: T },
    /// Insert of `key` with `value`. Keys are never overwritten, so a write
    /// always introduces a fresh key.
    Write { key: T, value: T },
}

impl<T: Copy> Query<T> {
    /// The key this query targets.
    pub fn key(&self) -> T {
        match self {
            Query::Read { key } | Query::Write { key, .. } => *key,
        }
    }
}

/// The outcome a store executor should observe for a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedResult<T> {
    /// The key exists and holds this value.
    Present(T),
    /// The key is deliberately absent from the dataset.
    Absent,
}

impl<T: Copy> ExpectedResult<T> {
    /// The known value, if the result is `Present`.
    pub fn value(&self) -> Option<T> {
        match self {
            ExpectedResult::Present(value) => Some(*value),
            ExpectedResult::Absent => None,
        }
    }
}

/// A query paired with its expected result.
///
/// Writes carry no expected result. Reads always carry one, recorded at
/// synthesis time; it stays valid for the rest of the run because no update
/// operation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRecord<T> {
    pub query: Query<T>,
    pub expected: Option<ExpectedResult<T>>,
}

impl<T> QueryRecord<T> {
    /// A read record with its expected result.
    pub fn read(key: T, expected: ExpectedResult<T>) -> Self {
        Self {
            query: Query::Read { key },
            expected: Some(expected),
        }
    }

    /// A write record. Writes have no expected result of their own; the
    /// engine pairs each write with a verification read instead.
    pub fn write(key: T, value: T) -> Self {
        Self {
            query: Query::Write { key, value },
            expected: None,
        }
    }

    /// True if this record is a read whose expected value is known.
    pub fn has_known_value(&self) -> bool {
        matches!(
            (&self.query, &self.expected),
            (Query::Read { .. }, Some(ExpectedResult::Present(_)))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key() {
        assert_eq!(Query::Read { key: 7i32 }.key(), 7);
        assert_eq!(Query::Write { key: 3i32, value: 9 }.key(), 3);
    }

    #[test]
    fn test_known_value() {
        assert!(QueryRecord::read(1i32, ExpectedResult::Present(2)).has_known_value());
        assert!(!QueryRecord::read(1i32, ExpectedResult::Absent).has_known_value());
        assert!(!QueryRecord::write(1i32, 2).has_known_value());
    }

    #[test]
    fn test_expected_value() {
        assert_eq!(ExpectedResult::Present(5u64).value(), Some(5));
        assert_eq!(ExpectedResult::<u64>::Absent.value(), None);
    }
}
