//! Error types for emission, parsing, and validation.

use thiserror::Error;

/// Errors from the emitters, parsers, and file-set validators.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Output file could not be created or written, or an input file could
    /// not be read. Fatal; no partial file is considered valid.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not conform to the expected grammar.
    #[error("parse error: {0}")]
    Parse(String),

    /// An emitted file set violates a workload invariant.
    #[error("validation failed: {0}")]
    Validation(String),
}
