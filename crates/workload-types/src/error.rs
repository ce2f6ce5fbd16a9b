//! Error types for workload generation.

use thiserror::Error;

/// Errors that can occur while generating a workload.
#[derive(Error, Debug)]
pub enum WorkloadError {
    /// Configuration error detected before or during generation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Rejection sampling for a unique or absent key ran out of attempts.
    ///
    /// The reference behavior here would be to loop forever once the key
    /// space saturates; we surface the condition instead.
    #[error("key space exhausted after {attempts} rejection-sampling attempts")]
    KeySpaceExhausted {
        /// Number of candidate keys drawn before giving up.
        attempts: u64,
    },

    /// A hit read was requested while the dataset had no entries to target.
    #[error("cannot synthesize a hit read from an empty dataset")]
    EmptyDataset,
}
