//! Core record types shared across the kv-workload crates.
//!
//! This crate defines the data model for a generated workload: dataset
//! entries, query records with their expected results, and the uniqueness
//! registry that guards the global key-uniqueness invariant. The generation
//! logic itself lives in `workload-engine`; the textual formats live in
//! `workload-emit`.

pub mod error;
pub mod record;
pub mod registry;

pub use error::WorkloadError;
pub use record::{Entry, ExpectedResult, Query, QueryRecord};
pub use registry::KeyRegistry;
