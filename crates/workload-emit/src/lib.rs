//! Textual output formats for the kv-workload generator.
//!
//! Two formats are supported, both sharing the same data-file grammar of one
//! `<key>,<value>` line per entry:
//!
//! - **Harness DSL** (32-bit keys, three files): a query file opening with a
//!   `load <dataFile>` directive followed by `read <key>` / `write <key>
//!   <value>` lines, plus a separate expected-results file with one value
//!   line per read whose answer is known.
//! - **Inline CSV** (64-bit keys, two files): `READ,<key>,<value>` /
//!   `READ,<key>` / `WRITE,<key>,<value>` query lines with expected values
//!   inlined.
//!
//! Emitters are pure formatting over records produced by `workload-engine`;
//! each output stream is buffered and flushed exactly once. The [`parse`]
//! module provides the inverse line parsers and [`check`] validates emitted
//! file sets against the workload invariants.

pub mod check;
mod data_file;
pub mod error;
pub mod harness_dsl;
pub mod inline_csv;
pub mod metrics;
pub mod parse;

pub use check::{check_harness_dsl, check_inline_csv, CheckReport};
pub use error::EmitError;
pub use harness_dsl::HarnessDslEmitter;
pub use inline_csv::InlineCsvEmitter;
pub use metrics::EmitMetrics;

/// Buffer capacity for output streams.
pub const WRITE_BUFFER_SIZE: usize = 1 << 20;
