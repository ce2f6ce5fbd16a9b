//! Command handlers for the kv-workload CLI.

pub mod check;
pub mod generate;
pub mod summary;

pub use check::{run_check, CheckArgs};
pub use generate::{run_generate, GenerateArgs};
pub use summary::RunSummary;
