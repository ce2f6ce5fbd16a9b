//! Generation engine for the kv-workload generator.
//!
//! This crate produces the initial dataset and the mixed read/write query
//! stream. All mutable state (dataset, uniqueness registry, RNG, generation
//! index) is owned by a single [`WorkloadSession`] value, so the engine is
//! reentrant and testable in isolation.
//!
//! # Architecture
//!
//! ```text
//! KeyDistribution / ValueDistribution
//!               │
//!               ▼
//!     ┌───────────────────┐
//!     │  WorkloadSession  │
//!     │                   │
//!     │  - rng (StdRng)   │
//!     │  - dataset        │
//!     │  - registry       │
//!     │  - index counter  │
//!     └─────────┬─────────┘
//!               │
//!               ▼
//!   Vec<Entry>  +  Vec<QueryRecord>
//! ```
//!
//! The generator uses a seeded RNG: the same seed and configuration produce
//! the same workload across runs.

pub mod distributions;
pub mod key;
pub mod session;

pub use distributions::{KeyDistribution, ValueDistribution};
pub use key::WorkloadKey;
pub use session::{WorkloadSession, MAX_KEY_ATTEMPTS};
