//! Key-width abstraction.
//!
//! The engine is generic over the integer width of keys and values. Two
//! widths are supported: `i32` (used by the harness-dsl output format) and
//! `u64` (used by the inline-csv format).

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

/// A fixed-width integer usable as a workload key or value.
pub trait WorkloadKey:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = ParseIntError> + 'static
{
    /// Whether the normal key distribution is defined for this width.
    const SUPPORTS_NORMAL: bool;

    /// Number of distinct keys this width can represent, used for the
    /// fail-fast bound check on the requested entry count.
    fn max_entries() -> u64;

    /// The generation index cast to this width (sequential distribution).
    fn from_index(index: u64) -> Self;

    /// A uniformly random value over the full width.
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// A draw from a normal distribution centered at the midpoint of the
    /// key range with standard deviation range/8, cast to this width.
    /// Returns `None` for widths that do not support it.
    fn sample_normal<R: Rng + ?Sized>(rng: &mut R) -> Option<Self>;
}

impl WorkloadKey for i32 {
    const SUPPORTS_NORMAL: bool = true;

    fn max_entries() -> u64 {
        i32::MAX as u64
    }

    fn from_index(index: u64) -> Self {
        index as i32
    }

    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn sample_normal<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        let midpoint = i32::MAX as f64 / 2.0;
        let stddev = i32::MAX as f64 / 8.0;
        // stddev is a positive finite constant, so construction cannot fail
        let normal = Normal::new(midpoint, stddev).ok()?;
        Some(normal.sample(rng) as i32)
    }
}

impl WorkloadKey for u64 {
    const SUPPORTS_NORMAL: bool = false;

    fn max_entries() -> u64 {
        u64::MAX
    }

    fn from_index(index: u64) -> Self {
        index
    }

    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn sample_normal<R: Rng + ?Sized>(_rng: &mut R) -> Option<Self> {
        None
    }
}
