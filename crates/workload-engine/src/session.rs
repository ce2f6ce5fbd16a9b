//! Single-run generation session.

use crate::distributions::{generate_key, generate_value, KeyDistribution, ValueDistribution};
use crate::key::WorkloadKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use workload_types::{Entry, ExpectedResult, KeyRegistry, QueryRecord, WorkloadError};

/// Retry budget for rejection sampling of unique or absent keys.
///
/// Once the key space saturates the sampling loop would otherwise spin
/// forever; after this many rejected candidates the session surfaces
/// [`WorkloadError::KeySpaceExhausted`] instead.
pub const MAX_KEY_ATTEMPTS: u64 = 1_000_000;

/// Owns all state for one workload generation run: the seeded RNG, the
/// dataset, the uniqueness registry, and the generation index counter that
/// is shared between the initial dataset build and write synthesis.
///
/// The session is single-threaded and consumed in strict sequence: build
/// the dataset first, then synthesize queries. Both the dataset and the
/// registry only ever grow.
pub struct WorkloadSession<T: WorkloadKey> {
    rng: StdRng,
    key_dist: KeyDistribution,
    value_dist: ValueDistribution,
    dataset: Vec<Entry<T>>,
    registry: KeyRegistry<T>,
    // Keys promised absent by miss reads. Tracked separately because reads
    // never mutate the registry, yet a later write must not resurrect a key
    // the expected results already declared missing.
    missed: KeyRegistry<T>,
    next_index: u64,
}

impl<T: WorkloadKey> WorkloadSession<T> {
    /// Create a session. Rejects configurations that cannot generate for
    /// this key width before any work is done.
    pub fn new(
        key_dist: KeyDistribution,
        value_dist: ValueDistribution,
        seed: u64,
    ) -> Result<Self, WorkloadError> {
        if key_dist == KeyDistribution::Normal && !T::SUPPORTS_NORMAL {
            return Err(WorkloadError::Config(
                "normal key distribution is only supported for 32-bit keys".to_string(),
            ));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            key_dist,
            value_dist,
            dataset: Vec::new(),
            registry: KeyRegistry::new(),
            missed: KeyRegistry::new(),
            next_index: 0,
        })
    }

    /// The dataset accumulated so far: initial entries followed by
    /// write-introduced entries, in generation order.
    pub fn dataset(&self) -> &[Entry<T>] {
        &self.dataset
    }

    /// The uniqueness registry.
    pub fn registry(&self) -> &KeyRegistry<T> {
        &self.registry
    }

    /// Build exactly `count` initial entries with pairwise-distinct keys.
    ///
    /// Fails fast with a configuration error when `count` exceeds the
    /// representable key range, before anything is generated.
    pub fn build_dataset(&mut self, count: u64) -> Result<(), WorkloadError> {
        if count > T::max_entries() {
            return Err(WorkloadError::Config(format!(
                "requested {count} entries but the key width can represent at most {}",
                T::max_entries()
            )));
        }

        self.dataset.reserve(count as usize);
        for _ in 0..count {
            let key = self.fresh_key()?;
            let value = generate_value(self.value_dist, &mut self.rng, key);
            self.registry.insert(key);
            self.dataset.push(Entry::new(key, value));

            if self.dataset.len() % 1_000_000 == 0 {
                debug!("generated {} entries", self.dataset.len());
            }
        }

        info!("dataset built: {} entries", self.dataset.len());
        Ok(())
    }

    /// Synthesize exactly `num_queries` top-level query steps.
    ///
    /// `read_ratio` is the probability a step is a read; `selectivity` is
    /// the probability a read targets an existing key. Every write step is
    /// followed by a synthetic verification read of the same key, which is
    /// additional to `num_queries`.
    pub fn synthesize_queries(
        &mut self,
        num_queries: u64,
        read_ratio: f64,
        selectivity: f64,
    ) -> Result<Vec<QueryRecord<T>>, WorkloadError> {
        let mut records = Vec::with_capacity(num_queries as usize);

        for step in 0..num_queries {
            if self.rng.gen::<f64>() < read_ratio {
                if self.rng.gen::<f64>() < selectivity {
                    records.push(self.hit_read()?);
                } else {
                    records.push(self.miss_read()?);
                }
            } else {
                let (write, verify) = self.write_step()?;
                records.push(write);
                records.push(verify);
            }

            if (step + 1) % 1_000_000 == 0 {
                debug!("synthesized {} query steps", step + 1);
            }
        }

        info!(
            "query stream synthesized: {} steps, {} records, dataset now {} entries",
            num_queries,
            records.len(),
            self.dataset.len()
        );
        Ok(records)
    }

    /// A read of a uniformly random existing entry, expected present with
    /// that entry's value at synthesis time.
    fn hit_read(&mut self) -> Result<QueryRecord<T>, WorkloadError> {
        if self.dataset.is_empty() {
            return Err(WorkloadError::EmptyDataset);
        }
        let entry = self.dataset[self.rng.gen_range(0..self.dataset.len())];
        Ok(QueryRecord::read(entry.key, ExpectedResult::Present(entry.value)))
    }

    /// A read of a key guaranteed absent from the registry. The key is not
    /// inserted; misses never mutate the dataset or the registry. The key is
    /// remembered so no later write re-introduces it.
    fn miss_read(&mut self) -> Result<QueryRecord<T>, WorkloadError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = T::sample_uniform(&mut self.rng);
            if !self.registry.contains(&key) {
                self.missed.insert(key);
                return Ok(QueryRecord::read(key, ExpectedResult::Absent));
            }
        }
        Err(WorkloadError::KeySpaceExhausted {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// A write of a fresh key, extending the dataset and registry, paired
    /// with its verification read.
    fn write_step(&mut self) -> Result<(QueryRecord<T>, QueryRecord<T>), WorkloadError> {
        let key = self.fresh_key()?;
        let value = generate_value(self.value_dist, &mut self.rng, key);
        self.registry.insert(key);
        self.dataset.push(Entry::new(key, value));

        Ok((
            QueryRecord::write(key, value),
            QueryRecord::read(key, ExpectedResult::Present(value)),
        ))
    }

    /// Rejection-sample the configured key distribution until a key turns
    /// up that is neither registered nor promised absent by a miss read.
    /// The index advances with every candidate, so a colliding sequential
    /// draw is skipped instead of retried forever.
    fn fresh_key(&mut self) -> Result<T, WorkloadError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = generate_key(self.key_dist, &mut self.rng, self.next_index)?;
            self.next_index += 1;
            if !self.registry.contains(&key) && !self.missed.contains(&key) {
                return Ok(key);
            }
        }
        Err(WorkloadError::KeySpaceExhausted {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }
}
