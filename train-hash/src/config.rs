//! Benchmark run configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::digest::DigestKind;

/// Parameters for one benchmark run.
#[derive(Debug, Clone, Default)]
pub struct BenchConfig {
    /// Digest used to bucket trains and count collisions.
    pub digest: DigestKind,

    /// Seed for picking the lookup key.
    /// `None` seeds from the operating system, so runs differ.
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Create a new configuration with the given digest and seed.
    pub fn new(digest: DigestKind, seed: Option<u64>) -> Self {
        Self { digest, seed }
    }

    /// Random source for choosing the lookup key.
    pub fn key_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
