//! Timed lookup of a random train.

use std::fmt;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::digest::TrainDigest;
use crate::domain::Train;
use crate::error::AppError;
use crate::index::build_index;
use crate::schedule::load_schedule;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    /// Records parsed, duplicates included.
    pub records: usize,
    /// Index of the record used as the lookup key.
    pub key_index: usize,
    /// Wall time of the single lookup.
    pub lookup: Duration,
    /// Records that produced an already-seen digest.
    pub collisions: usize,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Execution time for {}: {}",
            self.records,
            self.lookup.as_micros()
        )?;
        write!(f, "Collisions for {}: {}", self.records, self.collisions)
    }
}

/// Index `trains` under `digest`, then time one lookup of a random train.
///
/// Fails with [`AppError::EmptyDataset`] when there is nothing to look up.
pub fn run_benchmark<D, R>(
    trains: &[Train],
    digest: D,
    rng: &mut R,
) -> Result<BenchReport, AppError>
where
    D: TrainDigest,
    R: Rng,
{
    if trains.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let (set, collisions) = build_index(trains, digest);

    let key_index = rng.gen_range(0..trains.len());
    let key = &trains[key_index];
    debug!(key_index, %key, "lookup key chosen");

    let start = Instant::now();
    let found = black_box(set.get(black_box(key)));
    let lookup = start.elapsed();
    debug!(found = found.is_some(), micros = lookup.as_micros(), "lookup done");

    Ok(BenchReport {
        records: trains.len(),
        key_index,
        lookup,
        collisions: collisions.collisions(),
    })
}

/// Load the schedule at `path` and benchmark it with `config`.
pub fn run(path: &Path, config: &BenchConfig) -> Result<BenchReport, AppError> {
    let trains = load_schedule(path)?;
    info!(
        path = %path.display(),
        records = trains.len(),
        digest = %config.digest,
        "schedule loaded"
    );
    let mut rng = config.key_rng();
    run_benchmark(&trains, config.digest.digest(), &mut rng)
}
