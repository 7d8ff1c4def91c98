//! Digest-bucketed train set and collision counting.
//!
//! [`TrainSet`] buckets trains by the active [`TrainDigest`] and compares
//! trains inside a bucket with full field equality. [`CollisionCounter`]
//! tracks which digests a dataset produced, independent of whether the
//! trains behind a shared digest were equal.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use tracing::debug;

use crate::digest::TrainDigest;
use crate::domain::Train;

/// Hasher that passes a digest through unchanged, so the table buckets on
/// the train digest itself rather than rehashing it.
#[derive(Default)]
pub struct DigestHasher(u64);

impl Hasher for DigestHasher {
    fn write(&mut self, bytes: &[u8]) {
        // Only reached for non-u32 keys; fold the bytes in little-endian.
        for &b in bytes.iter().rev() {
            self.0 = (self.0 << 8) | u64::from(b);
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

type DigestBuildHasher = BuildHasherDefault<DigestHasher>;

/// Set of trains keyed by digest.
///
/// Trains sharing a digest are chained in one bucket; a train is stored
/// once no matter how many equal copies are inserted.
pub struct TrainSet<D> {
    digest: D,
    buckets: HashMap<u32, Vec<Train>, DigestBuildHasher>,
    len: usize,
}

impl<D: TrainDigest> TrainSet<D> {
    /// Create an empty set bucketed by `digest`.
    pub fn new(digest: D) -> Self {
        Self {
            digest,
            buckets: HashMap::default(),
            len: 0,
        }
    }

    /// Digest of `train` under this set's digest.
    pub fn digest_of(&self, train: &Train) -> u32 {
        self.digest.digest(train)
    }

    /// Insert a train. Returns `false` if an equal train was already there.
    pub fn insert(&mut self, train: Train) -> bool {
        let digest = self.digest.digest(&train);
        let bucket = self.buckets.entry(digest).or_default();
        if bucket.contains(&train) {
            return false;
        }
        bucket.push(train);
        self.len += 1;
        true
    }

    /// The stored train equal to `train`, if any.
    pub fn get(&self, train: &Train) -> Option<&Train> {
        self.buckets
            .get(&self.digest.digest(train))?
            .iter()
            .find(|stored| *stored == train)
    }

    /// Whether an equal train is stored.
    pub fn contains(&self, train: &Train) -> bool {
        self.get(train).is_some()
    }

    /// Number of distinct trains stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no train has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty buckets, i.e. distinct digests among stored trains.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Counts digests seen across a dataset.
#[derive(Default)]
pub struct CollisionCounter {
    seen: HashSet<u32, DigestBuildHasher>,
    total: usize,
    unique: usize,
}

impl CollisionCounter {
    /// Create a counter that has seen nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one train's digest. `inserted` is false when an equal train
    /// had already been recorded.
    pub fn record(&mut self, digest: u32, inserted: bool) {
        self.seen.insert(digest);
        self.total += 1;
        if inserted {
            self.unique += 1;
        }
    }

    /// Statistics for everything recorded so far.
    pub fn report(&self) -> CollisionReport {
        CollisionReport {
            records: self.total,
            unique_records: self.unique,
            distinct_digests: self.seen.len(),
        }
    }
}

/// Digest statistics for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    /// Every record processed, duplicates included.
    pub records: usize,
    /// Records not equal to any earlier record.
    pub unique_records: usize,
    /// Distinct digest values produced.
    pub distinct_digests: usize,
}

impl CollisionReport {
    /// Records whose digest had already been produced by an earlier record.
    pub fn collisions(&self) -> usize {
        self.records - self.distinct_digests
    }
}

/// Insert every train into a new set and count digest collisions.
pub fn build_index<D: TrainDigest>(
    trains: &[Train],
    digest: D,
) -> (TrainSet<D>, CollisionReport) {
    let mut set = TrainSet::new(digest);
    let mut counter = CollisionCounter::new();

    for train in trains {
        let digest = set.digest_of(train);
        let inserted = set.insert(train.clone());
        counter.record(digest, inserted);
    }

    let report = counter.report();
    debug!(
        records = report.records,
        unique = report.unique_records,
        distinct_digests = report.distinct_digests,
        collisions = report.collisions(),
        "index built"
    );
    (set, report)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::digest::Positional;
    use proptest::prelude::*;

    proptest! {
        /// Collisions plus distinct digests always equals the record count
        #[test]
        fn collisions_partition_records(numbers in proptest::collection::vec(0u32..50, 1..40)) {
            let data: Vec<Train> = numbers
                .iter()
                .map(|n| Train::parse(&format!("{n} 01.01.2024 X 10:00:00 01:00:00")).unwrap())
                .collect();
            let (set, report) = build_index(&data, Positional);
            prop_assert_eq!(report.records, data.len());
            prop_assert_eq!(report.collisions() + report.distinct_digests, data.len());
            prop_assert_eq!(report.unique_records, set.len());
            prop_assert!(set.len() <= data.len());
            for t in &data {
                prop_assert!(set.contains(t));
            }
        }
    }
}
