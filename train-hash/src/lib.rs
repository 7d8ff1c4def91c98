//! Train schedule hashing benchmark.
//!
//! Parses a schedule file into [`domain::Train`] records, buckets them by
//! one of two digests, counts digest collisions and times a lookup of a
//! randomly chosen record.

pub mod bench;
pub mod config;
pub mod digest;
pub mod domain;
pub mod error;
pub mod index;
pub mod schedule;

pub use bench::{BenchReport, run, run_benchmark};
pub use config::BenchConfig;
pub use error::AppError;
