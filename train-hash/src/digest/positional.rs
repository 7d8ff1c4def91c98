//! Positional multiplicative digest.

use super::TrainDigest;
use crate::domain::Train;

const MULTIPLIER: u32 = 56412;

/// Folds date, time and number, in that order, into one accumulator.
///
/// For byte `c` at index `i` of a field the accumulator becomes
/// `acc + acc * 56412 + c * (i + 1)`, modulo 2^32. The accumulator carries
/// over between fields. Duration and type are never read, so trains that
/// differ only there always collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl TrainDigest for Positional {
    fn digest(&self, train: &Train) -> u32 {
        [train.date(), train.time(), train.number()]
            .into_iter()
            .fold(0, mix)
    }
}

fn mix(acc: u32, field: &str) -> u32 {
    field.bytes().enumerate().fold(acc, |acc, (i, b)| {
        let weighted = u32::from(b).wrapping_mul(i as u32 + 1);
        acc.wrapping_add(acc.wrapping_mul(MULTIPLIER).wrapping_add(weighted))
    })
}
