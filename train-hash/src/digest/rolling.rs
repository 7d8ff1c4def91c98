//! Byte-window digest.

use super::TrainDigest;
use crate::domain::Train;

/// Mixes each byte into one of four byte lanes of the accumulator.
///
/// Byte `c` at index `i` is shifted to lane `i % 4`. Date bytes are added,
/// time bytes are xored, number bytes multiply the accumulator by
/// `c << 16`, and duration bytes are xored last. Type is never read.
///
/// Two number bytes multiply in a factor of 2^32, so any train number of
/// two or more digits clears everything mixed so far and the digest then
/// depends on the duration alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rolling;

impl TrainDigest for Rolling {
    fn digest(&self, train: &Train) -> u32 {
        let mut acc: u32 = 0;
        for (i, b) in train.date().bytes().enumerate() {
            acc = acc.wrapping_add(lane(i, b));
        }
        for (i, b) in train.time().bytes().enumerate() {
            acc ^= lane(i, b);
        }
        for b in train.number().bytes() {
            acc = acc.wrapping_mul(u32::from(b) << 16);
        }
        for (i, b) in train.on_road().bytes().enumerate() {
            acc ^= lane(i, b);
        }
        acc
    }
}

fn lane(i: usize, b: u8) -> u32 {
    u32::from(b) << ((i % 4) * 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(line: &str) -> Train {
        Train::parse(line).unwrap()
    }

    #[test]
    fn lanes() {
        assert_eq!(lane(0, 0xAB), 0x0000_00AB);
        assert_eq!(lane(1, 0xAB), 0x0000_AB00);
        assert_eq!(lane(3, 0xAB), 0xAB00_0000);
        assert_eq!(lane(4, 0xAB), 0x0000_00AB);
    }

    #[test]
    fn known_digests() {
        let t = train("101 15.03.2024 Express 08:30:00 02:15:00");
        assert_eq!(Rolling.digest(&t), 0x010A_0805);

        let t = train("7 01.01.2024 Local 10:00:00 01:00:00");
        assert_eq!(Rolling.digest(&t), 0xFE54_0B00);
    }

    #[test]
    fn multi_digit_number_leaves_only_duration() {
        let a = train("101 15.03.2024 Express 08:30:00 02:15:00");
        let b = train("42 01.12.1999 Local 23:59:59 02:15:00");
        assert_ne!(a, b);
        assert_eq!(Rolling.digest(&a), Rolling.digest(&b));
    }

    #[test]
    fn ignores_type() {
        let a = train("7 15.03.2024 Express 08:30:00 02:15:00");
        let b = train("7 15.03.2024 Local 08:30:00 02:15:00");
        assert_eq!(Rolling.digest(&a), Rolling.digest(&b));
    }

    #[test]
    fn reads_duration() {
        let a = train("101 15.03.2024 Express 08:30:00 02:15:00");
        let b = train("101 15.03.2024 Express 08:30:00 02:16:00");
        assert_ne!(Rolling.digest(&a), Rolling.digest(&b));
    }
}
