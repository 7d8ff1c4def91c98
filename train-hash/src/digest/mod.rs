//! Record digests used to bucket trains.
//!
//! Two interchangeable digests are provided. Both read only the text of a
//! [`Train`], never its derived numbers, and both deliberately skip some
//! fields so their collision profiles can be compared.

mod positional;
mod rolling;

use std::fmt;

use crate::domain::Train;

pub use positional::Positional;
pub use rolling::Rolling;

/// Maps a train to an unsigned 32-bit digest.
pub trait TrainDigest {
    fn digest(&self, train: &Train) -> u32;
}

impl<D: TrainDigest + ?Sized> TrainDigest for &D {
    fn digest(&self, train: &Train) -> u32 {
        (**self).digest(train)
    }
}

/// Which digest a run uses, chosen once at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DigestKind {
    /// Multiplicative positional mix over date, time and number
    #[default]
    Positional,
    /// Byte-window mix over date, time, number and duration
    Rolling,
}

impl DigestKind {
    /// The digest implementation for this kind.
    pub fn digest(self) -> &'static dyn TrainDigest {
        match self {
            DigestKind::Positional => &Positional,
            DigestKind::Rolling => &Rolling,
        }
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestKind::Positional => f.write_str("positional"),
            DigestKind::Rolling => f.write_str("rolling"),
        }
    }
}
