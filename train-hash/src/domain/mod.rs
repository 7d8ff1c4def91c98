//! Domain types for train schedule records.
//!
//! A schedule line is validated once, when it is parsed into a [`Train`].
//! Code that receives a `Train` can trust that every numeric field was
//! well-formed.

mod error;
mod split;
mod train;

pub use error::ParseError;
pub use split::split_fields;
pub use train::Train;
