//! Errors for a single schedule line.

/// Why a schedule line could not be turned into a [`Train`](super::Train).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line did not have exactly five space-separated fields
    #[error("expected 5 space-separated fields, found {0}")]
    FieldCount(usize),

    /// A date, time or duration did not have three components
    #[error("{field} must have 3 '{delimiter}'-separated components, found {found}")]
    ComponentCount {
        field: &'static str,
        delimiter: char,
        found: usize,
    },

    /// A numeric component contained something other than ASCII digits
    #[error("{field} is not a non-negative integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The line was not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// A numeric value does not fit in 32 bits
    #[error("{field} is out of range: {value:?}")]
    OutOfRange { field: &'static str, value: String },
}
