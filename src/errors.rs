//! Error types for sexagesimal coordinate parsing.

use thiserror::Error;

/// Failure to interpret a sexagesimal `D:M:S` (or `H:M:S`) string.
///
/// Parsing is strict: exactly three `:`-separated fields, the first two
/// integral and the third floating point. Nothing here is recoverable;
/// callers propagate the error and abort the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The string did not split into exactly three `:`-separated fields.
    #[error("expected three ':'-separated fields in '{input}', found {found}")]
    FieldCount { input: String, found: usize },

    /// A field could not be read as a number.
    #[error("non-numeric field '{field}' in '{input}'")]
    BadField { input: String, field: String },
}
