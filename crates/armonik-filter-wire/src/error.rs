//! Error types for wire encoding.

use armonik_filter::{FieldKind, FilterError};
use thiserror::Error;

/// Errors that can occur while encoding or decoding wire records.
#[derive(Error, Debug)]
pub enum WireError {
    /// Error from the filter algebra.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// A leaf value has no representation in its wire record.
    #[error("cannot represent {value} in a {kind} filter for field `{field}`")]
    UnrepresentableValue {
        /// Targeted field.
        field: String,
        /// Kind of the field.
        kind: FieldKind,
        /// Rendered value.
        value: String,
    },

    /// Filter has more conjunctions than allowed.
    #[error("filter has {count} conjunctions, exceeds limit {limit}")]
    TooManyConjunctions {
        /// Number of conjunctions in the filter.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A conjunction has more predicates than allowed.
    #[error("conjunction {index} has {count} predicates, exceeds limit {limit}")]
    ConjunctionTooWide {
        /// Position of the conjunction in the filter.
        index: usize,
        /// Number of predicates in it.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A decoded `and` record has no member.
    #[error("conjunction {index} is empty")]
    EmptyConjunction {
        /// Position of the conjunction in the filter.
        index: usize,
    },

    /// JSON rendering or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for wire operations.
pub type WireResult<T> = std::result::Result<T, WireError>;
