//! Encoding result types.

use std::time::Duration;

use armonik_filter::{Disjunction, FieldKind};

use crate::records::Filters;

/// Result of encoding a filter.
///
/// Contains the `or` record and statistics about its shape.
#[derive(Debug, Clone)]
pub struct EncodedFilter {
    /// The filter in DNF, ready to be sent.
    pub filters: Filters,
    /// Shape and timing statistics.
    pub stats: FilterStats,
}

impl EncodedFilter {
    /// Creates a new EncodedFilter.
    pub fn new(filters: Filters, stats: FilterStats) -> Self {
        Self { filters, stats }
    }

    /// Consumes the result, keeping only the record.
    pub fn into_filters(self) -> Filters {
        self.filters
    }
}

/// Statistics about an encoded filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStats {
    /// Field kind shared by every predicate.
    pub kind: FieldKind,
    /// Number of `and` records.
    pub conjunctions: usize,
    /// Number of single-field records across all conjunctions.
    pub predicates: usize,
    /// Size of the largest `and` record.
    pub widest_conjunction: usize,
    /// Time spent encoding.
    pub duration: Duration,
}

impl FilterStats {
    /// Collects the shape of `dnf`; the duration starts at zero.
    pub fn of(dnf: &Disjunction) -> Self {
        Self {
            kind: dnf.kind(),
            conjunctions: dnf.len(),
            predicates: dnf.predicate_count(),
            widest_conjunction: dnf
                .conjunctions()
                .iter()
                .map(|c| c.len())
                .max()
                .unwrap_or(0),
            duration: Duration::ZERO,
        }
    }

    /// Sets the encoding duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
