//! Error types for the chord dictionary core
//!
//! Unknown spellings and interval labels are configuration defects (the
//! reference tables are fixed), and are kept distinct from the recoverable
//! per-interval case where a target pitch simply has no spelling in the
//! table — that case surfaces as a `None` slot in `transpose` output, not
//! as an error.

use thiserror::Error;

/// Top-level error type for table lookups and dictionary expansion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Note spelling absent from the chromatic reference table
    #[error("unknown note spelling: {0}")]
    UnknownNote(String),

    /// Interval label absent from the interval reference table
    #[error("unknown interval label: {0}")]
    UnknownInterval(String),

    /// Archetype carries no interval sequence to expand
    #[error("archetype \"{0}\" has an empty interval list")]
    MissingIntervals(String),

    /// Two (archetype, root) pairs produced the same dictionary key
    #[error("duplicate dictionary key: {0}")]
    DuplicateEntry(String),
}
