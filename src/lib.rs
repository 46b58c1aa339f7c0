//! Chord Dictionary Expansion
//!
//! Expands a dictionary of chord archetypes (root-relative interval recipes
//! such as "major triad" = [R, 3, 5]) across all 12 chromatic roots. Each
//! expansion spells its notes with letter-based interval arithmetic, so a
//! diminished fifth from C comes out as "Gb" rather than "F#", and derives a
//! pitch-class-set fingerprint (sorted classes, 12-bit mask, decimal value).

pub mod api;
pub mod error;
pub mod expansion;
pub mod models;
pub mod transposition;

// Re-export commonly used types
pub use error::ChordError;
pub use expansion::expand;
pub use models::{ChordArchetype, ExpandedChordEntry, Fingerprint};
pub use transposition::{derive_fingerprint, pitch_class_of, semitone_offset_of, transpose};
