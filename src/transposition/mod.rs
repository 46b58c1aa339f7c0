//! Pitch reference tables and the transposition engine
//!
//! `tables` holds the fixed note-spelling and interval tables; `transpose`
//! turns (root, interval labels) into absolute spellings; `fingerprint`
//! reduces spelled notes to a canonical pitch-class-set representation.

pub mod fingerprint;
pub mod tables;
pub mod transpose;

pub use fingerprint::derive_fingerprint;
pub use tables::{pitch_class_of, semitone_offset_of, CANONICAL_ROOTS};
pub use transpose::transpose;
