//! File-facing surface around the core
//!
//! Reading and writing JSON dictionaries and projecting persisted
//! dictionaries down to a reduced field set. Everything musical happens in
//! `transposition` and `expansion`; this layer only moves data.

pub mod files;
pub mod filter;

pub use files::{load_archetypes, load_dictionary_values, save_dictionary, DictionaryIoError};
pub use filter::filter_dictionary;
