//! JSON dictionary file I/O
//!
//! The persisted formats are plain key-value mappings: archetype identifier
//! → archetype object on the way in, `"<identifier>_<root>"` → expanded
//! entry on the way out. File and parse failures stay in this layer's error
//! type; they are not part of the core's taxonomy.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::ChordArchetype;

/// Errors from reading or writing dictionary files
#[derive(Debug, Error)]
pub enum DictionaryIoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dictionary JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_to_string(path: &Path) -> Result<String, DictionaryIoError> {
    fs::read_to_string(path).map_err(|source| DictionaryIoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an archetype table from a JSON file.
///
/// Every entry must carry an `intervals` field; a missing one is a parse
/// error here, before any expansion runs.
pub fn load_archetypes(
    path: &Path,
) -> Result<BTreeMap<String, ChordArchetype>, DictionaryIoError> {
    let text = read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| DictionaryIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a persisted dictionary as raw JSON values, for projection passes
/// that must not care about the entry shape
pub fn load_dictionary_values(
    path: &Path,
) -> Result<BTreeMap<String, Value>, DictionaryIoError> {
    let text = read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| DictionaryIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a dictionary mapping to a JSON file, pretty-printed, keys in the
/// map's (sorted) order
pub fn save_dictionary<T: Serialize>(
    path: &Path,
    dictionary: &BTreeMap<String, T>,
) -> Result<(), DictionaryIoError> {
    let mut text =
        serde_json::to_string_pretty(dictionary).map_err(|source| DictionaryIoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    text.push('\n');
    fs::write(path, text).map_err(|source| DictionaryIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
