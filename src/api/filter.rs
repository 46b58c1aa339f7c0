//! Dictionary projection
//!
//! A pure field filter over an already-persisted dictionary: keep a fixed
//! set of fields per entry, and optionally flatten a `transpositions`
//! sub-mapping down to `{label: decimal}` pairs. No musical interpretation
//! happens here — entries are arbitrary JSON objects.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Fields that survive projection
const KEPT_FIELDS: [&str; 6] = ["pcs", "notes", "aliases", "fullName", "decimal", "intervals"];

/// Project every entry down to the kept field set.
///
/// With `flatten_transpositions`, an entry's `transpositions` sub-mapping is
/// also kept, each sub-entry replaced by its `decimal` value. Entries that
/// are not JSON objects pass through unchanged.
pub fn filter_dictionary(
    dictionary: &BTreeMap<String, Value>,
    flatten_transpositions: bool,
) -> BTreeMap<String, Value> {
    dictionary
        .iter()
        .map(|(key, entry)| (key.clone(), filter_entry(entry, flatten_transpositions)))
        .collect()
}

fn filter_entry(entry: &Value, flatten_transpositions: bool) -> Value {
    let details = match entry.as_object() {
        Some(details) => details,
        None => return entry.clone(),
    };

    let mut kept = Map::new();
    for (field, value) in details {
        if KEPT_FIELDS.contains(&field.as_str()) {
            kept.insert(field.clone(), value.clone());
        } else if flatten_transpositions && field == "transpositions" {
            kept.insert(field.clone(), flatten(value));
        }
    }
    Value::Object(kept)
}

/// Reduce a `{label: entry}` sub-mapping to `{label: entry.decimal}`
fn flatten(transpositions: &Value) -> Value {
    let sub_entries = match transpositions.as_object() {
        Some(sub_entries) => sub_entries,
        None => return transpositions.clone(),
    };

    let flattened: Map<String, Value> = sub_entries
        .iter()
        .map(|(label, sub_entry)| {
            let decimal = sub_entry.get("decimal").cloned().unwrap_or(Value::Null);
            (label.clone(), decimal)
        })
        .collect();
    Value::Object(flattened)
}
