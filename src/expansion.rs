//! Dictionary expansion across the 12 canonical chromatic roots
//!
//! Each archetype is rooted in turn at every canonical spelling, producing
//! one entry per (archetype, root) pair keyed `"<identifier>_<root>"`.
//! Expansion is pure over its input: archetype metadata passes through
//! unmodified and no entry depends on any other.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::error::ChordError;
use crate::models::{ChordArchetype, ExpandedChordEntry};
use crate::transposition::{derive_fingerprint, transpose, CANONICAL_ROOTS};

/// Expand every archetype to all 12 canonical roots.
///
/// An archetype with an unknown interval label aborts the whole run — a
/// label missing from the reference table is a defect in the archetype
/// table, not a per-root condition. Interval slots that resolve to no known
/// spelling are kept as `None` and simply drop out of the fingerprint.
pub fn expand(
    archetypes: &BTreeMap<String, ChordArchetype>,
) -> Result<BTreeMap<String, ExpandedChordEntry>, ChordError> {
    let mut expanded = BTreeMap::new();

    for (name, archetype) in archetypes {
        if archetype.intervals.is_empty() {
            return Err(ChordError::MissingIntervals(name.clone()));
        }

        for root in CANONICAL_ROOTS {
            let notes = transpose(root, &archetype.intervals)?;
            if notes.iter().any(|slot| slot.is_none()) {
                warn!(
                    "{} at {}: interval without a spelling in the chromatic table",
                    name, root
                );
            }

            let fingerprint = derive_fingerprint(&notes)?;
            let key = format!("{}_{}", name, root);
            let entry = ExpandedChordEntry {
                root: root.to_string(),
                intervals: archetype.intervals.clone(),
                notes,
                pcs: fingerprint.pcs,
                binary: fingerprint.binary,
                decimal: fingerprint.decimal,
                aliases: archetype.aliases.clone(),
                full_name: archetype.full_name.clone(),
                forte_number: archetype.forte_number.clone(),
                base_decimal: archetype.base_decimal.clone(),
            };

            if expanded.insert(key.clone(), entry).is_some() {
                return Err(ChordError::DuplicateEntry(key));
            }
        }
    }

    debug!(
        "expanded {} archetypes into {} entries",
        archetypes.len(),
        expanded.len()
    );
    Ok(expanded)
}
