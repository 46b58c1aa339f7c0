//! Pitch-class-set fingerprints
//!
//! Reduces a spelled note sequence to its canonical set representation:
//! sorted distinct pitch classes, a 12-bit presence mask as a binary string
//! (pitch class 0 at index 0, the most significant bit), and that mask's
//! integer value.

use std::collections::BTreeSet;

use crate::error::ChordError;
use crate::models::Fingerprint;
use crate::transposition::tables;

/// Derive the fingerprint of a note sequence.
///
/// `None` slots are excluded — an unresolved spelling contributes nothing to
/// the set. Spellings the chromatic table does not know are an error. The
/// result is independent of input order and of duplicate notes.
pub fn derive_fingerprint<S: AsRef<str>>(
    notes: &[Option<S>],
) -> Result<Fingerprint, ChordError> {
    let mut classes = BTreeSet::new();
    for note in notes.iter().filter_map(|slot| slot.as_ref()) {
        classes.insert(tables::pitch_class_of(note.as_ref())?);
    }

    let pcs: Vec<u8> = classes.iter().copied().collect();
    let binary: String = (0..12u8)
        .map(|class| if classes.contains(&class) { '1' } else { '0' })
        .collect();
    let decimal = pcs
        .iter()
        .fold(0u16, |mask, &class| mask | 1 << (11 - class));

    Ok(Fingerprint { pcs, binary, decimal })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(spellings: &[&str]) -> Vec<Option<String>> {
        spellings.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_major_triad_fingerprint() {
        let fp = derive_fingerprint(&notes(&["C", "E", "G"])).unwrap();
        assert_eq!(fp.pcs, vec![0, 4, 7]);
        assert_eq!(fp.binary, "100010010000");
        assert_eq!(fp.decimal, 2192);
    }

    #[test]
    fn test_minor_triad_fingerprint() {
        let fp = derive_fingerprint(&notes(&["C", "Eb", "G"])).unwrap();
        assert_eq!(fp.pcs, vec![0, 3, 7]);
        assert_eq!(fp.binary, "100100010000");
        assert_eq!(fp.decimal, 2320);
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        let forward = derive_fingerprint(&notes(&["C", "E", "G"])).unwrap();
        let shuffled = derive_fingerprint(&notes(&["G", "C", "E", "C"])).unwrap();
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_enharmonic_spellings_collapse_to_one_class() {
        let fp = derive_fingerprint(&notes(&["B#", "C"])).unwrap();
        assert_eq!(fp.pcs, vec![0]);
        assert_eq!(fp.decimal, 2048);
    }

    #[test]
    fn test_none_slots_are_excluded() {
        let slots = vec![Some("C".to_string()), None, Some("G".to_string())];
        let fp = derive_fingerprint(&slots).unwrap();
        assert_eq!(fp.pcs, vec![0, 7]);
    }

    #[test]
    fn test_all_none_yields_empty_set() {
        let slots: Vec<Option<String>> = vec![None, None];
        let fp = derive_fingerprint(&slots).unwrap();
        assert!(fp.pcs.is_empty());
        assert_eq!(fp.binary, "000000000000");
        assert_eq!(fp.decimal, 0);
    }

    #[test]
    fn test_unknown_spelling_is_an_error() {
        let slots = vec![Some("C".to_string()), Some("Qb".to_string())];
        assert_eq!(
            derive_fingerprint(&slots),
            Err(ChordError::UnknownNote("Qb".to_string()))
        );
    }

    #[test]
    fn test_decimal_round_trips_to_the_same_set() {
        let fp = derive_fingerprint(&notes(&["C", "E", "G", "Bb"])).unwrap();

        let reparsed: Vec<u8> = (0..12u8)
            .filter(|class| fp.decimal & 1 << (11 - class) != 0)
            .collect();
        assert_eq!(reparsed, fp.pcs);

        let rendered = format!("{:012b}", fp.decimal);
        assert_eq!(rendered, fp.binary);
    }
}
