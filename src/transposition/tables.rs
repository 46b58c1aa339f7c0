//! Fixed pitch reference tables
//!
//! Two tables drive everything here:
//!
//! - the chromatic table: every note spelling the dictionary format knows,
//!   mapped to its chromatic pitch class 0-11. Single accidentals only;
//!   double-accidental spellings are deliberately absent, which is what
//!   makes "no known spelling" a reachable outcome of transposition.
//! - the interval table: every interval label, mapped to its semitone
//!   offset (0-23, compound intervals included) and to its generic letter
//!   step count (a 3rd advances two letters, a 5th four, a 9th one).
//!
//! From the chromatic table a selection table keyed by (pitch class, letter)
//! is built once at startup; construction asserts it is a bijection, so
//! enharmonic disambiguation can never silently depend on iteration order.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::ChordError;

/// The seven-letter musical alphabet, in ascending order from C
pub const MUSICAL_ALPHABET: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Every spelling in the dictionary format, with its chromatic pitch class
pub const NOTE_SPELLINGS: [(&str, u8); 21] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("E#", 5),
    ("Fb", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("B#", 0),
    ("Cb", 11),
];

/// Interval labels: (label, letter steps, semitone offset)
///
/// Letter steps encode the generic interval size: a 2nd moves one letter, a
/// 3rd two, and compound intervals wrap (9th = one letter, 11th = three,
/// 13th = five). The accidental modifier changes only the semitone offset.
pub const INTERVALS: [(&str, u8, u8); 43] = [
    ("R", 0, 0),
    ("2", 1, 2),
    ("♭2", 1, 1),
    ("♯2", 1, 3),
    ("𝄫2", 1, 0),
    ("𝄪2", 1, 4),
    ("3", 2, 4),
    ("♭3", 2, 3),
    ("♯3", 2, 5),
    ("𝄫3", 2, 2),
    ("𝄪3", 2, 6),
    ("4", 3, 5),
    ("♯4", 3, 6),
    ("𝄪4", 3, 7),
    ("♭5", 4, 6),
    ("𝄫5", 4, 5),
    ("5", 4, 7),
    ("♯5", 4, 8),
    ("𝄪5", 4, 9),
    ("♭6", 5, 8),
    ("𝄫6", 5, 7),
    ("6", 5, 9),
    ("♯6", 5, 10),
    ("𝄪6", 5, 11),
    ("♭7", 6, 10),
    ("𝄫7", 6, 9),
    ("7", 6, 11),
    ("♯7", 6, 12),
    ("𝄪7", 6, 13),
    ("9", 1, 14),
    ("♭9", 1, 13),
    ("♯9", 1, 15),
    ("𝄫9", 1, 12),
    ("𝄪9", 1, 16),
    ("11", 3, 17),
    ("♯11", 3, 18),
    ("𝄪11", 3, 19),
    ("𝄫11", 3, 16),
    ("13", 5, 21),
    ("♭13", 5, 20),
    ("♯13", 5, 22),
    ("𝄫13", 5, 19),
    ("𝄪13", 5, 23),
];

/// One spelling per chromatic pitch class, ascending from C.
///
/// Flat spellings are used at classes 1, 3, 8 and 10 and F# at class 6;
/// D# and A# roots would push plain triads outside the chromatic table
/// (their major thirds need double sharps it does not contain).
pub const CANONICAL_ROOTS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

lazy_static! {
    /// Spelling → chromatic pitch class
    static ref PITCH_CLASSES: HashMap<&'static str, u8> =
        NOTE_SPELLINGS.iter().copied().collect();

    /// Interval label → (letter steps, semitone offset)
    static ref INTERVAL_STEPS: HashMap<&'static str, (u8, u8)> = INTERVALS
        .iter()
        .map(|&(label, letters, semitones)| (label, (letters, semitones)))
        .collect();

    /// (pitch class, letter) → unique spelling.
    ///
    /// Built once from the chromatic table; the construction asserts that
    /// no two spellings share a (class, letter) pair.
    static ref SPELLING_BY_CLASS_AND_LETTER: HashMap<(u8, char), &'static str> = {
        let mut table = HashMap::new();
        for &(spelling, class) in NOTE_SPELLINGS.iter() {
            let letter = spelling
                .chars()
                .next()
                .expect("chromatic table entries are non-empty");
            let previous = table.insert((class, letter), spelling);
            assert!(
                previous.is_none(),
                "chromatic table is ambiguous: {:?} and {} share class {} and letter {}",
                previous,
                spelling,
                class,
                letter
            );
        }
        table
    };
}

/// Rewrite Unicode accidentals in a note spelling to the table's ASCII form
fn normalize_note(note: &str) -> String {
    note.replace('♯', "#")
        .replace('♭', "b")
        .replace('𝄪', "##")
        .replace('𝄫', "bb")
}

/// Rewrite an ASCII accidental prefix on an interval label to the table's
/// Unicode form ("b3" → "♭3", "##2" → "𝄪2")
fn normalize_interval(label: &str) -> String {
    if let Some(rest) = label.strip_prefix("##") {
        format!("𝄪{}", rest)
    } else if let Some(rest) = label.strip_prefix("bb") {
        format!("𝄫{}", rest)
    } else if let Some(rest) = label.strip_prefix('#') {
        format!("♯{}", rest)
    } else if let Some(rest) = label.strip_prefix('b') {
        format!("♭{}", rest)
    } else {
        label.to_string()
    }
}

/// Chromatic pitch class (0-11) of a note spelling
pub fn pitch_class_of(note: &str) -> Result<u8, ChordError> {
    let normalized = normalize_note(note);
    PITCH_CLASSES
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| ChordError::UnknownNote(note.to_string()))
}

/// Semitone offset (0-23) of an interval label
pub fn semitone_offset_of(interval: &str) -> Result<u8, ChordError> {
    interval_components(interval).map(|(_, semitones)| semitones)
}

/// (letter steps, semitone offset) of an interval label
pub(crate) fn interval_components(interval: &str) -> Result<(u8, u8), ChordError> {
    let normalized = normalize_interval(interval);
    INTERVAL_STEPS
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| ChordError::UnknownInterval(interval.to_string()))
}

/// The table's normalized form of a spelling, with its leading letter
pub(crate) fn spelling_parts(note: &str) -> Result<(String, char), ChordError> {
    let normalized = normalize_note(note);
    match normalized.chars().next() {
        Some(letter) if PITCH_CLASSES.contains_key(normalized.as_str()) => {
            Ok((normalized, letter))
        }
        _ => Err(ChordError::UnknownNote(note.to_string())),
    }
}

/// The unique spelling for a (pitch class, letter) pair, if the chromatic
/// table can represent it
pub(crate) fn spelling_for(pitch_class: u8, letter: char) -> Option<&'static str> {
    SPELLING_BY_CLASS_AND_LETTER.get(&(pitch_class, letter)).copied()
}

/// Position of a letter in the musical alphabet
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    MUSICAL_ALPHABET.iter().position(|&l| l == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_table_is_a_bijection() {
        // Every spelling in the chromatic table must be recoverable from
        // its own (class, letter) pair.
        for &(spelling, class) in NOTE_SPELLINGS.iter() {
            let letter = spelling.chars().next().unwrap();
            assert_eq!(
                spelling_for(class, letter),
                Some(spelling),
                "{} should be the unique spelling for class {} letter {}",
                spelling,
                class,
                letter
            );
        }
    }

    #[test]
    fn test_pitch_class_of_plain_spellings() {
        assert_eq!(pitch_class_of("C"), Ok(0));
        assert_eq!(pitch_class_of("F#"), Ok(6));
        assert_eq!(pitch_class_of("Bb"), Ok(10));
        assert_eq!(pitch_class_of("B#"), Ok(0));
        assert_eq!(pitch_class_of("Cb"), Ok(11));
    }

    #[test]
    fn test_pitch_class_of_unicode_accidentals() {
        assert_eq!(pitch_class_of("C♯"), Ok(1));
        assert_eq!(pitch_class_of("E♭"), Ok(3));
    }

    #[test]
    fn test_pitch_class_of_unknown_spelling() {
        assert_eq!(
            pitch_class_of("H"),
            Err(ChordError::UnknownNote("H".to_string()))
        );
        // Double accidentals are outside the chromatic table
        assert_eq!(
            pitch_class_of("F##"),
            Err(ChordError::UnknownNote("F##".to_string()))
        );
    }

    #[test]
    fn test_semitone_offset_of_simple_and_compound() {
        assert_eq!(semitone_offset_of("R"), Ok(0));
        assert_eq!(semitone_offset_of("5"), Ok(7));
        assert_eq!(semitone_offset_of("♭3"), Ok(3));
        assert_eq!(semitone_offset_of("9"), Ok(14));
        assert_eq!(semitone_offset_of("𝄪13"), Ok(23));
    }

    #[test]
    fn test_semitone_offset_of_ascii_accidentals() {
        assert_eq!(semitone_offset_of("b3"), Ok(3));
        assert_eq!(semitone_offset_of("#11"), Ok(18));
        assert_eq!(semitone_offset_of("bb7"), Ok(9));
        assert_eq!(semitone_offset_of("##5"), Ok(9));
    }

    #[test]
    fn test_semitone_offset_of_unknown_label() {
        assert_eq!(
            semitone_offset_of("15"),
            Err(ChordError::UnknownInterval("15".to_string()))
        );
    }

    #[test]
    fn test_canonical_roots_cover_each_class_once() {
        let classes: Vec<u8> = CANONICAL_ROOTS
            .iter()
            .map(|root| pitch_class_of(root).unwrap())
            .collect();
        assert_eq!(classes, (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_letter_steps_follow_generic_size() {
        // Same generic size, different quality: identical letter steps
        let (flat_five_letters, _) = interval_components("♭5").unwrap();
        let (five_letters, _) = interval_components("5").unwrap();
        assert_eq!(flat_five_letters, five_letters);

        // Same offset, different generic size: different letter steps
        let (sharp_four_letters, sharp_four_semis) = interval_components("♯4").unwrap();
        let (_, flat_five_semis) = interval_components("♭5").unwrap();
        assert_eq!(sharp_four_semis, flat_five_semis);
        assert_ne!(sharp_four_letters, five_letters);
    }
}
