//! Letter-based transposition of interval labels to absolute spellings
//!
//! Two independent arithmetics run per interval: chromatic (root pitch
//! class + semitone offset, mod 12) and generic (root letter + letter
//! steps, mod 7). The target spelling is then the unique chromatic-table
//! entry matching both, which is what keeps a diminished fifth from C
//! spelled "Gb" while an augmented fourth comes out "F#".

use crate::error::ChordError;
use crate::transposition::tables;

/// Transpose a sequence of interval labels from a root spelling.
///
/// Returns one slot per input label, in input order. A slot is `None` when
/// the target (pitch class, letter) pair has no spelling in the chromatic
/// table — a representational gap, not an error. An unknown root or an
/// unknown interval label is an error and aborts the whole call.
pub fn transpose<S: AsRef<str>>(
    root: &str,
    intervals: &[S],
) -> Result<Vec<Option<String>>, ChordError> {
    let root_class = tables::pitch_class_of(root)?;
    let (_, root_letter) = tables::spelling_parts(root)?;
    let root_position = tables::letter_index(root_letter)
        .ok_or_else(|| ChordError::UnknownNote(root.to_string()))?;

    let mut notes = Vec::with_capacity(intervals.len());
    for interval in intervals {
        let (letter_steps, semitones) = tables::interval_components(interval.as_ref())?;

        let target_class = (root_class + semitones) % 12;
        let target_letter =
            tables::MUSICAL_ALPHABET[(root_position + letter_steps as usize) % 7];

        notes.push(tables::spelling_for(target_class, target_letter).map(str::to_string));
    }

    Ok(notes)
}
