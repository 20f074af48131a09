//! Die faces and roll utilities.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Number of dice rolled per turn in Greed.
pub const GREED_DICE: usize = 6;

/// Number of dice rolled per turn in Balut.
pub const BALUT_DICE: usize = 5;

/// Returns whether every die in the roll shows a valid face (1 through 6).
#[must_use]
pub fn valid_roll(dice: &[u8]) -> bool {
    dice.iter().all(|&die| (1..=DIE_FACES).contains(&die))
}

/// Formats a roll for display, e.g. `"3, 5, 5, 1"`.
pub(crate) fn join_faces(dice: &[u8]) -> String {
    let faces: Vec<String> = dice.iter().map(ToString::to_string).collect();
    faces.join(", ")
}

/// Counts how many dice show each face.
///
/// Index 0 is unused; `counts[face]` holds the number of dice showing `face`.
/// Faces outside 1..=6 are ignored.
#[must_use]
pub fn face_counts(dice: &[u8]) -> [usize; 7] {
    let mut counts = [0usize; 7];
    for &die in dice {
        if (1..=DIE_FACES).contains(&die) {
            counts[die as usize] += 1;
        }
    }
    counts
}
