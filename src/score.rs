//! Pure scoring functions for the Greed and Balut rule sets.
//!
//! Everything here is stateless: a roll goes in, a score and the set of
//! positions that produced it come out. A [`RollScore`] with no scoring
//! positions is the bust signal the managers act on.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::dice::face_counts;

/// Score of a roll together with the dice positions that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollScore {
    /// Points awarded for the roll.
    pub points: u32,
    /// Indices into the roll that contributed to the score.
    pub scoring: BTreeSet<usize>,
}

impl RollScore {
    /// Returns whether the roll scored nothing (the bust signal).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.scoring.is_empty()
    }

    /// A score that claims every die in the roll.
    fn claiming_all(points: u32, len: usize) -> Self {
        Self {
            points,
            scoring: (0..len).collect(),
        }
    }
}

/// Balut scoring categories.
///
/// This is the closed, canonical category set; [`Category::ALL`] drives the
/// round count and game-over detection in the Balut manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Sum of dice showing 1.
    Ones,
    /// Sum of dice showing 2.
    Twos,
    /// Sum of dice showing 3.
    Threes,
    /// Sum of dice showing 4.
    Fours,
    /// Sum of dice showing 5.
    Fives,
    /// Sum of dice showing 6.
    Sixes,
    /// All five dice showing the same face (50 points).
    FiveOfAKind,
    /// At least four dice showing the same face (40 points).
    FourOfAKind,
    /// Three dice of one face and two of another (35 points).
    FullHouse,
    /// Four consecutive faces (30 points).
    SmallStraight,
    /// Five consecutive faces (40 points).
    LargeStraight,
    /// Sum of all dice.
    Choice,
}

impl Category {
    /// Every category, in scoring-sheet order.
    pub const ALL: [Self; 12] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::FiveOfAKind,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::Choice,
    ];

    /// The face summed by a number category, or `None` for combinations.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }

    /// The category's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::FiveOfAKind => "Five of a Kind",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::SmallStraight => "Small Straight",
            Self::LargeStraight => "Large Straight",
            Self::Choice => "Choice",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn positions_of(dice: &[u8], face: u8) -> impl Iterator<Item = usize> + '_ {
    dice.iter()
        .enumerate()
        .filter(move |&(_, &die)| die == face)
        .map(|(index, _)| index)
}

const fn single_rate(face: u8) -> u32 {
    if face == 1 { 100 } else { 50 }
}

/// Scores a Greed roll.
///
/// Special combinations are checked first and claim the whole roll: a full
/// 1-2-3-4-5-6 straight (1500), six of a kind (3000), five of a kind (2000),
/// and exactly three pairs (1500). Otherwise each face with three or more
/// occurrences scores 1000 (for 1s) or face × 100, with any 1s and 5s beyond
/// the third adding their single-die rate; loose 1s and 5s score 100 and 50
/// apiece. A roll of fewer than six dice (a partial reroll) scores the same
/// way, minus the six-dice-only combinations.
#[must_use]
pub fn greed_score(dice: &[u8]) -> RollScore {
    let counts = face_counts(dice);

    // Special combinations claim every die, including a non-matching
    // straggler next to five of a kind.
    if dice.len() == 6 && (1..=6).all(|face| counts[face] == 1) {
        return RollScore::claiming_all(1500, dice.len());
    }
    if counts.iter().any(|&count| count == 6) {
        return RollScore::claiming_all(3000, dice.len());
    }
    if counts.iter().any(|&count| count == 5) {
        return RollScore::claiming_all(2000, dice.len());
    }
    if counts.iter().filter(|&&count| count == 2).count() == 3 {
        return RollScore::claiming_all(1500, dice.len());
    }

    let mut points = 0u32;
    let mut scoring = BTreeSet::new();

    for face in 1..=6u8 {
        let count = counts[usize::from(face)] as u32;
        if count >= 3 {
            points += if face == 1 { 1000 } else { u32::from(face) * 100 };
            scoring.extend(positions_of(dice, face).take(3));

            // A fourth or fifth 1 or 5 still earns its single-die rate.
            if face == 1 || face == 5 {
                points += (count - 3) * single_rate(face);
                scoring.extend(positions_of(dice, face).skip(3));
            }
        } else if count > 0 && (face == 1 || face == 5) {
            points += count * single_rate(face);
            scoring.extend(positions_of(dice, face));
        }
    }

    RollScore { points, scoring }
}

/// Scores a Balut roll against the generic combination ladder.
///
/// Checked in priority order: five of a kind (50), four of a kind (40, first
/// four matching dice), full house (35), large straight (40), small straight
/// (30). Anything else is a bust.
#[must_use]
pub fn balut_score(dice: &[u8]) -> RollScore {
    let counts = face_counts(dice);

    if counts.iter().any(|&count| count == 5) {
        return RollScore::claiming_all(50, dice.len());
    }
    if let Some(face) = (1..=6u8).find(|&face| counts[usize::from(face)] >= 4) {
        return RollScore {
            points: 40,
            scoring: positions_of(dice, face).take(4).collect(),
        };
    }
    let distinct = counts.iter().filter(|&&count| count > 0).count();
    if distinct == 2 && counts.iter().any(|&count| count == 3) {
        return RollScore::claiming_all(35, dice.len());
    }
    if has_run(&counts, 5) {
        return RollScore::claiming_all(40, dice.len());
    }
    if has_run(&counts, 4) {
        return RollScore::claiming_all(30, dice.len());
    }

    RollScore::default()
}

/// Scores a roll against a named category.
///
/// Number categories sum the matching faces; the combination categories check
/// their shape and pay a fixed value or nothing; Choice sums the whole roll.
#[must_use]
pub fn category_score(dice: &[u8], category: Category) -> u32 {
    if let Some(face) = category.face() {
        let count = dice.iter().filter(|&&die| die == face).count() as u32;
        return count * u32::from(face);
    }

    let counts = face_counts(dice);
    match category {
        Category::FiveOfAKind => {
            if counts.iter().any(|&count| count == 5) {
                50
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if counts.iter().any(|&count| count >= 4) {
                40
            } else {
                0
            }
        }
        Category::FullHouse => {
            let distinct = counts.iter().filter(|&&count| count > 0).count();
            if distinct == 2 && counts.iter().any(|&count| count == 3) {
                35
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if has_run(&counts, 4) {
                30
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_run(&counts, 5) {
                40
            } else {
                0
            }
        }
        Category::Choice => dice.iter().map(|&die| u32::from(die)).sum(),
        // Number categories were handled through `face()` above.
        _ => 0,
    }
}

/// A run may start anywhere among the distinct faces, not only at 1.
fn has_run(counts: &[usize; 7], len: usize) -> bool {
    (1..=7 - len).any(|start| (start..start + len).all(|face| counts[face] > 0))
}
