//! The Balut dice game.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::dice::{BALUT_DICE, face_counts, join_faces, valid_roll};
use crate::error::{CategoryError, TurnError};
use crate::options::BalutOptions;
use crate::score::{self, Category};
use crate::stats::{GameTracker, PlayStyle, ProfileSource, Silent};

use super::Seat;

/// Rolls available to each player per turn.
pub const MAX_ROLLS: u8 = 3;

/// Immutable state of a Balut game.
///
/// Each seat drafts one category per round until every category on the sheet
/// is written; a written category is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalutState {
    /// Category scores written so far, per seat.
    pub scores: HashMap<Seat, HashMap<Category, u32>>,
    /// Rolls remaining in the current turn.
    pub rolls_left: u8,
    /// Positions held out of the next roll.
    pub held_dice: BTreeSet<usize>,
    /// Current round, 1-based.
    pub current_round: u32,
    /// Total number of rounds, one per category.
    pub max_rounds: u32,
    /// Narration of the last transition.
    pub message: String,
    /// Seat whose turn it is.
    pub current: Seat,
    /// Whether the game has ended.
    pub is_game_over: bool,
}

impl BalutState {
    /// Sum of all category scores written for the given seat.
    #[must_use]
    pub fn total(&self, seat: Seat) -> u32 {
        self.scores
            .get(&seat)
            .map_or(0, |sheet| sheet.values().sum())
    }

    /// Returns whether the category has been written for the given seat.
    #[must_use]
    pub fn has_scored(&self, seat: Seat, category: Category) -> bool {
        self.scores
            .get(&seat)
            .is_some_and(|sheet| sheet.contains_key(&category))
    }
}

/// Manager for the Balut dice game.
///
/// Five dice, three rolls per turn, twelve categories per seat. Humans score
/// through [`BalutGame::score_category`]; the AI holds toward the generic
/// combination ladder and drafts categories through a weighted ranking tuned
/// by its skill level and the score situation.
pub struct BalutGame {
    /// Game options.
    pub options: BalutOptions,
    profile: Box<dyn ProfileSource>,
    tracker: Box<dyn GameTracker>,
    rng: ChaCha8Rng,
}

impl BalutGame {
    /// Creates a new game with the given seed and no collaborators.
    #[must_use]
    pub fn new(options: BalutOptions, seed: u64) -> Self {
        Self::with_collaborators(options, seed, Box::new(Silent), Box::new(Silent))
    }

    /// Creates a new game wired to an opponent profile source and a tracker.
    #[must_use]
    pub fn with_collaborators(
        options: BalutOptions,
        seed: u64,
        profile: Box<dyn ProfileSource>,
        tracker: Box<dyn GameTracker>,
    ) -> Self {
        Self {
            options,
            profile,
            tracker,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a fresh game with empty score sheets and a coin-flip starting
    /// seat.
    pub fn initialize_game(&mut self) -> BalutState {
        let current = if self.rng.random_bool(0.5) {
            Seat::Human
        } else {
            Seat::Ai
        };
        let mut scores = HashMap::new();
        scores.insert(Seat::Human, HashMap::new());
        scores.insert(Seat::Ai, HashMap::new());
        let max_rounds = Category::ALL.len() as u32;

        BalutState {
            scores,
            rolls_left: MAX_ROLLS,
            held_dice: BTreeSet::new(),
            current_round: 1,
            max_rounds,
            message: match current {
                Seat::Human => format!("You go first! Round 1 of {max_rounds}."),
                Seat::Ai => format!("AI goes first! Round 1 of {max_rounds}."),
            },
            current,
            is_game_over: false,
        }
    }

    /// Handles one roll of all five positions for whichever seat holds the
    /// turn.
    ///
    /// `held` lists the positions the human kept out of this roll; it is
    /// ignored on the AI's turn. Once the rolls run out the human must call
    /// [`BalutGame::score_category`]; the AI drafts a category on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the roll is not five dice, or a
    /// die face is invalid.
    pub fn handle_turn(
        &mut self,
        dice: &[u8],
        state: &BalutState,
        held: &BTreeSet<usize>,
    ) -> Result<BalutState, TurnError> {
        if state.is_game_over {
            return Err(TurnError::GameOver);
        }
        if dice.len() != BALUT_DICE {
            return Err(TurnError::WrongDiceCount);
        }
        if !valid_roll(dice) {
            return Err(TurnError::InvalidFace);
        }
        self.tracker.track_roll();

        Ok(match state.current {
            Seat::Human => Self::human_turn(dice, state, held),
            Seat::Ai => self.ai_turn(dice, state),
        })
    }

    fn human_turn(dice: &[u8], state: &BalutState, held: &BTreeSet<usize>) -> BalutState {
        if state.rolls_left == 0 {
            return BalutState {
                message: String::from("No rolls left. Choose a category."),
                ..state.clone()
            };
        }

        let remaining = state.rolls_left - 1;
        let message = if remaining > 0 {
            format!(
                "Rolled: {}\n{remaining} rolls left. Hold dice by selecting them.",
                join_faces(dice)
            )
        } else {
            format!("Rolled: {}\nNo rolls left - choose a category.", join_faces(dice))
        };

        BalutState {
            rolls_left: remaining,
            held_dice: held.clone(),
            message,
            ..state.clone()
        }
    }

    fn ai_turn(&mut self, dice: &[u8], state: &BalutState) -> BalutState {
        if state.rolls_left == 0 {
            let category = self.choose_ai_category(dice, state, self.options.ai_skill);
            return self.apply_category(state, dice, category);
        }

        let held = self.decide_ai_dice_holds(dice);
        let remaining = state.rolls_left - 1;
        let held_faces: Vec<String> = held.iter().map(|&position| dice[position].to_string()).collect();
        let message = format!(
            "AI rolled: {}\nAI holds: {}{}",
            join_faces(dice),
            held_faces.join(", "),
            if remaining > 0 {
                format!("\n{remaining} rolls left.")
            } else {
                String::from("\nAI's last roll!")
            }
        );

        BalutState {
            rolls_left: remaining,
            held_dice: held,
            message,
            ..state.clone()
        }
    }

    /// Writes the score for a category and passes the turn.
    ///
    /// The round counter advances when play wraps back to the human. The game
    /// ends the moment any seat's sheet holds every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the roll is not five dice, the
    /// human has not rolled yet this turn, or the category is already written
    /// for the active seat.
    pub fn score_category(
        &self,
        state: &BalutState,
        dice: &[u8],
        category: Category,
    ) -> Result<BalutState, CategoryError> {
        if state.is_game_over {
            return Err(CategoryError::GameOver);
        }
        if dice.len() != BALUT_DICE {
            return Err(CategoryError::WrongDiceCount);
        }
        if !state.current.is_ai() && state.rolls_left == MAX_ROLLS {
            return Err(CategoryError::RollRequired);
        }
        // A written category stays written.
        if state.has_scored(state.current, category) {
            return Err(CategoryError::AlreadyScored);
        }
        Ok(self.apply_category(state, dice, category))
    }

    fn apply_category(&self, state: &BalutState, dice: &[u8], category: Category) -> BalutState {
        let seat = state.current;
        let points = score::category_score(dice, category);

        let mut scores = state.scores.clone();
        scores.entry(seat).or_default().insert(category, points);
        self.tracker.track_banking(points);

        let next = seat.other();
        let current_round = if next == Seat::Human {
            state.current_round + 1
        } else {
            state.current_round
        };
        let is_game_over = scores
            .values()
            .any(|sheet| sheet.len() == Category::ALL.len());

        let message = if is_game_over {
            let human: u32 = scores
                .get(&Seat::Human)
                .map_or(0, |sheet| sheet.values().sum());
            let ai: u32 = scores.get(&Seat::Ai).map_or(0, |sheet| sheet.values().sum());
            if human >= ai {
                format!("You win with {human} points!")
            } else {
                format!("AI wins with {ai} points!")
            }
        } else {
            match seat {
                Seat::Human => format!("{category}: {points} points. AI's turn!"),
                Seat::Ai => format!("AI takes {category}: {points} points. Your turn!"),
            }
        };

        BalutState {
            scores,
            rolls_left: MAX_ROLLS,
            held_dice: BTreeSet::new(),
            current_round,
            max_rounds: state.max_rounds,
            message,
            current: next,
            is_game_over,
        }
    }

    /// Chooses which positions the AI holds before its next roll.
    ///
    /// Dice already forming a generic scoring pattern are always kept; with no
    /// pattern the AI leans on high faces and pairs-or-better, weighted by the
    /// modeled opponent's aggressiveness.
    fn decide_ai_dice_holds(&mut self, dice: &[u8]) -> BTreeSet<usize> {
        self.tracker.track_decision();

        let pattern = score::balut_score(dice);
        if !pattern.scoring.is_empty() {
            return pattern.scoring;
        }

        let profile = self.profile.player_profile().unwrap_or_default();
        let hold_bias: f64 = match profile.play_style {
            PlayStyle::Aggressive => 0.7,
            PlayStyle::Balanced => 0.6,
            PlayStyle::Cautious => 0.5,
        };
        let counts = face_counts(dice);

        let mut held = BTreeSet::new();
        for (position, &face) in dice.iter().enumerate() {
            let chance = if face >= 5 || counts[usize::from(face)] >= 2 {
                hold_bias
            } else {
                (hold_bias - 0.3).max(0.0)
            };
            if self.rng.random_bool(chance) {
                held.insert(position);
            }
        }
        held
    }

    /// Picks the category the AI writes for this roll.
    ///
    /// Unused categories are ranked by score times a fixed preference ladder,
    /// with noise inversely proportional to `skill`. On top of the ranking: in
    /// the final two rounds Choice is only taken for a big sum; a skilled AI
    /// in the lead takes the top option, a skilled AI behind gambles on the
    /// high-variance categories among the top three; everyone else mixes the
    /// top two.
    pub fn choose_ai_category(&mut self, dice: &[u8], state: &BalutState, skill: f64) -> Category {
        self.tracker.track_decision();
        let skill = skill.clamp(0.0, 1.0);

        let empty = HashMap::new();
        let sheet = state.scores.get(&Seat::Ai).unwrap_or(&empty);
        let mut ranked: Vec<(Category, f64)> = Category::ALL
            .iter()
            .copied()
            .filter(|category| !sheet.contains_key(category))
            .map(|category| {
                let base = f64::from(score::category_score(dice, category));
                let noise = 1.0 + (1.0 - skill) * (self.rng.random::<f64>() - 0.5);
                (category, base * priority_weight(category, dice) * noise)
            })
            .collect();
        if ranked.is_empty() {
            return Category::Choice;
        }
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));

        let dice_sum: u32 = dice.iter().map(|&die| u32::from(die)).sum();
        // Endgame: Choice is a dumping ground unless the roll is big.
        if state.current_round + 1 >= state.max_rounds {
            if let Some(position) = ranked.iter().position(|&(c, _)| c == Category::Choice) {
                if dice_sum >= 24 {
                    return Category::Choice;
                }
                if ranked.len() > 1 {
                    ranked.remove(position);
                }
            }
        }

        let ai_total = state.total(Seat::Ai);
        let human_total = state.total(Seat::Human);
        if skill > 0.7 && ai_total >= human_total {
            return ranked[0].0;
        }
        if skill > 0.7 {
            // Behind: gamble on variance among the top three.
            let top = &ranked[..ranked.len().min(3)];
            return top
                .iter()
                .max_by(|a, b| {
                    let left = a.1 * variance_bonus(a.0);
                    let right = b.1 * variance_bonus(b.0);
                    left.partial_cmp(&right).unwrap_or(core::cmp::Ordering::Equal)
                })
                .map_or(ranked[0].0, |&(category, _)| category);
        }

        if ranked.len() > 1 && self.rng.random_bool(0.3) {
            ranked[1].0
        } else {
            ranked[0].0
        }
    }
}

/// Fixed preference ladder, with number categories scaled by how many
/// matching dice were actually rolled and Choice by the size of the sum.
fn priority_weight(category: Category, dice: &[u8]) -> f64 {
    if let Some(face) = category.face() {
        let matches = dice.iter().filter(|&&die| die == face).count();
        return match matches {
            5 => 1.8,
            4 => 1.5,
            3 => 1.2,
            2 => 0.95,
            _ => 0.7,
        };
    }
    match category {
        Category::FiveOfAKind => 2.0,
        Category::LargeStraight => 1.8,
        Category::SmallStraight => 1.6,
        Category::FourOfAKind | Category::FullHouse => 1.4,
        Category::Choice => {
            let sum: u32 = dice.iter().map(|&die| u32::from(die)).sum();
            if sum >= 25 {
                1.2
            } else if sum >= 20 {
                0.9
            } else {
                0.6
            }
        }
        // Number categories were handled through `face()` above.
        _ => 1.0,
    }
}

const fn variance_bonus(category: Category) -> f64 {
    match category {
        Category::FiveOfAKind | Category::LargeStraight => 1.5,
        Category::SmallStraight | Category::FourOfAKind => 1.2,
        _ => 1.0,
    }
}

