//! The Greed dice game.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::dice::{GREED_DICE, valid_roll};
use crate::error::{BankError, TurnError};
use crate::options::GreedOptions;
use crate::score::{self, RollScore};
use crate::stats::{GameTracker, PlayStyle, ProfileSource, Silent};

use super::Seat;

/// Immutable state of a Greed game.
///
/// A turn spans several rolls: dice the player holds back and dice already
/// locked in as scoring are excluded from the next roll. When every die is
/// scoring ("hot dice") both sets clear and the whole hand must be rerolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedState {
    /// Banked totals per seat.
    pub scores: HashMap<Seat, u32>,
    /// Score accumulated across the rolls of the current turn.
    pub turn_score: u32,
    /// Positions the player chose to hold out of the last roll.
    pub held_dice: BTreeSet<usize>,
    /// Positions already locked in as scoring this turn.
    pub scoring_dice: BTreeSet<usize>,
    /// Whether another roll is allowed this turn.
    pub can_reroll: bool,
    /// The most recent roll, all six positions.
    pub last_roll: Vec<u8>,
    /// Narration of the last transition.
    pub message: String,
    /// Seat whose turn it is.
    pub current: Seat,
    /// Whether the game has ended.
    pub is_game_over: bool,
}

impl GreedState {
    /// Banked total for the given seat.
    #[must_use]
    pub fn total(&self, seat: Seat) -> u32 {
        self.scores.get(&seat).copied().unwrap_or(0)
    }
}

/// Manager for the Greed dice game.
///
/// Six dice, 10,000 points to win, 800 points to get on the board. Scoring
/// combinations lock dice out of the reroll pool; clearing the whole pool
/// ("hot dice") brings all six back. The AI chooses holds and banking against
/// the modeled human opponent.
pub struct GreedGame {
    /// Game options.
    pub options: GreedOptions,
    profile: Box<dyn ProfileSource>,
    tracker: Box<dyn GameTracker>,
    rng: ChaCha8Rng,
}

impl GreedGame {
    /// Creates a new game with the given seed and no collaborators.
    #[must_use]
    pub fn new(options: GreedOptions, seed: u64) -> Self {
        Self::with_collaborators(options, seed, Box::new(Silent), Box::new(Silent))
    }

    /// Creates a new game wired to an opponent profile source and a tracker.
    #[must_use]
    pub fn with_collaborators(
        options: GreedOptions,
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

    /// Starts a fresh game with zero scores and a coin-flip starting seat.
    pub fn initialize_game(&mut self) -> GreedState {
        let current = if self.rng.random_bool(0.5) {
            Seat::Human
        } else {
            Seat::Ai
        };
        let mut scores = HashMap::new();
        scores.insert(Seat::Human, 0);
        scores.insert(Seat::Ai, 0);

        GreedState {
            scores,
            turn_score: 0,
            held_dice: BTreeSet::new(),
            scoring_dice: BTreeSet::new(),
            can_reroll: true,
            last_roll: Vec::new(),
            message: String::from(match current {
                Seat::Human => "You go first!",
                Seat::Ai => "AI goes first!",
            }),
            current,
            is_game_over: false,
        }
    }

    /// Handles one roll of all six positions for whichever seat holds the turn.
    ///
    /// `held` lists the positions the human kept out of this roll; it is
    /// ignored on the AI's turn, which picks its own holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the roll is not six dice, or a
    /// die face is invalid.
    pub fn handle_turn(
        &mut self,
        dice: &[u8],
        state: &GreedState,
        held: &BTreeSet<usize>,
    ) -> Result<GreedState, TurnError> {
        if state.is_game_over {
            return Err(TurnError::GameOver);
        }
        if dice.len() != GREED_DICE {
            return Err(TurnError::WrongDiceCount);
        }
        if !valid_roll(dice) {
            return Err(TurnError::InvalidFace);
        }
        self.tracker.track_roll();

        Ok(match state.current {
            Seat::Human => self.human_turn(dice, state, held),
            Seat::Ai => self.ai_turn(dice, state),
        })
    }

    fn human_turn(&self, dice: &[u8], state: &GreedState, held: &BTreeSet<usize>) -> GreedState {
        if !state.can_reroll {
            return GreedState {
                message: String::from("No rerolls left. Bank your score!"),
                ..state.clone()
            };
        }
        if held.len() == dice.len() {
            return GreedState {
                message: String::from("All dice are held. Bank your score or risk losing it!"),
                can_reroll: false,
                held_dice: held.clone(),
                ..state.clone()
            };
        }
        // Hot dice must come back in full; holding any of them busts the turn.
        if state.scoring_dice.is_empty() && state.turn_score > 0 && !held.is_empty() {
            return GreedState {
                turn_score: 0,
                message: String::from("Hot dice must all be rerolled! Turn score lost."),
                held_dice: BTreeSet::new(),
                scoring_dice: BTreeSet::new(),
                last_roll: dice.to_vec(),
                can_reroll: false,
                ..state.clone()
            };
        }

        let available = available_dice(dice.len(), held, &state.scoring_dice);
        if available.is_empty() {
            return GreedState {
                message: String::from("No dice available to roll. Bank your score!"),
                can_reroll: false,
                held_dice: held.clone(),
                ..state.clone()
            };
        }

        let rolled: Vec<u8> = available.iter().map(|&position| dice[position]).collect();
        let roll_score = score::greed_score(&rolled);
        if roll_score.is_bust() {
            return GreedState {
                turn_score: 0,
                message: String::from("Bust! No scoring dice - turn score lost."),
                held_dice: BTreeSet::new(),
                scoring_dice: BTreeSet::new(),
                last_roll: dice.to_vec(),
                can_reroll: false,
                ..state.clone()
            };
        }

        let turn_score = state.turn_score + roll_score.points;
        let locked = lock_scoring(&state.scoring_dice, &roll_score, &available);

        if locked.len() == dice.len() {
            // Hot dice: every position scores, the whole hand comes back up.
            return GreedState {
                turn_score,
                message: format!(
                    "Scored {} - turn score: {turn_score}\nHot dice! Reroll all dice!",
                    roll_score.points
                ),
                held_dice: BTreeSet::new(),
                scoring_dice: BTreeSet::new(),
                last_roll: dice.to_vec(),
                can_reroll: true,
                ..state.clone()
            };
        }

        let covered = held.union(&locked).count();
        let can_reroll = covered < dice.len();
        let message = if can_reroll {
            format!("Scored {} - turn score: {turn_score}", roll_score.points)
        } else {
            format!(
                "Scored {} - turn score: {turn_score}\nAll dice held. Bank your score!",
                roll_score.points
            )
        };

        GreedState {
            turn_score,
            message,
            held_dice: held.clone(),
            scoring_dice: locked,
            last_roll: dice.to_vec(),
            can_reroll,
            ..state.clone()
        }
    }

    fn ai_turn(&mut self, dice: &[u8], state: &GreedState) -> GreedState {
        if !state.can_reroll {
            return self.bank(state);
        }
        let available = available_dice(dice.len(), &state.held_dice, &state.scoring_dice);
        if available.is_empty() {
            return self.bank(state);
        }

        let rolled: Vec<u8> = available.iter().map(|&position| dice[position]).collect();
        let roll_score = score::greed_score(&rolled);
        if roll_score.is_bust() {
            return GreedState {
                turn_score: 0,
                message: String::from("AI busts! Your turn!"),
                held_dice: BTreeSet::new(),
                scoring_dice: BTreeSet::new(),
                last_roll: dice.to_vec(),
                can_reroll: true,
                current: Seat::Human,
                ..state.clone()
            };
        }

        let turn_score = state.turn_score + roll_score.points;
        let locked = lock_scoring(&state.scoring_dice, &roll_score, &available);
        let hot_dice = locked.len() == dice.len();

        if !hot_dice && self.should_ai_bank(turn_score, state.total(Seat::Ai)) {
            return self.bank(&GreedState {
                turn_score,
                ..state.clone()
            });
        }

        let (held_dice, scoring_dice) = if hot_dice {
            (BTreeSet::new(), BTreeSet::new())
        } else {
            (self.decide_ai_dice_holds(&locked, turn_score), locked)
        };
        let message = if hot_dice {
            format!(
                "AI scored {} - turn score: {turn_score}\nAI got hot dice! Rerolling all dice!",
                roll_score.points
            )
        } else {
            format!("AI scored {} - turn score: {turn_score}", roll_score.points)
        };

        GreedState {
            turn_score,
            message,
            held_dice,
            scoring_dice,
            last_roll: dice.to_vec(),
            can_reroll: true,
            ..state.clone()
        }
    }

    /// Chooses which scoring positions the AI keeps for the next roll.
    ///
    /// Everything is locked once the turn is worth protecting; below that it
    /// is a weighted coin flip that grows with the turn score.
    fn decide_ai_dice_holds(&mut self, scoring: &BTreeSet<usize>, turn_score: u32) -> BTreeSet<usize> {
        self.tracker.track_decision();
        if turn_score >= self.options.opening_minimum {
            return scoring.clone();
        }

        let profile = self.profile.player_profile().unwrap_or_default();
        let risk_tolerance = match profile.play_style {
            PlayStyle::Aggressive => 0.8,
            PlayStyle::Balanced => 0.6,
            PlayStyle::Cautious => 0.5,
        };
        let scale = f64::min(f64::from(turn_score) / 500.0, 2.0);
        let chance = (risk_tolerance * scale).clamp(0.2, 0.9);

        if self.rng.random_bool(chance) {
            scoring.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Decides whether the AI banks the given turn score.
    ///
    /// Always banks a winning score; never banks an opening turn below the
    /// minimum. Otherwise the threshold starts from the opponent's style,
    /// drops when the AI has nothing banked yet or is closing out the game,
    /// rises to protect a monster turn, clamps to 800..=2000, and takes ±100
    /// jitter.
    pub fn should_ai_bank(&mut self, turn_score: u32, ai_total: u32) -> bool {
        self.tracker.track_decision();
        if ai_total + turn_score >= self.options.target_score {
            return true;
        }
        if turn_score < self.options.opening_minimum && ai_total == 0 {
            return false;
        }

        let profile = self.profile.player_profile().unwrap_or_default();
        let base: i32 = match profile.play_style {
            PlayStyle::Aggressive => 1200,
            PlayStyle::Balanced => 1000,
            PlayStyle::Cautious => 900,
        };
        let mut threshold = base;
        if ai_total == 0 {
            threshold -= 200;
        }
        if ai_total >= self.options.target_score * 4 / 5 {
            threshold -= 300;
        }
        if turn_score >= 2000 {
            threshold += 500;
        }
        let threshold = threshold.clamp(800, 2000) + self.rng.random_range(-100..=100);

        i64::from(turn_score) >= i64::from(threshold)
    }

    /// Banks the current turn score for the active seat.
    ///
    /// The very first bank of a game must clear the opening minimum; after
    /// that any turn score banks. The turn passes either way and all transient
    /// turn state resets.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over.
    pub fn bank_score(&self, state: &GreedState) -> Result<GreedState, BankError> {
        if state.is_game_over {
            return Err(BankError::GameOver);
        }
        Ok(self.bank(state))
    }

    fn bank(&self, state: &GreedState) -> GreedState {
        let seat = state.current;
        let total = state.total(seat);
        let can_bank = state.turn_score >= self.options.opening_minimum || total > 0;

        let mut scores = state.scores.clone();
        if can_bank {
            scores.insert(seat, total + state.turn_score);
            self.tracker.track_banking(state.turn_score);
        }
        let new_total = scores.get(&seat).copied().unwrap_or(0);
        let is_game_over = scores
            .values()
            .any(|&score| score >= self.options.target_score);

        let message = if is_game_over {
            match seat {
                Seat::Human => format!("You win with {new_total} points!"),
                Seat::Ai => format!("AI wins with {new_total} points!"),
            }
        } else if can_bank {
            match seat {
                Seat::Human => format!("Banked {} points. AI's turn!", state.turn_score),
                Seat::Ai => format!("AI banks {} points. Your turn!", state.turn_score),
            }
        } else {
            format!(
                "Need at least {} points to start banking.",
                self.options.opening_minimum
            )
        };

        GreedState {
            scores,
            turn_score: 0,
            held_dice: BTreeSet::new(),
            scoring_dice: BTreeSet::new(),
            can_reroll: true,
            last_roll: state.last_roll.clone(),
            message,
            current: seat.other(),
            is_game_over,
        }
    }
}

fn available_dice(count: usize, held: &BTreeSet<usize>, locked: &BTreeSet<usize>) -> Vec<usize> {
    (0..count)
        .filter(|position| !held.contains(position) && !locked.contains(position))
        .collect()
}

/// Maps sub-roll scoring positions back to positions in the full roll and
/// merges them with the positions already locked.
fn lock_scoring(
    locked: &BTreeSet<usize>,
    roll_score: &RollScore,
    available: &[usize],
) -> BTreeSet<usize> {
    let mut all = locked.clone();
    all.extend(roll_score.scoring.iter().map(|&index| available[index]));
    all
}
