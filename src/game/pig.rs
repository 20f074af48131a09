//! The Pig dice game.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::dice::DIE_FACES;
use crate::error::{BankError, TurnError};
use crate::options::PigOptions;
use crate::stats::{GameTracker, PlayStyle, ProfileSource, Silent};

use super::Seat;

/// Die face that forfeits the turn and its accumulated score.
pub const BUST_FACE: u8 = 1;

/// Immutable state of a Pig game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PigState {
    /// Banked totals per seat.
    pub scores: HashMap<Seat, u32>,
    /// Score accumulated during the current turn.
    pub turn_score: u32,
    /// Narration of the last transition.
    pub message: String,
    /// Seat whose turn it is.
    pub current: Seat,
    /// Whether the game has ended.
    pub is_game_over: bool,
}

impl PigState {
    /// Banked total for the given seat.
    #[must_use]
    pub fn total(&self, seat: Seat) -> u32 {
        self.scores.get(&seat).copied().unwrap_or(0)
    }
}

/// Manager for the Pig dice game.
///
/// Players alternate rolling a single die into a shared turn accumulator.
/// Rolling a 1 forfeits the turn score and passes the turn; banking moves the
/// accumulator into the roller's total. The first total at or past the target
/// ends the game. The AI banks against a point threshold tuned by the modeled
/// human opponent and a dash of seeded jitter.
pub struct PigGame {
    /// Game options.
    pub options: PigOptions,
    profile: Box<dyn ProfileSource>,
    tracker: Box<dyn GameTracker>,
    rng: ChaCha8Rng,
}

impl PigGame {
    /// Creates a new game with the given seed and no collaborators.
    #[must_use]
    pub fn new(options: PigOptions, seed: u64) -> Self {
        Self::with_collaborators(options, seed, Box::new(Silent), Box::new(Silent))
    }

    /// Creates a new game wired to an opponent profile source and a tracker.
    #[must_use]
    pub fn with_collaborators(
        options: PigOptions,
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
    pub fn initialize_game(&mut self) -> PigState {
        let current = if self.rng.random_bool(0.5) {
            Seat::Human
        } else {
            Seat::Ai
        };
        let mut scores = HashMap::new();
        scores.insert(Seat::Human, 0);
        scores.insert(Seat::Ai, 0);

        PigState {
            scores,
            turn_score: 0,
            message: String::from(match current {
                Seat::Human => "You go first!",
                Seat::Ai => "AI goes first!",
            }),
            current,
            is_game_over: false,
        }
    }

    /// Handles one die roll for whichever seat holds the turn.
    ///
    /// A human keeps accumulating until they bank explicitly via
    /// [`PigGame::bank_score`]; the AI banks on its own the moment its
    /// threshold says so.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the die face is invalid.
    pub fn handle_turn(&mut self, state: &PigState, die: u8) -> Result<PigState, TurnError> {
        if state.is_game_over {
            return Err(TurnError::GameOver);
        }
        if !(1..=DIE_FACES).contains(&die) {
            return Err(TurnError::InvalidFace);
        }
        self.tracker.track_roll();

        Ok(match state.current {
            Seat::Ai => self.ai_turn(state, die),
            Seat::Human => Self::human_turn(state, die),
        })
    }

    fn human_turn(state: &PigState, die: u8) -> PigState {
        if die == BUST_FACE {
            return switch_turn(state, String::from("Rolled 1 - turn lost. AI's turn!"));
        }
        let turn_score = state.turn_score + u32::from(die);
        PigState {
            turn_score,
            message: format!("Rolled {die} - turn score: {turn_score}"),
            ..state.clone()
        }
    }

    fn ai_turn(&mut self, state: &PigState, die: u8) -> PigState {
        if die == BUST_FACE {
            return switch_turn(state, String::from("AI rolled 1 - your turn!"));
        }
        let turn_score = state.turn_score + u32::from(die);
        let next = PigState {
            turn_score,
            message: format!("AI rolled {die} - turn score: {turn_score}"),
            ..state.clone()
        };

        // The AI never carries an unbanked turn score across a turn boundary.
        if self.should_ai_bank(turn_score, next.total(Seat::Ai), next.total(Seat::Human)) {
            self.bank(&next)
        } else {
            next
        }
    }

    /// Banks the current turn score for the active seat.
    ///
    /// Ends the game when the new total reaches the target; otherwise the turn
    /// passes to the other seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over.
    pub fn bank_score(&self, state: &PigState) -> Result<PigState, BankError> {
        if state.is_game_over {
            return Err(BankError::GameOver);
        }
        Ok(self.bank(state))
    }

    fn bank(&self, state: &PigState) -> PigState {
        let seat = state.current;
        let new_total = state.total(seat) + state.turn_score;
        let mut scores = state.scores.clone();
        scores.insert(seat, new_total);
        self.tracker.track_banking(state.turn_score);

        if new_total >= self.options.target_score {
            return PigState {
                scores,
                turn_score: 0,
                message: match seat {
                    Seat::Human => format!("You win with {new_total} points!"),
                    Seat::Ai => format!("AI wins with {new_total} points!"),
                },
                current: seat,
                is_game_over: true,
            };
        }

        PigState {
            scores,
            turn_score: 0,
            message: match seat {
                Seat::Human => format!("Banked {} points. AI's turn!", state.turn_score),
                Seat::Ai => format!("AI banks {} points. Your turn!", state.turn_score),
            },
            current: seat.other(),
            is_game_over: false,
        }
    }

    /// Decides whether the AI banks the given turn score.
    ///
    /// A winning bank is always taken. Otherwise the minimum-bank threshold
    /// starts from the modeled opponent — patient against an aggressive
    /// opponent who wins often, pushy against a cautious or struggling one —
    /// shifts with the score situation, clamps to 12..=28, and picks up ±1
    /// jitter against a consistent opponent or ±2 against an erratic one.
    pub fn should_ai_bank(&mut self, turn_score: u32, ai_total: u32, human_total: u32) -> bool {
        self.tracker.track_decision();
        if ai_total + turn_score >= self.options.target_score {
            return true;
        }

        let profile = self.profile.player_profile().unwrap_or_default();
        let base: i32 = match profile.play_style {
            PlayStyle::Aggressive if profile.predicted_win_rate > 0.6 => 24,
            PlayStyle::Aggressive => 21,
            PlayStyle::Balanced => 20,
            PlayStyle::Cautious if profile.predicted_win_rate < 0.4 => 16,
            PlayStyle::Cautious => 18,
        };
        let threshold = (base + self.situational_shift(ai_total, human_total)).clamp(12, 28);
        let span: i32 = if profile.consistency >= 0.7 { 1 } else { 2 };
        let threshold = threshold + self.rng.random_range(-span..=span);

        i64::from(turn_score) >= i64::from(threshold)
    }

    /// Bank sooner in a tight race or when the human is closing on the
    /// target; press on when trailing badly.
    fn situational_shift(&self, ai_total: u32, human_total: u32) -> i32 {
        let endgame = self.options.target_score * 3 / 4;
        let gap = i64::from(human_total) - i64::from(ai_total);
        if gap.unsigned_abs() <= 5 {
            -3
        } else if gap >= 30 {
            5
        } else if human_total >= endgame {
            -4
        } else if ai_total >= endgame {
            2
        } else {
            0
        }
    }
}

fn switch_turn(state: &PigState, message: String) -> PigState {
    PigState {
        turn_score: 0,
        message,
        current: state.current.other(),
        ..state.clone()
    }
}
