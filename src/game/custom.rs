//! Freeform multi-player scorekeeping.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::dice::join_faces;
use crate::error::PlayerError;
use crate::options::CustomOptions;

/// Maximum number of dice on the table.
pub const MAX_DICE: usize = 6;

/// Minimum number of players at the table.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players at the table.
pub const MAX_PLAYERS: usize = 6;

/// Immutable state of a custom scorekeeping board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomState {
    /// Number of dice on the table, 1 through [`MAX_DICE`].
    pub dice_count: usize,
    /// Score and note ledger per player.
    pub score_history: HashMap<usize, Vec<String>>,
    /// Display name of the game board.
    pub game_name: String,
    /// Display names per player.
    pub player_names: HashMap<usize, String>,
    /// Running totals per player.
    pub player_scores: HashMap<usize, i32>,
    /// Narration of the last transition.
    pub message: String,
    /// Index of the player whose turn it is.
    pub current_player: usize,
    /// Whether the game has ended.
    pub is_game_over: bool,
}

impl CustomState {
    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_scores.len()
    }
}

/// Manager for the freeform scorekeeping board.
///
/// No rules and no AI: rolls only report their sum, and scores are arbitrary
/// signed deltas appended to a per-player ledger. Turn order and score entry
/// stay entirely in the caller's hands.
pub struct CustomGame {
    /// Game options.
    pub options: CustomOptions,
}

impl CustomGame {
    /// Creates a new scorekeeping game.
    #[must_use]
    pub const fn new(options: CustomOptions) -> Self {
        Self { options }
    }

    /// Starts a fresh board with two players and zeroed ledgers.
    #[must_use]
    pub fn initialize_game(&self) -> CustomState {
        let mut score_history = HashMap::new();
        let mut player_names = HashMap::new();
        let mut player_scores = HashMap::new();
        for index in 0..MIN_PLAYERS {
            score_history.insert(index, Vec::new());
            player_names.insert(index, format!("Player {}", index + 1));
            player_scores.insert(index, 0);
        }

        CustomState {
            dice_count: self.options.dice_count.clamp(1, MAX_DICE),
            score_history,
            game_name: self.options.game_name.clone(),
            player_names,
            player_scores,
            message: String::from("Roll dice and save your scores."),
            current_player: 0,
            is_game_over: false,
        }
    }

    /// Reports a roll without touching scores or turn order.
    #[must_use]
    pub fn handle_turn(&self, state: &CustomState, dice: &[u8]) -> CustomState {
        let sum: u32 = dice.iter().map(|&die| u32::from(die)).sum();
        CustomState {
            message: format!("Rolled: {}\nTotal: {sum}", join_faces(dice)),
            ..state.clone()
        }
    }

    /// Adds a player to the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table already holds [`MAX_PLAYERS`].
    pub fn add_player(&self, state: &CustomState) -> Result<CustomState, PlayerError> {
        if state.player_count() >= MAX_PLAYERS {
            return Err(PlayerError::TableFull);
        }

        let index = state.player_count();
        let mut next = state.clone();
        next.score_history.insert(index, Vec::new());
        next.player_names.insert(index, format!("Player {}", index + 1));
        next.player_scores.insert(index, 0);
        next.message = format!("Added Player {}", index + 1);
        Ok(next)
    }

    /// Removes the last-seated player from the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is already at [`MIN_PLAYERS`].
    pub fn remove_player(&self, state: &CustomState) -> Result<CustomState, PlayerError> {
        if state.player_count() <= MIN_PLAYERS {
            return Err(PlayerError::TooFewPlayers);
        }

        let index = state.player_count() - 1;
        let mut next = state.clone();
        let name = next
            .player_names
            .remove(&index)
            .unwrap_or_else(|| format!("Player {}", index + 1));
        next.score_history.remove(&index);
        next.player_scores.remove(&index);
        if next.current_player >= index {
            next.current_player = 0;
        }
        next.message = format!("Removed {name}");
        Ok(next)
    }

    /// Renames a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player index is not seated.
    pub fn rename_player(
        &self,
        state: &CustomState,
        player: usize,
        name: &str,
    ) -> Result<CustomState, PlayerError> {
        if !state.player_names.contains_key(&player) {
            return Err(PlayerError::NotFound);
        }

        let mut next = state.clone();
        next.player_names.insert(player, String::from(name));
        next.message = format!("Updated player name to {name}");
        Ok(next)
    }

    /// Applies a signed score delta to a player and logs it in their ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the player index is not seated.
    pub fn add_score(
        &self,
        state: &CustomState,
        player: usize,
        delta: i32,
    ) -> Result<CustomState, PlayerError> {
        if !state.player_scores.contains_key(&player) {
            return Err(PlayerError::NotFound);
        }

        let mut next = state.clone();
        let total = next.player_scores.get(&player).copied().unwrap_or(0) + delta;
        next.player_scores.insert(player, total);
        next.score_history
            .entry(player)
            .or_default()
            .push(format!("Score: {delta}"));
        let name = display_name(state, player);
        next.message = format!("Added score {delta} for {name}");
        Ok(next)
    }

    /// Appends a free-text note to a player's ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the player index is not seated.
    pub fn add_note(
        &self,
        state: &CustomState,
        player: usize,
        note: &str,
    ) -> Result<CustomState, PlayerError> {
        if !state.player_scores.contains_key(&player) {
            return Err(PlayerError::NotFound);
        }

        let mut next = state.clone();
        next.score_history
            .entry(player)
            .or_default()
            .push(String::from(note));
        let name = display_name(state, player);
        next.message = format!("Added note for {name}");
        Ok(next)
    }

    /// Sets the number of dice on the table, clamped to 1 through [`MAX_DICE`].
    #[must_use]
    pub fn set_dice_count(&self, state: &CustomState, count: usize) -> CustomState {
        let dice_count = count.clamp(1, MAX_DICE);
        CustomState {
            dice_count,
            message: format!("Number of dice set to {dice_count}"),
            ..state.clone()
        }
    }

    /// Sets the display name of the game board.
    #[must_use]
    pub fn set_game_name(&self, state: &CustomState, name: &str) -> CustomState {
        CustomState {
            game_name: String::from(name),
            message: format!("Game name set to: {name}"),
            ..state.clone()
        }
    }

    /// Resets the board back to its initial two-player layout.
    #[must_use]
    pub fn reset(&self, state: &CustomState) -> CustomState {
        let mut next = self.initialize_game();
        next.game_name = state.game_name.clone();
        next.message = String::from("Board reset!");
        next
    }
}

fn display_name(state: &CustomState, player: usize) -> String {
    state
        .player_names
        .get(&player)
        .cloned()
        .unwrap_or_else(|| format!("Player {}", player + 1))
}
