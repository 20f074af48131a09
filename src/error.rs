//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while handling a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
    /// Wrong number of dice for this game.
    #[error("wrong number of dice for this game")]
    WrongDiceCount,
    /// A die shows a face outside 1 through 6.
    #[error("die face outside 1 through 6")]
    InvalidFace,
}

/// Errors that can occur while banking a turn score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankError {
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur while scoring a Balut category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
    /// Wrong number of dice for this game.
    #[error("wrong number of dice for this game")]
    WrongDiceCount,
    /// The player has not rolled yet this turn.
    #[error("roll at least once before choosing a category")]
    RollRequired,
    /// The category has already been scored for this player.
    #[error("category already scored for this player")]
    AlreadyScored,
}

/// Errors that can occur while managing players in a custom game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The table already holds the maximum number of players.
    #[error("maximum number of players reached")]
    TableFull,
    /// Removing a player would drop the table below the minimum.
    #[error("minimum number of players reached")]
    TooFewPlayers,
    /// Player not found.
    #[error("player not found")]
    NotFound,
}
