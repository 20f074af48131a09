//! Game managers and state types.
//!
//! Each manager pairs with an immutable state value: calls take the current
//! state by reference and return the next one, so the caller owns every state
//! between calls and nothing is mutated in place. The three AI-bearing games
//! key their score maps by [`Seat`]; the custom scorekeeper uses plain player
//! indices.

pub mod balut;
pub mod custom;
pub mod greed;
pub mod pig;

pub use balut::{BalutGame, BalutState};
pub use custom::{CustomGame, CustomState};
pub use greed::{GreedGame, GreedState};
pub use pig::{PigGame, PigState};

/// Identity of an actor in a two-player game.
///
/// An explicit tag, never derived from an id hash: the human always sits in
/// [`Seat::Human`], the engine-driven opponent in [`Seat::Ai`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Human,
    /// The AI opponent.
    Ai,
}

impl Seat {
    /// The seat whose turn comes next.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }

    /// Returns whether this seat is the AI opponent.
    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, Self::Ai)
    }
}
