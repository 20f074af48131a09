//! A dice game engine with optional `no_std` support.
//!
//! The crate provides one manager per game variant — [`PigGame`], [`GreedGame`],
//! [`BalutGame`], and the freeform [`CustomGame`] scorekeeper. A manager owns
//! the rules, the seeded randomness behind its AI opponent, and the injected
//! collaborators (opponent profile, telemetry tracker); the game itself lives
//! in an immutable state value that every call consumes by reference and
//! returns anew. Callers supply dice rolls from their own roll source.
//!
//! # Example
//!
//! ```
//! use dicers::{PigGame, PigOptions};
//!
//! let mut game = PigGame::new(PigOptions::default(), 42);
//! let state = game.initialize_game();
//! assert!(!state.is_game_over);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod score;
pub mod stats;

// Re-export main types
pub use dice::{BALUT_DICE, DIE_FACES, GREED_DICE};
pub use error::{BankError, CategoryError, PlayerError, TurnError};
pub use game::{
    BalutGame, BalutState, CustomGame, CustomState, GreedGame, GreedState, PigGame, PigState, Seat,
};
pub use options::{BalutOptions, CustomOptions, GreedOptions, PigOptions};
pub use score::{Category, RollScore};
pub use stats::{GameTracker, PlayStyle, PlayerProfile, ProfileSource, Silent};
