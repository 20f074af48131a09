//! Game configuration options.

use alloc::string::String;

/// Configuration options for a Pig game.
///
/// ```
/// use dicers::PigOptions;
///
/// let options = PigOptions::default().with_target_score(50);
/// assert_eq!(options.target_score, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PigOptions {
    /// Total score that ends the game (typically 100).
    pub target_score: u32,
}

impl Default for PigOptions {
    fn default() -> Self {
        Self { target_score: 100 }
    }
}

impl PigOptions {
    /// Sets the total score that ends the game.
    #[must_use]
    pub const fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }
}

/// Configuration options for a Greed game.
///
/// ```
/// use dicers::GreedOptions;
///
/// let options = GreedOptions::default()
///     .with_target_score(5000)
///     .with_opening_minimum(500);
/// assert_eq!(options.target_score, 5000);
/// assert_eq!(options.opening_minimum, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedOptions {
    /// Total score that ends the game (typically 10,000).
    pub target_score: u32,
    /// Turn score required for a player's very first bank (typically 800).
    pub opening_minimum: u32,
}

impl Default for GreedOptions {
    fn default() -> Self {
        Self {
            target_score: 10_000,
            opening_minimum: 800,
        }
    }
}

impl GreedOptions {
    /// Sets the total score that ends the game.
    #[must_use]
    pub const fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Sets the turn score required to get on the board.
    #[must_use]
    pub const fn with_opening_minimum(mut self, minimum: u32) -> Self {
        self.opening_minimum = minimum;
        self
    }
}

/// Configuration options for a Balut game.
///
/// ```
/// use dicers::BalutOptions;
///
/// let options = BalutOptions::default().with_ai_skill(0.5);
/// assert_eq!(options.ai_skill, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalutOptions {
    /// AI skill in 0.0..=1.0; lower values add noise to category choices.
    pub ai_skill: f64,
}

impl Default for BalutOptions {
    fn default() -> Self {
        Self { ai_skill: 1.0 }
    }
}

impl BalutOptions {
    /// Sets the AI skill level.
    #[must_use]
    pub const fn with_ai_skill(mut self, skill: f64) -> Self {
        self.ai_skill = skill;
        self
    }
}

/// Configuration options for a custom scorekeeping game.
///
/// ```
/// use dicers::CustomOptions;
///
/// let options = CustomOptions::default()
///     .with_dice_count(4)
///     .with_game_name("Family Night");
/// assert_eq!(options.dice_count, 4);
/// assert_eq!(options.game_name, "Family Night");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOptions {
    /// Number of dice on the table, 1 through 6.
    pub dice_count: usize,
    /// Display name for the game board.
    pub game_name: String,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            dice_count: 6,
            game_name: String::from("Custom Dice Game"),
        }
    }
}

impl CustomOptions {
    /// Sets the number of dice on the table.
    #[must_use]
    pub const fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Sets the display name for the game board.
    #[must_use]
    pub fn with_game_name(mut self, name: &str) -> Self {
        self.game_name = String::from(name);
        self
    }
}
