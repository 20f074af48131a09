//! Opponent modeling and telemetry collaborator contracts.
//!
//! The AI-bearing managers read a [`PlayerProfile`] snapshot to bias their
//! decisions and report turn-level events to a [`GameTracker`]. Both are
//! injected at construction; the surrounding statistics subsystem owns their
//! implementations. [`Silent`] is the built-in stand-in for either.

/// A player's modeled play style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayStyle {
    /// Takes risks, rarely banks early.
    Aggressive,
    /// No strong tendency either way.
    #[default]
    Balanced,
    /// Banks early, avoids risk.
    Cautious,
}

/// Snapshot of the opponent model maintained by the statistics subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProfile {
    /// The player's modeled play style.
    pub play_style: PlayStyle,
    /// Predicted win rate in 0.0..=1.0.
    pub predicted_win_rate: f64,
    /// How consistently the player performs, in 0.0..=1.0.
    pub consistency: f64,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            play_style: PlayStyle::Balanced,
            predicted_win_rate: 0.5,
            consistency: 0.5,
        }
    }
}

/// Read-only source for the opponent profile snapshot.
///
/// Returning `None` makes the managers fall back to [`PlayerProfile::default`].
pub trait ProfileSource {
    /// Returns the current opponent profile, if one has been modeled.
    fn player_profile(&self) -> Option<PlayerProfile>;
}

/// Write-only sink for turn-level telemetry.
///
/// Calls are fire-and-forget; the engine never reads anything back.
pub trait GameTracker {
    /// A roll was processed.
    fn track_roll(&self);
    /// The AI made a hold or bank decision.
    fn track_decision(&self);
    /// A score was banked.
    fn track_banking(&self, score: u32);
}

/// No-op collaborator: models nothing, records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProfileSource for Silent {
    fn player_profile(&self) -> Option<PlayerProfile> {
        None
    }
}

impl GameTracker for Silent {
    fn track_roll(&self) {}
    fn track_decision(&self) {}
    fn track_banking(&self, _score: u32) {}
}
