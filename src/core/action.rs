//! Turn actions.
//!
//! The two things a player can do on their turn: move a caller-chosen
//! distance, or buy the space they stand on. Hosts that drive the game
//! from a queue of commands build `Action`s and feed them to
//! `RealEstateGame::apply_action`.

use serde::{Deserialize, Serialize};

/// A turn action, addressed to a player by name.
///
/// ## Example
///
/// ```
/// use real_estate::core::Action;
///
/// let roll = Action::move_by("Player 1", 4);
/// let buy = Action::buy("Player 1");
/// assert_eq!(roll.player(), buy.player());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move `steps` spaces forward.
    Move { player: String, steps: u32 },
    /// Buy the space the player is standing on.
    Buy { player: String },
}

impl Action {
    #[must_use]
    pub fn move_by(player: impl Into<String>, steps: u32) -> Self {
        Action::Move {
            player: player.into(),
            steps,
        }
    }

    #[must_use]
    pub fn buy(player: impl Into<String>) -> Self {
        Action::Buy {
            player: player.into(),
        }
    }

    /// Name of the acting player.
    #[must_use]
    pub fn player(&self) -> &str {
        match self {
            Action::Move { player, .. } | Action::Buy { player } => player,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { player, steps } => write!(f, "{} moves {}", player, steps),
            Action::Buy { player } => write!(f, "{} buys", player),
        }
    }
}
