//! Results of turn operations.

use serde::{Deserialize, Serialize};

use crate::core::{Funds, PlayerId};

/// State of the game as reported by `check_game_over`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The named player is the last one with money.
    Winner(String),
    /// More than one player can still play.
    InProgress,
}

impl GameResult {
    /// Message shown while nobody has won.
    pub const NO_WINNER: &'static str = "No one has won the game yet";

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameResult::Winner(_))
    }

    /// Name of the winner, if the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameResult::Winner(name) => Some(name),
            GameResult::InProgress => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(name) => f.write_str(name),
            GameResult::InProgress => f.write_str(Self::NO_WINNER),
        }
    }
}

/// A completed purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub player: PlayerId,
    pub position: usize,
    pub price: Funds,
    /// Buyer's funds after paying.
    pub remaining_funds: Funds,
}

/// A rent transfer between two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentPayment {
    pub payer: PlayerId,
    pub owner: PlayerId,
    pub position: usize,
    /// Rent printed on the space.
    pub rent: Funds,
    /// What actually changed hands. Less than `rent` only when the payer
    /// ran out of money.
    pub paid: Funds,
    /// The payer could not cover the rent and left the game.
    pub eliminated: bool,
}

/// Where a move ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub from: usize,
    pub to: usize,
    /// The move wrapped past start and the go bonus was paid.
    pub passed_start: bool,
    /// Rent charged for landing on another player's space.
    pub rent: Option<RentPayment>,
}

impl MoveOutcome {
    /// The mover was knocked out by the rent on the space they landed on.
    #[must_use]
    pub fn eliminated(&self) -> bool {
        self.rent.is_some_and(|r| r.eliminated)
    }
}

/// Result of `RealEstateGame::apply_action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Bought(Purchase),
}
