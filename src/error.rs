//! Structured error types.
//!
//! Every game operation reports failure as a [`GameError`]. Input errors
//! (a bad step count, an unaffordable or unbuyable space) leave the game
//! untouched and the caller may simply try something else.

use crate::core::Funds;

/// Errors returned by game operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no active player named '{0}'")]
    PlayerNotFound(String),

    #[error("no space at position {position} (board has {board_size} spaces)")]
    NoSuchSpace { position: usize, board_size: usize },

    #[error("move of {steps} steps is outside 1..={max}")]
    InvalidSteps { steps: u32, max: u32 },

    #[error("space {0} belongs to the house and cannot be bought")]
    NotPurchasable(usize),

    #[error("space {position} is already owned by '{owner}'")]
    AlreadyOwned { position: usize, owner: String },

    #[error("space {position} costs {price} but only {funds} is available")]
    InsufficientFunds {
        position: usize,
        price: Funds,
        funds: Funds,
    },

    #[error("space {0} has no player owner to collect rent")]
    NotRentable(usize),

    #[error("board has already been created")]
    BoardAlreadyCreated,

    #[error("board has not been created yet")]
    BoardNotCreated,
}

impl GameError {
    /// Whether this error came from a rejected turn action.
    ///
    /// Input errors never change game state, so the action can be retried
    /// with different arguments.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GameError::InvalidSteps { .. }
                | GameError::NotPurchasable(_)
                | GameError::AlreadyOwned { .. }
                | GameError::InsufficientFunds { .. }
                | GameError::NotRentable(_)
        )
    }
}

/// Errors that can occur when validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Game(#[from] GameError),
}
