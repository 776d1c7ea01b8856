//! Game configuration.
//!
//! A `GameConfig` describes the board (go bonus and property rents) and the
//! two rule constants the engine consults: the largest allowed move and the
//! rent multiple charged to buy a property.

use serde::{Deserialize, Serialize};

use super::Funds;
use crate::error::ConfigError;

/// Rents of the standard 24-property board, in board order.
pub const CANONICAL_RENTS: [Funds; 24] = [
    50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150, 200, 200, 200, 250, 250, 250, 300, 300,
    300, 350, 350, 350,
];

/// Bonus paid for passing the start space on the standard board.
pub const DEFAULT_GO_BONUS: Funds = 50;

/// Largest distance a single move may cover.
pub const DEFAULT_MAX_STEPS: u32 = 6;

/// Purchase price as a multiple of rent.
pub const DEFAULT_PURCHASE_MULTIPLIER: Funds = 5;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Paid to a player each time a move wraps past the start space.
    pub go_bonus: Funds,

    /// One rent per property, for positions `1..=rents.len()`.
    pub rents: Vec<Funds>,

    /// Moves must cover `1..=max_steps` spaces.
    pub max_steps: u32,

    /// Price of a property is `rent * purchase_multiplier`.
    pub purchase_multiplier: Funds,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            go_bonus: DEFAULT_GO_BONUS,
            rents: CANONICAL_RENTS.to_vec(),
            max_steps: DEFAULT_MAX_STEPS,
            purchase_multiplier: DEFAULT_PURCHASE_MULTIPLIER,
        }
    }
}

impl GameConfig {
    /// Configuration with the default rules and a custom board.
    #[must_use]
    pub fn with_board(go_bonus: Funds, rents: impl Into<Vec<Funds>>) -> Self {
        Self {
            go_bonus,
            rents: rents.into(),
            ..Self::default()
        }
    }

    /// Number of spaces including the start space.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.rents.len() + 1
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rents.is_empty() {
            return Err(ConfigError::Validation(
                "rents must contain at least one property".into(),
            ));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::Validation("max_steps must be > 0".into()));
        }
        if self.purchase_multiplier == 0 {
            return Err(ConfigError::Validation(
                "purchase_multiplier must be > 0".into(),
            ));
        }
        Ok(())
    }
}
