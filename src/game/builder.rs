//! Fluent setup for a game.

use super::engine::RealEstateGame;
use crate::core::{Funds, GameConfig};
use crate::error::ConfigError;

/// Builder for creating a `RealEstateGame`.
///
/// Starts from the standard board; override pieces and add players, then
/// call `build`.
///
/// ```
/// use real_estate::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .go_bonus(50)
///     .rents(vec![50, 50, 75])
///     .player("Player 1", 1000)
///     .player("Player 2", 1000)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.board_size(), 4);
/// assert_eq!(game.players().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    players: Vec<(String, Funds)>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn go_bonus(mut self, bonus: Funds) -> Self {
        self.config.go_bonus = bonus;
        self
    }

    pub fn rents(mut self, rents: impl Into<Vec<Funds>>) -> Self {
        self.config.rents = rents.into();
        self
    }

    pub fn max_steps(mut self, steps: u32) -> Self {
        self.config.max_steps = steps;
        self
    }

    pub fn purchase_multiplier(mut self, multiplier: Funds) -> Self {
        self.config.purchase_multiplier = multiplier;
        self
    }

    /// Add a player. Players join in the order they are added.
    pub fn player(mut self, name: impl Into<String>, funds: Funds) -> Self {
        self.players.push((name.into(), funds));
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<RealEstateGame, ConfigError> {
        let mut game = RealEstateGame::from_config(&self.config)?;
        for (name, funds) in self.players {
            game.create_player(name, funds);
        }
        Ok(game)
    }
}
