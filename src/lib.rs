//! # real-estate
//!
//! A turn-based property-trading board game engine.
//!
//! ## Rules
//!
//! 1. **Board**: a ring of spaces. Position 0 is the start space, held by
//!    the house; every other position is a property with a fixed rent.
//!
//! 2. **Turns**: callers move players 1-6 spaces at a time (there are no
//!    dice in the engine). Wrapping past the last space pays the go bonus.
//!
//! 3. **Property**: a player may buy the unowned space they stand on for
//!    five times its rent, provided they hold strictly more than that.
//!
//! 4. **Rent**: landing on another player's space costs its rent. A player
//!    who cannot pay in full gives the owner everything and is eliminated;
//!    their spaces return to the bank.
//!
//! ## Modules
//!
//! - `core`: players, spaces, configuration, actions, events
//! - `game`: the `RealEstateGame` aggregate and its builder
//! - `error`: `GameError` and `ConfigError`
//!
//! The engine logs through the `log` facade and never installs a logger.

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, EventRecord, Funds, GameConfig, GameEvent, Owner, Player, PlayerId, Space,
    CANONICAL_RENTS,
};

pub use crate::error::{ConfigError, GameError};

pub use crate::game::{
    ActionOutcome, GameBuilder, GameResult, MoveOutcome, Purchase, RealEstateGame, RentPayment,
};
