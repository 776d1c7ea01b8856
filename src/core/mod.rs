//! Core game types: players, spaces, configuration, actions and events.
//!
//! These are the leaves of the engine. `RealEstateGame` in [`crate::game`]
//! owns them and sequences calls across them.

pub mod action;
pub mod config;
pub mod event;
pub mod player;
pub mod space;

/// Money. Unsigned, so a balance can reach zero but never go below it.
pub type Funds = u64;

pub use action::Action;
pub use config::{GameConfig, CANONICAL_RENTS};
pub use event::{EventRecord, GameEvent};
pub use player::{Player, PlayerId};
pub use space::{Owner, Space};
