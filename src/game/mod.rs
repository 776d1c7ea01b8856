//! The real-estate game: board and roster aggregate plus turn resolution.
//!
//! - A circular board: start space at 0, properties after it
//! - Moving past the last space pays the go bonus
//! - Landing on an unowned property lets the player buy it at 5x rent
//! - Landing on someone else's property costs rent
//! - A player who cannot cover rent hands over what they have and is out
//! - Last player with money wins

mod builder;
mod engine;
mod outcome;

pub use builder::GameBuilder;
pub use engine::RealEstateGame;
pub use outcome::{ActionOutcome, GameResult, MoveOutcome, Purchase, RentPayment};
