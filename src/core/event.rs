//! Game events.
//!
//! Every state change the engine makes is also appended to the game's
//! history as a `GameEvent`. The history is append-only and numbered, so a
//! host can replay or display what happened without diffing state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::Funds;

/// Something that happened during the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board was laid out.
    BoardCreated { board_size: usize, go_bonus: Funds },

    /// A player joined the roster.
    PlayerJoined { player: PlayerId, funds: Funds },

    /// A player moved and landed on `to`.
    Moved {
        player: PlayerId,
        from: usize,
        to: usize,
        steps: u32,
    },

    /// A player wrapped past the start space and collected the bonus.
    PassedStart { player: PlayerId, bonus: Funds },

    /// A player bought a space.
    Purchased {
        player: PlayerId,
        position: usize,
        price: Funds,
    },

    /// Rent changed hands. `amount` may be less than the rent if the payer
    /// ran out of money.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        position: usize,
        amount: Funds,
    },

    /// A player left the roster; `released` spaces went back to the bank.
    Eliminated {
        player: PlayerId,
        released: SmallVec<[usize; 4]>,
    },
}

impl GameEvent {
    /// The player the event is mainly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::BoardCreated { .. } => None,
            GameEvent::PlayerJoined { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::PassedStart { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::Eliminated { player, .. } => Some(*player),
            GameEvent::RentPaid { payer, .. } => Some(*payer),
        }
    }
}

/// An event with its position in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Zero-based, strictly increasing.
    pub sequence: u64,

    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(sequence: u64, event: GameEvent) -> Self {
        Self { sequence, event }
    }
}
