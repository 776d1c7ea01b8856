//! Board spaces and their ownership.
//!
//! The board is a ring of spaces. Position 0 is the start space, held by
//! the house for the whole game; every other position is a property that
//! starts unowned and can be bought once.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::Funds;

/// Who holds a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Owner {
    /// Nobody. The space can be bought.
    #[default]
    Unowned,
    /// The bank. Only the start space is held this way.
    House,
    /// An active player.
    Player(PlayerId),
}

impl Owner {
    /// The owning player, if a player holds the space.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Owner::Player(id) => Some(id),
            _ => None,
        }
    }

    /// Anyone (house or player) holds the space.
    #[must_use]
    pub fn is_held(self) -> bool {
        !matches!(self, Owner::Unowned)
    }
}

/// A single board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    position: usize,
    rent: Funds,
    owner: Owner,
}

impl Space {
    /// The start space: rent-free and held by the house.
    #[must_use]
    pub fn start() -> Self {
        Self {
            position: 0,
            rent: 0,
            owner: Owner::House,
        }
    }

    /// An unowned property.
    #[must_use]
    pub fn property(position: usize, rent: Funds) -> Self {
        debug_assert!(position > 0, "position 0 is reserved for the start space");
        Self {
            position,
            rent,
            owner: Owner::Unowned,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn rent(&self) -> Funds {
        self.rent
    }

    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    #[must_use]
    pub fn is_start(&self) -> bool {
        self.position == 0
    }

    /// Price to buy this space at the given multiplier of its rent.
    #[must_use]
    pub fn price(&self, multiplier: Funds) -> Funds {
        self.rent.saturating_mul(multiplier)
    }

    /// Hand the space to a player.
    pub fn set_owner(&mut self, player: PlayerId) {
        self.owner = Owner::Player(player);
    }

    /// Return the space to the bank's pool. The start space stays with the house.
    pub fn clear_owner(&mut self) {
        if !self.is_start() {
            self.owner = Owner::Unowned;
        }
    }
}
