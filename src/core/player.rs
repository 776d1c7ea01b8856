//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Stable handle assigned when a player joins. Unlike a roster index it
//! stays valid when earlier players are eliminated, so spaces can refer to
//! their owner without borrowing the player.
//!
//! ## Player
//!
//! Name, funds, board position and the positions the player has bought.
//! Funds are unsigned: every debit is capped at what the player holds.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::Funds;

/// Player identifier, unique within one game.
///
/// Ids are allocated in join order starting from `PlayerId(0)` and are
/// never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player#{}", self.0)
    }
}

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    funds: Funds,
    position: usize,
    owned_positions: FxHashSet<usize>,
}

impl Player {
    /// Create a player standing on the start space with nothing owned.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, funds: Funds) -> Self {
        Self {
            id,
            name: name.into(),
            funds,
            position: 0,
            owned_positions: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn funds(&self) -> Funds {
        self.funds
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Positions this player has bought, in ascending order.
    #[must_use]
    pub fn owned_positions(&self) -> Vec<usize> {
        let mut positions: Vec<_> = self.owned_positions.iter().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Check whether this player bought the space at `position`.
    #[must_use]
    pub fn owns(&self, position: usize) -> bool {
        self.owned_positions.contains(&position)
    }

    /// Whether the player has run out of money.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.funds == 0
    }

    // === Mutation ===

    /// Add funds (go bonus, collected rent).
    pub fn credit(&mut self, amount: Funds) {
        self.funds = self.funds.saturating_add(amount);
    }

    /// Remove up to `amount` funds and return how much was actually taken.
    ///
    /// Never takes more than the player holds, so funds cannot go negative.
    pub fn debit(&mut self, amount: Funds) -> Funds {
        let taken = amount.min(self.funds);
        self.funds -= taken;
        taken
    }

    /// Move forward by `steps` without any wraparound handling.
    pub fn advance(&mut self, steps: usize) {
        self.position += steps;
    }

    /// Put the player back on the start space.
    pub fn reset_position(&mut self) {
        self.position = 0;
    }

    /// Record the current position as owned.
    pub fn record_purchase(&mut self) {
        self.owned_positions.insert(self.position);
    }

    /// Forget all owned positions and return them in ascending order.
    pub fn release_all(&mut self) -> Vec<usize> {
        let released = self.owned_positions();
        self.owned_positions.clear();
        released
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{:02}] ${} ({} owned)",
            self.name,
            self.position,
            self.funds,
            self.owned_positions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = p0.next();

        assert_eq!(p0.raw(), 0);
        assert_eq!(p1.raw(), 1);
        assert_eq!(format!("{}", p1), "Player#1");
    }

    #[test]
    fn test_new_player_starts_on_go() {
        let player = Player::new(PlayerId::new(0), "Alice", 1000);

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.funds(), 1000);
        assert_eq!(player.position(), 0);
        assert!(player.owned_positions().is_empty());
    }

    #[test]
    fn test_debit_is_capped_at_funds() {
        let mut player = Player::new(PlayerId::new(0), "Alice", 100);

        assert_eq!(player.debit(40), 40);
        assert_eq!(player.funds(), 60);

        assert_eq!(player.debit(500), 60);
        assert_eq!(player.funds(), 0);
        assert!(player.is_broke());
    }

    #[test]
    fn test_credit() {
        let mut player = Player::new(PlayerId::new(0), "Alice", 0);
        player.credit(50);
        assert_eq!(player.funds(), 50);
    }

    #[test]
    fn test_record_and_release_purchases() {
        let mut player = Player::new(PlayerId::new(3), "Bob", 1000);

        player.advance(5);
        player.record_purchase();
        player.reset_position();
        player.advance(2);
        player.record_purchase();
        player.record_purchase();

        assert_eq!(player.owned_positions(), vec![2, 5]);
        assert!(player.owns(5));

        assert_eq!(player.release_all(), vec![2, 5]);
        assert!(!player.owns(5));
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1), "Carol", 250);
        player.advance(4);
        player.record_purchase();

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
