//! The game aggregate: board, roster and turn resolution.

use im::Vector;
use smallvec::SmallVec;

use super::outcome::{ActionOutcome, GameResult, MoveOutcome, Purchase, RentPayment};
use crate::core::config::{DEFAULT_MAX_STEPS, DEFAULT_PURCHASE_MULTIPLIER};
use crate::core::{
    Action, EventRecord, Funds, GameConfig, GameEvent, Owner, Player, PlayerId, Space,
};
use crate::error::{ConfigError, GameError};

/// A property-trading game.
///
/// Owns every space and every active player. Spaces refer to their owner by
/// `PlayerId`; eliminating a player clears those references in the same
/// call, so an owner id on the board always names a player in the roster.
///
/// ## Example
///
/// ```
/// use real_estate::game::RealEstateGame;
///
/// let mut game = RealEstateGame::new();
/// game.create_spaces(50, &[50, 50, 75]).unwrap();
/// game.create_player("Player 1", 1000);
///
/// game.move_player("Player 1", 6).unwrap();
/// assert_eq!(game.get_current_position("Player 1").unwrap(), 2);
/// assert_eq!(game.get_account_balance("Player 1").unwrap(), 1050);
/// ```
#[derive(Clone, Debug)]
pub struct RealEstateGame {
    /// Indexed by position; empty until the board is created.
    spaces: Vec<Space>,
    /// Active players in join order.
    players: Vec<Player>,
    go_bonus: Funds,
    max_steps: u32,
    purchase_multiplier: Funds,
    next_player_id: PlayerId,
    history: Vector<EventRecord>,
}

impl Default for RealEstateGame {
    fn default() -> Self {
        Self {
            spaces: Vec::new(),
            players: Vec::new(),
            go_bonus: 0,
            max_steps: DEFAULT_MAX_STEPS,
            purchase_multiplier: DEFAULT_PURCHASE_MULTIPLIER,
            next_player_id: PlayerId::new(0),
            history: Vector::new(),
        }
    }
}

impl RealEstateGame {
    /// A game with no board and no players, using the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A game with the board and rules from `config`. No players yet.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            max_steps: config.max_steps,
            purchase_multiplier: config.purchase_multiplier,
            ..Self::default()
        };
        game.create_spaces(config.go_bonus, &config.rents)?;
        Ok(game)
    }

    // === Setup ===

    /// Lay out the board: the start space, then one property per rent.
    ///
    /// Can only be done once per game.
    pub fn create_spaces(
        &mut self,
        start_bonus: Funds,
        rent_amounts: &[Funds],
    ) -> Result<(), GameError> {
        if !self.spaces.is_empty() {
            return Err(GameError::BoardAlreadyCreated);
        }

        self.go_bonus = start_bonus;
        self.spaces.reserve(rent_amounts.len() + 1);
        self.spaces.push(Space::start());
        for (offset, &rent) in rent_amounts.iter().enumerate() {
            self.spaces.push(Space::property(offset + 1, rent));
        }

        log::info!(
            "board created with {} spaces, go bonus {}",
            self.spaces.len(),
            start_bonus
        );
        self.record(GameEvent::BoardCreated {
            board_size: self.spaces.len(),
            go_bonus: start_bonus,
        });
        Ok(())
    }

    /// Add a player on the start space.
    ///
    /// Names are not required to be unique. Lookups by name always resolve
    /// to the earliest active player with that name.
    pub fn create_player(&mut self, name: impl Into<String>, starting_funds: Funds) -> PlayerId {
        let name = name.into();
        if self.players.iter().any(|p| p.name() == name) {
            log::warn!("duplicate player name '{}'; lookups resolve to the first", name);
        }

        let id = self.next_player_id;
        self.next_player_id = id.next();
        log::debug!("{} joins as {} with {}", name, id, starting_funds);
        self.players.push(Player::new(id, name, starting_funds));
        self.record(GameEvent::PlayerJoined {
            player: id,
            funds: starting_funds,
        });
        id
    }

    // === Queries ===

    /// Active players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board, indexed by position.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Number of spaces including start. Zero before the board exists.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn go_bonus(&self) -> Funds {
        self.go_bonus
    }

    /// Everything that has happened so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// The first active player called `name`.
    pub fn player(&self, name: &str) -> Result<&Player, GameError> {
        self.player_index(name).map(|idx| &self.players[idx])
    }

    /// The active player with the given id.
    #[must_use]
    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_account_balance(&self, name: &str) -> Result<Funds, GameError> {
        self.player(name).map(Player::funds)
    }

    pub fn get_current_position(&self, name: &str) -> Result<usize, GameError> {
        self.player(name).map(Player::position)
    }

    pub fn space(&self, position: usize) -> Result<&Space, GameError> {
        self.spaces.get(position).ok_or(GameError::NoSuchSpace {
            position,
            board_size: self.spaces.len(),
        })
    }

    /// Whether anyone holds the space. The start space always counts as
    /// held (by the house).
    pub fn is_owned(&self, position: usize) -> Result<bool, GameError> {
        self.space(position).map(|s| s.owner().is_held())
    }

    pub fn get_rent(&self, position: usize) -> Result<Funds, GameError> {
        self.space(position).map(Space::rent)
    }

    /// Name of the player holding the space, or `None` if it is unowned or
    /// held by the house.
    pub fn owner_name(&self, position: usize) -> Result<Option<&str>, GameError> {
        let owner = self.space(position)?.owner();
        Ok(owner
            .player()
            .and_then(|id| self.player_by_id(id))
            .map(Player::name))
    }

    // === Turn actions ===

    /// Buy the space the named player is standing on.
    ///
    /// The price is the space's rent times the purchase multiplier, and the
    /// player must hold strictly more than that. Nothing changes on failure.
    pub fn buy_space(&mut self, name: &str) -> Result<Purchase, GameError> {
        self.ensure_board()?;
        let idx = self.player_index(name)?;
        let position = self.players[idx].position();
        let space = self.space(position)?;

        let price = match space.owner() {
            Owner::House => return Err(GameError::NotPurchasable(position)),
            Owner::Player(owner) => {
                let owner = self
                    .player_by_id(owner)
                    .map(|p| p.name().to_string())
                    .unwrap_or_else(|| owner.to_string());
                return Err(GameError::AlreadyOwned { position, owner });
            }
            Owner::Unowned => space.price(self.purchase_multiplier),
        };

        let player = &mut self.players[idx];
        if player.funds() <= price {
            return Err(GameError::InsufficientFunds {
                position,
                price,
                funds: player.funds(),
            });
        }

        player.debit(price);
        player.record_purchase();
        let id = player.id();
        let remaining_funds = player.funds();
        self.spaces[position].set_owner(id);

        log::debug!("{} buys space {} for {}", name, position, price);
        self.record(GameEvent::Purchased {
            player: id,
            position,
            price,
        });
        Ok(Purchase {
            player: id,
            position,
            price,
            remaining_funds,
        })
    }

    /// Move the named player `steps` spaces and settle any rent owed.
    ///
    /// Moving past the last space wraps to the start of the board and pays
    /// the go bonus once. Landing on a space held by another player charges
    /// its rent, which may eliminate the mover.
    pub fn move_player(&mut self, name: &str, steps: u32) -> Result<MoveOutcome, GameError> {
        if !(1..=self.max_steps).contains(&steps) {
            return Err(GameError::InvalidSteps {
                steps,
                max: self.max_steps,
            });
        }
        self.ensure_board()?;
        let idx = self.player_index(name)?;

        let board_size = self.spaces.len();
        let player = &mut self.players[idx];
        let id = player.id();
        let from = player.position();
        let target = from + steps as usize;
        let passed_start = target >= board_size;

        if passed_start {
            player.reset_position();
            player.credit(self.go_bonus);
            player.advance(target % board_size);
        } else {
            player.advance(steps as usize);
        }
        let to = player.position();

        log::debug!("{} moves {} from {} to {}", name, steps, from, to);
        if passed_start {
            self.record(GameEvent::PassedStart {
                player: id,
                bonus: self.go_bonus,
            });
        }
        self.record(GameEvent::Moved {
            player: id,
            from,
            to,
            steps,
        });

        let landed_owner = self.spaces[to].owner();
        let rent = match landed_owner {
            Owner::Player(owner) if owner != id => Some(self.settle_rent(idx, to)?),
            _ => None,
        };

        Ok(MoveOutcome {
            player: id,
            from,
            to,
            passed_start,
            rent,
        })
    }

    /// Charge the named player the rent for the space at `position`.
    ///
    /// If the player holds no more than the rent, everything they have goes
    /// to the owner, they leave the roster, and every space they owned
    /// becomes unowned.
    pub fn pay_rent(&mut self, name: &str, position: usize) -> Result<RentPayment, GameError> {
        let idx = self.player_index(name)?;
        self.settle_rent(idx, position)
    }

    /// Report the winner, if there is one.
    ///
    /// A lone remaining player wins. Otherwise, if every player but one is
    /// broke, the one with money wins.
    #[must_use]
    pub fn check_game_over(&self) -> GameResult {
        if let [last] = self.players.as_slice() {
            return GameResult::Winner(last.name().to_string());
        }

        let broke = self.players.iter().filter(|p| p.is_broke()).count();
        if !self.players.is_empty() && broke == self.players.len() - 1 {
            if let Some(solvent) = self.players.iter().find(|p| !p.is_broke()) {
                return GameResult::Winner(solvent.name().to_string());
            }
        }

        GameResult::InProgress
    }

    /// Dispatch a turn action to `move_player` or `buy_space`.
    pub fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, GameError> {
        match action {
            Action::Move { player, steps } => {
                self.move_player(player, *steps).map(ActionOutcome::Moved)
            }
            Action::Buy { player } => self.buy_space(player).map(ActionOutcome::Bought),
        }
    }

    // === Internals ===

    fn player_index(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    fn ensure_board(&self) -> Result<(), GameError> {
        if self.spaces.is_empty() {
            Err(GameError::BoardNotCreated)
        } else {
            Ok(())
        }
    }

    fn settle_rent(
        &mut self,
        payer_idx: usize,
        position: usize,
    ) -> Result<RentPayment, GameError> {
        let space = self.space(position)?;
        let rent = space.rent();
        let payer_id = self.players[payer_idx].id();

        let owner_id = match space.owner() {
            Owner::Player(owner) if owner != payer_id => owner,
            _ => return Err(GameError::NotRentable(position)),
        };
        let owner_idx = self
            .players
            .iter()
            .position(|p| p.id() == owner_id)
            .ok_or(GameError::NotRentable(position))?;

        let payer = &mut self.players[payer_idx];
        let eliminated = payer.funds() <= rent;
        let paid = payer.debit(rent);
        self.players[owner_idx].credit(paid);

        log::debug!(
            "{} pays {} of {} rent on space {} to {}",
            payer_id,
            paid,
            rent,
            position,
            owner_id
        );
        self.record(GameEvent::RentPaid {
            payer: payer_id,
            owner: owner_id,
            position,
            amount: paid,
        });

        if eliminated {
            self.eliminate(payer_idx);
        }

        Ok(RentPayment {
            payer: payer_id,
            owner: owner_id,
            position,
            rent,
            paid,
            eliminated,
        })
    }

    fn eliminate(&mut self, idx: usize) {
        let mut player = self.players.remove(idx);
        let id = player.id();
        player.release_all();

        let mut released = SmallVec::<[usize; 4]>::new();
        for space in &mut self.spaces {
            if space.owner() == Owner::Player(id) {
                space.clear_owner();
                released.push(space.position());
            }
        }

        log::info!(
            "{} eliminated, {} spaces returned to the bank",
            player.name(),
            released.len()
        );
        self.record(GameEvent::Eliminated {
            player: id,
            released,
        });
    }

    fn record(&mut self, event: GameEvent) {
        let sequence = self.history.len() as u64;
        self.history.push_back(EventRecord::new(sequence, event));
    }
}
