//! Rent, elimination and game-over tests.
//!
//! A player who cannot pay rent in full gives the owner what they have and
//! leaves the roster; their property goes back to the bank.

use real_estate::core::{GameEvent, Owner};
use real_estate::error::GameError;
use real_estate::game::{GameResult, RealEstateGame};

/// Board of 6 spaces; "Owner" holds positions 1 and 2.
fn landlord_game(tenant_funds: u64) -> RealEstateGame {
    let mut game = RealEstateGame::new();
    game.create_spaces(50, &[100, 200, 10, 10, 10]).unwrap();
    game.create_player("Owner", 10_000);
    game.create_player("Tenant", tenant_funds);

    game.move_player("Owner", 1).unwrap();
    game.buy_space("Owner").unwrap();
    game.move_player("Owner", 1).unwrap();
    game.buy_space("Owner").unwrap();
    game
}

#[test]
fn test_rent_below_funds_keeps_player() {
    let mut game = landlord_game(150);
    let owner_before = game.get_account_balance("Owner").unwrap();

    let outcome = game.move_player("Tenant", 1).unwrap();
    let rent = outcome.rent.unwrap();

    assert_eq!(rent.paid, 100);
    assert!(!rent.eliminated);
    assert_eq!(game.get_account_balance("Tenant").unwrap(), 50);
    assert_eq!(game.get_account_balance("Owner").unwrap(), owner_before + 100);
    assert_eq!(game.players().len(), 2);
}

#[test]
fn test_rent_equal_to_funds_eliminates() {
    let mut game = landlord_game(100);
    let owner_before = game.get_account_balance("Owner").unwrap();

    let outcome = game.move_player("Tenant", 1).unwrap();
    assert!(outcome.eliminated());

    assert_eq!(game.get_account_balance("Owner").unwrap(), owner_before + 100);
    assert_eq!(
        game.get_account_balance("Tenant"),
        Err(GameError::PlayerNotFound("Tenant".into()))
    );
    assert_eq!(game.players().len(), 1);
}

#[test]
fn test_rent_above_funds_pays_what_is_left() {
    let mut game = landlord_game(150);
    let owner_before = game.get_account_balance("Owner").unwrap();

    let outcome = game.move_player("Tenant", 2).unwrap();
    let rent = outcome.rent.unwrap();

    assert_eq!(rent.rent, 200);
    assert_eq!(rent.paid, 150);
    assert!(rent.eliminated);
    assert_eq!(game.get_account_balance("Owner").unwrap(), owner_before + 150);
}

#[test]
fn test_eliminated_player_spaces_return_to_bank() {
    let mut game = RealEstateGame::new();
    game.create_spaces(0, &[100, 10, 10]).unwrap();
    game.create_player("Rich", 10_000);
    game.create_player("Poor", 200);

    // Poor buys position 2 for 50, leaving 150.
    game.move_player("Poor", 2).unwrap();
    game.buy_space("Poor").unwrap();
    assert_eq!(game.get_account_balance("Poor").unwrap(), 150);

    // Rich buys position 1.
    game.move_player("Rich", 1).unwrap();
    game.buy_space("Rich").unwrap();

    // Poor wraps 2 -> 1 and owes 100 of 150: survives.
    game.move_player("Poor", 3).unwrap();
    assert_eq!(game.get_account_balance("Poor").unwrap(), 50);

    // Again: owes 100 with 50 left and is out.
    game.move_player("Poor", 4).unwrap();
    assert!(game.player("Poor").is_err());

    assert!(!game.is_owned(2).unwrap());
    assert_eq!(game.space(2).unwrap().owner(), Owner::Unowned);
    let rich = game.player("Rich").unwrap().id();
    assert_eq!(game.space(1).unwrap().owner(), Owner::Player(rich));

    let last = game.history().back().map(|r| r.event.clone());
    assert!(matches!(
        last,
        Some(GameEvent::Eliminated { ref released, .. }) if released.as_slice() == [2]
    ));

    // The freed space can be bought again.
    game.move_player("Rich", 1).unwrap();
    assert_eq!(game.buy_space("Rich").unwrap().position, 2);
}

#[test]
fn test_broke_player_is_eliminated_by_any_rent() {
    let mut game = RealEstateGame::new();
    game.create_spaces(0, &[10, 10]).unwrap();
    game.create_player("Owner", 1000);
    game.create_player("Broke", 0);

    game.move_player("Owner", 1).unwrap();
    game.buy_space("Owner").unwrap();

    let outcome = game.move_player("Broke", 1).unwrap();
    let rent = outcome.rent.unwrap();
    assert_eq!(rent.paid, 0);
    assert!(rent.eliminated);
}

#[test]
fn test_pay_rent_directly() {
    let mut game = landlord_game(1000);
    let payment = game.pay_rent("Tenant", 2).unwrap();

    assert_eq!(payment.paid, 200);
    assert_eq!(game.get_account_balance("Tenant").unwrap(), 800);
    assert_eq!(game.pay_rent("Owner", 2), Err(GameError::NotRentable(2)));
}

#[test]
fn test_game_over_with_three_players() {
    let mut game = RealEstateGame::new();
    game.create_spaces(50, &[50, 50, 75]).unwrap();
    game.create_player("A", 1000);
    game.create_player("B", 1000);
    game.create_player("C", 1000);

    assert_eq!(game.check_game_over(), GameResult::InProgress);
}

#[test]
fn test_game_over_last_player_standing() {
    let mut game = landlord_game(100);
    assert_eq!(game.check_game_over(), GameResult::InProgress);

    game.move_player("Tenant", 1).unwrap();
    assert_eq!(game.check_game_over(), GameResult::Winner("Owner".into()));
    assert_eq!(game.check_game_over().to_string(), "Owner");
}

#[test]
fn test_game_over_when_others_are_broke() {
    let mut game = RealEstateGame::new();
    game.create_spaces(50, &[50]).unwrap();
    game.create_player("A", 0);
    game.create_player("B", 300);
    game.create_player("C", 0);

    assert_eq!(game.check_game_over().winner(), Some("B"));
}

#[test]
fn test_game_over_nobody_left_with_money() {
    let mut game = RealEstateGame::new();
    game.create_spaces(50, &[50]).unwrap();
    game.create_player("A", 0);
    game.create_player("B", 0);

    assert_eq!(game.check_game_over(), GameResult::InProgress);
}

#[test]
fn test_game_over_empty_roster() {
    let game = RealEstateGame::new();
    assert_eq!(game.check_game_over(), GameResult::InProgress);
}
