//! Carcassonne rules tests.
//!
//! Drives the game directly through its `apply` contract - the same seam
//! the replay engine uses - to verify the placement rules it enforces.

use rust_bgn::actions::{
    ActionDetails, GameAction, PlaceTileDetails, PlaceTokenDetails, SetWinnersDetails, TokenKind,
};
use rust_bgn::games::carcassonne::{CarcassonneBuilder, CarcassonneGame, TOKENS_PER_TEAM};
use rust_bgn::rules::{BoardGame, GameBuilder, NotationGame};
use rust_bgn::GameOptions;

fn game() -> CarcassonneGame {
    let options = GameOptions::new(vec!["TeamA".to_string(), "TeamB".to_string()], 42);
    CarcassonneBuilder.create(&options).unwrap()
}

fn tile(team: &str, code: &str, x: i32, y: i32) -> GameAction {
    GameAction::new(
        team,
        ActionDetails::PlaceTile(PlaceTileDetails {
            tile: code.to_string(),
            x,
            y,
            rotation: 0,
        }),
    )
}

fn token(team: &str, x: i32, y: i32, kind: TokenKind) -> GameAction {
    GameAction::new(team, ActionDetails::PlaceToken(PlaceTokenDetails::Place { x, y, kind }))
}

fn winners(team: &str, names: &[&str]) -> GameAction {
    GameAction::new(
        team,
        ActionDetails::SetWinners(SetWinnersDetails {
            winners: names.iter().map(|n| (*n).to_string()).collect(),
        }),
    )
}

#[test]
fn test_first_tile_goes_anywhere() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 3, -2)).unwrap();
    assert!(game.placement(3, -2).is_some());
}

#[test]
fn test_tile_must_be_adjacent() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();

    let err = game.apply(&tile("TeamB", "V", 5, 5)).unwrap_err();
    assert_eq!(err.message(), "tile at (5, 5) is not adjacent to the board");

    // Diagonals do not count as adjacent.
    assert!(game.apply(&tile("TeamB", "V", 1, 1)).is_err());
    assert!(game.apply(&tile("TeamB", "V", 0, 1)).is_ok());
}

#[test]
fn test_coordinate_must_be_free() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();

    let err = game.apply(&tile("TeamB", "V", 0, 0)).unwrap_err();
    assert_eq!(err.message(), "coordinate (0, 0) is already occupied");
}

#[test]
fn test_unknown_tile_rejected() {
    let mut game = game();
    let err = game.apply(&tile("TeamA", "Z", 0, 0)).unwrap_err();
    assert_eq!(err.message(), "unknown tile \"Z\"");
}

#[test]
fn test_deck_exhaustion() {
    // The deck holds exactly one Q tile.
    let mut game = game();
    game.apply(&tile("TeamA", "Q", 0, 0)).unwrap();

    let err = game.apply(&tile("TeamB", "Q", 1, 0)).unwrap_err();
    assert_eq!(err.message(), "no Q tiles remain in the deck");
}

#[test]
fn test_token_requires_a_tile() {
    let mut game = game();
    let err = game
        .apply(&token("TeamA", 0, 0, TokenKind::Monk))
        .unwrap_err();
    assert_eq!(err.message(), "no tile at (0, 0)");
}

#[test]
fn test_one_token_per_tile() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();
    game.apply(&token("TeamA", 0, 0, TokenKind::Thief)).unwrap();

    let err = game
        .apply(&token("TeamB", 0, 0, TokenKind::Knight))
        .unwrap_err();
    assert_eq!(err.message(), "tile at (0, 0) already holds a token");
}

#[test]
fn test_token_supply_is_limited() {
    let mut game = game();

    // V has nine copies, enough tiles to drain TeamA's token supply.
    for i in 0..=i32::from(TOKENS_PER_TEAM) {
        game.apply(&tile("TeamA", "V", i, 0)).unwrap();
    }
    for i in 0..i32::from(TOKENS_PER_TEAM) {
        game.apply(&token("TeamA", i, 0, TokenKind::Farmer)).unwrap();
    }
    assert_eq!(game.tokens_remaining("TeamA"), 0);

    let err = game
        .apply(&token("TeamA", i32::from(TOKENS_PER_TEAM), 0, TokenKind::Farmer))
        .unwrap_err();
    assert_eq!(err.message(), "team \"TeamA\" has no tokens left");

    // The other team's supply is untouched.
    assert_eq!(game.tokens_remaining("TeamB"), TOKENS_PER_TEAM);
}

#[test]
fn test_pass_is_always_legal() {
    let mut game = game();
    game.apply(&GameAction::new(
        "TeamA",
        ActionDetails::PlaceToken(PlaceTokenDetails::Pass),
    ))
    .unwrap();

    assert_eq!(game.tokens_remaining("TeamA"), TOKENS_PER_TEAM);
}

#[test]
fn test_set_winners_ends_the_game() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();
    game.apply(&winners("TeamB", &["TeamA", "TeamB"])).unwrap();

    assert!(game.is_finished());
    assert_eq!(
        game.winners(),
        &["TeamA".to_string(), "TeamB".to_string()][..]
    );

    let err = game.apply(&tile("TeamA", "V", 1, 0)).unwrap_err();
    assert_eq!(err.message(), "game is over");
}

#[test]
fn test_unknown_winner_rejected() {
    let mut game = game();
    let err = game.apply(&winners("TeamA", &["TeamZ"])).unwrap_err();
    assert_eq!(err.message(), "unknown winner \"TeamZ\"");
    assert!(!game.is_finished());
}

#[test]
fn test_notation_records_applied_actions() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();
    game.apply(&token("TeamA", 0, 0, TokenKind::Knight)).unwrap();
    game.apply(&tile("TeamB", "V", 1, 0)).unwrap();
    game.apply(&winners("TeamB", &["TeamB"])).unwrap();

    let document = game.notation();
    assert_eq!(document.actions.len(), 4);
    assert_eq!(document.actions[0].to_string(), "0p&D.0.0.0");
    assert_eq!(document.actions[1].to_string(), "0t&0.0.Knight");
    assert_eq!(document.actions[2].to_string(), "1p&V.1.0.0");
    assert_eq!(document.actions[3].to_string(), "1w&1");

    // Loading the emitted document reconstructs the same game.
    let replayed = CarcassonneBuilder.load(&document).unwrap();
    assert_eq!(game.snapshot(), replayed.snapshot());
}

#[test]
fn test_rejected_action_is_not_recorded() {
    let mut game = game();
    game.apply(&tile("TeamA", "D", 0, 0)).unwrap();
    let _ = game.apply(&tile("TeamB", "V", 0, 0)).unwrap_err();

    assert_eq!(game.notation().actions.len(), 1);
}
