//! Carcassonne game state and rules.
//!
//! This is the `apply` collaborator the replay engine drives. It enforces
//! placement legality (free coordinate, adjacency, token supply), tracks
//! the seeded draw pile, and records every applied action so the game can
//! re-emit its own notation.
//!
//! Scoring and feature completion are out of scope; a game ends when a
//! `SetWinners` action declares the result.

use im::HashMap as ImHashMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::builder::GAME_KEY;
use super::tiles;
use crate::actions::{
    ActionDetails, GameAction, PlaceTileDetails, PlaceTokenDetails, SetWinnersDetails, TokenKind,
};
use crate::core::{GameOptions, GameRng, GameRngState, Teams};
use crate::notation::{NotationDocument, RawAction};
use crate::rules::{BoardGame, CreateError, NotationGame, RuleViolation};

/// Minimum supported team count.
pub const MIN_TEAMS: usize = 2;
/// Maximum supported team count.
pub const MAX_TEAMS: usize = 5;
/// Tokens each team starts with.
pub const TOKENS_PER_TEAM: u8 = 7;

/// A token sitting on a placed tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub team: String,
}

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Tile code.
    pub tile: String,
    /// Clockwise quarter-turns, 0-3.
    pub rotation: u8,
    /// Team that placed the tile.
    pub placed_by: String,
    /// Token on this tile, if any.
    pub token: Option<Token>,
}

/// Observable game state, for equality checks and export.
///
/// Placements are sorted by coordinate and token supplies listed in team
/// order, so two identical games produce identical snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub teams: Vec<String>,
    pub seed: i64,
    /// Remaining draw pile, in draw order.
    pub deck: Vec<String>,
    pub placements: Vec<((i32, i32), Placement)>,
    pub tokens_remaining: Vec<(String, u8)>,
    pub winners: Vec<String>,
    pub finished: bool,
    pub rng: GameRngState,
}

/// A Carcassonne game in progress.
///
/// The board is an `im` map, so cloning a game mid-replay is O(1).
#[derive(Clone, Debug)]
pub struct CarcassonneGame {
    teams: Teams,
    seed: i64,
    rng: GameRng,
    deck: Vec<String>,
    board: ImHashMap<(i32, i32), Placement>,
    tokens_remaining: FxHashMap<String, u8>,
    winners: Vec<String>,
    finished: bool,
    log: Vec<RawAction>,
}

impl CarcassonneGame {
    /// Create a fresh game: empty board, full shuffled deck.
    pub fn new(options: &GameOptions) -> Result<Self, CreateError> {
        let count = options.team_count();
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&count) {
            return Err(CreateError::TeamCount {
                found: count,
                min: MIN_TEAMS,
                max: MAX_TEAMS,
            });
        }
        for (i, name) in options.teams.iter().enumerate() {
            if options.teams[..i].contains(name) {
                return Err(CreateError::DuplicateTeam(name.clone()));
            }
        }
        let teams = Teams::new(options.teams.clone()).ok_or(CreateError::TeamCount {
            found: 0,
            min: MIN_TEAMS,
            max: MAX_TEAMS,
        })?;

        let mut rng = GameRng::new(options.seed);
        let mut deck = tiles::standard_deck();
        rng.shuffle(&mut deck);

        let tokens_remaining = teams
            .iter()
            .map(|t| (t.to_string(), TOKENS_PER_TEAM))
            .collect();

        Ok(Self {
            teams,
            seed: options.seed,
            rng,
            deck,
            board: ImHashMap::new(),
            tokens_remaining,
            winners: Vec::new(),
            finished: false,
            log: Vec::new(),
        })
    }

    /// The team list, in turn order.
    #[must_use]
    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    /// The placement at a coordinate, if any.
    #[must_use]
    pub fn placement(&self, x: i32, y: i32) -> Option<&Placement> {
        self.board.get(&(x, y))
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tiles_placed(&self) -> usize {
        self.board.len()
    }

    /// Remaining draw pile, in draw order.
    #[must_use]
    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    /// Tokens a team has left to place.
    #[must_use]
    pub fn tokens_remaining(&self, team: &str) -> u8 {
        self.tokens_remaining.get(team).copied().unwrap_or(0)
    }

    /// Declared winners; empty until a `SetWinners` action.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Whether winners have been declared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut placements: Vec<_> = self
            .board
            .iter()
            .map(|(coord, placement)| (*coord, placement.clone()))
            .collect();
        placements.sort_by_key(|(coord, _)| *coord);

        GameSnapshot {
            teams: self.teams.to_vec(),
            seed: self.seed,
            deck: self.deck.clone(),
            placements,
            tokens_remaining: self
                .teams
                .iter()
                .map(|t| (t.to_string(), self.tokens_remaining(t)))
                .collect(),
            winners: self.winners.clone(),
            finished: self.finished,
            rng: self.rng.state(),
        }
    }

    fn place_tile(&mut self, team: &str, details: &PlaceTileDetails) -> Result<(), RuleViolation> {
        let coord = (details.x, details.y);

        if !tiles::is_known_tile(&details.tile) {
            return Err(RuleViolation::new(format!(
                "unknown tile {:?}",
                details.tile
            )));
        }
        if self.board.contains_key(&coord) {
            return Err(RuleViolation::new(format!(
                "coordinate ({}, {}) is already occupied",
                details.x, details.y
            )));
        }
        if !self.board.is_empty() && !self.has_neighbor(coord) {
            return Err(RuleViolation::new(format!(
                "tile at ({}, {}) is not adjacent to the board",
                details.x, details.y
            )));
        }

        match self.deck.iter().position(|t| *t == details.tile) {
            Some(pos) => {
                self.deck.remove(pos);
            }
            None => {
                return Err(RuleViolation::new(format!(
                    "no {} tiles remain in the deck",
                    details.tile
                )));
            }
        }

        self.board.insert(
            coord,
            Placement {
                tile: details.tile.clone(),
                rotation: details.rotation,
                placed_by: team.to_string(),
                token: None,
            },
        );
        Ok(())
    }

    fn place_token(
        &mut self,
        team: &str,
        details: &PlaceTokenDetails,
    ) -> Result<(), RuleViolation> {
        let &PlaceTokenDetails::Place { x, y, kind } = details else {
            // Passing is always legal.
            return Ok(());
        };

        let remaining = self.tokens_remaining(team);
        let placement = self
            .board
            .get_mut(&(x, y))
            .ok_or_else(|| RuleViolation::new(format!("no tile at ({x}, {y})")))?;

        if placement.token.is_some() {
            return Err(RuleViolation::new(format!(
                "tile at ({x}, {y}) already holds a token"
            )));
        }
        if remaining == 0 {
            return Err(RuleViolation::new(format!("team {team:?} has no tokens left")));
        }

        placement.token = Some(Token {
            kind,
            team: team.to_string(),
        });
        self.tokens_remaining
            .insert(team.to_string(), remaining - 1);
        Ok(())
    }

    fn set_winners(&mut self, details: &SetWinnersDetails) -> Result<(), RuleViolation> {
        for winner in &details.winners {
            if !self.teams.contains(winner) {
                return Err(RuleViolation::new(format!("unknown winner {winner:?}")));
            }
        }
        self.winners = details.winners.clone();
        self.finished = true;
        Ok(())
    }

    fn has_neighbor(&self, (x, y): (i32, i32)) -> bool {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .iter()
            .any(|c| self.board.contains_key(c))
    }
}

impl BoardGame for CarcassonneGame {
    fn apply(&mut self, action: &GameAction) -> Result<(), RuleViolation> {
        if self.finished {
            return Err(RuleViolation::new("game is over"));
        }
        let team_index = self
            .teams
            .index_of(&action.team)
            .ok_or_else(|| RuleViolation::new(format!("unknown team {:?}", action.team)))?;

        match &action.details {
            ActionDetails::PlaceTile(d) => self.place_tile(&action.team, d)?,
            ActionDetails::PlaceToken(d) => self.place_token(&action.team, d)?,
            ActionDetails::SetWinners(d) => self.set_winners(d)?,
        }

        self.log.push(RawAction {
            team_index,
            action_key: action.details.action_type().code().to_string(),
            details: action.details.encode(&self.teams),
        });
        Ok(())
    }
}

impl NotationGame for CarcassonneGame {
    fn notation(&self) -> NotationDocument {
        let mut document = NotationDocument::with_header(GAME_KEY, self.teams.as_slice(), self.seed);
        for action in &self.log {
            document.push_action(action.clone());
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GameOptions {
        GameOptions::new(vec!["TeamA".to_string(), "TeamB".to_string()], 42)
    }

    fn place_tile(team: &str, tile: &str, x: i32, y: i32) -> GameAction {
        GameAction::new(
            team,
            ActionDetails::PlaceTile(PlaceTileDetails {
                tile: tile.to_string(),
                x,
                y,
                rotation: 0,
            }),
        )
    }

    #[test]
    fn test_create() {
        let game = CarcassonneGame::new(&options()).unwrap();

        assert_eq!(game.teams().len(), 2);
        assert_eq!(game.deck().len(), tiles::DECK_SIZE);
        assert_eq!(game.tiles_placed(), 0);
        assert_eq!(game.tokens_remaining("TeamA"), TOKENS_PER_TEAM);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_create_team_count_out_of_range() {
        let one = GameOptions::new(vec!["Solo".to_string()], 1);
        assert_eq!(
            CarcassonneGame::new(&one).unwrap_err(),
            CreateError::TeamCount {
                found: 1,
                min: MIN_TEAMS,
                max: MAX_TEAMS
            }
        );

        let six = GameOptions::new((0..6).map(|i| format!("T{i}")).collect(), 1);
        assert!(matches!(
            CarcassonneGame::new(&six),
            Err(CreateError::TeamCount { found: 6, .. })
        ));
    }

    #[test]
    fn test_create_duplicate_team() {
        let dup = GameOptions::new(vec!["A".to_string(), "A".to_string()], 1);
        assert_eq!(
            CarcassonneGame::new(&dup).unwrap_err(),
            CreateError::DuplicateTeam("A".to_string())
        );
    }

    #[test]
    fn test_deck_is_seeded() {
        let a = CarcassonneGame::new(&options()).unwrap();
        let b = CarcassonneGame::new(&options()).unwrap();
        assert_eq!(a.deck(), b.deck());

        let other = GameOptions::new(options().teams, 43);
        let c = CarcassonneGame::new(&other).unwrap();
        assert_ne!(a.deck(), c.deck());
    }

    #[test]
    fn test_place_tile_draws_from_deck() {
        let mut game = CarcassonneGame::new(&options()).unwrap();
        let before = game.deck().iter().filter(|t| t.as_str() == "D").count();

        game.apply(&place_tile("TeamA", "D", 0, 0)).unwrap();

        let after = game.deck().iter().filter(|t| t.as_str() == "D").count();
        assert_eq!(after, before - 1);
        assert_eq!(game.tiles_placed(), 1);
    }

    #[test]
    fn test_apply_unknown_team() {
        let mut game = CarcassonneGame::new(&options()).unwrap();
        let err = game.apply(&place_tile("TeamZ", "D", 0, 0)).unwrap_err();
        assert_eq!(err.message(), "unknown team \"TeamZ\"");
    }

    #[test]
    fn test_snapshot_equality() {
        let mut a = CarcassonneGame::new(&options()).unwrap();
        let mut b = CarcassonneGame::new(&options()).unwrap();

        a.apply(&place_tile("TeamA", "D", 0, 0)).unwrap();
        b.apply(&place_tile("TeamA", "D", 0, 0)).unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_notation_round_trip_header() {
        let game = CarcassonneGame::new(&options()).unwrap();
        let doc = game.notation();

        assert_eq!(doc.tag("Game"), Some(GAME_KEY));
        assert_eq!(doc.tag("Teams"), Some("TeamA, TeamB"));
        assert_eq!(doc.tag("Seed"), Some("42"));
        assert!(doc.actions.is_empty());
    }
}
