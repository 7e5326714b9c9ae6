//! Carcassonne: a concrete game behind the replay engine's contracts.
//!
//! Implements the placement-rule subset needed to drive real replays:
//! tile adjacency, token supply, winner declaration. Scoring is not
//! modeled.

pub mod builder;
pub mod game;
pub mod tiles;

pub use builder::{CarcassonneBuilder, GAME_KEY};
pub use game::{
    CarcassonneGame, GameSnapshot, Placement, Token, MAX_TEAMS, MIN_TEAMS, TOKENS_PER_TEAM,
};
