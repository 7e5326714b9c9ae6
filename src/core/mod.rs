//! Shared primitives: creation options, teams, deterministic RNG.
//!
//! These are game-agnostic; concrete games consume them through
//! `GameOptions` rather than reaching into the notation layer.

pub mod options;
pub mod rng;
pub mod team;

pub use options::GameOptions;
pub use rng::{GameRng, GameRngState};
pub use team::{Teams, TEAM_SEPARATOR};
