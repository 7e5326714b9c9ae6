//! Game-side contracts.
//!
//! Games implement `BoardGame` (and `NotationGame` for round-tripping);
//! the replay core drives them without interpreting game-specific rules.

pub mod engine;

pub use engine::{BoardGame, CreateError, GameBuilder, NotationGame, RuleViolation};
