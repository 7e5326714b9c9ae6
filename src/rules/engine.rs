//! Game contracts: the `apply` seam and the builder surface.
//!
//! The replay core reaches the underlying game only through these traits.
//! `BoardGame::apply` is a black box - whether a tile placement is legal,
//! how scoring works, what the board looks like - none of that is this
//! crate's business. Any game implementing the contract can be driven by
//! the same replay engine.

use thiserror::Error;

use crate::actions::GameAction;
use crate::core::GameOptions;
use crate::notation::NotationDocument;
use crate::replay::{self, LoadError};

/// A game engine's rejection of an otherwise well-formed action.
///
/// Opaque to the replay core: the engine's message is carried verbatim and
/// never reinterpreted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct RuleViolation(String);

impl RuleViolation {
    /// Create a violation with the engine's own message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The engine's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A game factory's rejection of creation options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CreateError {
    /// Team count outside the game's supported range.
    #[error("team count {found} not in supported range {min}-{max}")]
    TeamCount {
        found: usize,
        min: usize,
        max: usize,
    },

    /// Two teams share a name; actions could not be attributed.
    #[error("duplicate team name {0:?}")]
    DuplicateTeam(String),
}

/// A game instance capable of accepting actions.
///
/// The one operation the replay engine needs. Implementations validate
/// their own rules and report violations; they must be deterministic so a
/// replayed document reconstructs identical state.
pub trait BoardGame {
    /// Apply a single action, mutating game state.
    fn apply(&mut self, action: &GameAction) -> Result<(), RuleViolation>;
}

/// A game that can round-trip through notation.
pub trait NotationGame: BoardGame {
    /// Re-emit this game's header and applied actions as a document.
    ///
    /// Loading the returned document must reconstruct this game.
    fn notation(&self) -> NotationDocument;
}

/// Factory and loader for one game type.
///
/// Builders register under a stable `key` in a multi-game host; a
/// document's `Game` tag selects the builder that may load it.
pub trait GameBuilder {
    /// The game this builder produces.
    type Game: NotationGame;

    /// The stable identifier this builder registers under.
    fn key(&self) -> &'static str;

    /// Build a fresh game from options alone. No replay.
    fn create(&self, options: &GameOptions) -> Result<Self::Game, CreateError>;

    /// Same as `create`, typed for notation round-tripping.
    fn create_with_notation(&self, options: &GameOptions) -> Result<Self::Game, CreateError> {
        self.create(options)
    }

    /// Full parse-validate-replay pipeline.
    ///
    /// See [`replay::replay`] for the state machine this runs.
    fn load(&self, document: &NotationDocument) -> Result<Self::Game, LoadError> {
        replay::replay(self, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_message() {
        let violation = RuleViolation::new("tile overlaps");
        assert_eq!(violation.message(), "tile overlaps");
        assert_eq!(violation.to_string(), "tile overlaps");
    }

    #[test]
    fn test_create_error_display() {
        let err = CreateError::TeamCount {
            found: 1,
            min: 2,
            max: 5,
        };
        assert_eq!(err.to_string(), "team count 1 not in supported range 2-5");
    }
}
