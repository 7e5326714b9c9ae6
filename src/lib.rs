//! # rust-bgn
//!
//! A board game notation parser and replay engine.
//!
//! Given the compact textual record of a finished (or in-progress) game,
//! `rust_bgn` reconstructs the full game state: it parses the document,
//! validates its metadata, builds a fresh game instance, and replays every
//! recorded action in order. The first inconsistency aborts the load with a
//! structured error naming the offending tag or action.
//!
//! ## Design Principles
//!
//! 1. **Opaque game engine**: actual game rules live behind the
//!    `BoardGame::apply` contract. The replay core validates notation, not
//!    rules, so any game implementing the contract can share it.
//!
//! 2. **Fail-fast, all-or-nothing**: a document that fails at action *i*
//!    yields exactly the error for action *i* and no game instance.
//!
//! 3. **Deterministic replay**: team order, seed, and action order fully
//!    determine the reconstructed state. Loading the same document twice
//!    produces identical games.
//!
//! ## Modules
//!
//! - `core`: creation options, teams, deterministic RNG
//! - `notation`: document model and text parser
//! - `actions`: action-key registry and per-type detail decoders
//! - `replay`: the parse-validate-replay state machine
//! - `rules`: the `BoardGame`/`GameBuilder` contracts games implement
//! - `games`: concrete games (Carcassonne)
//!
//! ## Example
//!
//! ```
//! use rust_bgn::games::carcassonne::CarcassonneBuilder;
//! use rust_bgn::notation::parse;
//! use rust_bgn::rules::GameBuilder;
//!
//! let document = parse(
//!     "[Game \"Carcassonne\"]\n\
//!      [Teams \"TeamA, TeamB\"]\n\
//!      [Seed \"42\"]\n\
//!      \n\
//!      0p&D.0.0.0 1p&V.1.0.2",
//! )
//! .unwrap();
//!
//! let game = CarcassonneBuilder.load(&document).unwrap();
//! assert_eq!(game.tiles_placed(), 2);
//! ```

pub mod actions;
pub mod core;
pub mod games;
pub mod notation;
pub mod replay;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameOptions, GameRng, GameRngState, Teams, TEAM_SEPARATOR};

pub use crate::notation::{parse, NotationDocument, ParseError, RawAction};

pub use crate::actions::{
    ActionDetails, ActionType, DecodeError, GameAction, PlaceTileDetails, PlaceTokenDetails,
    SetWinnersDetails, TokenKind,
};

pub use crate::replay::{replay, LoadError, TAG_GAME, TAG_SEED, TAG_TEAMS};

pub use crate::rules::{BoardGame, CreateError, GameBuilder, NotationGame, RuleViolation};
