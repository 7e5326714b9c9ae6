//! The replay state machine.
//!
//! `replay` reconstructs full game state from a parsed notation document:
//!
//! ```text
//! Created -> TagsValidated -> GameConstructed -> Replaying(i) -> Done
//!                 |                 |                  |
//!                 +-----------------+------------------+--> Failed
//! ```
//!
//! Tag validation happens before any game is constructed. The action loop
//! is strictly sequential and fail-fast: the first inconsistency aborts the
//! whole load, and the caller never sees a partially-replayed instance.
//! Every error carries enough context (tag name, action index, field) to
//! pinpoint the cause without re-parsing the document.
//!
//! The engine performs no rules validation of its own; a well-formed action
//! the game rejects surfaces as [`LoadError::RuleViolation`], verbatim.

use log::{debug, trace};
use thiserror::Error;

use crate::actions::{ActionDetails, ActionType, DecodeError, GameAction};
use crate::core::{GameOptions, Teams};
use crate::notation::NotationDocument;
use crate::rules::{BoardGame, CreateError, GameBuilder, RuleViolation};

/// Tag naming the game a document belongs to.
pub const TAG_GAME: &str = "Game";
/// Tag carrying the ordered team list.
pub const TAG_TEAMS: &str = "Teams";
/// Tag carrying the RNG seed.
pub const TAG_SEED: &str = "Seed";

/// Why a load failed.
///
/// Action-level variants carry the zero-based index of the offending
/// action; everything before that index was applied, nothing after it was
/// looked at, and the instance itself is not returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The `Game` tag does not equal the builder's key (an absent tag
    /// reads as empty and fails the same comparison).
    #[error("game tag {found:?} does not match game key {expected:?}")]
    GameKeyMismatch {
        expected: &'static str,
        found: String,
    },

    /// The `Teams` or `Seed` tag is absent (or `Teams` is blank).
    #[error("missing {0} tag")]
    MissingTag(&'static str),

    /// The `Seed` tag is not a base-10 integer.
    #[error("seed tag {0:?} is not a base-10 integer")]
    InvalidSeed(String),

    /// The game factory rejected the options. Propagated as-is.
    #[error(transparent)]
    Create(#[from] CreateError),

    /// An action references a team index past the team list.
    #[error("action {index}: team index {team_index} out of range for {team_count} teams")]
    TeamIndexOutOfRange {
        index: usize,
        team_index: usize,
        team_count: usize,
    },

    /// The registry has no mapping for an action key.
    #[error("action {index}: unknown action key {key:?}")]
    UnknownActionKey { index: usize, key: String },

    /// A detail decoder rejected an action's payload.
    #[error("action {index}: {source}")]
    MalformedActionDetails {
        index: usize,
        #[source]
        source: DecodeError,
    },

    /// The game engine rejected a well-formed action.
    #[error("action {index}: {source}")]
    RuleViolation {
        index: usize,
        #[source]
        source: RuleViolation,
    },
}

impl LoadError {
    /// Zero-based index of the offending action, for action-level failures.
    #[must_use]
    pub fn action_index(&self) -> Option<usize> {
        match self {
            Self::TeamIndexOutOfRange { index, .. }
            | Self::UnknownActionKey { index, .. }
            | Self::MalformedActionDetails { index, .. }
            | Self::RuleViolation { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Replay a document against a fresh game from `builder`.
///
/// Validates the mandatory tags, constructs the game, then applies every
/// recorded action in document order. Returns the live game on success or
/// the first error encountered; there is no partial-result mode.
pub fn replay<B>(builder: &B, document: &NotationDocument) -> Result<B::Game, LoadError>
where
    B: GameBuilder + ?Sized,
{
    // Created -> TagsValidated
    let found = document.tag(TAG_GAME).unwrap_or_default();
    if found != builder.key() {
        return Err(LoadError::GameKeyMismatch {
            expected: builder.key(),
            found: found.to_string(),
        });
    }

    let teams_tag = document
        .tag(TAG_TEAMS)
        .ok_or(LoadError::MissingTag(TAG_TEAMS))?;
    // A blank team list cannot attribute any action; treat it as absent.
    let teams = Teams::from_tag(teams_tag).ok_or(LoadError::MissingTag(TAG_TEAMS))?;

    let seed_tag = document
        .tag(TAG_SEED)
        .ok_or(LoadError::MissingTag(TAG_SEED))?;
    let seed: i64 = seed_tag
        .parse()
        .map_err(|_| LoadError::InvalidSeed(seed_tag.to_string()))?;

    debug!(
        "tags validated for {:?}: {} teams, seed {}",
        builder.key(),
        teams.len(),
        seed
    );

    // TagsValidated -> GameConstructed
    let options = GameOptions::new(teams.to_vec(), seed);
    let mut game = builder.create_with_notation(&options)?;

    debug!("game constructed, replaying {} actions", document.actions.len());

    // GameConstructed -> Replaying(0) ... Replaying(N) -> Done
    for (index, raw) in document.actions.iter().enumerate() {
        let team = teams
            .get(raw.team_index)
            .ok_or(LoadError::TeamIndexOutOfRange {
                index,
                team_index: raw.team_index,
                team_count: teams.len(),
            })?;

        let action_type =
            ActionType::from_code(&raw.action_key).ok_or_else(|| LoadError::UnknownActionKey {
                index,
                key: raw.action_key.clone(),
            })?;

        let details = ActionDetails::decode(action_type, &raw.details, &teams)
            .map_err(|source| LoadError::MalformedActionDetails { index, source })?;

        trace!("action {}: {} {}", index, team, action_type);

        let action = GameAction::new(team, details);
        game.apply(&action)
            .map_err(|source| LoadError::RuleViolation { index, source })?;
    }

    Ok(game)
}
