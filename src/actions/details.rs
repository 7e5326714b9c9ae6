//! Per-action-type detail decoders.
//!
//! One pure decoder per `ActionType`: raw payload fields in, a typed
//! parameter record out. Each decoder validates shape on its own (field
//! count, numeric ranges, enum membership) and never looks at other
//! actions. `SetWinners` is the one type that needs context: winners are
//! written as team indices, so it takes the resolved team list.
//!
//! Every record also encodes back to its raw field list, which is what
//! lets a game re-emit its history as a document.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

use super::registry::ActionType;
use crate::core::Teams;

/// Raw payload fields, as produced by the parser and consumed by decoders.
pub type DetailFields = SmallVec<[String; 4]>;

/// A decoder's rejection of a payload.
///
/// Always names the action type and, for field-level problems, the
/// offending field.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Wrong number of payload fields.
    #[error("{action} details: expected {expected} fields, found {found}")]
    FieldCount {
        action: ActionType,
        expected: usize,
        found: usize,
    },

    /// A field failed validation (bad number, unknown enum member, range).
    #[error("{action} details: invalid {field} {value:?}")]
    InvalidField {
        action: ActionType,
        field: &'static str,
        value: String,
    },
}

impl DecodeError {
    fn invalid(action: ActionType, field: &'static str, value: &str) -> Self {
        Self::InvalidField {
            action,
            field,
            value: value.to_string(),
        }
    }
}

/// The kinds of token a team can place on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Farmer,
    Knight,
    Thief,
    Monk,
}

impl TokenKind {
    /// Every token kind.
    pub const ALL: [TokenKind; 4] = [
        TokenKind::Farmer,
        TokenKind::Knight,
        TokenKind::Thief,
        TokenKind::Monk,
    ];

    /// Parse the notation name of a token kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Farmer" => Some(TokenKind::Farmer),
            "Knight" => Some(TokenKind::Knight),
            "Thief" => Some(TokenKind::Thief),
            "Monk" => Some(TokenKind::Monk),
            _ => None,
        }
    }

    /// The notation name this kind serializes as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Farmer => "Farmer",
            TokenKind::Knight => "Knight",
            TokenKind::Thief => "Thief",
            TokenKind::Monk => "Monk",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded `PlaceTile` parameters.
///
/// Payload shape: `tile.x.y.rotation`, e.g. `R.0.-1.2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceTileDetails {
    /// Tile code being placed.
    pub tile: String,
    /// Board column.
    pub x: i32,
    /// Board row.
    pub y: i32,
    /// Clockwise quarter-turns, 0-3.
    pub rotation: u8,
}

impl PlaceTileDetails {
    const TYPE: ActionType = ActionType::PlaceTile;

    /// Decode a raw payload.
    pub fn decode(fields: &[String]) -> Result<Self, DecodeError> {
        let [tile, x, y, rotation] = expect_fields::<4>(Self::TYPE, fields)?;
        if tile.is_empty() {
            return Err(DecodeError::invalid(Self::TYPE, "tile", tile));
        }
        let x = parse_coord(Self::TYPE, "x", x)?;
        let y = parse_coord(Self::TYPE, "y", y)?;
        let rotation: u8 = rotation
            .parse()
            .ok()
            .filter(|r| *r < 4)
            .ok_or_else(|| DecodeError::invalid(Self::TYPE, "rotation", rotation))?;

        Ok(Self {
            tile: tile.clone(),
            x,
            y,
            rotation,
        })
    }

    /// Re-encode as raw payload fields.
    #[must_use]
    pub fn encode(&self) -> DetailFields {
        smallvec![
            self.tile.clone(),
            self.x.to_string(),
            self.y.to_string(),
            self.rotation.to_string(),
        ]
    }
}

/// Decoded `PlaceToken` parameters.
///
/// Payload shape: either the literal `pass`, or `x.y.kind`,
/// e.g. `0.1.Knight`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceTokenDetails {
    /// Decline to place a token this turn.
    Pass,
    /// Place a token of `kind` on the tile at `(x, y)`.
    Place { x: i32, y: i32, kind: TokenKind },
}

impl PlaceTokenDetails {
    const TYPE: ActionType = ActionType::PlaceToken;

    /// The payload field spelling a pass.
    pub const PASS: &'static str = "pass";

    /// Decode a raw payload.
    pub fn decode(fields: &[String]) -> Result<Self, DecodeError> {
        if let [single] = fields {
            return if single.as_str() == Self::PASS {
                Ok(Self::Pass)
            } else {
                Err(DecodeError::invalid(Self::TYPE, "pass", single))
            };
        }

        let [x, y, kind] = expect_fields::<3>(Self::TYPE, fields)?;
        let x = parse_coord(Self::TYPE, "x", x)?;
        let y = parse_coord(Self::TYPE, "y", y)?;
        let kind = TokenKind::from_name(kind)
            .ok_or_else(|| DecodeError::invalid(Self::TYPE, "token kind", kind))?;

        Ok(Self::Place { x, y, kind })
    }

    /// Re-encode as raw payload fields.
    #[must_use]
    pub fn encode(&self) -> DetailFields {
        match self {
            Self::Pass => smallvec![Self::PASS.to_string()],
            Self::Place { x, y, kind } => {
                smallvec![x.to_string(), y.to_string(), kind.name().to_string()]
            }
        }
    }
}

/// Decoded `SetWinners` parameters: winning team names.
///
/// Payload shape: one team index per field, e.g. `0.2`. Decoding resolves
/// indices against the document's team list, so this is the one decoder
/// that takes context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWinnersDetails {
    /// Winning team names, in payload order.
    pub winners: Vec<String>,
}

impl SetWinnersDetails {
    const TYPE: ActionType = ActionType::SetWinners;

    /// Decode a raw payload against the team list.
    pub fn decode(fields: &[String], teams: &Teams) -> Result<Self, DecodeError> {
        let mut winners = Vec::with_capacity(fields.len());
        for field in fields {
            let team = field
                .parse::<usize>()
                .ok()
                .and_then(|i| teams.get(i))
                .ok_or_else(|| DecodeError::invalid(Self::TYPE, "winner index", field))?;
            winners.push(team.to_string());
        }
        Ok(Self { winners })
    }

    /// Re-encode as raw payload fields (team indices).
    ///
    /// Winners that are not in `teams` cannot be expressed and are skipped;
    /// a game that validates its winners never produces one.
    #[must_use]
    pub fn encode(&self, teams: &Teams) -> DetailFields {
        self.winners
            .iter()
            .filter_map(|name| teams.index_of(name))
            .map(|i| i.to_string())
            .collect()
    }
}

/// Decoded parameters for any action type.
///
/// The tagged union the registry dispatches into: one variant per
/// `ActionType`, each carrying its own record shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionDetails {
    PlaceTile(PlaceTileDetails),
    PlaceToken(PlaceTokenDetails),
    SetWinners(SetWinnersDetails),
}

impl ActionDetails {
    /// The action type this payload decodes under.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::PlaceTile(_) => ActionType::PlaceTile,
            Self::PlaceToken(_) => ActionType::PlaceToken,
            Self::SetWinners(_) => ActionType::SetWinners,
        }
    }

    /// Dispatch to the type-specific decoder.
    pub fn decode(
        action_type: ActionType,
        fields: &[String],
        teams: &Teams,
    ) -> Result<Self, DecodeError> {
        match action_type {
            ActionType::PlaceTile => PlaceTileDetails::decode(fields).map(Self::PlaceTile),
            ActionType::PlaceToken => PlaceTokenDetails::decode(fields).map(Self::PlaceToken),
            ActionType::SetWinners => {
                SetWinnersDetails::decode(fields, teams).map(Self::SetWinners)
            }
        }
    }

    /// Re-encode as raw payload fields.
    #[must_use]
    pub fn encode(&self, teams: &Teams) -> DetailFields {
        match self {
            Self::PlaceTile(d) => d.encode(),
            Self::PlaceToken(d) => d.encode(),
            Self::SetWinners(d) => d.encode(teams),
        }
    }
}

/// A fully resolved action, ready for a game's `apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    /// Acting team name.
    pub team: String,

    /// Decoded, type-specific parameters.
    pub details: ActionDetails,
}

impl GameAction {
    /// Create an action for `team`.
    #[must_use]
    pub fn new(team: impl Into<String>, details: ActionDetails) -> Self {
        Self {
            team: team.into(),
            details,
        }
    }
}

/// Check the payload field count and view it as a fixed-size array.
fn expect_fields<const N: usize>(
    action: ActionType,
    fields: &[String],
) -> Result<&[String; N], DecodeError> {
    fields
        .try_into()
        .map_err(|_| DecodeError::FieldCount {
            action,
            expected: N,
            found: fields.len(),
        })
}

/// Parse a board coordinate field.
fn parse_coord(action: ActionType, field: &'static str, value: &str) -> Result<i32, DecodeError> {
    value
        .parse()
        .map_err(|_| DecodeError::invalid(action, field, value))
}
