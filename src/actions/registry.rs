//! Action key registry: notation codes <-> action types.
//!
//! The registry is a static bidirectional table. Every code the notation
//! format can produce maps to exactly one `ActionType`; an unrecognized
//! code is a replay-time error, never a fallback action.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of action types the notation format records.
///
/// Adding a type means a new variant here, a code in the table below, a
/// decoder in [`details`](super::details), and an
/// [`ActionDetails`](super::ActionDetails) member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Place a tile on the board.
    PlaceTile,
    /// Place a token (or pass the token phase).
    PlaceToken,
    /// Declare the winning teams and end the game.
    SetWinners,
}

impl ActionType {
    /// Every action type, in registry order.
    pub const ALL: [ActionType; 3] = [
        ActionType::PlaceTile,
        ActionType::PlaceToken,
        ActionType::SetWinners,
    ];

    /// Resolve a notation code.
    ///
    /// ```
    /// use rust_bgn::actions::ActionType;
    ///
    /// assert_eq!(ActionType::from_code("p"), Some(ActionType::PlaceTile));
    /// assert_eq!(ActionType::from_code("zz"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(ActionType::PlaceTile),
            "t" => Some(ActionType::PlaceToken),
            "w" => Some(ActionType::SetWinners),
            _ => None,
        }
    }

    /// The notation code this type serializes as.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ActionType::PlaceTile => "p",
            ActionType::PlaceToken => "t",
            ActionType::SetWinners => "w",
        }
    }

    /// Human-readable name, for error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionType::PlaceTile => "PlaceTile",
            ActionType::PlaceToken => "PlaceToken",
            ActionType::SetWinners => "SetWinners",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
