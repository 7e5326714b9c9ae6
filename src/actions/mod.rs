//! Action vocabulary: the key registry and per-type detail decoders.

pub mod details;
pub mod registry;

pub use details::{
    ActionDetails, DecodeError, DetailFields, GameAction, PlaceTileDetails, PlaceTokenDetails,
    SetWinnersDetails, TokenKind,
};
pub use registry::ActionType;
