//! The parse-validate-replay pipeline.

pub mod engine;

pub use engine::{replay, LoadError, TAG_GAME, TAG_SEED, TAG_TEAMS};
