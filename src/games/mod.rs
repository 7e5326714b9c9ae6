//! Concrete game implementations.

pub mod carcassonne;
