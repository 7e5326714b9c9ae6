//! The Carcassonne builder: factory, loader, and registry key.

use super::game::CarcassonneGame;
use crate::core::GameOptions;
use crate::rules::{CreateError, GameBuilder};

/// The key Carcassonne documents must carry in their `Game` tag.
pub const GAME_KEY: &str = "Carcassonne";

/// Builds and loads Carcassonne games.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarcassonneBuilder;

impl GameBuilder for CarcassonneBuilder {
    type Game = CarcassonneGame;

    fn key(&self) -> &'static str {
        GAME_KEY
    }

    fn create(&self, options: &GameOptions) -> Result<CarcassonneGame, CreateError> {
        CarcassonneGame::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        assert_eq!(CarcassonneBuilder.key(), "Carcassonne");
    }

    #[test]
    fn test_create_propagates_factory_error() {
        let options = GameOptions::new(vec!["Solo".to_string()], 1);
        assert!(CarcassonneBuilder.create(&options).is_err());
    }
}
