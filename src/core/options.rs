//! Game creation options.
//!
//! `GameOptions` carries exactly what a notation document's header records:
//! the ordered team list and the seed. A game built from equal options must
//! start in an identical state.

use serde::{Deserialize, Serialize};

/// Options for constructing a fresh game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Ordered team names. Order is the turn order.
    pub teams: Vec<String>,

    /// Seed for the game's deterministic RNG.
    pub seed: i64,
}

impl GameOptions {
    /// Create options from a team list and seed.
    #[must_use]
    pub fn new(teams: Vec<String>, seed: i64) -> Self {
        Self { teams, seed }
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        let options = GameOptions::new(vec!["A".to_string(), "B".to_string()], 42);
        assert_eq!(options.team_count(), 2);
        assert_eq!(options.seed, 42);
    }

    #[test]
    fn test_options_serialization() {
        let options = GameOptions::new(vec!["A".to_string()], -7);
        let json = serde_json::to_string(&options).unwrap();
        let deserialized: GameOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(options, deserialized);
    }
}
