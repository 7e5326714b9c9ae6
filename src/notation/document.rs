//! Notation document model: tags plus an ordered action list.
//!
//! A document is the full serialized history of one game. Tags are
//! free-form metadata (the replay engine interprets `Game`, `Teams` and
//! `Seed`); actions are kept raw here - resolving keys and decoding detail
//! fields happens later, per action.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::TEAM_SEPARATOR;

/// One recorded action, still in wire form.
///
/// `team_index` points into the document's team list, `action_key` is a
/// registry code, and `details` are the undecoded payload fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    /// Index into the `Teams` tag list.
    pub team_index: usize,

    /// Registry code identifying the action type.
    pub action_key: String,

    /// Raw detail fields, in payload order.
    /// SmallVec optimizes for the 0-4 fields every known action fits in.
    pub details: SmallVec<[String; 4]>,
}

impl RawAction {
    /// Create an action with no detail fields.
    #[must_use]
    pub fn new(team_index: usize, action_key: impl Into<String>) -> Self {
        Self {
            team_index,
            action_key: action_key.into(),
            details: SmallVec::new(),
        }
    }

    /// Create an action with the given detail fields.
    #[must_use]
    pub fn with_details(team_index: usize, action_key: impl Into<String>, details: &[&str]) -> Self {
        Self {
            team_index,
            action_key: action_key.into(),
            details: details.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

impl fmt::Display for RawAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.team_index, self.action_key)?;
        if !self.details.is_empty() {
            write!(f, "&{}", self.details.join("."))?;
        }
        Ok(())
    }
}

/// A parsed notation document.
///
/// Owned exclusively by one `load` call; nothing is cached or shared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationDocument {
    /// Document metadata. Values are uninterpreted strings.
    pub tags: FxHashMap<String, String>,

    /// Recorded actions in document order. Order is turn order.
    pub actions: Vec<RawAction>,
}

impl NotationDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a tag value.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Set a tag, replacing any previous value.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Append an action.
    pub fn push_action(&mut self, action: RawAction) {
        self.actions.push(action);
    }

    /// Convenience constructor for the three mandatory tags.
    #[must_use]
    pub fn with_header(game: &str, teams: &[String], seed: i64) -> Self {
        let mut doc = Self::new();
        doc.set_tag("Game", game);
        doc.set_tag("Teams", teams.join(TEAM_SEPARATOR));
        doc.set_tag("Seed", seed.to_string());
        doc
    }
}

impl fmt::Display for NotationDocument {
    /// Re-emit the textual form.
    ///
    /// The mandatory tags come first in a fixed order, remaining tags
    /// sorted by key, so output is stable regardless of map iteration
    /// order. `parse` of the output reproduces this document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mandatory = ["Game", "Teams", "Seed"];
        for key in mandatory {
            if let Some(value) = self.tags.get(key) {
                writeln!(f, "[{key} \"{value}\"]")?;
            }
        }

        let mut rest: Vec<_> = self
            .tags
            .iter()
            .filter(|(k, _)| !mandatory.contains(&k.as_str()))
            .collect();
        rest.sort();
        for (key, value) in rest {
            writeln!(f, "[{key} \"{value}\"]")?;
        }

        if !self.actions.is_empty() {
            writeln!(f)?;
            let items: Vec<_> = self.actions.iter().map(RawAction::to_string).collect();
            writeln!(f, "{}", items.join(" "))?;
        }
        Ok(())
    }
}
