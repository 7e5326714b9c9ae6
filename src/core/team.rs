//! Ordered team list resolved from the `Teams` tag.
//!
//! Team order is turn order, and notation actions reference teams by index
//! into this list. All index lookups are bounds-checked; an out-of-range
//! index is the caller's error to surface, never a panic.

use serde::{Deserialize, Serialize};

/// Separator between team names in the `Teams` tag value.
pub const TEAM_SEPARATOR: &str = ", ";

/// An ordered, non-empty list of team names.
///
/// ## Example
///
/// ```
/// use rust_bgn::core::Teams;
///
/// let teams = Teams::from_tag("TeamA, TeamB").unwrap();
/// assert_eq!(teams.len(), 2);
/// assert_eq!(teams.get(1), Some("TeamB"));
/// assert_eq!(teams.get(2), None);
/// assert_eq!(teams.to_tag(), "TeamA, TeamB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams(Vec<String>);

impl Teams {
    /// Parse a `Teams` tag value.
    ///
    /// Splits on `", "`. Returns `None` for a blank value: a document with
    /// no teams cannot be replayed.
    #[must_use]
    pub fn from_tag(value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(
            value.split(TEAM_SEPARATOR).map(str::to_string).collect(),
        ))
    }

    /// Build from an explicit name list.
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    /// Team name at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Index of a team name, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    /// Whether `name` is one of the teams.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of teams. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over team names in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The underlying name list.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Copy out the name list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    /// Re-encode as a `Teams` tag value.
    #[must_use]
    pub fn to_tag(&self) -> String {
        self.0.join(TEAM_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        let teams = Teams::from_tag("A, B, C").unwrap();
        assert_eq!(teams.len(), 3);
        assert_eq!(teams.get(0), Some("A"));
        assert_eq!(teams.get(2), Some("C"));
        assert_eq!(teams.get(3), None);
    }

    #[test]
    fn test_from_tag_single_team() {
        let teams = Teams::from_tag("Solo").unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams.get(0), Some("Solo"));
    }

    #[test]
    fn test_from_tag_blank_is_none() {
        assert!(Teams::from_tag("").is_none());
        assert!(Teams::from_tag("   ").is_none());
    }

    #[test]
    fn test_index_of_and_contains() {
        let teams = Teams::from_tag("Red, Blue").unwrap();
        assert_eq!(teams.index_of("Blue"), Some(1));
        assert_eq!(teams.index_of("Green"), None);
        assert!(teams.contains("Red"));
        assert!(!teams.contains("red"));
    }

    #[test]
    fn test_to_tag_round_trip() {
        let teams = Teams::from_tag("A, B, C").unwrap();
        assert_eq!(Teams::from_tag(&teams.to_tag()), Some(teams));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Teams::new(vec![]).is_none());
        assert!(Teams::new(vec!["A".to_string()]).is_some());
    }
}
