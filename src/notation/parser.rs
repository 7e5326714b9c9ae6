//! Notation text parser.
//!
//! ## Grammar
//!
//! A document is a tag section followed by an action section:
//!
//! ```text
//! [Game "Carcassonne"]
//! [Teams "TeamA, TeamB"]
//! [Seed "42"]
//!
//! 0p&R.0.0.0 0t&0.0.Thief 1p&V.1.0.2
//! ```
//!
//! - Tag lines are `[Key "Value"]`, one per line. Duplicate keys are legal;
//!   the last write wins.
//! - The tag section ends at the first line that does not start with `[`.
//!   Everything after is whitespace-separated action items.
//! - An action item is `<teamIndex><actionKey>` optionally followed by
//!   `&` and `.`-separated detail fields: decimal digits, then an
//!   alphabetic key, then the payload.
//!
//! The parser stays decode-agnostic: tag values and detail fields are kept
//! as raw strings. Interpreting `Seed` as an integer or `R.0.0.0` as a tile
//! placement is the replay engine's job.

use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

use super::document::{NotationDocument, RawAction};

/// A structural error in the document text.
///
/// Lines are 1-based, action indices 0-based (matching replay indices).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line in the tag section is not of the form `[Key "Value"]`.
    #[error("line {line}: malformed tag {text:?}")]
    MalformedTag { line: usize, text: String },

    /// An action item has no usable decimal team-index prefix.
    #[error("action {index}: missing or invalid team index in {text:?}")]
    InvalidTeamIndex { index: usize, text: String },

    /// An action item has no action key after the team index.
    #[error("action {index}: missing action key in {text:?}")]
    MissingActionKey { index: usize, text: String },

    /// Trailing content after the action key that is not a `&` payload.
    #[error("action {index}: malformed action item {text:?}")]
    MalformedAction { index: usize, text: String },
}

/// Parse a notation document.
///
/// Populates the tag mapping and the ordered action list; document order of
/// actions is preserved exactly.
pub fn parse(input: &str) -> Result<NotationDocument, ParseError> {
    let mut document = NotationDocument::new();
    let mut lines = input.lines().enumerate().peekable();

    while let Some((number, line)) = lines.peek().copied() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            lines.next();
            continue;
        }
        if !trimmed.starts_with('[') {
            break;
        }
        lines.next();

        let (key, value) = parse_tag(trimmed).ok_or_else(|| ParseError::MalformedTag {
            line: number + 1,
            text: trimmed.to_string(),
        })?;
        // Last write wins on duplicate keys.
        document.set_tag(key, value);
    }

    for (_, line) in lines {
        for item in line.split_whitespace() {
            let index = document.actions.len();
            let action = parse_action(index, item)?;
            document.push_action(action);
        }
    }

    debug!(
        "parsed document: {} tags, {} actions",
        document.tags.len(),
        document.actions.len()
    );
    Ok(document)
}

/// Split `[Key "Value"]` into its parts. Returns `None` on any shape error.
fn parse_tag(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('[')?.strip_suffix(']')?;
    let (key, rest) = body.split_once(' ')?;
    if key.is_empty() {
        return None;
    }
    let value = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    Some((key, value))
}

/// Parse one `<teamIndex><actionKey>[&fields]` item.
fn parse_action(index: usize, item: &str) -> Result<RawAction, ParseError> {
    let digits_end = item
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(item.len(), |(i, _)| i);
    let team_index: usize = item[..digits_end]
        .parse()
        .map_err(|_| ParseError::InvalidTeamIndex {
            index,
            text: item.to_string(),
        })?;

    let rest = &item[digits_end..];
    let key_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    if key_end == 0 {
        return Err(ParseError::MissingActionKey {
            index,
            text: item.to_string(),
        });
    }
    let action_key = &rest[..key_end];

    let details: SmallVec<[String; 4]> = match &rest[key_end..] {
        "" => SmallVec::new(),
        payload => match payload.strip_prefix('&') {
            Some(fields) => fields.split('.').map(str::to_string).collect(),
            None => {
                return Err(ParseError::MalformedAction {
                    index,
                    text: item.to_string(),
                })
            }
        },
    };

    Ok(RawAction {
        team_index,
        action_key: action_key.to_string(),
        details,
    })
}

impl std::str::FromStr for NotationDocument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DOC: &str = "\
[Game \"Carcassonne\"]
[Teams \"TeamA, TeamB\"]
[Seed \"42\"]

0p&R.0.0.0 0t&0.0.Thief 1p&V.1.0.2
1w&0.1
";

    #[test]
    fn test_parse_tags() {
        let doc = parse(DOC).unwrap();

        assert_eq!(doc.tag("Game"), Some("Carcassonne"));
        assert_eq!(doc.tag("Teams"), Some("TeamA, TeamB"));
        assert_eq!(doc.tag("Seed"), Some("42"));
        assert_eq!(doc.tag("Missing"), None);
    }

    #[test]
    fn test_parse_actions_in_order() {
        let doc = parse(DOC).unwrap();

        assert_eq!(doc.actions.len(), 4);
        assert_eq!(doc.actions[0].team_index, 0);
        assert_eq!(doc.actions[0].action_key, "p");
        assert_eq!(doc.actions[0].details.as_slice(), ["R", "0", "0", "0"]);
        assert_eq!(doc.actions[1].action_key, "t");
        assert_eq!(doc.actions[2].team_index, 1);
        assert_eq!(doc.actions[3].action_key, "w");
        assert_eq!(doc.actions[3].details.as_slice(), ["0", "1"]);
    }

    #[test]
    fn test_tag_values_uninterpreted() {
        // A seed that is not a number is a replay-time problem, not ours.
        let doc = parse("[Seed \"not-a-number\"]").unwrap();
        assert_eq!(doc.tag("Seed"), Some("not-a-number"));
    }

    #[test]
    fn test_duplicate_tag_last_wins() {
        let doc = parse("[Seed \"1\"]\n[Seed \"2\"]").unwrap();
        assert_eq!(doc.tag("Seed"), Some("2"));
    }

    #[test]
    fn test_action_without_details() {
        let doc = parse("2w").unwrap();

        assert_eq!(doc.actions.len(), 1);
        assert_eq!(doc.actions[0].team_index, 2);
        assert_eq!(doc.actions[0].action_key, "w");
        assert!(doc.actions[0].details.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("").unwrap();
        assert!(doc.tags.is_empty());
        assert!(doc.actions.is_empty());
    }

    #[test]
    fn test_malformed_tag() {
        let err = parse("[Game Carcassonne]").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTag {
                line: 1,
                text: "[Game Carcassonne]".to_string()
            }
        );

        assert!(parse("[NoClose \"x\"").is_err());
        assert!(parse("[ \"x\"]").is_err());
    }

    #[test]
    fn test_missing_team_index() {
        let err = parse("p&R.0.0.0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTeamIndex { index: 0, .. }));
    }

    #[test]
    fn test_missing_action_key() {
        let err = parse("0&R.0.0.0").unwrap_err();
        assert!(matches!(err, ParseError::MissingActionKey { index: 0, .. }));
    }

    #[test]
    fn test_malformed_action_item() {
        let err = parse("0p&ok 1p!bad").unwrap_err();
        assert!(matches!(err, ParseError::MalformedAction { index: 1, .. }));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let doc = parse(DOC).unwrap();
        let reparsed = parse(&doc.to_string()).unwrap();
        assert_eq!(doc, reparsed);
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(input in ".{0,400}") {
            let _ = parse(&input);
        }

        #[test]
        fn test_parsed_team_index_matches_prefix(team in 0usize..100, fields in "[a-z0-9]{1,8}") {
            let text = format!("{team}p&{fields}");
            let doc = parse(&text).unwrap();
            prop_assert_eq!(doc.actions[0].team_index, team);
        }
    }
}
