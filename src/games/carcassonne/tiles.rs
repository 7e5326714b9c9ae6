//! Tile vocabulary and the draw deck.
//!
//! Tiles use the conventional base-set letters A-X. The deck holds the
//! standard 72 copies; shuffling it with the document seed is what makes
//! a replayed game's remaining draw pile reproducible.

/// Tile codes and how many copies of each the base deck holds.
pub const TILE_COUNTS: [(&str, usize); 24] = [
    ("A", 2),
    ("B", 4),
    ("C", 1),
    ("D", 4),
    ("E", 5),
    ("F", 2),
    ("G", 1),
    ("H", 3),
    ("I", 2),
    ("J", 3),
    ("K", 3),
    ("L", 3),
    ("M", 2),
    ("N", 3),
    ("O", 2),
    ("P", 3),
    ("Q", 1),
    ("R", 3),
    ("S", 2),
    ("T", 1),
    ("U", 8),
    ("V", 9),
    ("W", 4),
    ("X", 1),
];

/// Total tiles in a fresh deck.
pub const DECK_SIZE: usize = 72;

/// Whether `code` is a tile the deck can contain.
#[must_use]
pub fn is_known_tile(code: &str) -> bool {
    TILE_COUNTS.iter().any(|(c, _)| *c == code)
}

/// Build an unshuffled deck: every copy of every tile, in table order.
#[must_use]
pub fn standard_deck() -> Vec<String> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for (code, count) in TILE_COUNTS {
        for _ in 0..count {
            deck.push(code.to_string());
        }
    }
    deck
}
