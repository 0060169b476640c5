//! Keyboard bindings for steering the gazelle by hand.

use crate::gazelle::Direction;

/// Key codes and the heading each one requests.
/// Space is a convenience binding for north.
pub const KEY_BINDINGS: [(&str, Direction); 9] = [
    ("ArrowUp", Direction::N),
    ("ArrowRight", Direction::E),
    ("ArrowDown", Direction::S),
    ("ArrowLeft", Direction::W),
    ("Home", Direction::NW),
    ("PageUp", Direction::NE),
    ("End", Direction::SW),
    ("PageDown", Direction::SE),
    ("Space", Direction::N),
];

/// Heading bound to a key code, `None` for unbound keys
pub fn direction_for_key(code: &str) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, direction)| direction)
}
