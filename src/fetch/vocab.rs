//! Token vocabularies for the Fetch grammar
//!
//! Ordered, immutable token sets. Matching is case-insensitive and
//! length-aware: comparison covers the longer of the two strings, so a
//! short entry can never prefix-match a longer candidate ("pin1" must
//! not swallow "pin10").

/// Comparison cap in bytes for a single token.
pub const MAX_TOKEN_LEN: usize = 25;

/// Top-level command names, in dispatch-table order.
pub static COMMANDS: &[&str] = &["?", "help", "gpio", "adc", "spi", "i2c", "resetpins"];

/// GPIO actions.
pub static GPIO_ACTIONS: &[&str] = &["get", "set", "clear", "configure"];

/// GPIO pin directions.
pub static GPIO_DIRECTIONS: &[&str] = &["input", "output"];

/// GPIO pull/sense modes.
pub static GPIO_SENSES: &[&str] = &["pullup", "pulldown", "floating", "analog"];

/// Port names, index = port letter A..I.
pub static PORTS: &[&str] = &[
    "porta", "portb", "portc", "portd", "porte", "portf", "portg", "porth", "porti",
];

/// Pin names, index = pin number.
pub static PINS: &[&str] = &[
    "pin0", "pin1", "pin2", "pin3", "pin4", "pin5", "pin6", "pin7", "pin8", "pin9", "pin10",
    "pin11", "pin12", "pin13", "pin14", "pin15",
];

/// Case-insensitive equality over `min(MAX_TOKEN_LEN, max(len a, len b))`
/// bytes. Byte-wise, so an over-long non-ASCII candidate cannot split a
/// char boundary.
fn token_eq(entry: &str, candidate: &str) -> bool {
    let e = &entry.as_bytes()[..entry.len().min(MAX_TOKEN_LEN)];
    let c = &candidate.as_bytes()[..candidate.len().min(MAX_TOKEN_LEN)];
    e.eq_ignore_ascii_case(c)
}

/// Match `candidate` against an ordered vocabulary.
///
/// Returns the first matching index, or `None`. An empty vocabulary
/// entry is a table-construction bug, not a user error.
pub fn token_match(vocabulary: &[&str], candidate: &str) -> Option<usize> {
    vocabulary.iter().position(|entry| {
        debug_assert!(!entry.is_empty(), "empty vocabulary entry");
        token_eq(entry, candidate)
    })
}
