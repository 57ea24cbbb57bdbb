//! Codabar symbol table
//!
//! Each character maps to seven alternating bar/space elements, starting and
//! ending with a bar. A width of 1 is a narrow element, 2 is wide.

use crate::{Error, Result};

/// Number of elements in every Codabar character
pub const PATTERN_LEN: usize = 7;

/// Relative widths of the bars and spaces of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarPattern([u8; PATTERN_LEN]);

impl BarPattern {
    /// Element widths, bar first
    pub fn widths(&self) -> &[u8; PATTERN_LEN] {
        &self.0
    }

    /// Sum of the element widths
    pub fn modules(&self) -> u32 {
        self.0.iter().map(|&w| w as u32).sum()
    }
}

// ============================================================================
// Codabar lookup tables
// ============================================================================

static CODABAR_TABLE: [(char, BarPattern); 24] = [
    ('0', BarPattern([1, 1, 1, 1, 1, 2, 2])),
    ('1', BarPattern([1, 1, 1, 1, 2, 2, 1])),
    ('2', BarPattern([1, 1, 1, 2, 1, 1, 2])),
    ('3', BarPattern([2, 2, 1, 1, 1, 1, 1])),
    ('4', BarPattern([1, 1, 2, 1, 1, 2, 1])),
    ('5', BarPattern([2, 1, 1, 1, 1, 2, 1])),
    ('6', BarPattern([1, 2, 1, 1, 1, 1, 2])),
    ('7', BarPattern([1, 2, 1, 1, 2, 1, 1])),
    ('8', BarPattern([1, 2, 2, 1, 1, 1, 1])),
    ('9', BarPattern([2, 1, 1, 2, 1, 1, 1])),
    ('-', BarPattern([1, 1, 1, 2, 2, 1, 1])),
    ('$', BarPattern([1, 1, 2, 2, 1, 1, 1])),
    (':', BarPattern([2, 1, 1, 1, 2, 1, 2])),
    ('/', BarPattern([2, 1, 2, 1, 1, 1, 2])),
    ('.', BarPattern([2, 1, 2, 1, 2, 1, 1])),
    ('*', BarPattern([1, 1, 1, 2, 1, 2, 2])),
    ('+', BarPattern([1, 1, 2, 1, 2, 1, 2])),
    // Start/stop characters. T, N and E share the patterns of A, B and D.
    ('A', BarPattern([1, 1, 2, 2, 1, 2, 1])),
    ('B', BarPattern([1, 2, 1, 2, 1, 1, 2])),
    ('C', BarPattern([1, 1, 1, 2, 1, 2, 2])),
    ('D', BarPattern([1, 1, 1, 2, 2, 2, 1])),
    ('E', BarPattern([1, 1, 1, 2, 2, 2, 1])),
    ('N', BarPattern([1, 2, 1, 2, 1, 1, 2])),
    ('T', BarPattern([1, 1, 2, 2, 1, 2, 1])),
];

static SENTINELS: &[u8; 7] = b"ABCDENT";

/// Look up the bar pattern for a character
///
/// Lowercase letters are folded to uppercase first.
pub fn lookup(c: char) -> Result<BarPattern> {
    let key = c.to_ascii_uppercase();
    CODABAR_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, pattern)| *pattern)
        .ok_or(Error::UnsupportedCharacter(c))
}

/// Whether `c` may open or close a symbol
pub fn is_sentinel(c: char) -> bool {
    c.is_ascii() && SENTINELS.contains(&(c.to_ascii_uppercase() as u8))
}

/// All characters in the table, digits first
pub fn characters() -> impl Iterator<Item = char> {
    CODABAR_TABLE.iter().map(|(c, _)| *c)
}
