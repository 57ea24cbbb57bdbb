//! Codabar encoder
//!
//! Turns a payload into the flat list of element widths that the renderer
//! draws. Every character, sentinels included, is followed by a narrow
//! inter-character gap.

use crate::symbol_table::{self, PATTERN_LEN};
use crate::{Error, Result};
use log::debug;

/// Default start character
pub const DEFAULT_START: char = 'A';

/// Default stop character
pub const DEFAULT_STOP: char = 'B';

/// Width of the gap that follows each character
const GAP_WIDTH: u8 = 1;

/// Elements emitted per character, gap included
pub const ELEMENTS_PER_CHAR: usize = PATTERN_LEN + 1;

/// Element widths of one encoded symbol, in drawing order
///
/// Odd positions (1-based) are bars, even positions are spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedSequence {
    widths: Vec<u8>,
}

impl EncodedSequence {
    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Always false for a sequence produced by [`encode`]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total width in modules
    pub fn total_modules(&self) -> u32 {
        self.widths.iter().map(|&w| w as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.widths.iter().copied()
    }
}

impl<'a> IntoIterator for &'a EncodedSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.widths.iter()
    }
}

/// Check that `c` can open or close a symbol
pub(crate) fn check_sentinel(c: char) -> Result<char> {
    symbol_table::lookup(c)?;
    if !symbol_table::is_sentinel(c) {
        return Err(Error::InvalidSentinel(c));
    }
    Ok(c.to_ascii_uppercase())
}

/// Normalize a payload: trim surrounding whitespace, fold to uppercase
pub fn normalize(payload: &str) -> String {
    payload.trim().to_ascii_uppercase()
}

/// Encode `payload` between the default `A`/`B` sentinels
pub fn encode(payload: &str) -> Result<EncodedSequence> {
    encode_with(payload, DEFAULT_START, DEFAULT_STOP)
}

/// Encode `payload` between the given start and stop characters
///
/// Fails on the first character missing from the symbol table; nothing is
/// returned for a partially encoded payload.
pub fn encode_with(payload: &str, start: char, stop: char) -> Result<EncodedSequence> {
    let start = check_sentinel(start)?;
    let stop = check_sentinel(stop)?;
    let data = normalize(payload);

    let symbols = data.chars().count() + 2;
    let mut widths = Vec::with_capacity(symbols * ELEMENTS_PER_CHAR);

    for c in std::iter::once(start).chain(data.chars()).chain(std::iter::once(stop)) {
        let pattern = symbol_table::lookup(c)?;
        widths.extend_from_slice(pattern.widths());
        widths.push(GAP_WIDTH);
    }

    let sequence = EncodedSequence { widths };
    debug!(
        "encoded {} symbols ({}{}{}) into {} modules",
        symbols,
        start,
        data,
        stop,
        sequence.total_modules()
    );
    Ok(sequence)
}
