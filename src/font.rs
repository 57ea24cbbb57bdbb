//! Built-in 5x7 bitmap font for human-readable text
//!
//! Covers every character of the Codabar symbol table plus space. Anything
//! else is drawn as a blank cell.

use crate::canvas::Font;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Cell size including one column and one row of spacing
const CELL_WIDTH: u32 = GLYPH_WIDTH + 1;
const CELL_HEIGHT: u32 = GLYPH_HEIGHT + 1;

/// Largest supported scale factor
pub const MAX_SCALE: u32 = 64;

// Each row is 5 bits wide, most significant bit on the left.
static GLYPHS: [(char, [u8; 7]); 24] = [
    ('0', [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e]),
    ('1', [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e]),
    ('2', [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f]),
    ('3', [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e]),
    ('4', [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02]),
    ('5', [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e]),
    ('6', [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e]),
    ('7', [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e]),
    ('9', [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c]),
    ('-', [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00]),
    ('$', [0x04, 0x0f, 0x14, 0x0e, 0x05, 0x1e, 0x04]),
    (':', [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x00]),
    ('/', [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c]),
    ('*', [0x00, 0x04, 0x15, 0x0e, 0x15, 0x04, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00]),
    ('A', [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11]),
    ('B', [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e]),
    ('C', [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e]),
    ('D', [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c]),
    ('E', [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f]),
    ('N', [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11]),
    ('T', [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    let c = c.to_ascii_uppercase();
    GLYPHS.iter().find(|(k, _)| *k == c).map(|(_, rows)| rows)
}

/// Fixed-width bitmap font, scaled by an integer factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(2)
    }
}

impl BitmapFont {
    /// Create a font; the scale is clamped to `1..=MAX_SCALE`
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_SCALE),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Offsets of every set pixel when `text` is drawn at the origin
    pub fn pixels<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (u32, u32)> + 'a {
        let s = self.scale;
        text.chars()
            .enumerate()
            .filter_map(|(i, c)| glyph(c).map(|rows| (i as u32, rows)))
            .flat_map(move |(i, rows)| {
                (0..GLYPH_HEIGHT).flat_map(move |row| {
                    (0..GLYPH_WIDTH)
                        .filter(move |&col| rows[row as usize] & (0x10 >> col) != 0)
                        .flat_map(move |col| {
                            let x0 = i * CELL_WIDTH * s + col * s;
                            let y0 = row * s;
                            (0..s).flat_map(move |dy| (0..s).map(move |dx| (x0 + dx, y0 + dy)))
                        })
                })
            })
    }
}

impl Font for BitmapFont {
    fn line_height(&self) -> u32 {
        CELL_HEIGHT * self.scale
    }

    fn char_width(&self) -> u32 {
        CELL_WIDTH * self.scale
    }
}
