//! Drawing surface used by the renderer
//!
//! The renderer only needs a handful of primitives: create a canvas, allocate
//! colors, fill, fill a rectangle and draw a line of text. [`ImageCanvas`]
//! implements them on top of an `image::RgbImage`.

use crate::font::BitmapFont;
use crate::{Error, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Metrics of a fixed-width font
pub trait Font {
    /// Height of one rendered line, in pixels
    fn line_height(&self) -> u32;

    /// Advance of one character, in pixels
    fn char_width(&self) -> u32;

    /// Width of `text` rendered on one line
    fn text_width(&self, text: &str) -> u32 {
        let len = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        self.char_width().saturating_mul(len)
    }
}

/// A raster target the renderer draws into
///
/// Rectangle corners are fractional; implementations decide how to snap them
/// to pixels. Both corners are given as (left, top) and (right, bottom).
pub trait Canvas: Sized {
    type Color: Copy;
    type Font: Font;

    fn create(width: u32, height: u32) -> Result<Self>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn allocate_color(&mut self, rgb: Rgb<u8>) -> Result<Self::Color>;

    fn fill(&mut self, color: Self::Color);

    fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Self::Color);

    /// Draw `text` with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, font: &Self::Font, x: f64, y: f64, text: &str, color: Self::Color);
}

/// Largest number of distinct colors a canvas hands out
pub const PALETTE_SIZE: usize = 256;

/// Palette-limited RGB canvas backed by the `image` crate
pub struct ImageCanvas {
    image: RgbImage,
    palette: Vec<Rgb<u8>>,
}

impl ImageCanvas {
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode the canvas to `path`; the format follows the file extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    /// Snap a fractional span to the pixel range `[lo, hi)` inside `0..limit`
    fn span(a: f64, b: f64, limit: u32) -> (u32, u32) {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let lo = a.round().clamp(0.0, limit as f64) as u32;
        let hi = b.round().clamp(0.0, limit as f64) as u32;
        (lo, hi)
    }
}

impl Canvas for ImageCanvas {
    type Color = Rgb<u8>;
    type Font = BitmapFont;

    fn create(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::CanvasAllocation(format!(
                "empty canvas {width}x{height}"
            )));
        }
        // Use checked arithmetic to prevent overflow
        width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(3))
            .ok_or_else(|| Error::CanvasAllocation(format!("canvas {width}x{height} too large")))?;

        Ok(Self {
            image: RgbImage::from_pixel(width, height, WHITE),
            palette: Vec::new(),
        })
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn allocate_color(&mut self, rgb: Rgb<u8>) -> Result<Rgb<u8>> {
        if !self.palette.contains(&rgb) {
            if self.palette.len() >= PALETTE_SIZE {
                return Err(Error::CanvasAllocation(format!(
                    "palette full, cannot allocate {:?}",
                    rgb.0
                )));
            }
            self.palette.push(rgb);
        }
        Ok(rgb)
    }

    fn fill(&mut self, color: Rgb<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb<u8>) {
        let (x_lo, x_hi) = Self::span(x1, x2, self.image.width());
        let (y_lo, y_hi) = Self::span(y1, y2, self.image.height());
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    fn draw_text(&mut self, font: &BitmapFont, x: f64, y: f64, text: &str, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();
        let left = x.round() as i64;
        let top = y.round() as i64;
        for (px, py) in font.pixels(text) {
            let px = left + px as i64;
            let py = top + py as i64;
            if px >= 0 && py >= 0 && px < width as i64 && py < height as i64 {
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canvas that records draw calls instead of rasterizing them

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) struct Rect {
        pub x1: f64,
        pub y1: f64,
        pub x2: f64,
        pub y2: f64,
        pub color: Rgb<u8>,
    }

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FixedFont {
        pub line_height: u32,
        pub char_width: u32,
    }

    impl Font for FixedFont {
        fn line_height(&self) -> u32 {
            self.line_height
        }

        fn char_width(&self) -> u32 {
            self.char_width
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub width: u32,
        pub height: u32,
        pub fills: Vec<Rgb<u8>>,
        pub rects: Vec<Rect>,
        pub texts: Vec<(f64, f64, String)>,
    }

    impl RecordingCanvas {
        /// Sum of the widths of every rectangle drawn
        pub fn drawn_width(&self) -> f64 {
            self.rects.iter().map(|r| r.x2 - r.x1).sum()
        }
    }

    impl Canvas for RecordingCanvas {
        type Color = Rgb<u8>;
        type Font = FixedFont;

        fn create(width: u32, height: u32) -> Result<Self> {
            if width == 0 || height == 0 {
                return Err(Error::CanvasAllocation("empty".into()));
            }
            Ok(Self {
                width,
                height,
                ..Default::default()
            })
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn allocate_color(&mut self, rgb: Rgb<u8>) -> Result<Rgb<u8>> {
            Ok(rgb)
        }

        fn fill(&mut self, color: Rgb<u8>) {
            self.fills.push(color);
        }

        fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb<u8>) {
            self.rects.push(Rect {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }

        fn draw_text(&mut self, _font: &FixedFont, x: f64, y: f64, text: &str, _color: Rgb<u8>) {
            self.texts.push((x, y, text.to_string()));
        }
    }

    thread_local! {
        static DRAW_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }

    /// Draw calls made by [`LimitedCanvas`] on the current thread
    pub(crate) fn draw_calls() -> usize {
        DRAW_CALLS.with(|c| c.get())
    }

    fn count_draw() {
        DRAW_CALLS.with(|c| c.set(c.get() + 1));
    }

    /// Canvas whose palette holds only `COLORS` entries
    ///
    /// Every allocation counts, repeated colors included, so failures land on
    /// a predictable call.
    #[derive(Debug)]
    pub(crate) struct LimitedCanvas<const COLORS: usize> {
        allocated: usize,
    }

    impl<const COLORS: usize> Canvas for LimitedCanvas<COLORS> {
        type Color = Rgb<u8>;
        type Font = FixedFont;

        fn create(_width: u32, _height: u32) -> Result<Self> {
            Ok(Self { allocated: 0 })
        }

        fn width(&self) -> u32 {
            300
        }

        fn height(&self) -> u32 {
            80
        }

        fn allocate_color(&mut self, rgb: Rgb<u8>) -> Result<Rgb<u8>> {
            if self.allocated == COLORS {
                return Err(Error::CanvasAllocation(format!("no room for {:?}", rgb.0)));
            }
            self.allocated += 1;
            Ok(rgb)
        }

        fn fill(&mut self, _color: Rgb<u8>) {
            count_draw();
        }

        fn fill_rect(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _color: Rgb<u8>) {
            count_draw();
        }

        fn draw_text(&mut self, _font: &FixedFont, _x: f64, _y: f64, _text: &str, _color: Rgb<u8>) {
            count_draw();
        }
    }

    /// Canvas that can never be created
    #[derive(Debug)]
    pub(crate) struct UnavailableCanvas;

    impl Canvas for UnavailableCanvas {
        type Color = Rgb<u8>;
        type Font = FixedFont;

        fn create(width: u32, height: u32) -> Result<Self> {
            Err(Error::CanvasAllocation(format!("no surface for {width}x{height}")))
        }

        fn width(&self) -> u32 {
            unreachable!()
        }

        fn height(&self) -> u32 {
            unreachable!()
        }

        fn allocate_color(&mut self, _rgb: Rgb<u8>) -> Result<Rgb<u8>> {
            unreachable!()
        }

        fn fill(&mut self, _color: Rgb<u8>) {
            unreachable!()
        }

        fn fill_rect(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _color: Rgb<u8>) {
            unreachable!()
        }

        fn draw_text(&mut self, _font: &FixedFont, _x: f64, _y: f64, _text: &str, _color: Rgb<u8>) {
            unreachable!()
        }
    }
}
