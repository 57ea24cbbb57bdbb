//! Symbology front end
//!
//! A symbology knows how to encode a payload and how to render the encoded
//! sequence. Codabar is the only one implemented; callers pick it
//! explicitly rather than through a type hierarchy.

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::encoder::{self, EncodedSequence, DEFAULT_START, DEFAULT_STOP};
use crate::render;
use crate::Result;

pub trait Symbology {
    /// Human-readable name
    const NAME: &'static str;

    fn encode(&self, payload: &str) -> Result<EncodedSequence>;

    /// Text printed under the bars for `payload`
    fn human_readable(&self, payload: &str) -> String;

    fn render<C: Canvas>(
        &self,
        sequence: &EncodedSequence,
        config: &RenderConfig,
        text: Option<&str>,
        font: &C::Font,
    ) -> Result<C>;

    /// Encode `payload` and render it with its human-readable text
    fn draw<C: Canvas>(&self, payload: &str, config: &RenderConfig, font: &C::Font) -> Result<C> {
        let sequence = self.encode(payload)?;
        let text = self.human_readable(payload);
        self.render(&sequence, config, Some(&text), font)
    }
}

/// Codabar (also known as NW-7, USD-4, 2 of 7 code)
///
/// # Example
/// ```
/// use codabar::{Codabar, ImageCanvas, BitmapFont, RenderConfig, Symbology};
///
/// let codabar = Codabar::new('C', 'D').unwrap();
/// let config = RenderConfig::new().size(320, 90);
/// let canvas: ImageCanvas = codabar
///     .draw("21310000105864", &config, &BitmapFont::default())
///     .unwrap();
/// assert_eq!(canvas.image().width(), 320);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codabar {
    start: char,
    stop: char,
}

impl Default for Codabar {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
        }
    }
}

impl Codabar {
    /// Use `start` and `stop` as sentinels; both must be one of A, B, C, D, E, N, T
    pub fn new(start: char, stop: char) -> Result<Self> {
        Ok(Self {
            start: encoder::check_sentinel(start)?,
            stop: encoder::check_sentinel(stop)?,
        })
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn stop(&self) -> char {
        self.stop
    }
}

impl Symbology for Codabar {
    const NAME: &'static str = "Codabar";

    fn encode(&self, payload: &str) -> Result<EncodedSequence> {
        encoder::encode_with(payload, self.start, self.stop)
    }

    fn human_readable(&self, payload: &str) -> String {
        render::human_readable(&encoder::normalize(payload))
    }

    fn render<C: Canvas>(
        &self,
        sequence: &EncodedSequence,
        config: &RenderConfig,
        text: Option<&str>,
        font: &C::Font,
    ) -> Result<C> {
        render::render(sequence, config, text, font)
    }
}
