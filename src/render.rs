//! Rasterize an encoded sequence onto a [`Canvas`]

use crate::canvas::{Canvas, Font, BLACK, WHITE};
use crate::config::{RenderConfig, PADDING};
use crate::encoder::EncodedSequence;
use crate::identifier::IDENTIFIER_LEN;
use crate::{Error, Result};
use log::debug;

/// Draw `sequence` onto a new canvas sized by `config`
///
/// Bars fill the area between the two quiet zones, scaled so the whole
/// sequence spans `width - 2 * PADDING` pixels. Elements alternate black
/// (odd, 1-based) and white (even). When text is enabled a band of
/// `font.line_height()` pixels is reserved under the bars and `text`, if
/// any, is centered in it.
pub fn render<C: Canvas>(
    sequence: &EncodedSequence,
    config: &RenderConfig,
    text: Option<&str>,
    font: &C::Font,
) -> Result<C> {
    let (width, height) = (config.width(), config.height());
    if width <= 2 * PADDING {
        return Err(Error::CanvasTooNarrow { width });
    }

    let text_height = if config.shows_text() {
        font.line_height()
    } else {
        0
    };
    let total_modules = sequence.total_modules();
    let scale = (width - 2 * PADDING) as f64 / total_modules as f64;
    debug!(
        "rendering {} elements ({} modules) at {:.3} px/module, text band {}px",
        sequence.len(),
        total_modules,
        scale,
        text_height
    );

    let mut canvas = C::create(width, height)?;
    let white = canvas.allocate_color(WHITE)?;
    let black = canvas.allocate_color(BLACK)?;
    canvas.fill(white);

    let bottom = height.saturating_sub(text_height) as f64;
    let mut x1 = PADDING as f64;
    for (pos, &w) in sequence.widths().iter().enumerate() {
        let x2 = x1 + w as f64 * scale;
        let color = if pos % 2 == 0 { black } else { white };
        canvas.fill_rect(x1, 0.0, x2, bottom, color);
        x1 = x2;
    }

    if let (true, Some(text)) = (config.shows_text(), text) {
        draw_text(&mut canvas, font, text, bottom)?;
    }

    Ok(canvas)
}

fn draw_text<C: Canvas>(canvas: &mut C, font: &C::Font, text: &str, top: f64) -> Result<()> {
    let black = canvas.allocate_color(BLACK)?;
    let x = (canvas.width() as f64 - font.text_width(text) as f64) / 2.0;
    canvas.draw_text(font, x, top, text, black);
    Ok(())
}

/// Group a 14-character identifier as `T LLLL SSSSS SSSC`
///
/// Any other payload is returned unchanged.
pub fn human_readable(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != IDENTIFIER_LEN {
        return code.to_string();
    }
    let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    format!(
        "{} {} {} {}",
        group(0..1),
        group(1..5),
        group(5..10),
        group(10..IDENTIFIER_LEN)
    )
}
