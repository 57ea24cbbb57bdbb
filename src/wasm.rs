//! WebAssembly bindings for Codabar generation.

use wasm_bindgen::prelude::*;

use crate::canvas::ImageCanvas;
use crate::config::RenderConfig;
use crate::font::BitmapFont;
use crate::identifier::{Identifier, DEFAULT_LIBRARY_ID};
use crate::symbology::{Codabar, Symbology};
use crate::{checksum, config};

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Render `payload` between the default A/B sentinels.
///
/// Returns `width * height * 3` bytes of row-major RGB pixel data.
#[wasm_bindgen]
pub fn render_rgb(payload: &str, width: u32, height: u32, show_text: bool) -> Result<Vec<u8>, JsValue> {
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("canvas size must be non-zero"));
    }
    let config = RenderConfig::new()
        .size(width, height)
        .human_readable(show_text);
    let canvas: ImageCanvas = Codabar::default()
        .draw(payload, &config, &BitmapFont::default())
        .map_err(to_js)?;
    Ok(canvas.into_image().into_raw())
}

/// Build the 14-digit identifier for `serial` in the default library.
#[wasm_bindgen]
pub fn codabar_identifier(type_digit: u8, serial: u32) -> Result<String, JsValue> {
    Identifier::new(type_digit, DEFAULT_LIBRARY_ID, serial as u64)
        .map(|id| id.codabar())
        .map_err(to_js)
}

/// Mod-10 check digit over a string of decimal digits.
#[wasm_bindgen]
pub fn check_digit(digits: &str) -> Result<u8, JsValue> {
    checksum::compute_str(digits).map_err(to_js)
}

/// Quiet-zone width used by the renderer, in pixels.
#[wasm_bindgen]
pub fn padding() -> u32 {
    config::PADDING
}
