//! Codabar barcode generation
//!
//! This crate renders Codabar linear barcodes and builds the 14-digit
//! check-digit identifiers that libraries print on patron cards and items.
//!
//! ```
//! use codabar::{BitmapFont, Codabar, IdentifierBuilder, ImageCanvas, RenderConfig, Symbology};
//! use rand::SeedableRng;
//!
//! let mut builder = IdentifierBuilder::new(rand_chacha::ChaCha8Rng::seed_from_u64(1));
//! let id = builder.build(2, Some(10586)).unwrap();
//!
//! let canvas: ImageCanvas = Codabar::default()
//!     .draw(&id.codabar(), &RenderConfig::new(), &BitmapFont::default())
//!     .unwrap();
//! assert_eq!(canvas.image().dimensions(), (300, 80));
//! ```

pub mod canvas;
pub mod checksum;
pub mod config;
pub mod encoder;
pub mod error;
pub mod font;
pub mod identifier;
pub mod render;
pub mod symbol_table;
pub mod symbology;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export main types
pub use canvas::{Canvas, Font, ImageCanvas};
pub use config::RenderConfig;
pub use encoder::{encode, encode_with, EncodedSequence};
pub use error::{Error, Result};
pub use font::BitmapFont;
pub use identifier::{Identifier, IdentifierBuilder, IdentifierKind};
pub use render::{human_readable, render};
pub use symbol_table::BarPattern;
pub use symbology::{Codabar, Symbology};

#[cfg(test)]
mod proptest_codabar;
