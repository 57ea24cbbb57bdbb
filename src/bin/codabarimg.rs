//! Command-line Codabar generator
//!
//! Renders a payload, or a freshly built library identifier, to an image
//! file.
//!
//! Build with: `cargo build --bin codabarimg`

use clap::Parser;
use codabar::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use codabar::encoder::{normalize, DEFAULT_START, DEFAULT_STOP};
use codabar::font::MAX_SCALE;
use codabar::identifier::DEFAULT_LIBRARY_ID;
use codabar::{
    BitmapFont, Codabar, Identifier, IdentifierBuilder, ImageCanvas, RenderConfig, Symbology,
};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process;

/// Render Codabar barcodes to image files
#[derive(Parser)]
#[command(name = "codabarimg")]
#[command(version)]
#[command(about = "Render Codabar barcodes to image files", long_about = None)]
struct Args {
    /// Data to encode; when omitted a library identifier is built instead
    payload: Option<String>,

    /// Output image file (format follows the extension)
    #[arg(short, long, default_value = "codabar.png")]
    output: PathBuf,

    /// Minimal output, print nothing on success
    #[arg(short, long)]
    quiet: bool,

    /// Start character (A, B, C, D, E, N or T)
    #[arg(long, default_value_t = DEFAULT_START)]
    start: char,

    /// Stop character (A, B, C, D, E, N or T)
    #[arg(long, default_value_t = DEFAULT_STOP)]
    stop: char,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Do not print human-readable text under the bars
    #[arg(long)]
    no_text: bool,

    /// Scale factor of the built-in font
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    font_scale: u32,

    /// Identifier type digit (2 = patron, 3 = item)
    #[arg(long, default_value_t = 2)]
    type_digit: u8,

    /// Identifier serial number; random when omitted
    #[arg(long)]
    serial: Option<u64>,

    /// Four-digit library id
    #[arg(long, default_value = DEFAULT_LIBRARY_ID)]
    library_id: String,

    /// Seed for generated serial numbers
    #[arg(long)]
    seed: Option<u64>,
}

fn build_identifier(args: &Args) -> codabar::Result<Identifier> {
    match args.seed {
        Some(seed) => IdentifierBuilder::new(ChaCha8Rng::seed_from_u64(seed))
            .library_id(&args.library_id)?
            .build(args.type_digit, args.serial),
        None => IdentifierBuilder::new(rand::rng())
            .library_id(&args.library_id)?
            .build(args.type_digit, args.serial),
    }
}

fn run(args: &Args) -> codabar::Result<String> {
    let payload = match &args.payload {
        Some(payload) => payload.clone(),
        None => {
            let id = build_identifier(args)?;
            info!(
                "built identifier {} (library {}, serial {}, check digit {})",
                id,
                id.library_id(),
                id.serial_number(),
                id.check_digit()
            );
            id.codabar()
        }
    };

    let codabar = Codabar::new(args.start, args.stop)?;
    let config = RenderConfig::new()
        .size(args.width, args.height)
        .human_readable(!args.no_text);
    let canvas: ImageCanvas = codabar.draw(&payload, &config, &BitmapFont::new(args.font_scale))?;
    canvas.save(&args.output)?;
    info!("wrote {}", args.output.display());

    Ok(payload)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        if !args.quiet {
            eprintln!("Image size must be non-zero");
        }
        process::exit(1);
    }

    match run(&args) {
        Ok(payload) => {
            if !args.quiet {
                println!("{}", normalize(&payload));
            }
        }
        Err(e) => {
            if !args.quiet {
                eprintln!("Failed to render barcode: {}", e);
            }
            process::exit(1);
        }
    }
}
