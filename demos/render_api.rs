//! Example demonstrating the rendering and identifier APIs
//!
//! Writes a handful of PNG files into the system temp directory.

use codabar::identifier::IdentifierKind;
use codabar::{
    BitmapFont, Codabar, IdentifierBuilder, ImageCanvas, RenderConfig, Symbology,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> codabar::Result<()> {
    println!("=== Codabar Rendering API Examples ===\n");
    let out = std::env::temp_dir();

    // Example 1: Patron card with a known serial number
    println!("1. Patron card identifier:");
    let mut builder = IdentifierBuilder::new(ChaCha8Rng::seed_from_u64(2016));
    let patron = builder.build_kind(IdentifierKind::Patron, Some(10586))?;
    println!("   Codabar:      {}", patron);
    println!("   Printed as:   {}", patron.human_readable());
    println!("   Check digit:  {}\n", patron.check_digit());

    let canvas: ImageCanvas =
        Codabar::default().draw(&patron.codabar(), &RenderConfig::new(), &BitmapFont::default())?;
    let path = out.join("codabar-patron.png");
    canvas.save(&path)?;
    println!("   Wrote {}\n", path.display());

    // Example 2: Item label with a generated serial for another library
    println!("2. Item label for library 0042:");
    let mut builder = IdentifierBuilder::new(ChaCha8Rng::seed_from_u64(7)).library_id("0042")?;
    let item = builder.build_kind(IdentifierKind::Item, None)?;
    println!("   Codabar:      {}", item);
    println!("   Serial:       {}\n", item.serial_number());

    // Example 3: Arbitrary payload with C/D sentinels, no text, large canvas
    println!("3. Free-form payload with C/D sentinels:");
    let codabar = Codabar::new('C', 'D')?;
    let config = RenderConfig::new().size(600, 150).human_readable(false);
    let canvas: ImageCanvas = codabar.draw("$12.50", &config, &BitmapFont::new(3))?;
    let path = out.join("codabar-price.png");
    canvas.save(&path)?;
    println!("   Wrote {}\n", path.display());

    // Example 4: Validating identifiers read back from a card
    println!("4. Validating identifiers:");
    for input in ["21310000105864", "21310000105865", "2131"] {
        match input.parse::<codabar::Identifier>() {
            Ok(id) => println!("   {input}: valid ({:?})", id.kind()),
            Err(e) => println!("   {input}: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
