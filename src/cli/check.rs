//! Check command implementation.
//!
//! Round-trips the serialized document through the raster pipeline's decoder
//! without writing any files.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::render::decode;
use crate::scene::illustration;
use crate::types::{ColorSelection, Colour, DEFAULT_ACCENT, DEFAULT_SECONDARY};

/// Validate that the document decodes cleanly, without writing files
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Accent colour (hex)
    #[arg(long, default_value_t = DEFAULT_ACCENT)]
    pub accent: Colour,

    /// Secondary colour (hex), used for the shoes
    #[arg(long, default_value_t = DEFAULT_SECONDARY)]
    pub secondary: Colour,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let printer = Printer::new();
    let colors = ColorSelection::new(args.accent, args.secondary);
    let doc = illustration(&colors);
    let svg = doc.to_svg();

    printer.status(
        "Checking",
        &format!(
            "pria-menggendong-puma (accent {}, secondary {})",
            colors.accent, colors.secondary
        ),
    );

    decode(&svg)?;

    printer.success(
        "Checked",
        &format!("{} bytes of markup decode cleanly", svg.len()),
    );

    Ok(())
}
