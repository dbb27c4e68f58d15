//! Export command implementation.
//!
//! Renders the illustration with the chosen slot colours and writes the
//! requested assets into the output directory.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::export::{deliver, export_raster, export_vector, ExportedAsset};
use crate::output::{display_path, plural, Printer};
use crate::render::DEFAULT_SCALE;
use crate::scene::illustration;
use crate::types::{ColorSelection, Colour, DEFAULT_ACCENT, DEFAULT_SECONDARY};

/// Render the illustration and write SVG/PNG assets
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Accent colour (hex)
    #[arg(long, default_value_t = DEFAULT_ACCENT)]
    pub accent: Colour,

    /// Secondary colour (hex), used for the shoes
    #[arg(long, default_value_t = DEFAULT_SECONDARY)]
    pub secondary: Colour,

    /// Formats to export
    #[arg(long, value_enum, default_value_t = Format::Both)]
    pub format: Format,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Integer upscale factor for the raster output
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Svg,
    Png,
    Both,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let printer = Printer::new();
    let colors = ColorSelection::new(args.accent, args.secondary);
    let doc = illustration(&colors);

    printer.status(
        "Rendering",
        &format!(
            "pria-menggendong-puma ({}x{}, accent {}, secondary {})",
            doc.width(),
            doc.height(),
            colors.accent,
            colors.secondary
        ),
    );

    let mut assets: Vec<ExportedAsset> = Vec::new();
    if matches!(args.format, Format::Svg | Format::Both) {
        assets.push(export_vector(&doc));
    }
    if matches!(args.format, Format::Png | Format::Both) {
        assets.push(export_raster(&doc, args.scale)?);
    }

    for asset in &assets {
        let path = deliver(asset, &args.output)?;
        printer.success("Exported", &display_path(&path));
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(assets.len(), "asset", "assets"),
            display_path(&args.output)
        ),
    );

    Ok(())
}
