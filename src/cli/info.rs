//! Info command implementation.
//!
//! Prints the document's metadata: logical size, slot colours, output
//! filenames. `--json` emits a machine-readable report on stdout.

use clap::Args;
use serde::Serialize;

use crate::error::{PmpError, Result};
use crate::export::{PNG_FILENAME, SVG_FILENAME};
use crate::output::Printer;
use crate::render::DEFAULT_SCALE;
use crate::scene::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::types::{DEFAULT_ACCENT, DEFAULT_SECONDARY};

/// Print document metadata
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Emit a machine-readable report on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SlotReport {
    name: &'static str,
    default: String,
    bound_to: &'static str,
}

#[derive(Debug, Serialize)]
struct InfoReport {
    name: &'static str,
    width: u32,
    height: u32,
    vector_filename: &'static str,
    raster_filename: &'static str,
    raster_scale: u32,
    slots: Vec<SlotReport>,
}

fn report() -> InfoReport {
    InfoReport {
        name: "pria-menggendong-puma",
        width: LOGICAL_WIDTH,
        height: LOGICAL_HEIGHT,
        vector_filename: SVG_FILENAME,
        raster_filename: PNG_FILENAME,
        raster_scale: DEFAULT_SCALE,
        slots: vec![
            SlotReport {
                name: "accent",
                default: DEFAULT_ACCENT.to_string(),
                bound_to: "ambient circle, puma back stripe, two sparkles",
            },
            SlotReport {
                name: "secondary",
                default: DEFAULT_SECONDARY.to_string(),
                bound_to: "ambient circles, shoes, two sparkles",
            },
        ],
    }
}

pub fn run(args: InfoArgs) -> Result<()> {
    let report = report();

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| PmpError::Encode {
            message: e.to_string(),
        })?;
        println!("{}", json);
        return Ok(());
    }

    let printer = Printer::new();
    printer.info(
        "Artwork",
        &format!("{} ({}x{})", report.name, report.width, report.height),
    );
    for slot in &report.slots {
        printer.info(
            "Slot",
            &format!("{} {} {}", slot.name, slot.default, printer.dim(slot.bound_to)),
        );
    }
    printer.info("Vector", report.vector_filename);
    printer.info(
        "Raster",
        &format!(
            "{} ({}x upscale, {}x{})",
            report.raster_filename,
            report.raster_scale,
            report.width * report.raster_scale,
            report.height * report.raster_scale
        ),
    );

    Ok(())
}
