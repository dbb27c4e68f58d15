//! pmp - "Pria Menggendong Puma" illustration exporter
//!
//! A library for rendering a fixed decorative vector illustration with two
//! user-chosen accent colours and exporting it as an SVG document or an
//! upscaled PNG over an opaque backdrop.

pub mod cli;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod scene;
pub mod types;

pub use error::{PmpError, Result};
pub use export::{
    deliver, export_raster, export_vector, ExportedAsset, MediaKind, PNG_FILENAME, SVG_FILENAME,
};
pub use render::{decode, encode_png, rasterize, BACKDROP, DEFAULT_SCALE};
pub use scene::{illustration, Element, SvgDocument, LOGICAL_HEIGHT, LOGICAL_WIDTH};
pub use types::{ColorSelection, Colour, DEFAULT_ACCENT, DEFAULT_SECONDARY};
