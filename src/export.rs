//! Export pipeline: a rendered scene becomes a downloadable asset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PmpError, Result};
use crate::render::{encode_png, rasterize};
use crate::scene::SvgDocument;

/// Fixed filename for the vector asset.
pub const SVG_FILENAME: &str = "pria-menggendong-puma.svg";

/// Fixed filename for the raster asset.
pub const PNG_FILENAME: &str = "pria-menggendong-puma.png";

/// Media kind of an exported asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Vector document, UTF-8 text.
    Vector,
    /// Lossless raster image.
    Raster,
}

impl MediaKind {
    /// MIME type of the payload.
    pub fn mime(self) -> &'static str {
        match self {
            MediaKind::Vector => "image/svg+xml; charset=utf-8",
            MediaKind::Raster => "image/png",
        }
    }
}

/// An export result: payload bytes, fixed filename, media kind.
///
/// Created on demand and handed straight to [`deliver`]; not retained.
#[derive(Debug, Clone)]
pub struct ExportedAsset {
    pub filename: &'static str,
    pub kind: MediaKind,
    pub bytes: Vec<u8>,
}

/// Export the document's exact textual form as a vector asset.
///
/// Byte-for-byte the serialized document, current slot colours included.
/// Infallible for a well-formed in-memory tree.
pub fn export_vector(doc: &SvgDocument) -> ExportedAsset {
    ExportedAsset {
        filename: SVG_FILENAME,
        kind: MediaKind::Vector,
        bytes: doc.to_svg().into_bytes(),
    }
}

/// Rasterize the document and wrap the PNG payload as an asset.
pub fn export_raster(doc: &SvgDocument, scale: u32) -> Result<ExportedAsset> {
    let img = rasterize(doc, scale)?;
    let bytes = encode_png(&img)?;
    Ok(ExportedAsset {
        filename: PNG_FILENAME,
        kind: MediaKind::Raster,
        bytes,
    })
}

/// Write an asset into the output directory, creating it if needed.
///
/// One call writes exactly one file; encoding has already completed, so a
/// failure here never leaves a partial payload.
pub fn deliver(asset: &ExportedAsset, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| PmpError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = dir.join(asset.filename);
    fs::write(&path, &asset.bytes).map_err(|e| PmpError::Io {
        path: path.clone(),
        message: format!("Failed to write asset: {}", e),
    })?;

    Ok(path)
}
