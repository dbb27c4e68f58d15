//! Raster output for scene documents.
//!
//! The pipeline mirrors the vector path up to serialization, then decodes
//! the text back into a vector tree, paints it over an opaque backdrop at an
//! integer upscale factor, and encodes the surface as PNG.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{PmpError, Result};
use crate::scene::SvgDocument;
use crate::types::Colour;

/// Opaque backdrop behind the rasterized scene (`#0f1220`).
///
/// The vector form may be composited over arbitrary backgrounds; the raster
/// form is flattened over this so the exported image has no transparent halo.
pub const BACKDROP: Colour = Colour::rgb(0x0f, 0x12, 0x20);

/// Default integer upscale factor for raster export.
pub const DEFAULT_SCALE: u32 = 2;

/// Decode serialized scene text into a vector tree.
///
/// This is the raster pipeline's one failure-prone step: a malformed
/// serialization surfaces here, before any surface is allocated.
pub fn decode(svg: &str) -> Result<usvg::Tree> {
    usvg::Tree::from_str(svg, &usvg::Options::default()).map_err(|e| PmpError::Decode {
        message: e.to_string(),
    })
}

/// Rasterize a document at an integer upscale factor.
///
/// The result is `width*scale x height*scale` pixels, fully opaque, with the
/// scene drawn to fill the entire surface. A scale of 0 is treated as 1.
pub fn rasterize(doc: &SvgDocument, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1); // Minimum scale of 1

    let svg = doc.to_svg();
    let tree = decode(&svg)?;

    let width = doc.width() * scale;
    let height = doc.height() * scale;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(PmpError::Surface { width, height })?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        BACKDROP.r, BACKDROP.g, BACKDROP.b, 255,
    ));

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );

    // Pixmap stores premultiplied alpha; the image crate wants straight RGBA.
    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(img)
}

/// Encode a rasterized surface as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| PmpError::Encode {
            message: e.to_string(),
        })?;
    Ok(bytes)
}
