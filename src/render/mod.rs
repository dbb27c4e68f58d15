//! Rendering module for pmp.
//!
//! Converts scene documents to raster surfaces and PNG payloads.

mod png;

pub use png::{decode, encode_png, rasterize, BACKDROP, DEFAULT_SCALE};
