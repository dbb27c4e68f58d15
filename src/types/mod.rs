//! Core domain types for pmp.
//!
//! - `Colour` - opaque sRGB colour values
//! - `ColorSelection` - the two user-chosen slot colours

mod colour;
mod selection;

pub use colour::Colour;
pub use selection::{ColorSelection, DEFAULT_ACCENT, DEFAULT_SECONDARY};
