//! The two user-facing colour slots.

use crate::types::Colour;

/// Default accent colour (`#60a5fa`).
pub const DEFAULT_ACCENT: Colour = Colour::rgb(0x60, 0xa5, 0xfa);

/// Default secondary colour (`#6ee7b7`), used for the figure's shoes.
pub const DEFAULT_SECONDARY: Colour = Colour::rgb(0x6e, 0xe7, 0xb7);

/// The two colour slots substituted into the illustration.
///
/// The slots are independent of each other; each export reads one immutable
/// snapshot of this struct. Nothing else in the scene is parameterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSelection {
    /// Accent colour: one ambient circle, the puma's back stripe, and two
    /// foreground sparkles.
    pub accent: Colour,

    /// Secondary colour: two ambient circles, the shoes, and the other two
    /// sparkles.
    pub secondary: Colour,
}

impl ColorSelection {
    pub fn new(accent: Colour, secondary: Colour) -> Self {
        Self { accent, secondary }
    }
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            secondary: DEFAULT_SECONDARY,
        }
    }
}
