//! The declarative scene: element tree, document wrapper, and the artwork.
//!
//! The scene is data, not logic. `illustration` builds the fixed shape tree
//! with the two slot colours substituted in; `SvgDocument::to_svg` gives its
//! exact textual form.

mod document;
mod illustration;
mod node;

pub use document::SvgDocument;
pub use illustration::{illustration, LOGICAL_HEIGHT, LOGICAL_WIDTH};
pub use node::Element;
