//! The renderable document: a root element with a fixed logical size.

use super::Element;

/// A complete, self-contained SVG document.
///
/// The root carries `xmlns`, `viewBox`, and explicit width/height, so the
/// serialized form stands alone with no external references. Constructed
/// once per render; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    root: Element,
}

impl SvgDocument {
    /// Build a document of the given logical size from top-level elements.
    pub fn new(width: u32, height: u32, children: Vec<Element>) -> Self {
        let root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", format!("0 0 {} {}", width, height))
            .attr("width", width)
            .attr("height", height)
            .children(children);

        Self {
            width,
            height,
            root,
        }
    }

    /// Logical width in user units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in user units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical size as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The root `<svg>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialize to the document's exact textual form.
    ///
    /// Deterministic: the same document always yields byte-identical text.
    /// Ends with a trailing newline, like any other text file.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.root.write_indented(&mut out, 0);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_self_closing() {
        let doc = SvgDocument::new(900, 600, Vec::new());
        assert_eq!(
            doc.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 900 600\" width=\"900\" height=\"600\"/>\n"
        );
    }

    #[test]
    fn test_declares_own_coordinate_metadata() {
        let doc = SvgDocument::new(900, 600, Vec::new());
        let svg = doc.to_svg();
        assert!(svg.contains(r#"viewBox="0 0 900 600""#));
        assert!(svg.contains(r#"width="900""#));
        assert!(svg.contains(r#"height="600""#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    }

    #[test]
    fn test_size_accessors() {
        let doc = SvgDocument::new(900, 600, Vec::new());
        assert_eq!(doc.size(), (900, 600));
        assert_eq!(doc.width(), 900);
        assert_eq!(doc.height(), 600);
    }

    #[test]
    fn test_children_nest_under_root() {
        let doc = SvgDocument::new(10, 10, vec![Element::new("rect").attr("width", 10)]);
        let svg = doc.to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("\n  <rect width=\"10\"/>\n"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_serialization_idempotent() {
        let doc = SvgDocument::new(900, 600, vec![Element::new("g")]);
        assert_eq!(doc.to_svg(), doc.to_svg());
    }
}
