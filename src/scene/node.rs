//! Element tree for scene markup.
//!
//! A minimal builder for the shape tree the illustration is made of. The
//! serializer is deterministic: attributes keep insertion order, indentation
//! is fixed, so the same tree always produces byte-identical text.

use std::fmt;

/// A single markup element: a name, ordered attributes, child elements.
///
/// The scene never carries text content, so elements without children
/// serialize as self-closing tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Order is preserved in the serialized output.
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Element name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Look up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements.
    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Serialize into `out` at the given indentation depth.
    pub(crate) fn write_indented(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            out.push('\n');
            child.write_indented(out, depth + 1);
        }
        out.push('\n');
        out.push_str(&pad);
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        f.write_str(&out)
    }
}

/// Escape an attribute value into `out`.
fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_self_closing() {
        let el = Element::new("circle").attr("cx", 120).attr("cy", 140).attr("r", 90);
        assert_eq!(el.to_string(), r#"<circle cx="120" cy="140" r="90"/>"#);
    }

    #[test]
    fn test_attr_order_preserved() {
        let el = Element::new("rect").attr("width", 900).attr("height", 600);
        insta::assert_snapshot!(el.to_string(), @r#"<rect width="900" height="600"/>"#);
    }

    #[test]
    fn test_nested_indentation() {
        let el = Element::new("g")
            .attr("opacity", "0.7")
            .child(Element::new("circle").attr("r", 2));
        assert_eq!(
            el.to_string(),
            "<g opacity=\"0.7\">\n  <circle r=\"2\"/>\n</g>"
        );
    }

    #[test]
    fn test_two_levels_deep() {
        let el = Element::new("defs").child(
            Element::new("filter")
                .attr("id", "soft")
                .child(Element::new("feGaussianBlur").attr("stdDeviation", 6)),
        );
        assert_eq!(
            el.to_string(),
            "<defs>\n  <filter id=\"soft\">\n    <feGaussianBlur stdDeviation=\"6\"/>\n  </filter>\n</defs>"
        );
    }

    #[test]
    fn test_attr_escaping() {
        let el = Element::new("path").attr("d", r#"a<b&c>"d""#);
        assert_eq!(
            el.to_string(),
            r#"<path d="a&lt;b&amp;c&gt;&quot;d&quot;"/>"#
        );
    }

    #[test]
    fn test_get_attr() {
        let el = Element::new("circle").attr("fill", "#60a5fa");
        assert_eq!(el.get_attr("fill"), Some("#60a5fa"));
        assert_eq!(el.get_attr("stroke"), None);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let build = || {
            Element::new("g")
                .attr("transform", "translate(300,120)")
                .child(Element::new("circle").attr("r", 36))
        };
        assert_eq!(build().to_string(), build().to_string());
    }
}
