//! The fixed artwork: a man carrying a puma, in flat geometric shapes.
//!
//! Everything here is a data literal. The only variable inputs are the two
//! slot colours; every other position, fill, and stroke is constant.

use crate::types::ColorSelection;

use super::{Element, SvgDocument};

/// Logical canvas width in user units.
pub const LOGICAL_WIDTH: u32 = 900;

/// Logical canvas height in user units.
pub const LOGICAL_HEIGHT: u32 = 600;

/// Build the illustration with the given slot colours substituted in.
pub fn illustration(colors: &ColorSelection) -> SvgDocument {
    SvgDocument::new(
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT,
        vec![
            defs(),
            Element::new("rect")
                .attr("width", LOGICAL_WIDTH)
                .attr("height", LOGICAL_HEIGHT)
                .attr("fill", "url(#bg)"),
            ambient_circles(colors),
            // Ground ellipse
            ellipse(450, 510, 300, 40)
                .attr("fill", "#000000")
                .attr("fill-opacity", "0.35"),
            figure(colors),
            sparkles(colors),
        ],
    )
}

/// Backdrop gradient and the soft-blur filter used by the ambient circles.
fn defs() -> Element {
    Element::new("defs")
        .child(
            Element::new("linearGradient")
                .attr("id", "bg")
                .attr("x1", 0)
                .attr("y1", 0)
                .attr("x2", 1)
                .attr("y2", 1)
                .child(
                    Element::new("stop")
                        .attr("offset", 0)
                        .attr("stop-color", "#182038"),
                )
                .child(
                    Element::new("stop")
                        .attr("offset", 1)
                        .attr("stop-color", "#0f1220"),
                ),
        )
        .child(
            Element::new("filter")
                .attr("id", "soft")
                .attr("x", "-20%")
                .attr("y", "-20%")
                .attr("width", "140%")
                .attr("height", "140%")
                .child(
                    Element::new("feGaussianBlur")
                        .attr("in", "SourceGraphic")
                        .attr("stdDeviation", 6),
                ),
        )
}

/// Blurred colour washes behind the figure.
fn ambient_circles(colors: &ColorSelection) -> Element {
    Element::new("g")
        .attr("opacity", "0.25")
        .attr("filter", "url(#soft)")
        .child(circle(120, 140, 90).attr("fill", colors.secondary))
        .child(circle(820, 110, 70).attr("fill", colors.accent))
        .child(circle(770, 540, 80).attr("fill", colors.secondary))
}

/// The man and the puma he carries.
fn figure(colors: &ColorSelection) -> Element {
    Element::new("g")
        .attr("transform", "translate(300,120)")
        // Shadow behind figure
        .child(
            ellipse(160, 380, 140, 22)
                .attr("fill", "#000000")
                .attr("fill-opacity", "0.35"),
        )
        // Torso
        .child(
            path("M145 170 c0 -48 34 -78 70 -78 36 0 70 30 70 78 0 68 -28 112 -70 112 -42 0 -70 -44 -70 -112z")
                .attr("fill", "#334155"),
        )
        // Head
        .child(circle(205, 120, 36).attr("fill", "#f3d2b5"))
        .child(
            path("M176 115 q29 -22 58 0")
                .attr("stroke", "#0f172a")
                .attr("stroke-width", 3)
                .attr("fill", "none"),
        )
        .child(circle(194, 121, 3).attr("fill", "#0f172a"))
        .child(circle(214, 121, 3).attr("fill", "#0f172a"))
        .child(
            path("M193 134 q12 8 24 0")
                .attr("stroke", "#0f172a")
                .attr("stroke-width", 3)
                .attr("fill", "none"),
        )
        // Arms under and around the puma
        .child(
            path("M145 210 q40 20 80 20 q40 0 75 -20")
                .attr("stroke", "#f3d2b5")
                .attr("stroke-width", 22)
                .attr("fill", "none")
                .attr("stroke-linecap", "round"),
        )
        .child(
            path("M150 240 q40 30 80 30 q40 0 75 -30")
                .attr("stroke", "#f3d2b5")
                .attr("stroke-width", 20)
                .attr("fill", "none")
                .attr("stroke-linecap", "round"),
        )
        .child(puma(colors))
        // Legs
        .child(
            path("M180 290 q-10 70 -8 118")
                .attr("stroke", "#1e293b")
                .attr("stroke-width", 20)
                .attr("stroke-linecap", "round"),
        )
        .child(
            path("M225 290 q-4 78 0 118")
                .attr("stroke", "#1e293b")
                .attr("stroke-width", 20)
                .attr("stroke-linecap", "round"),
        )
        // Shoes take the secondary slot
        .child(
            path("M170 409 q20 10 44 0")
                .attr("stroke", colors.secondary)
                .attr("stroke-width", 10)
                .attr("stroke-linecap", "round"),
        )
        .child(
            path("M212 409 q22 10 46 0")
                .attr("stroke", colors.secondary)
                .attr("stroke-width", 10)
                .attr("stroke-linecap", "round"),
        )
}

fn puma(colors: &ColorSelection) -> Element {
    Element::new("g")
        .attr("transform", "translate(80,150)")
        // Body
        .child(
            path("M40 100 q100 -70 220 -30 q28 8 50 32 q24 26 10 50 q-12 20 -46 16 q-32 -3 -60 -14 q-25 -7 -54 -7 q-45 0 -92 10 q-32 7 -47 -7 q-16 -16 -2 -36 q8 -12 21 -14z")
                .attr("fill", "#c89b6a")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 2),
        )
        // Back stripe takes the accent slot
        .child(
            path("M55 95 q90 -60 210 -28")
                .attr("stroke", colors.accent)
                .attr("stroke-width", 4)
                .attr("fill", "none")
                .attr("opacity", "0.35"),
        )
        .child(puma_head())
        // Legs hanging
        .child(
            path("M120 160 q-10 40 -6 70")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 10)
                .attr("stroke-linecap", "round"),
        )
        .child(
            path("M170 150 q-8 34 -4 62")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 10)
                .attr("stroke-linecap", "round"),
        )
        // Tail
        .child(
            path("M60 150 q-40 20 -50 50 q-5 16 10 24 q18 10 32 -8 q10 -12 12 -30")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 10)
                .attr("fill", "none")
                .attr("stroke-linecap", "round"),
        )
}

fn puma_head() -> Element {
    Element::new("g")
        .attr("transform", "translate(250,90)")
        .child(
            ellipse(38, 24, 40, 26)
                .attr("fill", "#c89b6a")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 2),
        )
        .child(circle(54, 20, 4).attr("fill", "#0f172a"))
        .child(
            path("M18 16 q10 -10 24 -6")
                .attr("stroke", "#0f172a")
                .attr("stroke-width", 2)
                .attr("fill", "none"),
        )
        // Ears
        .child(
            path("M12 8 l8 -12 l8 16")
                .attr("fill", "#c89b6a")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 2),
        )
        .child(
            path("M60 6 l8 -12 l8 16")
                .attr("fill", "#c89b6a")
                .attr("stroke", "#8b6a45")
                .attr("stroke-width", 2),
        )
        // Muzzle
        .child(ellipse(52, 26, 12, 8).attr("fill", "#e8caa3"))
}

/// Foreground sparkle dots, alternating between the two slots.
fn sparkles(colors: &ColorSelection) -> Element {
    Element::new("g")
        .attr("opacity", "0.7")
        .child(circle(120, 280, 2).attr("fill", colors.secondary))
        .child(circle(780, 320, 2).attr("fill", colors.accent))
        .child(circle(640, 220, 2).attr("fill", colors.secondary))
        .child(circle(250, 380, 2).attr("fill", colors.accent))
}

fn circle(cx: i32, cy: i32, r: i32) -> Element {
    Element::new("circle").attr("cx", cx).attr("cy", cy).attr("r", r)
}

fn ellipse(cx: i32, cy: i32, rx: i32, ry: i32) -> Element {
    Element::new("ellipse")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("rx", rx)
        .attr("ry", ry)
}

fn path(d: &'static str) -> Element {
    Element::new("path").attr("d", d)
}

#[cfg(test)]
mod tests {
    use crate::types::{ColorSelection, Colour};

    use super::*;

    #[test]
    fn test_default_colours_appear_verbatim() {
        let svg = illustration(&ColorSelection::default()).to_svg();
        assert!(svg.contains("#60a5fa"));
        assert!(svg.contains("#6ee7b7"));
    }

    #[test]
    fn test_slot_colours_substituted() {
        let colors = ColorSelection::new(
            Colour::from_hex("#ff0000").unwrap(),
            Colour::from_hex("#00ff00").unwrap(),
        );
        let svg = illustration(&colors).to_svg();
        assert!(svg.contains("#ff0000"));
        assert!(svg.contains("#00ff00"));
        // Superseded defaults are gone from the slot positions
        assert!(!svg.contains("#60a5fa"));
        assert!(!svg.contains("#6ee7b7"));
    }

    #[test]
    fn test_accent_slot_count() {
        // One ambient circle, the back stripe, two sparkles.
        let svg = illustration(&ColorSelection::default()).to_svg();
        assert_eq!(svg.matches("#60a5fa").count(), 4);
    }

    #[test]
    fn test_secondary_slot_count() {
        // Two ambient circles, two shoes, two sparkles.
        let svg = illustration(&ColorSelection::default()).to_svg();
        assert_eq!(svg.matches("#6ee7b7").count(), 6);
    }

    #[test]
    fn test_logical_size() {
        let doc = illustration(&ColorSelection::default());
        assert_eq!(doc.size(), (900, 600));
    }

    #[test]
    fn test_self_contained_markup() {
        let svg = illustration(&ColorSelection::default()).to_svg();
        // No external references: gradient and filter resolve within the file
        assert!(svg.contains(r##"fill="url(#bg)""##));
        assert!(svg.contains(r#"<linearGradient id="bg""#));
        assert!(svg.contains(r##"filter="url(#soft)""##));
        assert!(svg.contains(r#"<filter id="soft""#));
        assert!(!svg.contains("href"));
    }

    #[test]
    fn test_same_colours_same_bytes() {
        let a = illustration(&ColorSelection::default()).to_svg();
        let b = illustration(&ColorSelection::default()).to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparkle_group_structure() {
        let doc = illustration(&ColorSelection::default());
        let sparkle_group = doc
            .root()
            .child_elements()
            .last()
            .expect("document has children");
        assert_eq!(sparkle_group.name(), "g");
        assert_eq!(sparkle_group.get_attr("opacity"), Some("0.7"));
        assert_eq!(sparkle_group.child_elements().len(), 4);
    }

    #[test]
    fn test_accent_sparkle_position() {
        // The accent sparkle probed by the raster tests sits at (780,320).
        let doc = illustration(&ColorSelection::default());
        let sparkle_group = doc.root().child_elements().last().unwrap();
        let accent_dot = &sparkle_group.child_elements()[1];
        assert_eq!(accent_dot.get_attr("cx"), Some("780"));
        assert_eq!(accent_dot.get_attr("cy"), Some("320"));
        assert_eq!(accent_dot.get_attr("fill"), Some("#60a5fa"));
    }
}
