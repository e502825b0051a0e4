//! SVG output for [`Drawing`]s.
//!
//! The drawing is scaled uniformly to fit the viewport (minus padding) and
//! flipped so model `y` points up on screen. Every element carries a CSS
//! class named after its [`Role`]; rib markers get `id="rib-N"` so a page
//! can highlight them.
//!
//! ```rust
//! use calc_core::calculations::rib_layout::{calculate, RibLayoutInput};
//! use calc_core::views::{svg::{render_svg, SvgOptions}, SideView, View};
//!
//! let result = calculate(&RibLayoutInput::default()).unwrap();
//! let drawing = SideView.render(&result.layout, &result.ribs);
//! let svg = render_svg(&drawing, &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```

use std::fmt::Write;

use super::{Drawing, Element, Point2};

const STYLE: &str = "\
.ground{stroke:#333;stroke-width:1}\
.arc{stroke:#007bff;stroke-width:2;fill:none}\
.radius{stroke:#6c757d;stroke-width:1;stroke-dasharray:4 2}\
.height{stroke:#28a745;stroke-width:1;stroke-dasharray:4 2}\
.top-radius{stroke:#fd7e14;stroke-width:1;stroke-dasharray:4 2}\
.support{stroke:#999;stroke-width:1;fill:none}\
.chord{stroke:#6f42c1;stroke-width:1}\
.corner-angle{stroke:#dc3545;stroke-width:1;fill:none}\
.rib{stroke:#e83e8c;stroke-width:1.5;fill:#e83e8c}\
.rib.highlight{stroke:#ff0066;fill:#ff0066}\
.label{font:10px sans-serif;fill:#333}";

/// Viewport and highlight settings.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Marker radius in screen pixels
    pub marker_radius: f64,
    /// Rib to draw highlighted (1-based index)
    pub highlight_rib: Option<usize>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            padding: 15.0,
            marker_radius: 3.0,
            highlight_rib: None,
        }
    }
}

/// Model-to-screen mapping: uniform scale, y flipped.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    min: Point2,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height: f64,
}

impl Viewport {
    fn fit(drawing: &Drawing, options: &SvgOptions) -> Self {
        let (min, max) = drawing
            .bounds()
            .unwrap_or((Point2::origin(), Point2::origin()));
        let span_x = max.x - min.x;
        let span_y = max.y - min.y;
        let avail_x = (options.width - 2.0 * options.padding).max(1.0);
        let avail_y = (options.height - 2.0 * options.padding).max(1.0);

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (avail_x / span_x).min(avail_y / span_y),
            (true, false) => avail_x / span_x,
            (false, true) => avail_y / span_y,
            (false, false) => 1.0,
        };

        // Center the drawing in whatever space the limiting axis leaves
        Self {
            min,
            scale,
            offset_x: options.padding + (avail_x - span_x * scale) / 2.0,
            offset_y: options.padding + (avail_y - span_y * scale) / 2.0,
            height: options.height,
        }
    }

    fn map(&self, p: &Point2) -> (f64, f64) {
        let x = self.offset_x + (p.x - self.min.x) * self.scale;
        let y = self.height - (self.offset_y + (p.y - self.min.y) * self.scale);
        (x, y)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn class_for(base: &str, rib: Option<usize>, highlight: Option<usize>) -> String {
    match (rib, highlight) {
        (Some(r), Some(h)) if r == h => format!("{} highlight", base),
        _ => base.to_string(),
    }
}

/// Render a drawing as a standalone SVG document.
pub fn render_svg(drawing: &Drawing, options: &SvgOptions) -> String {
    let viewport = Viewport::fit(drawing, options);
    let mut out = String::with_capacity(4_096);

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = options.width,
        h = options.height
    );
    let _ = writeln!(out, "<title>{}</title>", escape(&drawing.title));
    let _ = writeln!(out, "<style>{}</style>", STYLE);

    for element in &drawing.elements {
        match element {
            Element::Line { start, end, role, rib } => {
                let (x1, y1) = viewport.map(start);
                let (x2, y2) = viewport.map(end);
                let _ = writeln!(
                    out,
                    r#"<line class="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    class_for(role.class(), *rib, options.highlight_rib),
                    x1,
                    y1,
                    x2,
                    y2
                );
            }
            Element::Polyline { points, role } => {
                let coords: Vec<String> = points
                    .iter()
                    .map(|p| {
                        let (x, y) = viewport.map(p);
                        format!("{:.2},{:.2}", x, y)
                    })
                    .collect();
                let _ = writeln!(out, r#"<polyline class="{}" points="{}"/>"#, role.class(), coords.join(" "));
            }
            Element::Marker { center, rib } => {
                let (cx, cy) = viewport.map(center);
                let highlighted = options.highlight_rib == Some(*rib);
                let radius = if highlighted {
                    options.marker_radius * 2.0
                } else {
                    options.marker_radius
                };
                let _ = writeln!(
                    out,
                    r#"<circle id="rib-{}" class="{}" cx="{:.2}" cy="{:.2}" r="{}"/>"#,
                    rib,
                    class_for("rib", Some(*rib), options.highlight_rib),
                    cx,
                    cy,
                    radius
                );
            }
            Element::Label { position, text, role } => {
                let (x, y) = viewport.map(position);
                let _ = writeln!(
                    out,
                    r#"<text class="{}" x="{:.2}" y="{:.2}">{}</text>"#,
                    role.class(),
                    x,
                    y,
                    escape(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Role;

    fn square() -> Drawing {
        let mut drawing = Drawing::new("Square & <friends>");
        drawing.line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Role::Ground);
        drawing.line(Point2::new(0.0, 10.0), Point2::new(10.0, 10.0), Role::Chord);
        drawing.marker(Point2::new(5.0, 5.0), 1);
        drawing.marker(Point2::new(5.0, 7.0), 2);
        drawing
    }

    #[test]
    fn test_fit_flips_y_and_pads() {
        let svg = render_svg(&square(), &SvgOptions::default());
        // Bottom edge at model y=0 lands on the bottom padding line
        assert!(svg.contains(r#"<line class="ground" x1="15.00" y1="185.00" x2="185.00" y2="185.00"/>"#));
        assert!(svg.contains(r#"<line class="chord" x1="15.00" y1="15.00" x2="185.00" y2="15.00"/>"#));
    }

    #[test]
    fn test_markers_have_ids_and_highlight() {
        let options = SvgOptions {
            highlight_rib: Some(2),
            ..SvgOptions::default()
        };
        let svg = render_svg(&square(), &options);
        assert!(svg.contains(r#"<circle id="rib-1" class="rib" cx="100.00" cy="100.00" r="3"/>"#));
        assert!(svg.contains(r#"id="rib-2" class="rib highlight""#));
        assert!(svg.contains(r#"r="6"/>"#));
    }

    #[test]
    fn test_title_escaped() {
        let svg = render_svg(&square(), &SvgOptions::default());
        assert!(svg.contains("<title>Square &amp; &lt;friends&gt;</title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_drawing_renders() {
        let svg = render_svg(&Drawing::new("Empty"), &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_degenerate_span_centers() {
        let mut drawing = Drawing::new("Flat");
        drawing.line(Point2::new(0.0, 3.0), Point2::new(4.0, 3.0), Role::Ground);
        let svg = render_svg(&drawing, &SvgOptions::default());
        // Zero height span: centered vertically
        assert!(svg.contains(r#"y1="100.00""#));
    }
}
