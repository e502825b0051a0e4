//! # Diagram Views
//!
//! Turns a computed layout into 2D drawings. Every view consumes the same
//! immutable `(BowlLayout, &[Rib])` pair and produces a fresh [`Drawing`];
//! views never feed anything back into the calculators and share no state,
//! so any of them can be swapped out or re-run wholesale after each
//! calculation.
//!
//! ## Coordinates
//!
//! 3D points come from [`project_point`]: the toe is the origin, `y` points
//! up, and a fan offset of zero points straight away from the toe along `z`.
//! Drawings are in model inches with `y` up; [`svg`] maps them onto a
//! viewport.
//!
//! ## Available Views
//!
//! - [`SideView`] - Profile of the transition with rib positions
//! - [`TopView`] - Plan of the corner with supports, top edge and ribs
//! - [`IsometricView`] - 3D wireframe of supports and ribs

pub mod isometric;
pub mod side;
pub mod svg;
pub mod top;

use crate::calculations::{BowlLayout, Rib};

pub use isometric::IsometricView;
pub use side::SideView;
pub use top::TopView;

/// A point in a drawing (model inches, y up).
pub type Point2 = nalgebra::Point2<f64>;

/// A point in model space (toe at origin, y up).
pub type Point3 = nalgebra::Point3<f64>;

/// Polyline resolution for arcs.
pub const ARC_SEGMENTS: usize = 48;

/// Position on the transition at arc angle `alpha`, turned `fan_offset`
/// around the vertical axis through the toe.
///
/// ```text
/// x = R sin α sin(fan)
/// z = R sin α cos(fan)
/// y = R (1 − cos α)
/// ```
pub fn project_point(radius: f64, alpha: f64, fan_offset: f64) -> Point3 {
    let horizontal = radius * alpha.sin();
    Point3::new(
        horizontal * fan_offset.sin(),
        radius * (1.0 - alpha.cos()),
        horizontal * fan_offset.cos(),
    )
}

/// Fan offset of each support, from `-Θ/2` to `+Θ/2`.
pub fn support_angles(layout: &BowlLayout) -> Vec<f64> {
    let half = layout.corner_angle_rad / 2.0;
    (0..=layout.num_sections)
        .map(|i| -half + f64::from(i) * layout.fan_angle_rad)
        .collect()
}

/// `count + 1` evenly spaced values from `start` to `end` inclusive.
pub(crate) fn sweep(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..=count).map(move |i| start + (end - start) * i as f64 / count as f64)
}

/// Styling role of a drawing element. Maps to a CSS class in SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Ground,
    Arc,
    Radius,
    Height,
    TopRadius,
    Support,
    Chord,
    CornerAngle,
    Rib,
    Label,
}

impl Role {
    pub fn class(self) -> &'static str {
        match self {
            Role::Ground => "ground",
            Role::Arc => "arc",
            Role::Radius => "radius",
            Role::Height => "height",
            Role::TopRadius => "top-radius",
            Role::Support => "support",
            Role::Chord => "chord",
            Role::CornerAngle => "corner-angle",
            Role::Rib => "rib",
            Role::Label => "label",
        }
    }
}

/// One primitive in a drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line {
        start: Point2,
        end: Point2,
        role: Role,
        /// Set when the line belongs to a specific rib
        rib: Option<usize>,
    },
    Polyline {
        points: Vec<Point2>,
        role: Role,
    },
    /// A rib position marker
    Marker { center: Point2, rib: usize },
    Label {
        position: Point2,
        text: String,
        role: Role,
    },
}

impl Element {
    fn points(&self) -> Vec<Point2> {
        match self {
            Element::Line { start, end, .. } => vec![*start, *end],
            Element::Polyline { points, .. } => points.clone(),
            Element::Marker { center, .. } => vec![*center],
            Element::Label { position, .. } => vec![*position],
        }
    }

    /// Rib this element belongs to, if any.
    pub fn rib(&self) -> Option<usize> {
        match self {
            Element::Line { rib, .. } => *rib,
            Element::Marker { rib, .. } => Some(*rib),
            _ => None,
        }
    }
}

/// Output of a view: a flat list of primitives in model coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    pub title: String,
    pub elements: Vec<Element>,
}

impl Drawing {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn line(&mut self, start: Point2, end: Point2, role: Role) {
        self.elements.push(Element::Line { start, end, role, rib: None });
    }

    pub fn rib_line(&mut self, start: Point2, end: Point2, rib: usize) {
        self.elements.push(Element::Line {
            start,
            end,
            role: Role::Rib,
            rib: Some(rib),
        });
    }

    pub fn polyline(&mut self, points: Vec<Point2>, role: Role) {
        self.elements.push(Element::Polyline { points, role });
    }

    pub fn marker(&mut self, center: Point2, rib: usize) {
        self.elements.push(Element::Marker { center, rib });
    }

    pub fn label(&mut self, position: Point2, text: impl Into<String>) {
        self.elements.push(Element::Label {
            position,
            text: text.into(),
            role: Role::Label,
        });
    }

    /// Elements with the given role.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| match e {
            Element::Line { role: r, .. } | Element::Polyline { role: r, .. } | Element::Label { role: r, .. } => {
                *r == role
            }
            Element::Marker { .. } => role == Role::Rib,
        })
    }

    /// Axis-aligned bounds `(min, max)` of every point, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut points = self.elements.iter().flat_map(|e| e.points());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

/// A renderer for one kind of diagram.
pub trait View {
    /// Short name, used for file names (`side`, `top`, `iso`).
    fn name(&self) -> &'static str;

    /// Build the drawing for a layout and its ribs.
    fn render(&self, layout: &BowlLayout, ribs: &[Rib]) -> Drawing;
}

/// The three standard views.
pub fn standard_views() -> Vec<Box<dyn View>> {
    vec![
        Box::new(SideView),
        Box::new(TopView),
        Box::new(IsometricView::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn test_layout() -> BowlLayout {
        BowlLayout::new(30.0, 24.0, FRAC_PI_2, 3, 0.75)
    }

    #[test]
    fn test_project_point_straight_ahead() {
        let p = project_point(30.0, FRAC_PI_2, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 30.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_point_keeps_height_and_horizontal_distance() {
        let alpha = 0.7;
        let p = project_point(30.0, alpha, FRAC_PI_4);
        assert_relative_eq!(p.y, 30.0 * (1.0 - alpha.cos()), epsilon = 1e-12);
        assert_relative_eq!((p.x * p.x + p.z * p.z).sqrt(), 30.0 * alpha.sin(), epsilon = 1e-12);
        assert_relative_eq!(p.x, p.z, epsilon = 1e-12);
    }

    #[test]
    fn test_support_angles_span_corner() {
        let angles = support_angles(&test_layout());
        assert_eq!(angles.len(), 4);
        assert_relative_eq!(angles[0], -FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(angles[3], FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_endpoints() {
        let values: Vec<f64> = sweep(0.0, 1.0, 4).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_bounds() {
        let mut drawing = Drawing::new("t");
        assert!(drawing.bounds().is_none());
        drawing.line(Point2::new(-1.0, 2.0), Point2::new(3.0, -4.0), Role::Ground);
        drawing.marker(Point2::new(5.0, 0.0), 1);
        let (min, max) = drawing.bounds().unwrap();
        assert_eq!(min, Point2::new(-1.0, -4.0));
        assert_eq!(max, Point2::new(5.0, 2.0));
    }

    #[test]
    fn test_standard_views_have_distinct_names() {
        let names: Vec<&str> = standard_views().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["side", "top", "iso"]);
    }
}
