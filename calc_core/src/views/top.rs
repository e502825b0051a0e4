//! Top (plan) view of one corner: supports fanning out from the toe, the
//! curved top edge, the straight top chord, and each rib row as the chain
//! of straight pieces it forms between adjacent supports.

use super::{project_point, support_angles, sweep, Drawing, Point2, Role, View, ARC_SEGMENTS};
use crate::calculations::{BowlLayout, Rib};
use crate::format::{format_degrees, format_inches};

/// Radius of the corner-angle indicator, as a fraction of the top radius.
const ANGLE_INDICATOR_SCALE: f64 = 0.15;

/// Plan of the corner, toe at the origin, corner centered on the +y axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopView;

impl TopView {
    /// Plan coordinates of the point at arc angle `alpha`, turned `fan` from center.
    fn plan(radius: f64, alpha: f64, fan: f64) -> Point2 {
        let p = project_point(radius, alpha, fan);
        Point2::new(p.x, p.z)
    }

    /// Point at plan distance `distance` from the toe, turned `fan` from center.
    fn polar(distance: f64, fan: f64) -> Point2 {
        Point2::new(distance * fan.sin(), distance * fan.cos())
    }
}

impl View for TopView {
    fn name(&self) -> &'static str {
        "top"
    }

    fn render(&self, layout: &BowlLayout, ribs: &[Rib]) -> Drawing {
        let r = layout.radius_in;
        let alpha_max = layout.alpha_max_rad;
        let half = layout.corner_angle_rad / 2.0;
        let toe = Point2::origin();
        let angles = support_angles(layout);

        let mut drawing = Drawing::new("Top View");

        for &angle in &angles {
            drawing.line(toe, Self::plan(r, alpha_max, angle), Role::Support);
        }

        let top_edge = sweep(-half, half, ARC_SEGMENTS)
            .map(|fan| Self::plan(r, alpha_max, fan))
            .collect();
        drawing.polyline(top_edge, Role::Arc);

        let left = Self::plan(r, alpha_max, -half);
        let right = Self::plan(r, alpha_max, half);
        drawing.line(left, right, Role::Chord);
        drawing.label(
            Point2::new((left.x + right.x) / 2.0, (left.y + right.y) / 2.0),
            format!("c {}", format_inches(layout.top_chord_in)),
        );

        let indicator = layout.top_radius_in * ANGLE_INDICATOR_SCALE;
        let corner_arc = sweep(-half, half, ARC_SEGMENTS / 4)
            .map(|fan| Self::polar(indicator, fan))
            .collect();
        drawing.polyline(corner_arc, Role::CornerAngle);
        drawing.label(Self::polar(indicator * 1.3, 0.0), format_degrees(layout.corner_angle_deg()));

        // Each rib's midline sits at its horizontal distance from the toe,
        // so its ends meet the supports a little further out.
        let end_scale = 1.0 / (layout.fan_angle_rad / 2.0).cos();
        for rib in ribs {
            let reach = rib.horizontal_distance_in * end_scale;
            for pair in angles.windows(2) {
                drawing.rib_line(Self::polar(reach, pair[0]), Self::polar(reach, pair[1]), rib.index);
            }
        }

        drawing
    }
}
