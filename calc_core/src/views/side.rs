//! Side (profile) view: the transition curve from the toe up to the cutoff
//! height, with the radius, height and top-radius dimensions and a marker
//! at every rib.

use super::{project_point, sweep, Drawing, Point2, Role, View, ARC_SEGMENTS};
use crate::calculations::{BowlLayout, Rib};
use crate::format::format_inches;

/// Profile of the transition. Horizontal axis is distance from the toe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideView;

impl SideView {
    /// Profile coordinates (horizontal distance, height) at arc angle `alpha`.
    fn profile(radius: f64, alpha: f64) -> Point2 {
        let p = project_point(radius, alpha, 0.0);
        Point2::new(p.z, p.y)
    }
}

impl View for SideView {
    fn name(&self) -> &'static str {
        "side"
    }

    fn render(&self, layout: &BowlLayout, ribs: &[Rib]) -> Drawing {
        let r = layout.radius_in;
        let toe = Point2::origin();
        let center = Point2::new(0.0, r);
        let top = Self::profile(r, layout.alpha_max_rad);

        let mut drawing = Drawing::new("Side View");

        drawing.line(toe, Point2::new(r.max(top.x), 0.0), Role::Ground);

        let arc = sweep(0.0, layout.alpha_max_rad, ARC_SEGMENTS)
            .map(|alpha| Self::profile(r, alpha))
            .collect();
        drawing.polyline(arc, Role::Arc);

        let mid = Self::profile(r, layout.alpha_max_rad / 2.0);
        drawing.line(center, mid, Role::Radius);
        drawing.label(Point2::new((center.x + mid.x) / 2.0, (center.y + mid.y) / 2.0), format!("R {}", format_inches(r)));

        drawing.line(Point2::new(top.x, 0.0), top, Role::Height);
        drawing.label(Point2::new(top.x, top.y / 2.0), format!("h {}", format_inches(layout.max_height_in)));

        drawing.line(Point2::new(0.0, top.y), top, Role::TopRadius);

        for rib in ribs {
            drawing.marker(Self::profile(r, rib.alpha_rad), rib.index);
        }

        drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rib_layout::{calculate, RibLayoutInput};
    use crate::views::Element;
    use crate::units::Measurement;
    use approx::assert_relative_eq;

    fn bowl() -> RibLayoutInput {
        RibLayoutInput {
            radius: Measurement::inches_value(30.0),
            corner_angle_deg: 90.0,
            num_sections: 3,
            rib_spacing_in: 6.0,
            max_height: Measurement::inches_value(24.0),
            ..RibLayoutInput::default()
        }
    }

    #[test]
    fn test_arc_ends_at_top() {
        let result = calculate(&bowl()).unwrap();
        let drawing = SideView.render(&result.layout, &result.ribs);

        let arc = drawing.with_role(Role::Arc).next().unwrap();
        let Element::Polyline { points, .. } = arc else {
            panic!("arc should be a polyline");
        };
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert_eq!(points[0], Point2::origin());
        let last = points.last().unwrap();
        assert_relative_eq!(last.x, result.layout.top_radius_in, epsilon = 1e-9);
        assert_relative_eq!(last.y, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_marker_per_rib() {
        let result = calculate(&bowl()).unwrap();
        let drawing = SideView.render(&result.layout, &result.ribs);

        let markers: Vec<&Element> = drawing
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Marker { .. }))
            .collect();
        assert_eq!(markers.len(), result.ribs.len());

        for (marker, rib) in markers.iter().zip(&result.ribs) {
            let Element::Marker { center, rib: index } = marker else { unreachable!() };
            assert_eq!(*index, rib.index);
            assert_relative_eq!(center.y, rib.height_in, epsilon = 1e-9);
            assert_relative_eq!(center.x, rib.horizontal_distance_in, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_no_ribs_still_draws_profile() {
        let result = calculate(&bowl()).unwrap();
        let drawing = SideView.render(&result.layout, &[]);
        assert!(drawing.with_role(Role::Arc).count() == 1);
        assert!(drawing.elements.iter().all(|e| e.rib().is_none()));
    }
}
