//! Isometric wireframe of one corner: every support's curve from the toe to
//! the top edge, the top edge itself, and every rib as straight pieces
//! between adjacent supports.
//!
//! Model points are turned about the vertical axis by `azimuth`, then
//! tipped toward the viewer by `elevation`, and dropped onto the screen
//! plane (x right, y up).

use nalgebra::{Rotation3, Vector3};

use super::{project_point, support_angles, sweep, Drawing, Point2, Point3, Role, View, ARC_SEGMENTS};
use crate::calculations::{BowlLayout, Rib};

/// Elevation of a true isometric projection, atan(1/√2) ≈ 35.264°.
pub fn true_isometric_elevation() -> f64 {
    (1.0 / 2f64.sqrt()).atan()
}

/// Isometric (axonometric) view with a fixed camera.
#[derive(Debug, Clone, Copy)]
pub struct IsometricView {
    /// Turn about the vertical axis (radians)
    pub azimuth_rad: f64,
    /// Tilt toward the viewer (radians)
    pub elevation_rad: f64,
}

impl Default for IsometricView {
    fn default() -> Self {
        Self {
            azimuth_rad: 45f64.to_radians(),
            elevation_rad: true_isometric_elevation(),
        }
    }
}

impl IsometricView {
    fn rotation(&self) -> Rotation3<f64> {
        let azimuth = Rotation3::from_axis_angle(&Vector3::y_axis(), self.azimuth_rad);
        let elevation = Rotation3::from_axis_angle(&Vector3::x_axis(), self.elevation_rad);
        elevation * azimuth
    }

    /// Screen position of a model point.
    pub fn to_screen(&self, point: &Point3) -> Point2 {
        let rotated = self.rotation() * point;
        Point2::new(rotated.x, rotated.y)
    }
}

impl View for IsometricView {
    fn name(&self) -> &'static str {
        "iso"
    }

    fn render(&self, layout: &BowlLayout, ribs: &[Rib]) -> Drawing {
        let r = layout.radius_in;
        let rotation = self.rotation();
        let screen = |p: Point3| {
            let q = rotation * p;
            Point2::new(q.x, q.y)
        };
        let angles = support_angles(layout);
        let half = layout.corner_angle_rad / 2.0;

        let mut drawing = Drawing::new("Isometric View");

        for &angle in &angles {
            let curve = sweep(0.0, layout.alpha_max_rad, ARC_SEGMENTS)
                .map(|alpha| screen(project_point(r, alpha, angle)))
                .collect();
            drawing.polyline(curve, Role::Support);
        }

        let top_edge = sweep(-half, half, ARC_SEGMENTS)
            .map(|fan| screen(project_point(r, layout.alpha_max_rad, fan)))
            .collect();
        drawing.polyline(top_edge, Role::Arc);

        for rib in ribs {
            for pair in angles.windows(2) {
                drawing.rib_line(
                    screen(project_point(r, rib.alpha_rad, pair[0])),
                    screen(project_point(r, rib.alpha_rad, pair[1])),
                    rib.index,
                );
            }
        }

        drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rib_layout::{calculate, RibLayoutInput};
    use crate::units::Measurement;
    use approx::assert_relative_eq;

    #[test]
    fn test_true_isometric_axes_foreshorten_equally() {
        let view = IsometricView::default();
        let x = view.to_screen(&Point3::new(1.0, 0.0, 0.0)).coords.norm();
        let y = view.to_screen(&Point3::new(0.0, 1.0, 0.0)).coords.norm();
        let z = view.to_screen(&Point3::new(0.0, 0.0, 1.0)).coords.norm();
        assert_relative_eq!(x, y, epsilon = 1e-12);
        assert_relative_eq!(y, z, epsilon = 1e-12);
        // sqrt(2/3)
        assert_relative_eq!(x, (2.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_camera_is_front_view() {
        let view = IsometricView {
            azimuth_rad: 0.0,
            elevation_rad: 0.0,
        };
        let p = view.to_screen(&Point3::new(2.0, 3.0, 4.0));
        assert_eq!(p, Point2::new(2.0, 3.0));
    }

    #[test]
    fn test_toe_projects_to_origin() {
        let view = IsometricView::default();
        let p = view.to_screen(&project_point(30.0, 0.0, 0.4));
        assert_relative_eq!(p.coords.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_render_counts() {
        let input = RibLayoutInput {
            radius: Measurement::inches_value(30.0),
            num_sections: 3,
            max_height: Measurement::inches_value(24.0),
            ..RibLayoutInput::default()
        };
        let result = calculate(&input).unwrap();
        let drawing = IsometricView::default().render(&result.layout, &result.ribs);

        assert_eq!(drawing.with_role(Role::Support).count(), 4);
        assert_eq!(drawing.with_role(Role::Arc).count(), 1);
        assert_eq!(drawing.with_role(Role::Rib).count(), result.ribs.len() * 3);
    }
}
