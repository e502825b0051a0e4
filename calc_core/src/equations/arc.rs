//! # Circular Transition Formulas
//!
//! A transition is a circular arc of radius `R` whose center sits directly
//! above the toe. Walking up the arc from the toe sweeps the arc angle `α`.
//!
//! ```text
//!   center ●
//!          │╲
//!        R │ ╲ R
//!          │  ╲
//!          │   ╲____ top (height h, horizontal distance t)
//!          │  ╱
//!     toe  ●─╯
//! ```
//!
//! ## Notation
//!
//! - `R` = Transition radius
//! - `h` = Height above the ground
//! - `α` = Arc angle swept from the toe (0 at the toe, π/2 at vertical)
//! - `t` = Top radius, the horizontal distance from the toe to the top edge
//! - `c` = Chord (straight-line distance) across the corner at the top
//! - `θ` = Corner angle spanned in plan view
//!
//! All functions here are unchecked: callers validate domains before
//! calling (see [`crate::calculations`]).

/// Arc angle reached at height `h` on a transition of radius `R`.
///
/// # Formula
/// h = R(1 − cos α)  ⇒  α = acos(1 − h/R)
///
/// Requires 0 ≤ h ≤ R; the result is then in [0, π/2].
///
/// # Example
/// ```rust
/// use calc_core::equations::arc::arc_angle_from_height;
///
/// let alpha = arc_angle_from_height(30.0, 30.0);
/// assert!((alpha - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn arc_angle_from_height(radius: f64, height: f64) -> f64 {
    (1.0 - height / radius).acos()
}

/// Height above the ground at arc angle `α`.
///
/// # Formula
/// h = R(1 − cos α)
#[inline]
pub fn height_at_angle(radius: f64, alpha: f64) -> f64 {
    radius * (1.0 - alpha.cos())
}

/// Horizontal distance from the toe at arc angle `α`.
///
/// # Formula
/// d = R sin α
///
/// Evaluated at `α_max` this is the top radius `t`.
#[inline]
pub fn top_radius(radius: f64, alpha: f64) -> f64 {
    radius * alpha.sin()
}

/// Corner angle whose top chord is `c` at top radius `t`.
///
/// # Formula
/// c = 2t sin(θ/2)  ⇒  θ = 2 asin(c / 2t)
///
/// Requires c ≤ 2t; the result is then in [0, π].
///
/// # Example
/// ```rust
/// use calc_core::equations::arc::corner_angle_from_chord;
///
/// // A chord of t·√2 closes a quarter-pipe corner
/// let theta = corner_angle_from_chord(10.0, 10.0 * 2f64.sqrt());
/// assert!((theta.to_degrees() - 90.0).abs() < 1e-9);
/// ```
#[inline]
pub fn corner_angle_from_chord(top_radius: f64, chord: f64) -> f64 {
    2.0 * (chord / (2.0 * top_radius)).asin()
}

/// Chord across a corner of angle `θ` at top radius `t`.
///
/// # Formula
/// c = 2t sin(θ/2)
#[inline]
pub fn chord_from_corner_angle(top_radius: f64, corner_angle: f64) -> f64 {
    2.0 * top_radius * (corner_angle / 2.0).sin()
}

/// Arc length from the toe to arc angle `α`.
///
/// # Formula
/// s = Rα
#[inline]
pub fn arc_length(radius: f64, alpha: f64) -> f64 {
    radius * alpha
}

/// Arc angle reached after walking `s` along the arc from the toe.
///
/// # Formula
/// α = s / R
#[inline]
pub fn angle_from_arc_length(radius: f64, arc_length: f64) -> f64 {
    arc_length / radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arc_angle_round_trip() {
        for radius in [1.0, 12.0, 30.0, 72.0, 144.0] {
            for step in 0..=20 {
                let height = radius * f64::from(step) / 20.0;
                let alpha = arc_angle_from_height(radius, height);
                assert!((0.0..=FRAC_PI_2 + 1e-12).contains(&alpha), "alpha {} out of range", alpha);
                assert_relative_eq!(height_at_angle(radius, alpha), height, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_full_height_is_vertical() {
        let alpha = arc_angle_from_height(30.0, 30.0);
        assert_relative_eq!(alpha, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(top_radius(30.0, alpha), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_height_is_toe() {
        assert_eq!(arc_angle_from_height(30.0, 0.0), 0.0);
        assert_eq!(top_radius(30.0, 0.0), 0.0);
    }

    #[test]
    fn test_corner_angle_round_trip() {
        let t = 24.0;
        for step in 0..=20 {
            let chord = 2.0 * t * f64::from(step) / 20.0;
            let theta = corner_angle_from_chord(t, chord);
            assert!((0.0..=PI + 1e-12).contains(&theta));
            assert_relative_eq!(chord_from_corner_angle(t, theta), chord, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arc_length_inverse() {
        let s = arc_length(30.0, 0.2_f64.acos());
        // acos(0.2) = 1.369438 rad
        assert!((s - 41.083).abs() < 0.01);
        assert_relative_eq!(angle_from_arc_length(30.0, s), 0.2_f64.acos(), epsilon = 1e-12);
    }
}
