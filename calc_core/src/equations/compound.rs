//! # Rib and Compound Cut Formulas
//!
//! A corner is split into `n` equal fan sections by `n + 1` supports that
//! radiate from the toe. Each rib spans one section at some arc angle `α`
//! and meets the supports on both ends with a compound cut.
//!
//! ## Notation
//!
//! - `Θ` = Corner angle
//! - `n` = Number of fan sections
//! - `φ` = Fan angle, Θ / n
//! - `d` = Horizontal distance from the toe at the rib, R sin α
//! - `w` = Support thickness
//!
//! Angles are in radians.

/// Angle between adjacent supports.
///
/// # Formula
/// φ = Θ / n
#[inline]
pub fn fan_angle(corner_angle: f64, num_sections: u32) -> f64 {
    corner_angle / f64::from(num_sections)
}

/// Support thickness deducted from every rib.
///
/// The `n − 1` interior supports eat `(n − 1)·w` of material across the
/// corner; that total is spread evenly over the `n` ribs of one row.
///
/// # Formula
/// Δ = (n − 1)·w / n
///
/// # Example
/// ```rust
/// use calc_core::equations::compound::thickness_per_rib;
///
/// assert!((thickness_per_rib(3, 0.75) - 0.5).abs() < 1e-12);
/// assert_eq!(thickness_per_rib(1, 0.75), 0.0);
/// ```
#[inline]
pub fn thickness_per_rib(num_sections: u32, support_thickness: f64) -> f64 {
    let n = f64::from(num_sections);
    (n - 1.0) * support_thickness / n
}

/// Rib length between support centerlines at horizontal distance `d`.
///
/// # Formula
/// L_raw = 2d·tan(φ/2)
#[inline]
pub fn raw_rib_length(horizontal_distance: f64, fan_angle: f64) -> f64 {
    2.0 * horizontal_distance * (fan_angle / 2.0).tan()
}

/// Blade tilt for the rib end cut.
///
/// The rib meets a support face that is turned φ/2 in plan and lies on a
/// curve whose tangent is tilted by `α`.
///
/// # Formula
/// bevel = atan(tan(φ/2)·cos α)
#[inline]
pub fn bevel_angle(fan_angle: f64, alpha: f64) -> f64 {
    ((fan_angle / 2.0).tan() * alpha.cos()).atan()
}

/// Table rotation for the rib end cut.
///
/// # Formula
/// miter = asin(sin(φ/2)·sin α)
#[inline]
pub fn miter_angle(fan_angle: f64, alpha: f64) -> f64 {
    ((fan_angle / 2.0).sin() * alpha.sin()).asin()
}
