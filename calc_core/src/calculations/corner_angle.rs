//! # Corner Angle Calculation
//!
//! Works backwards from a desired top edge: given the transition radius,
//! the height it is cut off at, and the straight-line distance the top edge
//! should span, find the plan-view angle the corner has to turn.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::corner_angle::{calculate, CornerAngleInput};
//! use calc_core::units::Measurement;
//!
//! let input = CornerAngleInput {
//!     label: "Deep end corner".to_string(),
//!     radius: Measurement::feet_value(6.0),
//!     height: Measurement::feet_value(4.0),
//!     chord_in: 96.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Corner angle: {:.1}°", result.corner_angle_deg());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::rib_layout::BowlLayout;
use crate::equations::arc::{arc_angle_from_height, corner_angle_from_chord, top_radius};
use crate::errors::{CalcError, CalcResult};
use crate::units::Measurement;

/// Input parameters for the corner angle calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Deep end corner",
///   "radius": { "value": 6.0, "unit": "ft" },
///   "height": { "value": 4.0, "unit": "ft" },
///   "chord_in": 96.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CornerAngleInput {
    /// User label for this corner
    #[serde(default)]
    pub label: String,

    /// Transition radius
    pub radius: Measurement,

    /// Height the transition is cut off at
    pub height: Measurement,

    /// Desired straight-line distance across the top edge, in inches
    pub chord_in: f64,
}

impl Default for CornerAngleInput {
    fn default() -> Self {
        Self {
            label: String::new(),
            radius: Measurement::feet_value(6.0),
            height: Measurement::feet_value(4.0),
            chord_in: 96.0,
        }
    }
}

impl CornerAngleInput {
    /// Normalize and validate, returning `(radius_in, height_in)`.
    ///
    /// The chord is checked later, once the top radius is known.
    pub fn validate(&self) -> CalcResult<(f64, f64)> {
        let radius_in = self.radius.inches()?;
        let height_in = self.height.inches()?;

        if radius_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "radius",
                self.radius.to_string(),
                "Radius must be positive",
            ));
        }
        if !self.chord_in.is_finite() || self.chord_in < 0.0 {
            return Err(CalcError::invalid_input(
                "chord_in",
                self.chord_in.to_string(),
                "Chord must be a non-negative number",
            ));
        }
        if height_in > radius_in {
            return Err(CalcError::height_exceeds_radius(height_in, radius_in));
        }
        Ok((radius_in, height_in))
    }
}

/// Results from the corner angle calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius_in": 72.0,
///   "height_in": 48.0,
///   "alpha_rad": 1.2310,
///   "top_radius_in": 67.88,
///   "chord_in": 96.0,
///   "corner_angle_rad": 1.5713
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerAngleResult {
    /// Transition radius (in)
    pub radius_in: f64,

    /// Cutoff height (in)
    pub height_in: f64,

    /// Arc angle at the cutoff height (radians)
    pub alpha_rad: f64,

    /// Horizontal distance from the toe to the top edge (in)
    pub top_radius_in: f64,

    /// Requested top chord (in)
    pub chord_in: f64,

    /// Plan-view corner angle (radians, full precision)
    pub corner_angle_rad: f64,
}

impl CornerAngleResult {
    /// Corner angle in degrees
    pub fn corner_angle_deg(&self) -> f64 {
        self.corner_angle_rad.to_degrees()
    }

    /// Arc angle at the cutoff height in degrees
    pub fn alpha_deg(&self) -> f64 {
        self.alpha_rad.to_degrees()
    }

    /// The corner as a single-section layout, for the diagram views.
    pub fn layout(&self) -> BowlLayout {
        BowlLayout::new(self.radius_in, self.height_in, self.corner_angle_rad, 1, 0.0)
    }
}

/// Calculate the corner angle for a transition.
///
/// # Returns
///
/// * `Ok(CornerAngleResult)` - Calculation results
/// * `Err(CalcError::HeightExceedsRadius)` - height > radius
/// * `Err(CalcError::ChordTooWide)` - chord > 2 × top radius
/// * `Err(CalcError::InvalidInput)` - non-finite, negative or zero radius
pub fn calculate(input: &CornerAngleInput) -> CalcResult<CornerAngleResult> {
    let (radius_in, height_in) = input.validate()?;

    let alpha_rad = arc_angle_from_height(radius_in, height_in);
    let top_radius_in = top_radius(radius_in, alpha_rad);

    let max_chord_in = 2.0 * top_radius_in;
    if input.chord_in > max_chord_in {
        return Err(CalcError::chord_too_wide(input.chord_in, max_chord_in));
    }

    let corner_angle_rad = if top_radius_in > 0.0 {
        corner_angle_from_chord(top_radius_in, input.chord_in)
    } else {
        // Zero height and zero chord: the corner collapses onto the toe
        0.0
    };

    debug!(
        radius_in,
        height_in,
        alpha_deg = alpha_rad.to_degrees(),
        top_radius_in,
        corner_angle_deg = corner_angle_rad.to_degrees(),
        "corner angle calculated"
    );

    Ok(CornerAngleResult {
        radius_in,
        height_in,
        alpha_rad,
        top_radius_in,
        chord_in: input.chord_in,
        corner_angle_rad,
    })
}
