//! # Bowl Rib Layout Calculation
//!
//! Lays out the ribs for one curved corner of a bowl or ramp. The corner is
//! split into `n` equal fan sections by supports radiating from the toe;
//! ribs run between adjacent supports every `spacing` inches down the curve.
//!
//! ## Assumptions
//!
//! - Circular transition, center directly above the toe
//! - Rib positions measured down the curve from the top edge, to the bottom
//!   edge of each rib
//! - The first rib sits one rib thickness below the top edge
//! - Interior support thickness is deducted evenly from every rib
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::rib_layout::{calculate, RibLayoutInput};
//! use calc_core::units::Measurement;
//!
//! let input = RibLayoutInput {
//!     label: "Shallow end".to_string(),
//!     radius: Measurement::inches_value(30.0),
//!     corner_angle_deg: 90.0,
//!     num_sections: 3,
//!     rib_spacing_in: 6.0,
//!     max_height: Measurement::inches_value(24.0),
//!     support_thickness_in: 0.75,
//!     rib_thickness_in: 0.75,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.ribs.len(), 7);
//! for rib in &result.ribs {
//!     println!("#{} {:.3}\" miter {:.1}° bevel {:.1}°", rib.index, rib.length_in, rib.miter_deg, rib.bevel_deg);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::equations::arc::{
    angle_from_arc_length, arc_angle_from_height, arc_length, chord_from_corner_angle, height_at_angle, top_radius,
};
use crate::equations::compound::{bevel_angle, fan_angle, miter_angle, raw_rib_length, thickness_per_rib};
use crate::errors::{CalcError, CalcResult};
use crate::units::Measurement;

/// Most ribs a single layout may produce.
pub const MAX_RIBS: usize = 10_000;

/// Input parameters for a bowl corner rib layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shallow end",
///   "radius": { "value": 6.0, "unit": "ft" },
///   "corner_angle_deg": 90.0,
///   "num_sections": 4,
///   "rib_spacing_in": 6.0,
///   "max_height": { "value": 4.0, "unit": "ft" },
///   "support_thickness_in": 0.75,
///   "rib_thickness_in": 0.75
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibLayoutInput {
    /// User label for this corner
    #[serde(default)]
    pub label: String,

    /// Transition radius
    pub radius: Measurement,

    /// Plan-view angle the corner turns (degrees)
    pub corner_angle_deg: f64,

    /// Number of equal fan sections (supports = sections + 1)
    pub num_sections: u32,

    /// Distance between ribs along the curve (in)
    pub rib_spacing_in: f64,

    /// Height the transition is cut off at
    pub max_height: Measurement,

    /// Thickness of each support (in)
    pub support_thickness_in: f64,

    /// Thickness of each rib (in)
    pub rib_thickness_in: f64,
}

impl Default for RibLayoutInput {
    fn default() -> Self {
        Self {
            label: String::new(),
            radius: Measurement::feet_value(6.0),
            corner_angle_deg: 90.0,
            num_sections: 4,
            rib_spacing_in: 6.0,
            max_height: Measurement::feet_value(4.0),
            support_thickness_in: 0.75,
            rib_thickness_in: 0.75,
        }
    }
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

impl RibLayoutInput {
    /// Normalize and validate, returning `(radius_in, max_height_in)`.
    pub fn validate(&self) -> CalcResult<(f64, f64)> {
        let radius_in = self.radius.inches()?;
        let max_height_in = self.max_height.inches()?;

        require_finite("corner_angle_deg", self.corner_angle_deg)?;
        require_finite("rib_spacing_in", self.rib_spacing_in)?;
        require_finite("support_thickness_in", self.support_thickness_in)?;
        require_finite("rib_thickness_in", self.rib_thickness_in)?;

        if radius_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "radius",
                self.radius.to_string(),
                "Radius must be positive",
            ));
        }
        if self.corner_angle_deg <= 0.0 || self.corner_angle_deg > 360.0 {
            return Err(CalcError::invalid_input(
                "corner_angle_deg",
                self.corner_angle_deg.to_string(),
                "Corner angle must be greater than 0 and at most 360 degrees",
            ));
        }
        if self.num_sections == 0 {
            return Err(CalcError::invalid_input(
                "num_sections",
                "0",
                "At least one section is required",
            ));
        }
        let fan_angle_deg = self.corner_angle_deg / f64::from(self.num_sections);
        if fan_angle_deg >= 180.0 {
            return Err(CalcError::invalid_input(
                "num_sections",
                self.num_sections.to_string(),
                "Each section must span less than 180 degrees",
            ));
        }
        if self.rib_spacing_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "rib_spacing_in",
                self.rib_spacing_in.to_string(),
                "Rib spacing must be positive",
            ));
        }
        if self.support_thickness_in < 0.0 {
            return Err(CalcError::invalid_input(
                "support_thickness_in",
                self.support_thickness_in.to_string(),
                "Thickness cannot be negative",
            ));
        }
        if self.rib_thickness_in < 0.0 {
            return Err(CalcError::invalid_input(
                "rib_thickness_in",
                self.rib_thickness_in.to_string(),
                "Thickness cannot be negative",
            ));
        }
        if max_height_in > radius_in {
            return Err(CalcError::height_exceeds_radius(max_height_in, radius_in));
        }
        Ok((radius_in, max_height_in))
    }
}

/// Values shared by every rib of one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlLayout {
    /// Transition radius (in)
    pub radius_in: f64,

    /// Cutoff height (in)
    pub max_height_in: f64,

    /// Arc angle at the cutoff height (radians)
    pub alpha_max_rad: f64,

    /// Plan-view corner angle (radians)
    pub corner_angle_rad: f64,

    /// Number of fan sections
    pub num_sections: u32,

    /// Angle between adjacent supports (radians)
    pub fan_angle_rad: f64,

    /// Horizontal distance from the toe to the top edge (in)
    pub top_radius_in: f64,

    /// Straight-line distance across the corner at the top edge (in)
    pub top_chord_in: f64,

    /// Arc distance from the toe to the top edge (in)
    pub total_arc_length_in: f64,

    /// Support thickness deducted from each rib (in)
    pub thickness_per_rib_in: f64,
}

impl BowlLayout {
    /// Derive the layout from normalized inputs. Angles in radians.
    ///
    /// Requires `0 ≤ max_height_in ≤ radius_in` and `num_sections ≥ 1`.
    pub fn new(
        radius_in: f64,
        max_height_in: f64,
        corner_angle_rad: f64,
        num_sections: u32,
        support_thickness_in: f64,
    ) -> Self {
        let alpha_max_rad = arc_angle_from_height(radius_in, max_height_in);
        let top_radius_in = top_radius(radius_in, alpha_max_rad);
        Self {
            radius_in,
            max_height_in,
            alpha_max_rad,
            corner_angle_rad,
            num_sections,
            fan_angle_rad: fan_angle(corner_angle_rad, num_sections),
            top_radius_in,
            top_chord_in: chord_from_corner_angle(top_radius_in, corner_angle_rad),
            total_arc_length_in: arc_length(radius_in, alpha_max_rad),
            thickness_per_rib_in: thickness_per_rib(num_sections, support_thickness_in),
        }
    }

    pub fn fan_angle_deg(&self) -> f64 {
        self.fan_angle_rad.to_degrees()
    }

    pub fn corner_angle_deg(&self) -> f64 {
        self.corner_angle_rad.to_degrees()
    }

    pub fn alpha_max_deg(&self) -> f64 {
        self.alpha_max_rad.to_degrees()
    }

    /// Build the rib at `distance_from_top_in` down the curve.
    pub fn rib_at(&self, index: usize, distance_from_top_in: f64) -> Rib {
        let arc_from_bottom_in = self.total_arc_length_in - distance_from_top_in;
        let alpha_rad = angle_from_arc_length(self.radius_in, arc_from_bottom_in);
        let horizontal_distance_in = top_radius(self.radius_in, alpha_rad);

        let length_in = raw_rib_length(horizontal_distance_in, self.fan_angle_rad) - self.thickness_per_rib_in;

        Rib {
            index,
            distance_from_top_in,
            arc_from_bottom_in,
            alpha_rad,
            height_in: height_at_angle(self.radius_in, alpha_rad),
            horizontal_distance_in,
            length_in,
            miter_deg: miter_angle(self.fan_angle_rad, alpha_rad).to_degrees(),
            bevel_deg: bevel_angle(self.fan_angle_rad, alpha_rad).to_degrees(),
        }
    }

    /// Number of ribs that start above the toe: `rib_thickness + i × spacing`
    /// for `i` in `0..count`, all short of the total arc length.
    pub fn rib_count(&self, rib_thickness_in: f64, spacing_in: f64) -> CalcResult<usize> {
        if spacing_in.is_nan() || spacing_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "rib_spacing_in",
                spacing_in.to_string(),
                "Rib spacing must be positive",
            ));
        }
        if rib_thickness_in >= self.total_arc_length_in {
            return Ok(0);
        }

        let count = ((self.total_arc_length_in - rib_thickness_in) / spacing_in).ceil();
        if count.is_nan() || count > MAX_RIBS as f64 {
            return Err(CalcError::invalid_input(
                "rib_spacing_in",
                spacing_in.to_string(),
                format!(
                    "Spacing would need {} ribs over {:.3}\" of arc (limit {})",
                    count, self.total_arc_length_in, MAX_RIBS
                ),
            ));
        }
        Ok(count as usize)
    }

    /// Generate ribs from one rib thickness below the top edge, every
    /// `spacing_in` down the curve, while still above the toe.
    pub fn generate_ribs(&self, rib_thickness_in: f64, spacing_in: f64) -> CalcResult<Vec<Rib>> {
        let count = self.rib_count(rib_thickness_in, spacing_in)?;

        let ribs = (0..count)
            .map(|i| {
                let rib = self.rib_at(i + 1, rib_thickness_in + i as f64 * spacing_in);
                debug!(
                    index = rib.index,
                    distance_from_top_in = rib.distance_from_top_in,
                    length_in = rib.length_in,
                    miter_deg = rib.miter_deg,
                    bevel_deg = rib.bevel_deg,
                    "rib"
                );
                rib
            })
            .collect();

        Ok(ribs)
    }
}

/// One rib cut: where it goes and how to cut it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rib {
    /// 1-based position in the sequence, top to bottom
    pub index: usize,

    /// Distance down the curve from the top edge to the rib's bottom edge (in)
    pub distance_from_top_in: f64,

    /// Distance up the curve from the toe (in)
    pub arc_from_bottom_in: f64,

    /// Arc angle at the rib (radians)
    pub alpha_rad: f64,

    /// Height above the ground (in)
    pub height_in: f64,

    /// Horizontal distance from the toe (in)
    pub horizontal_distance_in: f64,

    /// Cut length after the support deduction (in); negative when the
    /// supports crowd out the rib near the toe
    pub length_in: f64,

    /// Table rotation (degrees)
    pub miter_deg: f64,

    /// Blade tilt (degrees)
    pub bevel_deg: f64,
}

/// Results from a rib layout calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibLayoutResult {
    pub layout: BowlLayout,
    /// Ordered top to bottom. Empty when not even one rib fits.
    pub ribs: Vec<Rib>,
    /// Rib thickness the sequence started from (in)
    pub rib_thickness_in: f64,
}

impl RibLayoutResult {
    pub fn no_ribs_fit(&self) -> bool {
        self.ribs.is_empty()
    }

    /// Promote an empty rib sequence to [`CalcError::NoRibsFit`].
    pub fn require_ribs(self) -> CalcResult<Self> {
        if self.no_ribs_fit() {
            return Err(CalcError::no_ribs_fit(self.rib_thickness_in, self.layout.total_arc_length_in));
        }
        Ok(self)
    }

    /// Ribs whose support deduction leaves nothing to cut.
    pub fn unbuildable_ribs(&self) -> impl Iterator<Item = &Rib> {
        self.ribs.iter().filter(|rib| rib.length_in <= 0.0)
    }

    /// Total rib stock needed for one corner, all sections (in).
    pub fn total_rib_stock_in(&self) -> f64 {
        let per_row: f64 = self.ribs.iter().map(|rib| rib.length_in.max(0.0)).sum();
        per_row * f64::from(self.layout.num_sections)
    }
}

/// Calculate the rib layout for one corner.
///
/// # Returns
///
/// * `Ok(RibLayoutResult)` - Layout and ribs; `ribs` may be empty
/// * `Err(CalcError::HeightExceedsRadius)` - max height > radius
/// * `Err(CalcError::InvalidInput)` - non-finite values, zero sections,
///   non-positive spacing, negative thickness
pub fn calculate(input: &RibLayoutInput) -> CalcResult<RibLayoutResult> {
    let (radius_in, max_height_in) = input.validate()?;

    let layout = BowlLayout::new(
        radius_in,
        max_height_in,
        input.corner_angle_deg.to_radians(),
        input.num_sections,
        input.support_thickness_in,
    );
    let ribs = layout.generate_ribs(input.rib_thickness_in, input.rib_spacing_in)?;

    info!(
        label = %input.label,
        ribs = ribs.len(),
        fan_angle_deg = layout.fan_angle_deg(),
        top_radius_in = layout.top_radius_in,
        top_chord_in = layout.top_chord_in,
        "rib layout calculated"
    );

    Ok(RibLayoutResult {
        layout,
        ribs,
        rib_thickness_in: input.rib_thickness_in,
    })
}
