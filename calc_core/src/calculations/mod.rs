//! # Transition Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every call recomputes from scratch; nothing is cached between calls.
//!
//! ## Available Calculations
//!
//! - [`corner_angle`] - Corner angle from radius, height and top chord
//! - [`rib_layout`] - Rib positions, lengths and compound cuts for a bowl corner

pub mod corner_angle;
pub mod rib_layout;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use corner_angle::{CornerAngleInput, CornerAngleResult};
pub use rib_layout::{BowlLayout, Rib, RibLayoutInput, RibLayoutResult};

/// Enum wrapper for all calculation types.
///
/// This is the shape of a JSON job file:
///
/// ```json
/// { "type": "CornerAngle", "radius": { "value": 6, "unit": "ft" }, "height": { "value": 4, "unit": "ft" }, "chord_in": 96 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Corner angle from a desired top chord
    CornerAngle(CornerAngleInput),
    /// Rib layout for a bowl corner
    RibLayout(RibLayoutInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::CornerAngle(c) => &c.label,
            CalculationItem::RibLayout(r) => &r.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::CornerAngle(_) => "Corner Angle",
            CalculationItem::RibLayout(_) => "Rib Layout",
        }
    }

    /// Parse a job from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of evaluating a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    CornerAngle(CornerAngleResult),
    RibLayout(RibLayoutResult),
}

/// Run whichever calculator `item` describes.
pub fn calculate_item(item: &CalculationItem) -> CalcResult<CalculationOutput> {
    match item {
        CalculationItem::CornerAngle(input) => corner_angle::calculate(input).map(CalculationOutput::CornerAngle),
        CalculationItem::RibLayout(input) => rib_layout::calculate(input).map(CalculationOutput::RibLayout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_parse_corner_job() {
        let json = r#"{
            "type": "CornerAngle",
            "label": "C-1",
            "radius": { "value": 6, "unit": "ft" },
            "height": { "value": 4, "unit": "ft" },
            "chord_in": 96
        }"#;
        let item = CalculationItem::from_json(json).unwrap();
        assert_eq!(item.label(), "C-1");
        assert_eq!(item.calc_type(), "Corner Angle");

        match calculate_item(&item).unwrap() {
            CalculationOutput::CornerAngle(result) => {
                // t = 72 sin(acos(1/3)) = 67.88"; θ = 2 asin(96 / 135.76) ≈ 90°
                assert!((result.corner_angle_deg() - 90.0).abs() < 0.1);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_parse_rib_job() {
        let json = r#"{
            "type": "RibLayout",
            "radius": { "value": 30 },
            "corner_angle_deg": 90,
            "num_sections": 3,
            "rib_spacing_in": 6,
            "max_height": { "value": 24, "unit": "in" },
            "support_thickness_in": 0.75,
            "rib_thickness_in": 0.75
        }"#;
        let item = CalculationItem::from_json(json).unwrap();
        match calculate_item(&item).unwrap() {
            CalculationOutput::RibLayout(result) => assert_eq!(result.ribs.len(), 7),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_bad_job_is_serialization_error() {
        let err = CalculationItem::from_json(r#"{ "type": "Beam" }"#).unwrap_err();
        assert!(matches!(err, CalcError::SerializationError { .. }));
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let item = CalculationItem::CornerAngle(CornerAngleInput {
            chord_in: 1000.0,
            ..CornerAngleInput::default()
        });
        assert!(matches!(calculate_item(&item), Err(CalcError::ChordTooWide { .. })));
    }
}
