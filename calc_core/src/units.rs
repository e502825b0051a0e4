//! # Unit Types
//!
//! Lengths enter the calculators in feet or inches and are normalized to
//! inches before any geometry runs. Angles stay plain `f64` radians inside
//! the calculators and are converted to degrees only at the edges.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Feet, Inches, LengthUnit, Measurement};
//!
//! let radius = Feet(6.0);
//! let radius_in: Inches = radius.into();
//! assert_eq!(radius_in.0, 72.0);
//!
//! let height: Measurement = "4ft".parse().unwrap();
//! assert_eq!(height.unit, LengthUnit::Feet);
//! assert_eq!(height.inches().unwrap(), 48.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

// ============================================================================
// Measurements with a declared unit
// ============================================================================

/// Unit a length was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
}

impl LengthUnit {
    /// Short suffix used in form selects and on the command line
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Convert a raw value in `unit` to inches.
///
/// `ft` multiplies by 12, `in` passes through. No rounding is applied.
/// Fails only when `value` is not a finite number.
///
/// ```rust
/// use calc_core::units::{to_inches, LengthUnit};
///
/// assert_eq!(to_inches(2.5, LengthUnit::Feet).unwrap(), 30.0);
/// assert_eq!(to_inches(30.0, LengthUnit::Inches).unwrap(), 30.0);
/// assert!(to_inches(f64::NAN, LengthUnit::Inches).is_err());
/// ```
pub fn to_inches(value: f64, unit: LengthUnit) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            "measurement",
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(match unit {
        LengthUnit::Inches => value,
        LengthUnit::Feet => Inches::from(Feet(value)).0,
    })
}

/// A length as the user entered it: a number and the unit it was typed in.
///
/// ## JSON Example
///
/// ```json
/// { "value": 6.0, "unit": "ft" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn inches_value(value: f64) -> Self {
        Self::new(value, LengthUnit::Inches)
    }

    pub fn feet_value(value: f64) -> Self {
        Self::new(value, LengthUnit::Feet)
    }

    /// Normalize to inches, rejecting non-finite and negative values.
    pub fn inches(&self) -> CalcResult<f64> {
        let inches = to_inches(self.value, self.unit)?;
        if inches < 0.0 {
            return Err(CalcError::invalid_input(
                "measurement",
                self.to_string(),
                "Length cannot be negative",
            ));
        }
        Ok(inches)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Measurement {
    type Err = CalcError;

    /// Accepts `30`, `30in`, `30"`, `2.5ft`, `2.5'`. A bare number is inches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, unit) = [
            ("ft", LengthUnit::Feet),
            ("'", LengthUnit::Feet),
            ("in", LengthUnit::Inches),
            ("\"", LengthUnit::Inches),
        ]
        .iter()
        .find_map(|(suffix, unit)| trimmed.strip_suffix(suffix).map(|rest| (rest, *unit)))
        .unwrap_or((trimmed, LengthUnit::Inches));

        let value: f64 = number.trim().parse().map_err(|_| {
            CalcError::invalid_input("measurement", s, "Expected a number optionally followed by in, ft, \" or '")
        })?;
        if !value.is_finite() {
            return Err(CalcError::invalid_input("measurement", s, "Value must be a finite number"));
        }
        Ok(Measurement::new(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_to_inches_no_rounding() {
        assert_eq!(to_inches(1.0 / 3.0, LengthUnit::Feet).unwrap(), 4.0);
        assert_eq!(to_inches(0.1, LengthUnit::Inches).unwrap(), 0.1);
        assert!(to_inches(f64::INFINITY, LengthUnit::Feet).is_err());
    }

    #[test]
    fn test_parse_measurements() {
        assert_eq!("30".parse::<Measurement>().unwrap(), Measurement::inches_value(30.0));
        assert_eq!("30in".parse::<Measurement>().unwrap(), Measurement::inches_value(30.0));
        assert_eq!("30\"".parse::<Measurement>().unwrap(), Measurement::inches_value(30.0));
        assert_eq!("2.5ft".parse::<Measurement>().unwrap(), Measurement::feet_value(2.5));
        assert_eq!(" 2.5 ' ".parse::<Measurement>().unwrap(), Measurement::feet_value(2.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("ft".parse::<Measurement>().is_err());
        assert!("six feet".parse::<Measurement>().is_err());
        assert!("inf".parse::<Measurement>().is_err());
    }

    #[test]
    fn test_negative_measurement_rejected() {
        let m = Measurement::feet_value(-1.0);
        assert!(matches!(m.inches(), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_serialization() {
        let m = Measurement::feet_value(6.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"value":6.0,"unit":"ft"}"#);

        let bare: Measurement = serde_json::from_str(r#"{"value":30.0}"#).unwrap();
        assert_eq!(bare.unit, LengthUnit::Inches);
    }
}
