//! # Error Types
//!
//! Structured error types for calc_core. Each validation failure the
//! calculators can report has its own variant, so a caller (or a test) can
//! tell a ramp that is too tall from a chord that is too wide without
//! parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_in: f64) -> CalcResult<()> {
//!     if spacing_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "rib_spacing_in",
//!             spacing_in.to_string(),
//!             "Rib spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The ramp height (or max height) is taller than the transition radius.
    #[error("Height cannot exceed radius: height {height_in:.3}\" > radius {radius_in:.3}\"")]
    HeightExceedsRadius { height_in: f64, radius_in: f64 },

    /// The requested top chord is wider than the diameter available at the top.
    #[error(
        "Top straight line distance is too large for this radius and height: chord {chord_in:.3}\" > {max_chord_in:.3}\""
    )]
    ChordTooWide { chord_in: f64, max_chord_in: f64 },

    /// Rib generation produced no ribs.
    #[error(
        "No ribs fit within the specified dimensions: rib thickness {rib_thickness_in:.3}\" >= arc length {total_arc_length_in:.3}\""
    )]
    NoRibsFit {
        rib_thickness_in: f64,
        total_arc_length_in: f64,
    },

    /// An input value is invalid (non-finite, negative, zero where positive is required)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a HeightExceedsRadius error
    pub fn height_exceeds_radius(height_in: f64, radius_in: f64) -> Self {
        CalcError::HeightExceedsRadius { height_in, radius_in }
    }

    /// Create a ChordTooWide error
    pub fn chord_too_wide(chord_in: f64, max_chord_in: f64) -> Self {
        CalcError::ChordTooWide { chord_in, max_chord_in }
    }

    /// Create a NoRibsFit error
    pub fn no_ribs_fit(rib_thickness_in: f64, total_arc_length_in: f64) -> Self {
        CalcError::NoRibsFit {
            rib_thickness_in,
            total_arc_length_in,
        }
    }

    /// Informational outcomes still carry meaningful layout values; the
    /// presentation layer may show them next to the message.
    pub fn is_informational(&self) -> bool {
        matches!(self, CalcError::NoRibsFit { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::HeightExceedsRadius { .. } => "height-exceeds-radius",
            CalcError::ChordTooWide { .. } => "chord-too-wide",
            CalcError::NoRibsFit { .. } => "no-ribs-fit",
            CalcError::InvalidInput { .. } => "invalid-input",
            CalcError::SerializationError { .. } => "serialization-error",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::height_exceeds_radius(72.01, 72.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"HeightExceedsRadius\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::height_exceeds_radius(2.0, 1.0).error_code(), "height-exceeds-radius");
        assert_eq!(CalcError::chord_too_wide(10.0, 8.0).error_code(), "chord-too-wide");
        assert_eq!(CalcError::no_ribs_fit(50.0, 41.0).error_code(), "no-ribs-fit");
        assert_eq!(CalcError::invalid_input("x", "NaN", "bad").error_code(), "invalid-input");
    }

    #[test]
    fn test_only_no_ribs_is_informational() {
        assert!(CalcError::no_ribs_fit(1.0, 0.5).is_informational());
        assert!(!CalcError::chord_too_wide(10.0, 8.0).is_informational());
        assert!(!CalcError::height_exceeds_radius(2.0, 1.0).is_informational());
    }

    #[test]
    fn test_messages_name_the_cause() {
        let msg = CalcError::height_exceeds_radius(80.0, 72.0).to_string();
        assert!(msg.starts_with("Height cannot exceed radius"));

        let msg = CalcError::no_ribs_fit(50.0, 41.0).to_string();
        assert!(msg.starts_with("No ribs fit"));
    }

    #[test]
    fn test_from_json_error() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "serialization-error");
    }
}
