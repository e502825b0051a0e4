//! # Shop Formatting
//!
//! Converts decimal inches into the tape-measure fractions used on a cut
//! list: nearest 1/16", reduced (`3/8`, never `6/16`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_fraction, format_inches};
//!
//! assert_eq!(format_fraction(3.5), "3-1/2");
//! assert_eq!(format_fraction(0.125), "1/8");
//! assert_eq!(format_inches(3.0), "3\"");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Denominator of the finest fraction shown.
pub const SIXTEENTHS: u64 = 16;

/// A length rounded to the nearest sixteenth, split into whole inches and a
/// reduced fraction. Display-only; derive it from a decimal value when
/// needed rather than storing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalLength {
    pub negative: bool,
    /// Whole inches, a non-negative integer. Kept as `f64` so lengths past
    /// `u64` range still round-trip.
    pub whole: f64,
    pub numerator: u64,
    /// 1 when there is no fractional part
    pub denominator: u64,
}

impl FractionalLength {
    /// Round `inches` to the nearest 1/16 and reduce the remainder.
    ///
    /// A remainder that rounds up to 16/16 carries into the whole inches.
    /// Negative values keep their magnitude and set `negative`.
    ///
    /// Rejects non-finite input, and magnitudes whose sixteenths overflow
    /// `f64` (beyond about 1e307 inches).
    pub fn from_inches(inches: f64) -> CalcResult<Self> {
        // Integral at every magnitude, so the split below is exact
        let sixteenths = (inches.abs() * SIXTEENTHS as f64).round();
        if !sixteenths.is_finite() {
            return Err(CalcError::invalid_input(
                "inches",
                inches.to_string(),
                "Value must be a finite number of sixteenths",
            ));
        }
        let whole = (sixteenths / SIXTEENTHS as f64).floor();
        let mut numerator = (sixteenths - whole * SIXTEENTHS as f64) as u64;
        let mut denominator = SIXTEENTHS;

        if numerator == 0 {
            denominator = 1;
        } else {
            while numerator % 2 == 0 && denominator % 2 == 0 {
                numerator /= 2;
                denominator /= 2;
            }
        }

        Ok(Self {
            negative: inches < 0.0 && sixteenths > 0.0,
            whole,
            numerator,
            denominator,
        })
    }

    /// Decimal inches represented by this fraction.
    pub fn to_inches(&self) -> f64 {
        let magnitude = self.whole + self.numerator as f64 / self.denominator as f64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn has_fraction(&self) -> bool {
        self.numerator != 0
    }
}

impl fmt::Display for FractionalLength {
    /// `W`, `N/D` or `W-N/D`, with a leading `-` for negative lengths.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match (self.whole, self.has_fraction()) {
            (whole, false) => write!(f, "{}", whole),
            (whole, true) if whole == 0.0 => write!(f, "{}/{}", self.numerator, self.denominator),
            (whole, true) => write!(f, "{}-{}/{}", whole, self.numerator, self.denominator),
        }
    }
}

impl FromStr for FractionalLength {
    type Err = CalcError;

    /// Parses the forms produced by `Display` (an optional trailing `"` is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalcError::invalid_input("fraction", s, "Expected W, N/D or W-N/D");

        let text = s.trim().trim_end_matches('"');
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole_part, fraction_part) = match text.split_once('-') {
            Some((whole, fraction)) => (Some(whole), Some(fraction)),
            None if text.contains('/') => (None, Some(text)),
            None => (Some(text), None),
        };

        let whole = match whole_part {
            Some(w) if !w.is_empty() && w.bytes().all(|b| b.is_ascii_digit()) => {
                w.parse::<f64>().map_err(|_| invalid())?
            }
            Some(_) => return Err(invalid()),
            None => 0.0,
        };
        let (numerator, denominator) = match fraction_part {
            Some(frac) => {
                let (n, d) = frac.split_once('/').ok_or_else(invalid)?;
                let n = n.parse::<u64>().map_err(|_| invalid())?;
                let d = d.parse::<u64>().map_err(|_| invalid())?;
                if d == 0 {
                    return Err(invalid());
                }
                (n, d)
            }
            None => (0, 1),
        };

        Ok(Self {
            negative,
            whole,
            numerator,
            denominator,
        })
    }
}

/// Nearest-1/16" display string for a decimal length, without the inch mark.
///
/// Forms: `"3"`, `"3/8"`, `"3-3/8"`. Non-finite values print as-is
/// (`NaN`, `inf`) since there is no fraction to show.
pub fn format_fraction(inches: f64) -> String {
    match FractionalLength::from_inches(inches) {
        Ok(fraction) => fraction.to_string(),
        Err(_) => inches.to_string(),
    }
}

/// [`format_fraction`] with a trailing inch mark: `3-3/8"`.
pub fn format_inches(inches: f64) -> String {
    format!("{}\"", format_fraction(inches))
}

/// One decimal place and a degree sign: `15.0°`.
pub fn format_degrees(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

/// Parse a string produced by [`format_fraction`] back to decimal inches.
pub fn parse_fraction(s: &str) -> CalcResult<f64> {
    Ok(s.parse::<FractionalLength>()?.to_inches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(format_fraction(3.0), "3");
        assert_eq!(format_fraction(3.5), "3-1/2");
        assert_eq!(format_fraction(0.125), "1/8");
        assert_eq!(format_fraction(3.375), "3-3/8");
        assert_eq!(format_fraction(0.0625), "1/16");
        assert_eq!(format_fraction(0.0), "0");
    }

    #[test]
    fn test_carry_into_whole() {
        // 3.9999 × 16 = 63.998, rounds to 64 sixteenths
        assert_eq!(format_fraction(3.9999), "4");
        assert_eq!(format_fraction(0.99), "1");
    }

    #[test]
    fn test_rounds_to_nearest_sixteenth() {
        // 41.083 × 16 = 657.33 → 657 = 41 + 1/16
        assert_eq!(format_fraction(41.083), "41-1/16");
        // 10.23 × 16 = 163.68 → 164 = 10 + 4/16
        assert_eq!(format_fraction(10.23), "10-1/4");
    }

    #[test]
    fn test_negative_lengths() {
        assert_eq!(format_fraction(-0.25), "-1/4");
        assert_eq!(format_fraction(-1.5), "-1-1/2");
        // Rounds to zero: no sign
        assert_eq!(format_fraction(-0.01), "0");
    }

    #[test]
    fn test_format_inches_and_degrees() {
        assert_eq!(format_inches(12.75), "12-3/4\"");
        assert_eq!(format_degrees(14.9876), "15.0°");
        assert_eq!(format_degrees(7.26), "7.3°");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse_fraction("3").unwrap(), 3.0);
        assert_eq!(parse_fraction("3/8").unwrap(), 0.375);
        assert_eq!(parse_fraction("3-3/8\"").unwrap(), 3.375);
        assert_eq!(parse_fraction("-1-1/2").unwrap(), -1.5);
        assert!(parse_fraction("3-").is_err());
        assert!(parse_fraction("1/0").is_err());
        assert!(parse_fraction("abc").is_err());
    }

    #[test]
    fn test_round_trip_within_a_thirty_second() {
        let mut x: f64 = 0.0;
        while x < 120.0 {
            let expected = (x * 16.0).round() / 16.0;
            let parsed = parse_fraction(&format_fraction(x)).unwrap();
            assert!(
                (parsed - expected).abs() <= 1.0 / 32.0,
                "{} formatted as {} parsed back to {}",
                x,
                format_fraction(x),
                parsed
            );
            x += 0.0137;
        }
    }

    #[test]
    fn test_fraction_always_reduced() {
        for sixteenths in 0..64u64 {
            let frac = FractionalLength::from_inches(sixteenths as f64 / 16.0).unwrap();
            if frac.has_fraction() {
                assert!(frac.numerator % 2 == 1, "{} not reduced", frac);
            } else {
                assert_eq!(frac.denominator, 1);
            }
        }
    }

    #[test]
    fn test_large_values_round_trip() {
        assert_eq!(format_fraction(1e20), "100000000000000000000");
        assert_eq!(parse_fraction(&format_fraction(1e20)).unwrap(), 1e20);

        let big = 9_007_199_254_740.5;
        assert_eq!(format_fraction(big), "9007199254740-1/2");
        assert_eq!(parse_fraction(&format_fraction(big)).unwrap(), big);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(FractionalLength::from_inches(f64::NAN).is_err());
        assert!(FractionalLength::from_inches(f64::INFINITY).is_err());
        assert!(FractionalLength::from_inches(f64::MAX).is_err());
        assert_eq!(format_fraction(f64::INFINITY), "inf");
        assert!(parse_fraction("inf").is_err());
        assert!(parse_fraction("1e3").is_err());
    }
}
