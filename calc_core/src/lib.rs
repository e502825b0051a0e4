//! # calc_core - Transition Geometry Engine
//!
//! `calc_core` turns a handful of shop measurements (radius, height, corner
//! angle, section count, spacing, material thickness) into fabrication
//! numbers for curved ramp and bowl corners built from flat ribs: corner
//! angles, rib positions, rib lengths, and compound miter/bevel settings.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Each validation failure is its own variant
//! - **Views are separate**: Diagrams are derived from results, never the
//!   other way around
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::rib_layout::{calculate, RibLayoutInput};
//! use calc_core::format::format_inches;
//!
//! let result = calculate(&RibLayoutInput::default()).unwrap();
//! for rib in &result.ribs {
//!     println!("#{}: {}", rib.index, format_inches(rib.length_in));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Corner angle and rib layout calculators
//! - [`equations`] - The underlying closed-form formulas and their registry
//! - [`format`] - Nearest-1/16" fractions for cut lists
//! - [`units`] - Feet/inch normalization
//! - [`views`] - Side, top and isometric diagrams, SVG output
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod format;
pub mod units;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_item, CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use format::{format_fraction, format_inches};
pub use units::{LengthUnit, Measurement};
