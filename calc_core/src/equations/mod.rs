//! # Transition Equations
//!
//! Every closed-form formula used by the calculators lives here, as plain
//! unchecked `f64` functions. Having them in one place enables:
//! - Easy verification against hand calculations
//! - Documentation of sign conventions and domains
//! - Consistent implementation across both calculators
//!
//! Domain checks (height vs. radius, chord vs. diameter) belong to
//! [`crate::calculations`], which validates before calling into this module.
//!
//! ## Modules
//!
//! - [`arc`] - Arc angle, height, top radius, chord, arc length
//! - [`compound`] - Fan angle, rib length, compound miter and bevel
//! - [`registry`] - Equation metadata for the generated reference
//!
//! ## Conventions
//!
//! - **Lengths**: inches
//! - **Angles**: radians
//! - **Arc angle α**: 0 at the toe, increasing toward vertical

pub mod arc;
pub mod compound;
pub mod registry;

pub use arc::{
    angle_from_arc_length,
    arc_angle_from_height,
    arc_length,
    chord_from_corner_angle,
    corner_angle_from_chord,
    height_at_angle,
    top_radius,
};

pub use compound::{
    bevel_angle,
    fan_angle,
    miter_angle,
    raw_rib_length,
    thickness_per_rib,
};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
