//! # Equation Registry
//!
//! Central registry of every formula the calculators use. Each equation has
//! metadata (formula text, variables, assumptions, and the function that
//! implements it) so the math can be audited in one place.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Equation;
//!
//! let meta = Equation::ArcAngleFromHeight.metadata();
//! assert_eq!(meta.source_function, "arc_angle_from_height");
//! println!("Formula: {}", meta.formula);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Arc angle, height, and horizontal distance on the transition
    ArcGeometry,
    /// Plan-view quantities across the corner (chord, corner angle)
    CornerLayout,
    /// Rib positions and lengths
    RibGeometry,
    /// Saw settings for the rib end cuts
    CompoundCuts,
    /// Display rounding
    Formatting,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ArcGeometry => "Arc Geometry",
            EquationCategory::CornerLayout => "Corner Layout",
            EquationCategory::RibGeometry => "Rib Geometry",
            EquationCategory::CompoundCuts => "Compound Cuts",
            EquationCategory::Formatting => "Formatting",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::ArcGeometry => 1,
            EquationCategory::CornerLayout => 2,
            EquationCategory::RibGeometry => 3,
            EquationCategory::CompoundCuts => 4,
            EquationCategory::Formatting => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "R", "α", "φ")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "in", "rad")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula: &'static str,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Domain restrictions or assumptions
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula used by the corner angle and rib calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Arc Geometry
    // -------------------------------------------------------------------------
    /// α = acos(1 − h/R)
    ArcAngleFromHeight,
    /// h = R(1 − cos α)
    HeightAtAngle,
    /// t = R sin α
    TopRadius,
    /// s = Rα
    ArcLength,
    /// α = s / R
    AngleFromArcLength,

    // -------------------------------------------------------------------------
    // Corner Layout
    // -------------------------------------------------------------------------
    /// θ = 2 asin(c / 2t)
    CornerAngleFromChord,
    /// c = 2t sin(θ/2)
    TopChord,
    /// φ = Θ / n
    FanAngle,

    // -------------------------------------------------------------------------
    // Rib Geometry
    // -------------------------------------------------------------------------
    /// Δ = (n − 1)w / n
    ThicknessPerRib,
    /// L = 2d tan(φ/2) − Δ
    RibLength,

    // -------------------------------------------------------------------------
    // Compound Cuts
    // -------------------------------------------------------------------------
    /// bevel = atan(tan(φ/2) cos α)
    BevelAngle,
    /// miter = asin(sin(φ/2) sin α)
    MiterAngle,

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------
    /// x ≈ round(16x) / 16
    NearestSixteenth,
}

/// All registered equations, in document order.
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::ArcAngleFromHeight,
    Equation::HeightAtAngle,
    Equation::TopRadius,
    Equation::ArcLength,
    Equation::AngleFromArcLength,
    Equation::CornerAngleFromChord,
    Equation::TopChord,
    Equation::FanAngle,
    Equation::ThicknessPerRib,
    Equation::RibLength,
    Equation::BevelAngle,
    Equation::MiterAngle,
    Equation::NearestSixteenth,
];

impl Equation {
    /// Get the full metadata for this equation.
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ArcAngleFromHeight => EquationMetadata {
                name: "Arc Angle from Height",
                description: "Angle swept from the toe to reach a given height on the transition",
                formula: "α = acos(1 - h/R)",
                variables: vec![
                    Variable::new("α", "Arc angle from the toe", "rad"),
                    Variable::new("h", "Height above the ground", "in"),
                    Variable::new("R", "Transition radius", "in"),
                ],
                assumptions: vec!["0 ≤ h ≤ R, rejected otherwise", "Result lies in [0, π/2]"],
                category: EquationCategory::ArcGeometry,
                source_module: "equations/arc.rs",
                source_function: "arc_angle_from_height",
            },

            Equation::HeightAtAngle => EquationMetadata {
                name: "Height at Arc Angle",
                description: "Height above the ground of the point at arc angle α",
                formula: "h = R(1 - cos α)",
                variables: vec![
                    Variable::new("h", "Height above the ground", "in"),
                    Variable::new("R", "Transition radius", "in"),
                    Variable::new("α", "Arc angle from the toe", "rad"),
                ],
                assumptions: vec!["Circle center directly above the toe"],
                category: EquationCategory::ArcGeometry,
                source_module: "equations/arc.rs",
                source_function: "height_at_angle",
            },

            Equation::TopRadius => EquationMetadata {
                name: "Top Radius",
                description: "Horizontal distance from the toe to the point at arc angle α",
                formula: "t = R sin α",
                variables: vec![
                    Variable::new("t", "Horizontal distance from the toe", "in"),
                    Variable::new("R", "Transition radius", "in"),
                    Variable::new("α", "Arc angle from the toe", "rad"),
                ],
                assumptions: vec![],
                category: EquationCategory::ArcGeometry,
                source_module: "equations/arc.rs",
                source_function: "top_radius",
            },

            Equation::ArcLength => EquationMetadata {
                name: "Arc Length",
                description: "Distance along the curve from the toe to arc angle α",
                formula: "s = Rα",
                variables: vec![
                    Variable::new("s", "Arc length from the toe", "in"),
                    Variable::new("R", "Transition radius", "in"),
                    Variable::new("α", "Arc angle from the toe", "rad"),
                ],
                assumptions: vec![],
                category: EquationCategory::ArcGeometry,
                source_module: "equations/arc.rs",
                source_function: "arc_length",
            },

            Equation::AngleFromArcLength => EquationMetadata {
                name: "Arc Angle from Arc Length",
                description: "Arc angle reached after walking s along the curve from the toe",
                formula: "α = s / R",
                variables: vec![
                    Variable::new("α", "Arc angle from the toe", "rad"),
                    Variable::new("s", "Arc length from the toe", "in"),
                    Variable::new("R", "Transition radius", "in"),
                ],
                assumptions: vec![],
                category: EquationCategory::ArcGeometry,
                source_module: "equations/arc.rs",
                source_function: "angle_from_arc_length",
            },

            Equation::CornerAngleFromChord => EquationMetadata {
                name: "Corner Angle from Chord",
                description: "Plan-view corner angle whose top edge spans the given straight-line distance",
                formula: "θ = 2 asin(c / 2t)",
                variables: vec![
                    Variable::new("θ", "Corner angle", "rad"),
                    Variable::new("c", "Top chord (straight-line distance)", "in"),
                    Variable::new("t", "Top radius", "in"),
                ],
                assumptions: vec!["c ≤ 2t, rejected otherwise", "Result lies in [0, π]"],
                category: EquationCategory::CornerLayout,
                source_module: "equations/arc.rs",
                source_function: "corner_angle_from_chord",
            },

            Equation::TopChord => EquationMetadata {
                name: "Top Chord",
                description: "Straight-line distance across the corner at the top edge",
                formula: "c = 2t sin(θ/2)",
                variables: vec![
                    Variable::new("c", "Top chord", "in"),
                    Variable::new("t", "Top radius", "in"),
                    Variable::new("θ", "Corner angle", "rad"),
                ],
                assumptions: vec![],
                category: EquationCategory::CornerLayout,
                source_module: "equations/arc.rs",
                source_function: "chord_from_corner_angle",
            },

            Equation::FanAngle => EquationMetadata {
                name: "Fan Angle",
                description: "Angle between adjacent supports when the corner is split into n sections",
                formula: "φ = Θ / n",
                variables: vec![
                    Variable::new("φ", "Fan angle", "rad"),
                    Variable::new("Θ", "Corner angle", "rad"),
                    Variable::new("n", "Number of sections", "-"),
                ],
                assumptions: vec!["n ≥ 1", "Sections are equal"],
                category: EquationCategory::CornerLayout,
                source_module: "equations/compound.rs",
                source_function: "fan_angle",
            },

            Equation::ThicknessPerRib => EquationMetadata {
                name: "Support Deduction per Rib",
                description: "Interior support thickness spread evenly over the ribs of one row",
                formula: "Δ = (n - 1)w / n",
                variables: vec![
                    Variable::new("Δ", "Length deducted from each rib", "in"),
                    Variable::new("n", "Number of sections", "-"),
                    Variable::new("w", "Support thickness", "in"),
                ],
                assumptions: vec!["Only the n - 1 interior supports are shared between ribs"],
                category: EquationCategory::RibGeometry,
                source_module: "equations/compound.rs",
                source_function: "thickness_per_rib",
            },

            Equation::RibLength => EquationMetadata {
                name: "Rib Length",
                description: "Cut length of one rib spanning a fan section",
                formula: "L = 2d tan(φ/2) - Δ",
                variables: vec![
                    Variable::new("L", "Rib length", "in"),
                    Variable::new("d", "Horizontal distance from the toe, R sin α", "in"),
                    Variable::new("φ", "Fan angle", "rad"),
                    Variable::new("Δ", "Support deduction per rib", "in"),
                ],
                assumptions: vec!["Near the toe the deduction can exceed the raw length"],
                category: EquationCategory::RibGeometry,
                source_module: "equations/compound.rs",
                source_function: "raw_rib_length",
            },

            Equation::BevelAngle => EquationMetadata {
                name: "Bevel Angle",
                description: "Blade tilt for the rib end cut",
                formula: "bevel = atan(tan(φ/2) cos α)",
                variables: vec![
                    Variable::new("φ", "Fan angle", "rad"),
                    Variable::new("α", "Arc angle at the rib", "rad"),
                ],
                assumptions: vec!["Rib face tangent to the curve"],
                category: EquationCategory::CompoundCuts,
                source_module: "equations/compound.rs",
                source_function: "bevel_angle",
            },

            Equation::MiterAngle => EquationMetadata {
                name: "Miter Angle",
                description: "Table rotation for the rib end cut",
                formula: "miter = asin(sin(φ/2) sin α)",
                variables: vec![
                    Variable::new("φ", "Fan angle", "rad"),
                    Variable::new("α", "Arc angle at the rib", "rad"),
                ],
                assumptions: vec!["Rib face tangent to the curve"],
                category: EquationCategory::CompoundCuts,
                source_module: "equations/compound.rs",
                source_function: "miter_angle",
            },

            Equation::NearestSixteenth => EquationMetadata {
                name: "Nearest Sixteenth",
                description: "Rounds a decimal length to the nearest 1/16\" and reduces the fraction",
                formula: "x ≈ round(16x) / 16",
                variables: vec![Variable::new("x", "Decimal length", "in")],
                assumptions: vec!["16/16 carries into the whole inches"],
                category: EquationCategory::Formatting,
                source_module: "format.rs",
                source_function: "format_fraction",
            },
        }
    }

    /// All equations belonging to `category`, in document order.
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, sorted for the reference document.
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Formatting, CompoundCuts, RibGeometry, CornerLayout, ArcGeometry];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Render the full equation reference as markdown.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Transition Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Print with: `calc_cli equations`

This document lists every formula used by the corner angle and rib
calculators. Lengths are in inches and angles in radians unless noted.

## Conventions

| Quantity | Convention |
|----------|------------|
| Arc angle α | 0 at the toe, π/2 where the transition goes vertical |
| Corner angle Θ | Measured in plan view at the toe |
| Distance from top | Measured down the curve from the top edge |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 13);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let bevel = Equation::BevelAngle.metadata();
        assert!(bevel.formula.contains("atan(tan(φ/2) cos α)"));
    }

    #[test]
    fn test_categories_sorted_and_complete() {
        let cats = Equation::all_categories();
        assert_eq!(cats.first(), Some(&EquationCategory::ArcGeometry));
        assert_eq!(cats.last(), Some(&EquationCategory::Formatting));

        let counted: usize = cats.iter().map(|c| Equation::in_category(*c).len()).sum();
        assert_eq!(counted, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "missing {:?}", eq);
        }
        assert!(md.contains("**Total Equations:** 13"));
    }
}
