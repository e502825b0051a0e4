//! Text and JSON output for calculation results.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use calc_core::calculations::{CalculationOutput, CornerAngleResult, RibLayoutResult};
use calc_core::format::{format_degrees, format_inches};
use calc_core::CalcError;

const RULE: &str = "═══════════════════════════════════════";

/// Error shape printed with `--json`.
#[derive(Serialize)]
struct ErrorReport<'a> {
    code: &'static str,
    message: String,
    error: &'a CalcError,
}

/// Informational condition attached to an otherwise successful output.
pub fn notice(output: &CalculationOutput) -> Option<CalcError> {
    match output {
        CalculationOutput::RibLayout(result) if result.no_ribs_fit() => {
            result.clone().require_ribs().err().filter(CalcError::is_informational)
        }
        _ => None,
    }
}

/// The output as JSON, with a `notice` object (`code`, `message`) when
/// [`notice`] reports one.
pub fn json_report(output: &CalculationOutput) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(output)?;
    if let (Some(notice), Some(object)) = (notice(output), value.as_object_mut()) {
        object.insert(
            "notice".to_string(),
            serde_json::json!({
                "code": notice.error_code(),
                "message": notice.to_string(),
            }),
        );
    }
    Ok(value)
}

pub fn print_json(output: &CalculationOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&json_report(output)?)?);
    Ok(())
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    match err.downcast_ref::<CalcError>() {
        Some(calc) if json => {
            let report = ErrorReport {
                code: calc.error_code(),
                message: calc.to_string(),
                error: calc,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(text) => eprintln!("{}", text),
                Err(_) => eprintln!("Error: {}", calc),
            }
        }
        _ => eprintln!("Error: {:#}", err),
    }
}

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Human-readable report for any calculation output.
pub fn render(output: &CalculationOutput) -> String {
    match output {
        CalculationOutput::CornerAngle(result) => render_corner(result),
        CalculationOutput::RibLayout(result) => render_ribs(result),
    }
}

pub fn render_corner(result: &CornerAngleResult) -> String {
    let mut out = String::new();

    banner(&mut out, "CORNER ANGLE");
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Radius:     {}", format_inches(result.radius_in));
    let _ = writeln!(out, "  Height:     {}", format_inches(result.height_in));
    let _ = writeln!(out, "  Top chord:  {}", format_inches(result.chord_in));
    let _ = writeln!(out);
    let _ = writeln!(out, "Geometry:");
    let _ = writeln!(out, "  Arc angle at height: {}", format_degrees(result.alpha_deg()));
    let _ = writeln!(out, "  Top radius:          {}", format_inches(result.top_radius_in));
    let _ = writeln!(out);
    banner(&mut out, &format!("CORNER ANGLE: {}", format_degrees(result.corner_angle_deg())));

    out
}

pub fn render_ribs(result: &RibLayoutResult) -> String {
    let layout = &result.layout;
    let mut out = String::new();

    banner(&mut out, "RIB LAYOUT");
    let _ = writeln!(out);
    let _ = writeln!(out, "Layout:");
    let _ = writeln!(out, "  Radius:            {}", format_inches(layout.radius_in));
    let _ = writeln!(out, "  Max height:        {}", format_inches(layout.max_height_in));
    let _ = writeln!(out, "  Max arc angle:     {}", format_degrees(layout.alpha_max_deg()));
    let _ = writeln!(
        out,
        "  Corner angle:      {} in {} sections",
        format_degrees(layout.corner_angle_deg()),
        layout.num_sections
    );
    let _ = writeln!(out, "  Fan angle:         {}", format_degrees(layout.fan_angle_deg()));
    let _ = writeln!(out, "  Top radius:        {}", format_inches(layout.top_radius_in));
    let _ = writeln!(out, "  Top chord:         {}", format_inches(layout.top_chord_in));
    let _ = writeln!(out, "  Arc length:        {}", format_inches(layout.total_arc_length_in));
    let _ = writeln!(out, "  Support per rib:   {}", format_inches(layout.thickness_per_rib_in));
    let _ = writeln!(out);

    if result.no_ribs_fit() {
        if let Err(notice) = result.clone().require_ribs() {
            let _ = writeln!(out, "{}", notice);
        }
        return out;
    }

    let _ = writeln!(
        out,
        "  {:>3}  {:>10}  {:>10}  {:>10}  {:>7}  {:>7}",
        "#", "From top", "Height", "Length", "Miter", "Bevel"
    );
    for rib in &result.ribs {
        let _ = writeln!(
            out,
            "  {:>3}  {:>10}  {:>10}  {:>10}  {:>7}  {:>7}",
            rib.index,
            format_inches(rib.distance_from_top_in),
            format_inches(rib.height_in),
            format_inches(rib.length_in),
            format_degrees(rib.miter_deg),
            format_degrees(rib.bevel_deg)
        );
    }

    let unbuildable: Vec<usize> = result.unbuildable_ribs().map(|rib| rib.index).collect();
    if !unbuildable.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[CHECK] support deduction leaves nothing to cut on ribs {:?}", unbuildable);
    }

    let _ = writeln!(out);
    banner(
        &mut out,
        &format!(
            "{} RIBS x {} SECTIONS, {} OF STOCK",
            result.ribs.len(),
            layout.num_sections,
            format_inches(result.total_rib_stock_in())
        ),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::corner_angle::{self, CornerAngleInput};
    use calc_core::calculations::rib_layout::{self, RibLayoutInput};
    use calc_core::Measurement;

    fn example_bowl() -> RibLayoutInput {
        RibLayoutInput {
            radius: Measurement::inches_value(30.0),
            num_sections: 3,
            max_height: Measurement::inches_value(24.0),
            ..RibLayoutInput::default()
        }
    }

    #[test]
    fn test_rib_report_lists_every_rib() {
        let result = rib_layout::calculate(&example_bowl()).unwrap();
        let text = render_ribs(&result);

        assert!(text.contains("RIB LAYOUT"));
        assert!(text.contains("7 RIBS x 3 SECTIONS"));
        // First rib sits one rib thickness below the top
        assert!(text.contains("3/4\""));
        let rows = text
            .lines()
            .filter(|l| l.trim_start().starts_with(char::is_numeric) && l.contains('°'))
            .count();
        assert_eq!(rows, 7);
    }

    #[test]
    fn test_rib_report_no_ribs() {
        let input = RibLayoutInput {
            rib_thickness_in: 100.0,
            ..example_bowl()
        };
        let result = rib_layout::calculate(&input).unwrap();
        let text = render_ribs(&result);
        assert!(text.contains("No ribs fit"));
        assert!(!text.contains("SECTIONS"));
    }

    #[test]
    fn test_json_carries_no_ribs_fit_code() {
        let input = RibLayoutInput {
            rib_thickness_in: 100.0,
            ..example_bowl()
        };
        let output = CalculationOutput::RibLayout(rib_layout::calculate(&input).unwrap());
        let value = json_report(&output).unwrap();

        assert_eq!(value["type"], "RibLayout");
        assert_eq!(value["ribs"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["notice"]["code"], "no-ribs-fit");
        assert!(value["notice"]["message"].as_str().unwrap().contains("No ribs fit"));
    }

    #[test]
    fn test_json_without_notice() {
        let output = CalculationOutput::RibLayout(rib_layout::calculate(&example_bowl()).unwrap());
        let value = json_report(&output).unwrap();
        assert!(value.get("notice").is_none());
        assert_eq!(value["ribs"].as_array().map(Vec::len), Some(7));
        assert!(notice(&output).is_none());
    }

    #[test]
    fn test_corner_report() {
        let input = CornerAngleInput {
            radius: Measurement::inches_value(30.0),
            height: Measurement::inches_value(30.0),
            chord_in: 60.0,
            ..CornerAngleInput::default()
        };
        let result = corner_angle::calculate(&input).unwrap();
        let text = render_corner(&result);
        assert!(text.contains("CORNER ANGLE: 180.0°"));
        assert!(text.contains("Top radius:          30\""));
    }
}
