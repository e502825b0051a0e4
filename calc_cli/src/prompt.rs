//! Interactive entry of rib layout values. Blank or unreadable answers keep
//! the default shown in brackets.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::warn;

use calc_core::calculations::RibLayoutInput;
use calc_core::Measurement;

fn prompt_value<T, R, W>(input: &mut R, out: &mut W, prompt: &str, default: T) -> Result<T>
where
    T: FromStr + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    write!(out, "{} [{}]: ", prompt, default)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(default);
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    match answer.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            warn!(prompt, answer, "could not parse answer, keeping default");
            Ok(default)
        }
    }
}

/// Ask for every rib layout value, starting from the library defaults.
pub fn read_rib_layout_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<RibLayoutInput> {
    let defaults = RibLayoutInput::default();

    writeln!(out, "Rib Layout Calculator")?;
    writeln!(out, "=====================")?;
    writeln!(out, "Lengths accept 72, 72in, 6ft or 6'.")?;
    writeln!(out)?;

    let radius: Measurement = prompt_value(input, out, "Transition radius", defaults.radius)?;
    let max_height: Measurement = prompt_value(input, out, "Max height", defaults.max_height)?;
    let corner_angle_deg = prompt_value(input, out, "Corner angle (deg)", defaults.corner_angle_deg)?;
    let num_sections = prompt_value(input, out, "Number of sections", defaults.num_sections)?;
    let rib_spacing_in = prompt_value(input, out, "Rib spacing (in)", defaults.rib_spacing_in)?;
    let support_thickness_in = prompt_value(input, out, "Support thickness (in)", defaults.support_thickness_in)?;
    let rib_thickness_in = prompt_value(input, out, "Rib thickness (in)", defaults.rib_thickness_in)?;
    writeln!(out)?;

    Ok(RibLayoutInput {
        label: defaults.label,
        radius,
        corner_angle_deg,
        num_sections,
        rib_spacing_in,
        max_height,
        support_thickness_in,
        rib_thickness_in,
    })
}

/// Prompt on the terminal.
pub fn rib_layout_input() -> Result<RibLayoutInput> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_rib_layout_input(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_blank_answers_keep_defaults() {
        let mut input = Cursor::new("\n\n\n\n\n\n\n");
        let mut out = Vec::new();
        let read = read_rib_layout_input(&mut input, &mut out).unwrap();

        let defaults = RibLayoutInput::default();
        assert_eq!(read.radius, defaults.radius);
        assert_eq!(read.num_sections, defaults.num_sections);
        assert_eq!(read.rib_thickness_in, defaults.rib_thickness_in);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Transition radius [6ft]: "));
        assert!(shown.contains("Number of sections [4]: "));
    }

    #[test]
    fn test_answers_parsed() {
        let mut input = Cursor::new("30in\n2ft\n60\n3\n4\n0.5\n1.5\n");
        let mut out = Vec::new();
        let read = read_rib_layout_input(&mut input, &mut out).unwrap();

        assert_eq!(read.radius.inches().unwrap(), 30.0);
        assert_eq!(read.max_height.inches().unwrap(), 24.0);
        assert_eq!(read.corner_angle_deg, 60.0);
        assert_eq!(read.num_sections, 3);
        assert_eq!(read.rib_spacing_in, 4.0);
        assert_eq!(read.support_thickness_in, 0.5);
        assert_eq!(read.rib_thickness_in, 1.5);
    }

    #[test]
    fn test_garbage_and_eof_fall_back() {
        let mut input = Cursor::new("lots\n");
        let mut out = Vec::new();
        let read = read_rib_layout_input(&mut input, &mut out).unwrap();
        assert_eq!(read.radius, RibLayoutInput::default().radius);
        assert_eq!(read.rib_spacing_in, 6.0);
    }
}
