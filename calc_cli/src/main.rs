//! # Transition CLI
//!
//! Command-line front end for the corner angle and rib layout calculators.
//! Results print as a readable cut list, or as JSON with `--json`; with
//! `--svg-dir` the side, top and isometric diagrams are written next to them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use calc_core::calculations::corner_angle::{self, CornerAngleInput};
use calc_core::calculations::rib_layout::{self, RibLayoutInput};
use calc_core::calculations::{calculate_item, BowlLayout, CalculationItem, CalculationOutput, Rib};
use calc_core::equations::generate_equations_markdown;
use calc_core::views::standard_views;
use calc_core::views::svg::{render_svg, SvgOptions};
use calc_core::Measurement;

mod prompt;
mod report;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version)]
#[command(about = "Corner angle and rib layout calculators for curved ramps and bowls", long_about = None)]
struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write side, top and isometric SVG diagrams into this directory
    #[arg(long, global = true, value_name = "DIR")]
    svg_dir: Option<PathBuf>,

    /// Rib to highlight in the SVG diagrams (1-based)
    #[arg(long, global = true, value_name = "N")]
    highlight_rib: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the corner angle that gives a desired top-edge chord
    Corner(CornerArgs),
    /// Lay out the ribs for one bowl corner
    Ribs(RibsArgs),
    /// Evaluate a JSON job file ({"type": "CornerAngle" | "RibLayout", ...})
    Run {
        /// Path to the job file
        file: PathBuf,
    },
    /// Enter rib layout values interactively
    Prompt,
    /// Print the equation reference as markdown
    Equations,
}

/// Lengths accept `72`, `72in`, `72"`, `6ft` or `6'`.
#[derive(Args, Debug)]
struct CornerArgs {
    /// Transition radius
    #[arg(long, default_value = "6ft")]
    radius: Measurement,

    /// Height the transition is cut off at
    #[arg(long, default_value = "4ft")]
    height: Measurement,

    /// Straight-line distance across the top edge (in)
    #[arg(long, default_value_t = 96.0)]
    chord: f64,

    /// Label for this corner
    #[arg(long)]
    label: Option<String>,
}

impl CornerArgs {
    fn to_input(&self) -> CornerAngleInput {
        CornerAngleInput {
            label: self.label.clone().unwrap_or_default(),
            radius: self.radius,
            height: self.height,
            chord_in: self.chord,
        }
    }
}

/// Lengths accept `72`, `72in`, `72"`, `6ft` or `6'`.
#[derive(Args, Debug)]
struct RibsArgs {
    /// Transition radius
    #[arg(long, default_value = "6ft")]
    radius: Measurement,

    /// Plan-view angle the corner turns (degrees)
    #[arg(long, default_value_t = 90.0)]
    corner_angle: f64,

    /// Number of sections (fans) the corner is split into
    #[arg(long, default_value_t = 4)]
    sections: u32,

    /// Center-to-center rib spacing along the arc (in)
    #[arg(long, default_value_t = 6.0)]
    spacing: f64,

    /// Height the transition is cut off at
    #[arg(long, default_value = "4ft")]
    max_height: Measurement,

    /// Support (rib backer) thickness (in)
    #[arg(long, default_value_t = 0.75)]
    support_thickness: f64,

    /// Rib stock thickness (in)
    #[arg(long, default_value_t = 0.75)]
    rib_thickness: f64,

    /// Label for this corner
    #[arg(long)]
    label: Option<String>,
}

impl RibsArgs {
    fn to_input(&self) -> RibLayoutInput {
        RibLayoutInput {
            label: self.label.clone().unwrap_or_default(),
            radius: self.radius,
            corner_angle_deg: self.corner_angle,
            num_sections: self.sections,
            rib_spacing_in: self.spacing,
            max_height: self.max_height,
            support_thickness_in: self.support_thickness,
            rib_thickness_in: self.rib_thickness,
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let output = match &cli.command {
        Commands::Corner(args) => CalculationOutput::CornerAngle(corner_angle::calculate(&args.to_input())?),
        Commands::Ribs(args) => CalculationOutput::RibLayout(rib_layout::calculate(&args.to_input())?),
        Commands::Run { file } => {
            let json = fs::read_to_string(file).with_context(|| format!("reading job file {}", file.display()))?;
            let item = CalculationItem::from_json(&json)?;
            info!(label = item.label(), calc_type = item.calc_type(), "running job");
            calculate_item(&item)?
        }
        Commands::Prompt => {
            let input = prompt::rib_layout_input()?;
            CalculationOutput::RibLayout(rib_layout::calculate(&input)?)
        }
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            return Ok(());
        }
    };

    if cli.json {
        report::print_json(&output)?;
    } else {
        print!("{}", report::render(&output));
    }

    if let Some(dir) = &cli.svg_dir {
        write_svgs(dir, &output, cli.highlight_rib)?;
        eprintln!("Diagrams written to {}", dir.display());
    }

    Ok(())
}

fn write_svgs(dir: &Path, output: &CalculationOutput, highlight_rib: Option<usize>) -> Result<()> {
    let (layout, ribs): (BowlLayout, Vec<Rib>) = match output {
        CalculationOutput::CornerAngle(result) => (result.layout(), Vec::new()),
        CalculationOutput::RibLayout(result) => (result.layout.clone(), result.ribs.clone()),
    };

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let options = SvgOptions {
        highlight_rib,
        ..SvgOptions::default()
    };
    for view in standard_views() {
        let drawing = view.render(&layout, &ribs);
        let path = dir.join(format!("{}.svg", view.name()));
        fs::write(&path, render_svg(&drawing, &options)).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), elements = drawing.elements.len(), "wrote diagram");
    }

    Ok(())
}
