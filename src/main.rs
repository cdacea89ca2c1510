// main.rs
//
// Command-line front end: gathers the viewing inputs from flags, prints the
// recommended distance and mounting height, and optionally the calculation
// breakdown, a JSON record, or an SVG side view.

use std::io::IsTerminal;
#[cfg(feature = "svg-io")]
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use tvmount::config::{Defaults, InputLimits};
use tvmount::float_types::Real;
use tvmount::{Breakdown, DistanceSource, DistanceStrategy, MountingMode, ViewingInputs, calculate};

#[cfg(feature = "svg-io")]
use tvmount::diagram::SideView;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ideal TV viewing distance and mounting height")]
struct Args {
    /// TV diagonal in inches (32-120)
    #[arg(long, short = 's', default_value_t = Defaults::STANDARD.tv_size_inch)]
    size: u32,
    /// Seated eye height above the floor in cm (50-150)
    #[arg(long, short = 'e', default_value_t = Defaults::STANDARD.eye_level_cm)]
    eye_level: Real,
    /// Distance strategy: a field of view (30, 36, 40, smpte, thx, cinema) or `heuristic`
    #[arg(long, short = 'f')]
    fov: DistanceStrategy,
    /// Your actual viewing distance in metres (0.5-10), overrides the recommendation
    #[arg(long, short = 'd')]
    distance: Option<Real>,
    /// Mounting style: ergonomic or reclined
    #[arg(long, short = 'm', default_value_t = MountingMode::Ergonomic)]
    mode: MountingMode,
    /// Clamp out-of-range measurements instead of rejecting them
    #[arg(long)]
    clamp: bool,
    /// Print the calculation breakdown
    #[arg(long)]
    breakdown: bool,
    /// Print the inputs and result as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write an SVG side view of the room to this path
    #[cfg(feature = "svg-io")]
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Width of the SVG in pixels
    #[cfg(feature = "svg-io")]
    #[arg(long, default_value_t = 800)]
    svg_width: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let mut inputs = ViewingInputs::new(args.fov)
        .with_tv_size(args.size)
        .with_eye_level(args.eye_level)
        .with_manual_distance(args.distance)
        .with_mounting_mode(args.mode);

    if args.clamp {
        let clamped = inputs.clamped(&InputLimits::STANDARD);
        if clamped != inputs {
            warn!(?inputs, ?clamped, "clamped out-of-range inputs");
        }
        inputs = clamped;
    }
    debug!(?inputs, "parsed inputs");

    let result = calculate(&inputs).context("cannot compute viewing geometry")?;
    info!(distance_m = result.distance_m, center_cm = result.tv_center_height_cm, "done");

    if args.json {
        let record = serde_json::json!({ "inputs": inputs, "result": result });
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}: {:.2} m", result.distance_source.label(), result.distance_m);
        println!("Ideal Centre Height: {:.1} cm", result.tv_center_height_cm);
        println!("Bottom Edge Height: {:.1} cm", result.tv_bottom_height_cm);
        println!(
            "Viewing Angles: {:.1}° vertical, {:.1}° horizontal",
            result.vertical_angle_deg, result.horizontal_angle_deg
        );
        if result.distance_source == DistanceSource::Manual {
            println!(
                "Note: the recommended distance for this TV size is {:.2} m.",
                result.recommended_distance_m
            );
        }
        println!("Measure from the floor to the exact center of the TV screen.");
        if args.breakdown {
            println!();
            println!("{}", Breakdown::new(&inputs, &result));
        }
    }

    #[cfg(feature = "svg-io")]
    {
        if let Some(path) = &args.svg {
            let svg = SideView::new(&inputs, &result).to_svg(args.svg_width);
            fs::write(path, svg).with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote side view");
        }
    }

    Ok(())
}
