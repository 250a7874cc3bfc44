use chrono::Local;
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use orbit_tone::params::{DISTANCE_RANGE, DURATION_MS_RANGE, ROTATION_RATE_RANGE};
use orbit_tone::render::{generate_filename, render_to_file};
use orbit_tone::{FormatTag, SynthesisParameters, Synthesizer};

/// Render a 440 Hz tone circling the listener's head into a stereo WAV file
#[derive(Parser, Debug)]
#[command(name = "orbit-tone")]
#[command(version, about, long_about = None)]
struct Args {
    /// Sound source distance in meters (0.1-10)
    #[arg(short, long, default_value = "1.0", value_parser = parse_distance)]
    distance: f64,

    /// Rotation speed in rotations per second (0.1-5)
    #[arg(short, long, default_value = "1.0", value_parser = parse_speed)]
    speed: f64,

    /// Sound duration in milliseconds (100-10000)
    #[arg(short = 't', long, default_value = "1000", value_parser = parse_duration)]
    duration: u32,

    /// Output WAV file
    #[arg(short, long, default_value = "output.wav", conflicts_with = "timestamped")]
    output: PathBuf,

    /// Name the output after the parameters and current time instead
    #[arg(long)]
    timestamped: bool,

    /// Directory for timestamped output
    #[arg(long, default_value = ".", requires = "timestamped")]
    output_dir: PathBuf,

    /// Write the IEEE float format tag (3) instead of the legacy PCM tag (1)
    #[arg(long)]
    float_tag: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_in_range(value: &str, range: &RangeInclusive<f64>) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !range.contains(&parsed) {
        return Err(format!(
            "must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
    Ok(parsed)
}

fn parse_distance(value: &str) -> Result<f64, String> {
    parse_in_range(value, &DISTANCE_RANGE)
}

fn parse_speed(value: &str) -> Result<f64, String> {
    parse_in_range(value, &ROTATION_RATE_RANGE)
}

fn parse_duration(value: &str) -> Result<u32, String> {
    let parsed: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of milliseconds", value))?;
    if !DURATION_MS_RANGE.contains(&parsed) {
        return Err(format!(
            "must be between {} and {}",
            DURATION_MS_RANGE.start(),
            DURATION_MS_RANGE.end()
        ));
    }
    Ok(parsed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let params = SynthesisParameters::new(args.distance, args.speed, args.duration);
    params.validate()?;

    let output_path = if args.timestamped {
        std::fs::create_dir_all(&args.output_dir)?;
        args.output_dir.join(generate_filename(&params, Local::now()))
    } else {
        args.output
    };

    let format_tag = if args.float_tag {
        FormatTag::IeeeFloat
    } else {
        FormatTag::Pcm
    };

    let report = render_to_file(
        &Synthesizer::default(),
        &params,
        &output_path,
        format_tag,
        args.verbose,
    )?;
    println!("File {} saved successfully", report.path.display());

    Ok(())
}
