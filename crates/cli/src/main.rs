#![deny(unsafe_code)]
//! CLI binary for the nutil geometry and color toolkit.
//!
//! Subcommands:
//! - `intersect` — ray/ellipsoid intersection
//! - `spherical <r> <theta> <phi>` — spherical to Cartesian
//! - `color <op> <hex>` — apply or compare a color transform
//! - `stamp` — stamp non-overlapping markers and write a PNG
//! - `duration <ms>` — format milliseconds

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use nutil_core::params::{param_color, param_f64, param_vector};
use nutil_core::{
    color_length, color_scale, color_scale2, colors_are_close, from_spherical, gamma,
    greyscale_intensity, intersect_ellipsoid, parse_vector, stamp_markers, Color, PixelAccess,
    PixelBuffer, Stopwatch, Vector3, Xorshift64,
};
use nutil_raster::snapshot::{read_png, write_png};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nutil", about = "Geometry and color math toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Intersect a ray with an origin-centered, axis-aligned ellipsoid.
    Intersect {
        /// Ray origin as "x,y,z".
        #[arg(long, allow_hyphen_values = true)]
        origin: String,

        /// Ray direction as "x,y,z".
        #[arg(long, allow_hyphen_values = true)]
        direction: String,

        /// Ellipsoid radii as "x,y,z".
        #[arg(long, default_value = "1,1,1")]
        radii: String,
    },
    /// Convert spherical coordinates (radius, polar, azimuth in radians) to Cartesian.
    Spherical {
        r: f64,
        #[arg(allow_hyphen_values = true)]
        theta: f64,
        #[arg(allow_hyphen_values = true)]
        phi: f64,
    },
    /// Apply a color transform to a hex color.
    Color {
        op: ColorOp,

        /// Input color, e.g. "#80a0c0".
        color: String,

        /// Operation parameters as a JSON object.
        /// scale: mean, std; scale2: x0, x1; gamma: exponent, shift;
        /// close: other, spread.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Stamp square markers through a shared mask and write a PNG.
    Stamp {
        /// Canvas width in pixels (ignored with --background).
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Canvas height in pixels (ignored with --background).
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// PNG to stamp onto instead of a black canvas.
        #[arg(long)]
        background: Option<PathBuf>,

        /// Marker edge length in pixels.
        #[arg(short, long, default_value_t = 5)]
        size: usize,

        /// Marker color.
        #[arg(short, long, default_value = "#ff0000")]
        color: String,

        /// Marker centers as "x,y;x,y;...".
        #[arg(long, default_value = "")]
        centers: String,

        /// Additional markers placed uniformly at random.
        #[arg(long, default_value_t = 0)]
        random: usize,

        /// PRNG seed for random placement and ordering.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Shuffle marker order before stamping.
        #[arg(long)]
        shuffle: bool,

        /// Output file path.
        #[arg(short, long, default_value = "stamped.png")]
        output: PathBuf,
    },
    /// Format a millisecond count as "[Dd ][Hh ][Mm ]S.Ts".
    Duration { ms: u64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorOp {
    Scale,
    Scale2,
    Gamma,
    Length,
    Grey,
    Close,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses `"x,y;x,y"` into pixel centers. Empty segments are skipped.
fn parse_centers(text: &str) -> Result<Vec<(isize, isize)>, CliError> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| CliError::Input(format!("center {pair:?} is not \"x,y\"")))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<isize>()
                    .map_err(|e| CliError::Input(format!("center {pair:?}: {e}")))
            };
            Ok((parse(x)?, parse(y)?))
        })
        .collect()
}

/// Applies a color-valued transform. Returns `None` for ops that report a
/// scalar or a comparison instead of a new color.
fn transform_color(op: ColorOp, color: Color, params: &serde_json::Value) -> Option<Color> {
    match op {
        ColorOp::Scale => Some(color_scale(
            color,
            param_f64(params, "mean", 128.0),
            param_f64(params, "std", 0.0),
        )),
        ColorOp::Scale2 => Some(color_scale2(
            color,
            param_f64(params, "x0", 0.0),
            param_f64(params, "x1", 255.0),
        )),
        ColorOp::Gamma => Some(gamma(
            color,
            param_f64(params, "exponent", 1.0),
            param_f64(params, "shift", 0.0),
        )),
        ColorOp::Length | ColorOp::Grey | ColorOp::Close => None,
    }
}

fn print_value(json: bool, value: serde_json::Value, text: String) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Intersect {
            origin,
            direction,
            radii,
        } => {
            let origin = parse_vector(&origin)?;
            let direction = parse_vector(&direction)?;
            let radii = parse_vector(&radii)?;
            let hit = intersect_ellipsoid(origin, direction, radii);
            let text = if hit.hit {
                let (n, f) = (hit.near, hit.far);
                format!(
                    "hit t0={} t1={} near=({}, {}, {}) far=({}, {}, {})",
                    hit.t0, hit.t1, n.x, n.y, n.z, f.x, f.y, f.z
                )
            } else {
                "miss".to_string()
            };
            print_value(cli.json, serde_json::to_value(hit)?, text)?;
        }
        Command::Spherical { r, theta, phi } => {
            let v = from_spherical(r, theta, phi);
            print_value(
                cli.json,
                serde_json::json!({ "x": v.x, "y": v.y, "z": v.z }),
                format!("{} {} {}", v.x, v.y, v.z),
            )?;
        }
        Command::Color { op, color, params } => {
            let color = Color::from_hex(&color)?;
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            if let Some(transformed) = transform_color(op, color, &params) {
                let value = serde_json::to_value(transformed)?;
                return print_value(cli.json, value, transformed.to_hex());
            }
            match op {
                ColorOp::Length => {
                    let len = color_length(color);
                    print_value(cli.json, serde_json::json!({ "length": len }), len.to_string())?;
                }
                ColorOp::Grey => {
                    let grey = greyscale_intensity(color);
                    print_value(
                        cli.json,
                        serde_json::json!({ "intensity": grey }),
                        grey.to_string(),
                    )?;
                }
                ColorOp::Close => {
                    let other = param_color(&params, "other", Color::BLACK);
                    let spread = param_vector(&params, "spread", Vector3::ZERO);
                    let close = colors_are_close(color, other, spread);
                    print_value(
                        cli.json,
                        serde_json::json!({ "close": close, "other": other }),
                        close.to_string(),
                    )?;
                }
                ColorOp::Scale | ColorOp::Scale2 | ColorOp::Gamma => {}
            }
        }
        Command::Stamp {
            width,
            height,
            background,
            size,
            color,
            centers,
            random,
            seed,
            shuffle,
            output,
        } => {
            let color = Color::from_hex(&color)?;
            let mut target = match &background {
                Some(path) => read_png(path)?,
                None => PixelBuffer::new(width, height)?,
            };
            let mut mask = PixelBuffer::new(target.width(), target.height())?;

            let mut centers = parse_centers(&centers)?;
            let mut rng = Xorshift64::new(seed);
            for _ in 0..random {
                let x = rng.next_range(0.0, target.width() as f64) as isize;
                let y = rng.next_range(0.0, target.height() as f64) as isize;
                centers.push((x, y));
            }
            if shuffle {
                rng.shuffle(&mut centers);
            }
            debug!(markers = centers.len(), size, "stamping");

            let watch = Stopwatch::start("stamp");
            let markers = centers.iter().copied();
            let written = stamp_markers(&mut mask, &mut target, markers, size, color);
            watch.finish();

            write_png(&target, &output)?;
            info!(path = %output.display(), written, "stamped image written");

            print_value(
                cli.json,
                serde_json::json!({
                    "width": target.width(),
                    "height": target.height(),
                    "markers": centers.len(),
                    "pixels_written": written,
                    "output": output.display().to_string(),
                }),
                format!(
                    "stamped {} markers ({written} pixels) -> {}",
                    centers.len(),
                    output.display()
                ),
            )?;
        }
        Command::Duration { ms } => {
            let text = nutil_core::format_millis(ms);
            print_value(cli.json, serde_json::json!({ "duration": text.trim_end() }), text)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
