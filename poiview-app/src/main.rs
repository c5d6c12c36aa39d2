//! poiview-app - headless command-line front end
//!
//! Evaluates region, zoom and POI layout requests against a poiview config
//! and prints the result as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use poiview::prelude::*;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Full precision, degenerate inputs pass through as NaN/inf
    Standard,
    /// Reduced-precision latitude math of the original app
    Legacy,
    /// Full precision, degenerate inputs are rejected
    Strict,
}

impl From<Profile> for ConfigProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Standard => ConfigProfile::Standard,
            Profile::Legacy => ConfigProfile::Legacy,
            Profile::Strict => ConfigProfile::Strict,
        }
    }
}

#[derive(Parser)]
#[command(name = "poiview-app")]
#[command(about = "Mercator zoom/span conversions and POI label layout", long_about = None)]
struct Args {
    /// JSON config file; overrides --profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in config preset
    #[arg(long, value_enum, default_value = "standard", global = true)]
    profile: Profile,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Region visible around a center at an integer zoom level
    Span {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long, allow_hyphen_values = true)]
        zoom: i32,
    },
    /// Zoom level matching a longitude span in a viewport of the given width
    Zoom {
        #[arg(long, allow_hyphen_values = true)]
        lng_delta: f64,
        #[arg(long)]
        width: f64,
    },
    /// Rank a JSON list of points of interest and lay out their labels
    Rank {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Altitude of the viewer in metres
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        altitude: f64,
        /// Current map zoom, decides whether pin titles are shown
        #[arg(long, default_value = "10")]
        zoom: f64,
        /// File holding `[{"name": ..., "coordinate": {"lat": ..., "lng": ...}}]`
        pois: PathBuf,
    },
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display())),
        None => Ok(ConfigProfile::from(args.profile).resolve()),
    }
}

fn run(args: Args) -> Result<serde_json::Value> {
    let config = load_config(&args)?;
    let projection = GeoProjection::new(config.projection);

    let output = match args.command {
        Command::Span {
            lat,
            lng,
            width,
            height,
            zoom,
        } => {
            let center = GeoCoordinate::new(lat, lng);
            let viewport = ViewportSize::new(width, height);
            let region = projection
                .try_region_for_zoom(&center, &viewport, zoom)
                .context("computing span")?;
            json!({
                "region": region,
                "zoom": projection.zoom_of_region(&region, &viewport),
            })
        }
        Command::Zoom { lng_delta, width } => {
            let span = CoordinateSpan::new(lng_delta, lng_delta);
            let zoom = projection
                .try_zoom_for_span(&span, width)
                .context("computing zoom")?;
            json!({ "zoom": zoom })
        }
        Command::Rank {
            lat,
            lng,
            altitude,
            zoom,
            pois,
        } => {
            let raw = std::fs::read_to_string(&pois)
                .with_context(|| format!("reading {}", pois.display()))?;
            let pois: Vec<PointOfInterest> =
                serde_json::from_str(&raw).context("parsing points of interest")?;
            log::info!("ranking {} points of interest", pois.len());

            let origin = GeoCoordinate::new(lat, lng);
            let ranked = rank_by_distance(Some(&origin), pois);
            json!({
                "labels": layout_labels(&ranked, altitude, &config.labels),
                "annotations": annotations(&ranked, zoom, &config.labels),
            })
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    poiview::init_logging();

    let output = run(Args::parse())?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
