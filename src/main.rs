use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use geo::Coord;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Value, json};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use zonegeo::config::FileConfig;
use zonegeo::domain::Dimensions;
use zonegeo::input::{LabeledGeometry, collect_geometries};
use zonegeo::policy::AreaKind;
use zonegeo::template::TemplateOverrides;
use zonegeo::validation::structure;
use zonegeo::{
    ValidationError, calculate_bounds, generate_from_template, generate_rectangle, measure,
    snap_to_grid,
};

/// Validate and measure map-drawn areas, and generate pitch templates
///
/// Examples:
///   # Validate every polygon in a FeatureCollection
///   zonegeo validate zones.geojson
///
///   # Measure a site boundary read from stdin, enforcing the size limit
///   cat site.json | zonegeo measure - --kind site-boundary
///
///   # Generate a full-size pitch rotated 30 degrees
///   zonegeo generate --template football-11v11 --lat 37.7749 --lon -122.4194 --rotation 30
///
///   # Generate a custom rectangle
///   zonegeo generate --width 20 --length 40 --lat 51.5 --lon -0.12
#[derive(Parser, Debug)]
#[command(name = "zonegeo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches zonegeo.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate polygons from a GeoJSON file ("-" reads stdin)
    Validate { input: PathBuf },

    /// Validate and measure polygons from a GeoJSON file ("-" reads stdin)
    Measure {
        input: PathBuf,

        /// Also enforce the maximum area for this kind of record
        #[arg(long, value_enum)]
        kind: Option<AreaKind>,
    },

    /// Generate a rectangle from a template or explicit dimensions
    Generate {
        /// Template id (see `zonegeo templates`)
        #[arg(short = 't', long)]
        template: Option<String>,

        /// Width in meters (overrides the template's width)
        #[arg(long)]
        width: Option<f64>,

        /// Length in meters (overrides the template's length)
        #[arg(long)]
        length: Option<f64>,

        /// Center latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Center longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Counter-clockwise rotation in degrees (0 = length axis north-south)
        #[arg(long, allow_hyphen_values = true)]
        rotation: Option<f64>,
    },

    /// Recover the center and bounding-box dimensions of polygons
    Bounds { input: PathBuf },

    /// Snap a coordinate to the editing grid
    Snap {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Grid size in degrees (defaults to the configured grid)
        #[arg(long)]
        grid: Option<f64>,
    },

    /// List the available templates
    Templates,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    match args.command {
        Command::Validate { input } => run_validate(&file_config, &input),
        Command::Measure { input, kind } => run_measure(&file_config, &input, kind),
        Command::Generate {
            template,
            width,
            length,
            lat,
            lon,
            rotation,
        } => {
            let center = (lat, lon);
            let polygon = match template {
                Some(id) => {
                    let overrides = TemplateOverrides {
                        width_m: width,
                        length_m: length,
                        rotation_deg: rotation,
                    };
                    generate_from_template(&file_config.catalog(), &id, center, &overrides)?
                }
                None => {
                    let (Some(width), Some(length)) = (width, length) else {
                        bail!("Must provide either --template, or both --width and --length");
                    };
                    generate_rectangle(
                        center,
                        Dimensions::new(width, length),
                        rotation.unwrap_or(0.0),
                    )?
                }
            };
            print_json(&json!({
                "geometry": polygon.to_geojson(),
                "measurement": measure(&polygon),
            }))
        }
        Command::Bounds { input } => run_bounds(&file_config, &input),
        Command::Snap { lon, lat, grid } => {
            let grid = grid.unwrap_or(file_config.snap.grid_size);
            let snapped = snap_to_grid(Coord { x: lon, y: lat }, grid);
            print_json(&json!([snapped.x, snapped.y]))
        }
        Command::Templates => {
            let catalog = file_config.catalog();
            let templates: Vec<_> = catalog.iter().collect();
            print_json(&json!(templates))
        }
    }
}

fn run_validate(config: &FileConfig, input: &Path) -> Result<()> {
    let validator = config.validator();
    let geometries = collect_geometries(&read_document(input)?);

    let reports = for_each_geometry(&geometries, |geometry| {
        validator
            .validate_geometry(geometry)
            .map(|_| json!({ "valid": true }))
            .map_err(|e| error_json(&e))
    })?;

    print_reports(reports)
}

fn run_measure(config: &FileConfig, input: &Path, kind: Option<AreaKind>) -> Result<()> {
    let validator = config.validator();
    let geometries = collect_geometries(&read_document(input)?);

    let reports = for_each_geometry(&geometries, |geometry| {
        let polygon = validator
            .validate_geometry(geometry)
            .map_err(|e| error_json(&e))?;
        let measurement = measure(&polygon);
        if let Some(kind) = kind {
            config.limits.check(kind, &measurement).map_err(|e| {
                json!({
                    "kind": zonegeo::policy::AreaLimitError::KIND,
                    "message": e.to_string(),
                })
            })?;
        }
        Ok(json!({ "measurement": measurement }))
    })?;

    print_reports(reports)
}

fn run_bounds(config: &FileConfig, input: &Path) -> Result<()> {
    let max_points = config.validation.max_points;
    let geometries = collect_geometries(&read_document(input)?);

    let reports = for_each_geometry(&geometries, |geometry| {
        let polygon =
            structure::parse_geometry(geometry, max_points).map_err(|e| error_json(&e))?;
        calculate_bounds(&polygon)
            .map(|bounds| json!({ "bounds": bounds }))
            .ok_or_else(|| error_json(&ValidationError::invalid_polygon("Polygon has no positions")))
    })?;

    print_reports(reports)
}

/// Outcome per geometry: `Ok` with result fields, or `Err` with an error object
type Outcome = std::result::Result<Value, Value>;

fn for_each_geometry<F>(geometries: &[LabeledGeometry], mut f: F) -> Result<Vec<(String, Outcome)>>
where
    F: FnMut(&Value) -> Outcome,
{
    let progress = if geometries.len() > 1 {
        create_progress(geometries.len() as u64)?
    } else {
        ProgressBar::hidden()
    };

    let mut reports = Vec::with_capacity(geometries.len());
    for item in geometries {
        progress.set_message(item.label.clone());
        reports.push((item.label.clone(), f(&item.geometry)));
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(reports)
}

fn print_reports(reports: Vec<(String, Outcome)>) -> Result<()> {
    let total = reports.len();
    let mut rejected = 0;

    let entries: Vec<Value> = reports
        .into_iter()
        .map(|(label, outcome)| {
            let mut entry = json!({ "label": label });
            match outcome {
                Ok(Value::Object(fields)) => {
                    if let Some(object) = entry.as_object_mut() {
                        object.extend(fields);
                    }
                }
                Ok(other) => entry["result"] = other,
                Err(error) => {
                    rejected += 1;
                    entry["valid"] = json!(false);
                    entry["error"] = error;
                }
            }
            entry
        })
        .collect();

    print_json(&json!(entries))?;

    if rejected > 0 {
        bail!("{} of {} geometries rejected", rejected, total);
    }
    Ok(())
}

fn error_json(err: &ValidationError) -> Value {
    json!({ "kind": err.kind(), "message": err.message() })
}

fn read_document(path: &Path) -> Result<Value> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read geometry from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).context(format!("Failed to read input file: {:?}", path))?
    };
    serde_json::from_str(&contents).context("Failed to parse input as JSON")
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "zonegeo=debug" } else { "zonegeo=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_progress(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    Ok(pb)
}
