use clap::Parser;
use flightpath::render::{render_preview, PreviewOptions};
use flightpath::{circular_path, curved_path, fit_points, geojson, GeoPoint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flightpath", about = "Curved flight paths between two map coordinates")]
struct Cli {
    /// Start coordinate as "lat,lon" in decimal degrees
    #[arg(short, long, allow_hyphen_values = true)]
    from: String,

    /// End coordinate as "lat,lon" in decimal degrees
    #[arg(short, long, allow_hyphen_values = true)]
    to: String,

    /// Fit a circular arc instead of the quadratic curve
    #[arg(long)]
    arc: bool,

    /// Arc curvature; 1.0 is the symmetric arc, the sign picks the side
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    curvature: f64,

    /// Write the path as a GeoJSON FeatureCollection
    #[arg(short, long)]
    geojson: Option<PathBuf>,

    /// Write a PNG preview of the path
    #[arg(short, long)]
    preview: Option<PathBuf>,
}

fn parse_point(raw: &str) -> Result<GeoPoint, Box<dyn std::error::Error>> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got {raw:?}"))?;
    Ok(GeoPoint::new(lat.trim().parse()?, lon.trim().parse()?)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let start = parse_point(&cli.from)?;
    let end = parse_point(&cli.to)?;

    let flight = if cli.arc {
        circular_path(start, end, cli.curvature)?
    } else {
        curved_path(start, end)?
    };

    let viewport = fit_points(&flight.points)?;
    eprintln!(
        "  Path        {} points, marker heading {:.1} deg",
        flight.points.len(),
        flight.marker.heading,
    );
    eprintln!(
        "  Viewport    {:.4},{:.4} to {:.4},{:.4}",
        viewport.south_west.lat,
        viewport.south_west.lon,
        viewport.north_east.lat,
        viewport.north_east.lon,
    );

    let collection = geojson::to_feature_collection(&flight);
    if let Some(ref path) = cli.geojson {
        std::fs::write(path, serde_json::to_string_pretty(&collection)?)?;
        eprintln!("  GeoJSON     wrote {}", path.display());
    }
    if let Some(ref path) = cli.preview {
        render_preview(std::slice::from_ref(&flight), path, &PreviewOptions::default())?;
        eprintln!("  Preview     wrote {}", path.display());
    }
    if cli.geojson.is_none() && cli.preview.is_none() {
        println!("{}", serde_json::to_string_pretty(&collection)?);
    }

    Ok(())
}
