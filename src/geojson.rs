//! GeoJSON output backend.
//!
//! Converts a [`FlightPath`] into an RFC 7946 FeatureCollection: one
//! LineString feature for the polyline and one Point feature carrying the
//! marker heading as a property. Coordinates are [longitude, latitude]
//! per the GeoJSON convention.

use serde::Serialize;
use serde_json::{json, Value};

use crate::bounds::{self, Bounds};
use crate::FlightPath;

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<[f64; 4]>,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
    Point { coordinates: [f64; 2] },
}

/// Convert a flight path to a FeatureCollection with a `bbox` member
/// fitted around the path points.
pub fn to_feature_collection(path: &FlightPath) -> FeatureCollection {
    let coordinates = path.points.iter().map(|p| [p.lon, p.lat]).collect();
    let line = Feature {
        kind: "Feature",
        geometry: Geometry::LineString { coordinates },
        properties: json!({ "role": "flight-path" }),
    };
    let marker = Feature {
        kind: "Feature",
        geometry: Geometry::Point {
            coordinates: [path.marker.position.lon, path.marker.position.lat],
        },
        properties: json!({
            "role": "direction-marker",
            "heading": path.marker.heading,
        }),
    };

    FeatureCollection {
        kind: "FeatureCollection",
        bbox: bounds::fit_points(&path.points)
            .ok()
            .map(|b| bounds_to_bbox(&b)),
        features: vec![line, marker],
    }
}

/// GeoJSON bbox member order: [west, south, east, north].
pub fn bounds_to_bbox(bounds: &Bounds) -> [f64; 4] {
    [
        bounds.south_west.lon,
        bounds.south_west.lat,
        bounds.north_east.lon,
        bounds.north_east.lat,
    ]
}
