//! flightpath: curved flight paths and viewport bounds for map rendering.
//!
//! Computes a smoothly curved point sequence between two geographic
//! endpoints, a direction marker oriented along the travel direction,
//! and the axis-aligned bounds that frame them: plain data for a map
//! renderer to stroke and animate. Nothing here touches a map widget.
//!
//! # Example
//!
//! ```
//! use flightpath::{curved_path, fit_points, GeoPoint};
//!
//! let dhaka = GeoPoint::new(23.8103, 90.4125)?;
//! let tokyo = GeoPoint::new(35.6804, 139.7690)?;
//!
//! let flight = curved_path(dhaka, tokyo)?;
//! assert_eq!(flight.points.len(), 21);
//!
//! let viewport = fit_points(&flight.points)?;
//! assert!(viewport.contains(flight.marker.position));
//! # Ok::<(), flightpath::PathError>(())
//! ```

#![forbid(unsafe_code)]

mod arc;
mod bounds;
mod curve;
mod spherical;

pub mod error;
pub mod geojson;
pub mod render;

pub use arc::{circular_path, circular_path_default, ARC_SAMPLES, DEFAULT_CURVATURE};
pub use bounds::{fit_paths, fit_points, Bounds};
pub use curve::{curved_path, CURVE_SAMPLES};
pub use error::PathError;
pub use spherical::{distance, heading, interpolate, offset, EARTH_RADIUS_M};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Validated constructor.
    pub fn new(lat: f64, lon: f64) -> Result<Self, PathError> {
        let p = GeoPoint { lat, lon };
        p.validate()?;
        Ok(p)
    }

    /// Check that latitude is in [-90, 90], longitude in [-180, 180],
    /// and both are finite. Out-of-range input is rejected, never
    /// clamped.
    pub fn validate(&self) -> Result<(), PathError> {
        let ok = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if ok {
            Ok(())
        } else {
            Err(PathError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

/// Where to place a directional icon along a path and how to rotate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionMarker {
    pub position: GeoPoint,
    /// Degrees clockwise from north, in [0, 360).
    pub heading: f64,
}

/// The result of building a flight path: the sampled polyline in travel
/// order plus its direction marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    pub points: Vec<GeoPoint>,
    pub marker: DirectionMarker,
}
