//! Axis-aligned geographic bounds fitting.
//!
//! Running min/max accumulation in plain lat/lon space, for turning a set
//! of points or paths into a camera viewport. Longitude is treated as a
//! flat numeric range: a point set straddling the antimeridian produces
//! the wide rectangle spanning most of the map, not the short one
//! crossing ±180. Callers that need dateline-aware framing must handle
//! it themselves.

use crate::error::PathError;
use crate::GeoPoint;

/// Minimal axis-aligned rectangle containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl Bounds {
    /// Whether `point` lies inside the rectangle. Edges are inclusive.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }

    /// Rectangle center, the natural camera target when framing the
    /// bounds.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }

    fn including(self, p: GeoPoint) -> Bounds {
        Bounds {
            south_west: GeoPoint {
                lat: self.south_west.lat.min(p.lat),
                lon: self.south_west.lon.min(p.lon),
            },
            north_east: GeoPoint {
                lat: self.north_east.lat.max(p.lat),
                lon: self.north_east.lon.max(p.lon),
            },
        }
    }
}

/// Fit bounds around a set of points.
///
/// Fails with [`PathError::EmptyInput`] for zero points.
pub fn fit_points(points: &[GeoPoint]) -> Result<Bounds, PathError> {
    fit(points.iter())
}

/// Fit bounds around every point of every path.
///
/// Fails with [`PathError::EmptyInput`] when the paths flatten to zero
/// points.
pub fn fit_paths(paths: &[Vec<GeoPoint>]) -> Result<Bounds, PathError> {
    fit(paths.iter().flatten())
}

fn fit<'a>(points: impl Iterator<Item = &'a GeoPoint>) -> Result<Bounds, PathError> {
    let mut bounds: Option<Bounds> = None;
    for &p in points {
        p.validate()?;
        bounds = Some(match bounds {
            None => Bounds {
                south_west: p,
                north_east: p,
            },
            Some(b) => b.including(p),
        });
    }
    bounds.ok_or(PathError::EmptyInput)
}
