//! Circular-arc flight path construction.
//!
//! Fits a circle through the two endpoints whose radius follows from the
//! curvature parameter, then samples the arc by stepping bearings from
//! the circle center. Curvature 1.0 gives the symmetric half-circle
//! bulge; smaller magnitudes flatten the arc toward the chord, and the
//! sign picks which side of the chord it bulges toward.

use log::debug;

use crate::error::PathError;
use crate::spherical;
use crate::{DirectionMarker, FlightPath, GeoPoint};

/// Number of points sampled along the arc.
pub const ARC_SAMPLES: usize = 100;

/// Curvature used by [`circular_path_default`].
pub const DEFAULT_CURVATURE: f64 = 1.0;

/// Build a circular-arc path from `start` to `end`.
///
/// `curvature` must be finite and non-zero. Coincident endpoints
/// degenerate to `ARC_SAMPLES` copies of the same point.
pub fn circular_path(
    start: GeoPoint,
    end: GeoPoint,
    curvature: f64,
) -> Result<FlightPath, PathError> {
    start.validate()?;
    end.validate()?;
    if !curvature.is_finite() || curvature == 0.0 {
        return Err(PathError::InvalidParameter(format!(
            "curvature must be finite and non-zero, got {curvature}"
        )));
    }

    let distance = spherical::distance(start, end)?;
    let bearing = spherical::heading(start, end)?;
    let mid = spherical::offset(start, distance * 0.5, bearing)?;

    let chord_half = distance * 0.5;
    let center_offset = (1.0 - curvature * curvature) * chord_half / (2.0 * curvature);
    let radius = (1.0 + curvature * curvature) * chord_half / (2.0 * curvature);
    let center = spherical::offset(mid, center_offset, bearing + 90.0)?;

    let h1 = spherical::heading(center, start)?;
    let h2 = spherical::heading(center, end)?;
    // Raw bearing difference, deliberately unwrapped: the arc sweeps
    // whichever way the numeric difference runs, and the last sample
    // stops one step short of h2.
    let step = (h2 - h1) / ARC_SAMPLES as f64;
    debug!(
        "circular path: {:.0} m chord, radius {:.0} m, sweep {:.1} deg",
        distance,
        radius,
        h2 - h1
    );

    let points = (0..ARC_SAMPLES)
        .map(|i| spherical::offset(center, radius, h1 + i as f64 * step))
        .collect::<Result<Vec<_>, _>>()?;

    // Marker at the fractional arc midpoint, oriented from the sample one
    // step before it. The step count is load-bearing here: changing
    // ARC_SAMPLES changes the marker heading.
    let mid_index = ARC_SAMPLES as f64 / 2.0;
    let position = spherical::offset(center, radius, h1 + mid_index * step)?;
    let previous = spherical::offset(center, radius, h1 + (mid_index - 1.0) * step)?;
    let marker = DirectionMarker {
        position,
        heading: spherical::heading(previous, position)?,
    };

    Ok(FlightPath { points, marker })
}

/// [`circular_path`] with [`DEFAULT_CURVATURE`].
pub fn circular_path_default(start: GeoPoint, end: GeoPoint) -> Result<FlightPath, PathError> {
    circular_path(start, end, DEFAULT_CURVATURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DHAKA: GeoPoint = GeoPoint { lat: 23.8103, lon: 90.4125 };
    const TOKYO: GeoPoint = GeoPoint { lat: 35.6804, lon: 139.7690 };

    #[test]
    fn arc_points_sit_on_the_fitted_circle() {
        let flight = circular_path(DHAKA, TOKYO, 1.0).unwrap();
        assert_eq!(flight.points.len(), ARC_SAMPLES);

        // Re-derive the circle: at curvature 1.0 the center is the chord
        // midpoint and the radius is half the chord.
        let distance = spherical::distance(DHAKA, TOKYO).unwrap();
        let bearing = spherical::heading(DHAKA, TOKYO).unwrap();
        let center = spherical::offset(DHAKA, distance * 0.5, bearing).unwrap();
        let radius = distance * 0.5;

        for p in &flight.points {
            let r = spherical::distance(center, *p).unwrap();
            assert_relative_eq!(r, radius, max_relative = 1e-3);
        }
    }

    #[test]
    fn marker_matches_the_middle_sample() {
        let flight = circular_path(DHAKA, TOKYO, 1.0).unwrap();
        // ARC_SAMPLES / 2 lands on a sampled bearing, so the fractional
        // midpoint and the indexed sample coincide.
        assert_eq!(flight.marker.position, flight.points[ARC_SAMPLES / 2]);
        assert!((0.0..360.0).contains(&flight.marker.heading));
    }

    #[test]
    fn flatter_curvature_hugs_the_chord() {
        let mid = spherical::interpolate(DHAKA, TOKYO, 0.5).unwrap();
        let flat = circular_path(DHAKA, TOKYO, 0.05).unwrap();
        let round = circular_path(DHAKA, TOKYO, 1.0).unwrap();
        let flat_bulge = spherical::distance(mid, flat.marker.position).unwrap();
        let round_bulge = spherical::distance(mid, round.marker.position).unwrap();
        assert!(
            flat_bulge < round_bulge,
            "curvature 0.05 bulged {flat_bulge} m, curvature 1.0 bulged {round_bulge} m"
        );
    }

    #[test]
    fn zero_or_non_finite_curvature_is_rejected() {
        assert!(matches!(
            circular_path(DHAKA, TOKYO, 0.0),
            Err(PathError::InvalidParameter(_))
        ));
        assert!(matches!(
            circular_path(DHAKA, TOKYO, f64::NAN),
            Err(PathError::InvalidParameter(_))
        ));
        assert!(matches!(
            circular_path(DHAKA, TOKYO, f64::INFINITY),
            Err(PathError::InvalidParameter(_))
        ));
    }

    #[test]
    fn default_curvature_matches_explicit() {
        let by_default = circular_path_default(DHAKA, TOKYO).unwrap();
        let explicit = circular_path(DHAKA, TOKYO, DEFAULT_CURVATURE).unwrap();
        assert_eq!(by_default, explicit);
    }

    #[test]
    fn coincident_endpoints_degenerate_to_a_point() {
        let flight = circular_path(DHAKA, DHAKA, 1.0).unwrap();
        assert_eq!(flight.points.len(), ARC_SAMPLES);
        for p in &flight.points {
            assert_relative_eq!(p.lat, DHAKA.lat, epsilon = 1e-9);
            assert_relative_eq!(p.lon, DHAKA.lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        let bad = GeoPoint { lat: 0.0, lon: 181.0 };
        assert!(matches!(
            circular_path(bad, TOKYO, 1.0),
            Err(PathError::InvalidCoordinate { .. })
        ));
    }
}
