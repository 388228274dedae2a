//! Quadratic-Bezier flight path construction.
//!
//! The control point comes from spherical offset geometry (half the
//! great-circle distance, at a bearing derived from the midpoint-to-start
//! heading), but the curve itself is sampled with the planar quadratic
//! formula directly on latitude/longitude components. The mix is
//! deliberate: it reproduces the visually smooth arc map renderers draw,
//! not a geodesic.

use kurbo::{ParamCurve, Point, QuadBez};
use log::debug;

use crate::error::PathError;
use crate::spherical;
use crate::{DirectionMarker, FlightPath, GeoPoint};

/// Number of curve segments sampled; a path carries `CURVE_SAMPLES + 1`
/// points.
pub const CURVE_SAMPLES: usize = 20;

/// Build a curved path from `start` to `end`, with a direction marker at
/// the curve midpoint oriented along the direction of travel.
///
/// Coincident endpoints are not an error: the path degenerates to
/// `CURVE_SAMPLES + 1` copies of the same point.
pub fn curved_path(start: GeoPoint, end: GeoPoint) -> Result<FlightPath, PathError> {
    start.validate()?;
    end.validate()?;

    let distance = spherical::distance(start, end)?;
    let mid = spherical::interpolate(start, end, 0.5)?;
    let mid_to_start = spherical::heading(mid, start)?;
    let control_bearing = spherical::normalize_degrees(360.0 - (90.0 - mid_to_start));
    let control = spherical::offset(mid, distance / 2.0, control_bearing)?;
    debug!(
        "curved path: {:.0} m, control {:.4},{:.4} at bearing {:.1}",
        distance, control.lat, control.lon, control_bearing
    );

    // Planar Bezier over (x = lon, y = lat). Sampled points stay inside
    // the coordinate ranges because each is a convex combination of the
    // three construction points, all of which are valid.
    let quad = QuadBez::new(planar(start), planar(control), planar(end));
    let points: Vec<GeoPoint> = (0..=CURVE_SAMPLES)
        .map(|i| unplanar(quad.eval(i as f64 / CURVE_SAMPLES as f64)))
        .collect();

    let half = CURVE_SAMPLES / 2;
    let marker = DirectionMarker {
        position: points[half],
        heading: spherical::heading(points[half - 1], points[half])?,
    };

    Ok(FlightPath { points, marker })
}

fn planar(p: GeoPoint) -> Point {
    Point::new(p.lon, p.lat)
}

fn unplanar(p: Point) -> GeoPoint {
    GeoPoint { lat: p.y, lon: p.x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DHAKA: GeoPoint = GeoPoint { lat: 23.8103, lon: 90.4125 };
    const TOKYO: GeoPoint = GeoPoint { lat: 35.6804, lon: 139.7690 };

    #[test]
    fn path_has_21_points_with_exact_endpoints() {
        let flight = curved_path(DHAKA, TOKYO).unwrap();
        assert_eq!(flight.points.len(), CURVE_SAMPLES + 1);

        let first = flight.points[0];
        let last = flight.points[CURVE_SAMPLES];
        assert_relative_eq!(first.lat, DHAKA.lat, epsilon = 1e-12);
        assert_relative_eq!(first.lon, DHAKA.lon, epsilon = 1e-12);
        assert_relative_eq!(last.lat, TOKYO.lat, epsilon = 1e-12);
        assert_relative_eq!(last.lon, TOKYO.lon, epsilon = 1e-12);
    }

    #[test]
    fn midpoint_bows_away_from_the_great_circle() {
        let flight = curved_path(DHAKA, TOKYO).unwrap();
        let straight = spherical::interpolate(DHAKA, TOKYO, 0.5).unwrap();
        let bowed = flight.points[CURVE_SAMPLES / 2];
        let separation = spherical::distance(straight, bowed).unwrap();
        assert!(
            separation > 10_000.0,
            "curve midpoint only {separation} m from the straight midpoint"
        );
    }

    #[test]
    fn marker_sits_at_the_middle_sample() {
        let flight = curved_path(DHAKA, TOKYO).unwrap();
        assert_eq!(flight.marker.position, flight.points[CURVE_SAMPLES / 2]);
        assert!((0.0..360.0).contains(&flight.marker.heading));
    }

    #[test]
    fn every_sample_is_a_valid_coordinate() {
        let flight = curved_path(DHAKA, TOKYO).unwrap();
        for p in &flight.points {
            assert!(p.validate().is_ok(), "invalid sample {p:?}");
        }
    }

    #[test]
    fn coincident_endpoints_degenerate_to_a_point() {
        let flight = curved_path(DHAKA, DHAKA).unwrap();
        assert_eq!(flight.points.len(), CURVE_SAMPLES + 1);
        for p in &flight.points {
            assert_relative_eq!(p.lat, DHAKA.lat, epsilon = 1e-9);
            assert_relative_eq!(p.lon, DHAKA.lon, epsilon = 1e-9);
        }
        assert!((0.0..360.0).contains(&flight.marker.heading));
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        let bad = GeoPoint { lat: -91.0, lon: 0.0 };
        assert!(matches!(
            curved_path(bad, TOKYO),
            Err(PathError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            curved_path(DHAKA, GeoPoint { lat: 0.0, lon: f64::NAN }),
            Err(PathError::InvalidCoordinate { .. })
        ));
    }
}
