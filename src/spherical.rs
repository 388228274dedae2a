//! Spherical-Earth geometry primitives.
//!
//! Great-circle distance, initial bearing, interpolation, and destination
//! offset over a sphere of mean radius [`EARTH_RADIUS_M`]. These are the
//! four primitives map SDKs expose for polyline work; everything else in
//! the crate is built from them.

use crate::error::PathError;
use crate::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
///
/// Haversine formula. Symmetric, and exactly zero for identical points.
pub fn distance(a: GeoPoint, b: GeoPoint) -> Result<f64, PathError> {
    a.validate()?;
    b.validate()?;
    Ok(EARTH_RADIUS_M * central_angle(a, b))
}

/// Initial bearing from `from` toward `to`, in degrees clockwise from
/// north, in [0, 360).
///
/// Undefined for coincident points; returns 0.0 there, but callers must
/// not rely on that value.
pub fn heading(from: GeoPoint, to: GeoPoint) -> Result<f64, PathError> {
    from.validate()?;
    to.validate()?;

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    Ok(normalize_degrees(y.atan2(x).to_degrees()))
}

/// Point at `fraction` along the great circle from `a` to `b`.
///
/// Fraction 0.0 yields `a` and 1.0 yields `b`; values outside [0, 1]
/// extrapolate along the same great circle.
pub fn interpolate(a: GeoPoint, b: GeoPoint, fraction: f64) -> Result<GeoPoint, PathError> {
    a.validate()?;
    b.validate()?;
    if !fraction.is_finite() {
        return Err(PathError::InvalidParameter(format!(
            "interpolation fraction must be finite, got {fraction}"
        )));
    }

    let d = central_angle(a, b);
    // Below ~1e-12 rad the slerp denominator collapses; the segment is a
    // single point for any practical purpose.
    if d < 1e-12 {
        return Ok(a);
    }

    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let sin_d = d.sin();
    let fa = ((1.0 - fraction) * d).sin() / sin_d;
    let fb = (fraction * d).sin() / sin_d;

    let x = fa * lat1.cos() * lon1.cos() + fb * lat2.cos() * lon2.cos();
    let y = fa * lat1.cos() * lon1.sin() + fb * lat2.cos() * lon2.sin();
    let z = fa * lat1.sin() + fb * lat2.sin();

    Ok(GeoPoint {
        lat: z.atan2(x.hypot(y)).to_degrees(),
        lon: y.atan2(x).to_degrees(),
    })
}

/// Destination reached by travelling `distance_m` meters along the great
/// circle that leaves `origin` at `bearing_deg`.
///
/// Negative distances travel the opposite way. The result longitude is
/// folded into [-180, 180).
pub fn offset(origin: GeoPoint, distance_m: f64, bearing_deg: f64) -> Result<GeoPoint, PathError> {
    origin.validate()?;
    if !distance_m.is_finite() || !bearing_deg.is_finite() {
        return Err(PathError::InvalidParameter(format!(
            "offset distance and bearing must be finite, got {distance_m} m at {bearing_deg} deg"
        )));
    }

    let ang = distance_m / EARTH_RADIUS_M;
    let brg = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let sin_lat2 = lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * brg.cos();
    // Rounding can leave the sine fractionally outside [-1, 1].
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 =
        lon1 + (brg.sin() * ang.sin() * lat1.cos()).atan2(ang.cos() - lat1.sin() * lat2.sin());

    Ok(GeoPoint {
        lat: lat2.to_degrees(),
        lon: normalize_lon(lon2.to_degrees()),
    })
}

/// Fold a degree value into [0, 360). `rem_euclid` alone can round up to
/// exactly 360.0 for tiny negative inputs.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Fold a longitude into [-180, 180).
fn normalize_lon(lon: f64) -> f64 {
    let l = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if l >= 180.0 {
        -180.0
    } else {
        l
    }
}

/// Central angle between two points in radians, via haversine.
fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // h can land a hair past 1.0 for near-antipodal points.
    2.0 * h.sqrt().min(1.0).asin()
}
