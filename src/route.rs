//! Great-circle distance over sampled positions.
//!
//! Used for the cumulative walk distance in session statistics. Segments
//! below the noise floor are treated as GPS jitter and contribute nothing.

use crate::models::LocationSample;

/// Earth's mean radius in meters, as used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Minimum segment length considered real movement.
const NOISE_FLOOR_M: f64 = 1.0;

/// Haversine distance between two coordinates, in meters.
pub fn distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Segment distance with the noise floor applied.
pub fn segment_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d = distance_m(lat1, lon1, lat2, lon2);
    if d < NOISE_FLOOR_M {
        0.0
    } else {
        d
    }
}

/// Total distance along an ordered series of samples, in meters.
pub fn route_distance_m(samples: &[LocationSample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| {
            segment_m(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}
