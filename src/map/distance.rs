use crate::map::consts::EARTH_RADIUS;
use crate::map::models::LngLat;

/// Great-circle distance between two points in meters (haversine, spherical Earth).
pub fn distance_meters(from: LngLat, to: LngLat) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` marginally outside of [0, 1] for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

pub fn rounded_meters(meters: f64) -> u64 {
    meters.round() as u64
}

pub fn format_distance(meters: f64) -> String {
    format!("{}m", rounded_meters(meters))
}
