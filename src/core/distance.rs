use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two GeoJSON points
#[inline]
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Map a distance onto a proximity score relative to the search radius
///
/// | distance        | score |
/// |-----------------|-------|
/// | <= 0.5 x radius | 1.0   |
/// | <= 1.0 x radius | 0.8   |
/// | <= 1.5 x radius | 0.6   |
/// | <= 2.0 x radius | 0.4   |
/// | beyond          | 0.2   |
pub fn proximity_band(distance_km: f64, radius_km: f64) -> f64 {
    if distance_km <= radius_km * 0.5 {
        1.0
    } else if distance_km <= radius_km {
        0.8
    } else if distance_km <= radius_km * 1.5 {
        0.6
    } else if distance_km <= radius_km * 2.0 {
        0.4
    } else {
        0.2
    }
}
