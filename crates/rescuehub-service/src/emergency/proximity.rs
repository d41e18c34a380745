//! Great-circle distance for the location-hint filter.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinate pairs, in kilometers.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Whether a point lies within `radius_km` of the given origin.
pub fn within_radius(
    origin_lat: f64,
    origin_lon: f64,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> bool {
    distance_km(origin_lat, origin_lon, lat, lon) <= radius_km
}
