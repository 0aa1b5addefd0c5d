use crate::{
    constants::Weight,
    graph::{GeoPoint, Point},
};

/// Mean earth radius in km
const EARTH_RADIUS: f64 = 6371.0;

/// Great-circle distance between two coordinates in km (Haversine formula)
pub fn haversine(src: &GeoPoint, dst: &GeoPoint) -> Weight {
    let lat1 = src.lat.to_radians();
    let lat2 = dst.lat.to_radians();
    let lon1 = src.lon.to_radians();
    let lon2 = dst.lon.to_radians();
    let a = (lat2 - lat1) / 2.0;
    let b = (lon2 - lon1) / 2.0;
    let c = a.sin().powi(2) + lat1.cos() * lat2.cos() * b.sin().powi(2);
    let d = 2.0 * c.sqrt().asin();

    EARTH_RADIUS * d
}

pub fn euclidean(src: &Point, dst: &Point) -> Weight {
    (dst.x - src.x).hypot(dst.y - src.y)
}

pub fn manhattan(src: &Point, dst: &Point) -> Weight {
    (dst.x - src.x).abs() + (dst.y - src.y).abs()
}
