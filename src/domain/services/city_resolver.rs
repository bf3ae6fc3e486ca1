use crate::domain::models::user::City;

/// Maps a coordinate pair to a known city. Implementations must be pure and
/// deterministic; coordinates outside every known region map to `None`,
/// which is an expected outcome rather than a fault.
///
/// This is the seam where a real geocoder could replace the fixed
/// bounding-box table without touching the registration usecase.
pub trait CityResolver: Clone {
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<City>;
}
