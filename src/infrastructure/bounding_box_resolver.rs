use crate::domain::{models::user::City, services::city_resolver::CityResolver};

struct CityBox {
    city: City,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl CityBox {
    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_min
            && latitude <= self.lat_max
            && longitude >= self.lon_min
            && longitude <= self.lon_max
    }
}

// The boxes overlap geometrically; evaluation order is the tie-break and
// must not be reordered. First match wins.
const CITY_BOXES: [CityBox; 3] = [
    CityBox {
        city: City::Cairo,
        lat_min: 29.5,
        lat_max: 31.0,
        lon_min: 30.5,
        lon_max: 31.7,
    },
    CityBox {
        city: City::Alexandria,
        lat_min: 30.7,
        lat_max: 31.5,
        lon_min: 29.0,
        lon_max: 30.7,
    },
    CityBox {
        city: City::Giza,
        lat_min: 28.5,
        lat_max: 30.0,
        lon_min: 30.5,
        lon_max: 32.5,
    },
];

/// Stand-in for a real geocoder: resolves coordinates against a fixed
/// table of bounding boxes.
#[derive(Clone, Default)]
pub struct BoundingBoxResolver;

impl BoundingBoxResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CityResolver for BoundingBoxResolver {
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<City> {
        CITY_BOXES
            .iter()
            .find(|b| b.contains(latitude, longitude))
            .map(|b| b.city)
    }
}
