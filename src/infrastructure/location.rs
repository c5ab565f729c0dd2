//! Simulated location resolution for click analytics.

use rand::Rng;

use crate::domain::repositories::LocationResolver;

/// Fixed pool of city labels used for simulated click locations.
const LOCATION_POOL: [&str; 12] = [
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
    "Dallas, TX",
    "San Jose, CA",
    "Austin, TX",
    "Jacksonville, FL",
];

/// [`LocationResolver`] that samples uniformly from [`LOCATION_POOL`].
///
/// Stands in for real geolocation, which is out of scope. Tests inject a
/// deterministic resolver instead of this one.
#[derive(Default)]
pub struct SimulatedLocationResolver;

impl SimulatedLocationResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LocationResolver for SimulatedLocationResolver {
    fn resolve(&self) -> String {
        let mut rng = rand::rng();
        LOCATION_POOL[rng.random_range(0..LOCATION_POOL.len())].to_string()
    }
}

/// [`LocationResolver`] returning one fixed label, for deterministic tests
/// and callers that do not care about simulated analytics.
pub struct FixedLocationResolver(pub String);

impl LocationResolver for FixedLocationResolver {
    fn resolve(&self) -> String {
        self.0.clone()
    }
}
