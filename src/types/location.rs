//! Named forecast locations and the static registry mapping district names to
//! coordinates.

use log::debug;
use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use district_forecast::LatLon;
///
/// let kathmandu = LatLon(27.7172, 85.3240);
/// assert_eq!(kathmandu.0, 27.7172); // Latitude
/// assert_eq!(kathmandu.1, 85.3240); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A named place with fixed coordinates.
///
/// The name doubles as the key into the historical dataset's `District`
/// column, the coordinates are what the live weather service is queried with.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinates: LatLon,
}

impl Location {
    pub fn new(name: impl Into<String>, coordinates: LatLon) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.name, self.coordinates.0, self.coordinates.1
        )
    }
}

const DEFAULT_DISTRICT: &str = "Kathmandu";

const NEPAL_DISTRICTS: [(&str, f64, f64); 21] = [
    ("Kathmandu", 27.7172, 85.3240),
    ("Lalitpur", 27.6667, 85.3333),
    ("Bhaktapur", 27.6710, 85.4298),
    ("Pokhara", 28.2096, 83.9856),
    ("Biratnagar", 26.4550, 87.2700),
    ("Chitawan", 27.5291, 84.3542),
    ("Dharan", 26.8120, 87.2830),
    ("Butwal", 27.7000, 83.4500),
    ("Janakpur", 26.7333, 85.9167),
    ("Dhangadhi", 28.7000, 80.6000),
    ("Birgunj", 27.0167, 84.8667),
    ("Itahari", 26.6667, 87.2833),
    ("Gorkha", 28.0500, 84.6167),
    ("Hetauda", 27.4167, 85.0333),
    ("Baglung", 28.2667, 83.6000),
    ("Nawalparasi", 27.6000, 83.6000),
    ("Rupandehi", 27.5000, 83.5000),
    ("Kailali", 28.8400, 80.5650),
    ("Surkhet", 28.6000, 81.6000),
    ("Dang", 28.0000, 82.5000),
    ("Jhapa", 26.5450, 87.8920),
];

/// Immutable lookup table of known locations plus a designated default.
///
/// Lookups for names that are not registered never fail: [`LocationRegistry::resolve`]
/// keeps the requested name (so historical records are still matched by it)
/// and borrows the default location's coordinates.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    default: Location,
}

impl LocationRegistry {
    /// Builds a registry from `locations`, falling back to `default` for unknown names.
    pub fn new(locations: Vec<Location>, default: Location) -> Self {
        Self { locations, default }
    }

    /// The built-in table of Nepali districts, defaulting to Kathmandu.
    pub fn nepal_districts() -> Self {
        let locations: Vec<Location> = NEPAL_DISTRICTS
            .iter()
            .map(|(name, lat, lon)| Location::new(*name, LatLon(*lat, *lon)))
            .collect();
        let default = locations
            .iter()
            .find(|l| l.name == DEFAULT_DISTRICT)
            .cloned()
            .unwrap_or_else(|| Location::new(DEFAULT_DISTRICT, LatLon(27.7172, 85.3240)));
        Self::new(locations, default)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Resolves `name` to a [`Location`].
    ///
    /// # Examples
    ///
    /// ```
    /// use district_forecast::{LatLon, LocationRegistry};
    ///
    /// let registry = LocationRegistry::nepal_districts();
    ///
    /// let pokhara = registry.resolve("Pokhara");
    /// assert_eq!(pokhara.coordinates, LatLon(28.2096, 83.9856));
    ///
    /// // Unknown names keep their name but use Kathmandu's coordinates.
    /// let unknown = registry.resolve("Mustang");
    /// assert_eq!(unknown.name, "Mustang");
    /// assert_eq!(unknown.coordinates, LatLon(27.7172, 85.3240));
    /// ```
    pub fn resolve(&self, name: &str) -> Location {
        match self.get(name) {
            Some(location) => location.clone(),
            None => {
                debug!(
                    "Location '{}' is not registered, using coordinates of '{}'",
                    name,
                    self.default.name
                );
                Location::new(name, self.default.coordinates)
            }
        }
    }

    pub fn default_location(&self) -> &Location {
        &self.default
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::nepal_districts()
    }
}
