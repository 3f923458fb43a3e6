//! Fixed geographic lookup tables.
//!
//! Region labels in the snapshot are free text. Two small tables turn them
//! into something a map widget can render: named cities get point
//! coordinates, known country names get a 3-letter code. The tables are
//! immutable configuration data owned by whoever runs the aggregator, never
//! mutable globals, so tests can swap them out.

use std::collections::HashMap;

/// Coordinates (latitude, longitude) for cities the pipeline reports on.
const CITY_COORDS: [(&str, f64, f64); 15] = [
    ("New York", 40.7128, -74.0060),
    ("Los Angeles", 34.0522, -118.2437),
    ("Chicago", 41.8781, -87.6298),
    ("London", 51.5074, -0.1278),
    ("Paris", 48.8566, 2.3522),
    ("Berlin", 52.5200, 13.4050),
    ("Tokyo", 35.6762, 139.6503),
    ("Sydney", -33.8688, 151.2093),
    ("Toronto", 43.6532, -79.3832),
    ("Mumbai", 19.0760, 72.8777),
    ("Delhi", 28.7041, 77.1025),
    ("Bangalore", 12.9716, 77.5946),
    ("Seoul", 37.5665, 126.9780),
    ("São Paulo", -23.5505, -46.6333),
    ("Rio de Janeiro", -22.9068, -43.1729),
];

/// 3-letter codes for country names the pipeline reports on.
const COUNTRY_CODES: [(&str, &str); 10] = [
    ("United States", "USA"),
    ("United Kingdom", "GBR"),
    ("India", "IND"),
    ("Canada", "CAN"),
    ("Australia", "AUS"),
    ("Germany", "DEU"),
    ("France", "FRA"),
    ("Japan", "JPN"),
    ("South Korea", "KOR"),
    ("Brazil", "BRA"),
];

/// Immutable city-coordinate and country-code lookup tables.
///
/// Lookups are case-sensitive exact matches. [`GeoTables::builtin`] provides
/// the compiled-in tables used in production; [`GeoTables::new`] lets tests
/// inject their own.
#[derive(Debug, Clone)]
pub struct GeoTables {
    cities: HashMap<String, (f64, f64)>,
    countries: HashMap<String, String>,
}

impl GeoTables {
    /// Builds tables from caller-provided mappings.
    pub fn new(cities: HashMap<String, (f64, f64)>, countries: HashMap<String, String>) -> Self {
        Self { cities, countries }
    }

    /// The compiled-in tables: 15 cities, 10 countries.
    pub fn builtin() -> Self {
        Self {
            cities: CITY_COORDS
                .iter()
                .map(|&(name, lat, lon)| (name.to_string(), (lat, lon)))
                .collect(),
            countries: COUNTRY_CODES
                .iter()
                .map(|&(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        }
    }

    /// Looks up a region label in the city table.
    pub fn city(&self, region: &str) -> Option<(f64, f64)> {
        self.cities.get(region).copied()
    }

    /// Looks up a region label in the country table.
    pub fn country_code(&self, region: &str) -> Option<&str> {
        self.countries.get(region).map(String::as_str)
    }
}

impl Default for GeoTables {
    fn default() -> Self {
        Self::builtin()
    }
}
