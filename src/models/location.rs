//! Location candidates returned by the geocoding provider.

use serde::{Deserialize, Serialize};

/// One candidate match for a postal code.
///
/// Coordinates stay as the provider's decimal-degree strings; they are only
/// parsed when a distance is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub city: String,
    pub city_kana: String,
    pub town: String,
    pub town_kana: String,
    /// Longitude.
    pub x: String,
    /// Latitude.
    pub y: String,
    pub prefecture: String,
    /// Canonical postal code as the provider spells it.
    pub postal: String,
}

impl LocationInfo {
    /// Full address: prefecture, city and town joined without a separator.
    pub fn address(&self) -> String {
        let mut address =
            String::with_capacity(self.prefecture.len() + self.city.len() + self.town.len());
        address.push_str(&self.prefecture);
        address.push_str(&self.city);
        address.push_str(&self.town);
        address
    }
}

/// Ordered candidates for a single postal code query, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeResult {
    locations: Vec<LocationInfo>,
}

impl GeocodeResult {
    pub fn new(locations: Vec<LocationInfo>) -> Self {
        Self { locations }
    }

    /// The authoritative match, if any.
    pub fn first(&self) -> Option<&LocationInfo> {
        self.locations.first()
    }

    /// Number of candidates, duplicates included.
    pub fn hit_count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl From<Vec<LocationInfo>> for GeocodeResult {
    fn from(locations: Vec<LocationInfo>) -> Self {
        Self::new(locations)
    }
}
