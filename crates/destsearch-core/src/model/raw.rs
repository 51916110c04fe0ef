// crates/destsearch-core/src/model/raw.rs
use serde::{Deserialize, Serialize};

/// Raw catalog document as it comes from JSON.
///
/// Two disjoint, ordered sources: administrative regions and world
/// destinations. Neither is validated, sorted, nor deduplicated.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogRaw {
    #[serde(default)]
    pub regions: Vec<RegionRaw>,
    #[serde(default)]
    pub world: Vec<DestinationRaw>,
}

/// Raw administrative region (e.g. a US state).
#[derive(Debug, Deserialize, Serialize)]
pub struct RegionRaw {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Parent country label, e.g. "USA".
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Raw world destination (country by default, or another tagged kind).
#[derive(Debug, Deserialize, Serialize)]
pub struct DestinationRaw {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Continent label, e.g. "Europe".
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

/// Raw city nested under a world destination.
#[derive(Debug, Deserialize, Serialize)]
pub struct CityRaw {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}
