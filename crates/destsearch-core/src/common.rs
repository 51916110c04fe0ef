// crates/destsearch-core/src/common.rs
use crate::model::{EntityKind, SearchEntity};
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Counts are per [`EntityKind`](crate::EntityKind); `total` covers both
/// sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub regions: usize,
    pub countries: usize,
    pub cities: usize,
    pub places: usize,
    pub total: usize,
}

impl CatalogStats {
    pub fn from_entities<'a>(entities: impl IntoIterator<Item = &'a SearchEntity>) -> Self {
        let mut stats = CatalogStats::default();
        for e in entities {
            match e.kind {
                EntityKind::Region => stats.regions += 1,
                EntityKind::Country => stats.countries += 1,
                EntityKind::City => stats.cities += 1,
                EntityKind::Place => stats.places += 1,
            }
            stats.total += 1;
        }
        stats
    }
}
