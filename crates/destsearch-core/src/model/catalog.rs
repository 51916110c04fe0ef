// crates/destsearch-core/src/model/catalog.rs
use super::entity::SearchEntity;
use crate::common::CatalogStats;
use serde::{Deserialize, Serialize};

/// The read-only source data a search index is built from.
///
/// Regions and world destinations are kept apart so the index can concatenate
/// them in a fixed order (regions first).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Administrative regions, in display order.
    pub regions: Vec<SearchEntity>,
    /// Countries, their cities and other places, in display order.
    pub world: Vec<SearchEntity>,
}

impl Catalog {
    pub fn new(regions: Vec<SearchEntity>, world: Vec<SearchEntity>) -> Self {
        Self { regions, world }
    }

    pub fn regions(&self) -> &[SearchEntity] {
        &self.regions
    }

    pub fn world(&self) -> &[SearchEntity] {
        &self.world
    }

    /// Regions followed by world destinations.
    pub fn iter(&self) -> impl Iterator<Item = &SearchEntity> {
        self.regions.iter().chain(self.world.iter())
    }

    pub fn len(&self) -> usize {
        self.regions.len() + self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entities(self.iter())
    }
}
