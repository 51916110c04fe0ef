// crates/destsearch-core/src/search.rs
use crate::common::CatalogStats;
use crate::config::SearchConfig;
use crate::model::{Catalog, EntityKind, SearchEntity};
use crate::text::encode_query_value;
use crate::traits::NameMatch;

/// In-memory destination index.
///
/// A single immutable sequence: administrative regions first, then world
/// destinations, each in their source order. Catalogs hold low hundreds of
/// entities, so every query is a linear scan; there is no trie, no sorting and
/// no deduplication.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entities: Vec<SearchEntity>,
    config: SearchConfig,
}

impl SearchIndex {
    /// Concatenate `regions` and `world` into one index.
    pub fn new(regions: Vec<SearchEntity>, world: Vec<SearchEntity>, config: SearchConfig) -> Self {
        let mut entities = regions;
        entities.extend(world);
        tracing::debug!(entities = entities.len(), ?config, "search index built");
        Self { entities, config }
    }

    pub fn from_catalog(catalog: &Catalog, config: SearchConfig) -> Self {
        Self::new(catalog.regions.clone(), catalog.world.clone(), config)
    }

    pub fn entities(&self) -> &[SearchEntity] {
        &self.entities
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entities(&self.entities)
    }

    /// Every entity whose name contains `query`, in index order, unbounded.
    ///
    /// The empty query yields nothing, even though it is trivially contained
    /// in every name.
    pub fn matches<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a SearchEntity> + 'a {
        let mode = self.config.match_mode;
        let key = if query.is_empty() {
            None
        } else {
            Some(mode.key(query))
        };
        self.entities
            .iter()
            .filter(move |e| key.as_deref().is_some_and(|k| e.name_contains_key(k, mode)))
    }

    /// Dropdown suggestions for `query`: [`SearchIndex::matches`] truncated to
    /// `max_suggestions`. Truncation drops the tail and never reorders.
    pub fn search(&self, query: &str) -> Vec<&SearchEntity> {
        self.matches(query).take(self.config.max_suggestions).collect()
    }

    /// Like [`SearchIndex::search`], restricted to `kinds` before truncation.
    /// An empty `kinds` slice means no restriction.
    pub fn search_kinds(&self, query: &str, kinds: &[EntityKind]) -> Vec<&SearchEntity> {
        self.matches(query)
            .filter(|e| kinds.is_empty() || kinds.contains(&e.kind))
            .take(self.config.max_suggestions)
            .collect()
    }

    /// Best-effort exact lookup of free text: the first entity whose whole
    /// name equals `raw` under the configured match mode.
    pub fn resolve(&self, raw: &str) -> Option<&SearchEntity> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let mode = self.config.match_mode;
        self.entities.iter().find(|e| e.is_named(raw, mode))
    }

    /// Generic results route carrying the raw text, e.g. `/search?q=neth`.
    pub fn fallback_path(&self, raw: &str) -> String {
        format!(
            "{}?{}={}",
            self.config.fallback_route,
            self.config.fallback_param,
            encode_query_value(raw.trim())
        )
    }
}
