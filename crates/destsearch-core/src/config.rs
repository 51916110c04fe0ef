// crates/destsearch-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 8;

/// How a query is compared against entity names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Lowercased substring match.
    #[default]
    CaseInsensitive,
    /// Lowercased substring match after ASCII transliteration, so `"zurich"`
    /// also finds `"Zürich"`.
    Folded,
}

impl MatchMode {
    /// Normalize a name or query for comparison in this mode.
    pub fn key(self, s: &str) -> String {
        match self {
            MatchMode::CaseInsensitive => crate::text::lower_key(s),
            MatchMode::Folded => crate::text::fold_key(s),
        }
    }
}

/// Tunables of the search index and its fallback routing.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "max_suggestions": 5, "match_mode": "folded" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_suggestions: usize,
    pub match_mode: MatchMode,
    /// Route that receives unresolved free-text commits.
    pub fallback_route: String,
    /// Query parameter carrying the raw text on the fallback route.
    pub fallback_param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            match_mode: MatchMode::default(),
            fallback_route: "/search".to_string(),
            fallback_param: "q".to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl SearchConfig {
    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            crate::CatalogError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "search config loaded");
        Ok(config)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = SearchConfig::from_json_str(r#"{ "match_mode": "folded" }"#).unwrap();
        assert_eq!(cfg.match_mode, MatchMode::Folded);
        assert_eq!(cfg.max_suggestions, MAX_SUGGESTIONS);
        assert_eq!(cfg.fallback_route, "/search");
        assert_eq!(cfg.fallback_param, "q");
    }

    #[test]
    fn match_modes_differ_on_diacritics() {
        assert_eq!(MatchMode::CaseInsensitive.key("Zürich"), "zürich");
        assert_eq!(MatchMode::Folded.key("Zürich"), "zurich");
    }
}
