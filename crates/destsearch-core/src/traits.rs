// crates/destsearch-core/src/traits.rs
use crate::config::MatchMode;
use crate::model::SearchEntity;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get comparisons in any [`MatchMode`].
///
/// # Examples
/// ```rust
/// use destsearch_core::config::MatchMode;
/// use destsearch_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("California").name_contains("CALI", MatchMode::CaseInsensitive));
/// assert!(!Place("Zürich").name_contains("zuri", MatchMode::CaseInsensitive));
/// assert!(Place("Zürich").name_contains("zuri", MatchMode::Folded));
/// assert!(Place("Łódź").is_named("lodz", MatchMode::Folded));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Substring match against an already normalized query key.
    #[inline]
    fn name_contains_key(&self, key: &str, mode: MatchMode) -> bool {
        mode.key(self.name_str()).contains(key)
    }

    /// Substring match. The empty query matches nothing.
    #[inline]
    fn name_contains(&self, q: &str, mode: MatchMode) -> bool {
        !q.is_empty() && self.name_contains_key(&mode.key(q), mode)
    }

    /// Whole-name equality under `mode`.
    #[inline]
    fn is_named(&self, q: &str, mode: MatchMode) -> bool {
        mode.key(self.name_str()) == mode.key(q)
    }
}

impl NameMatch for SearchEntity {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Receiver of committed destinations.
///
/// Navigation is assumed to always succeed (a client-side route change), so
/// the call has no return value. The search widget calls it exactly once per
/// commit.
pub trait NavigationSink {
    fn navigate_to(&mut self, path: &str);
}

impl<F: FnMut(&str)> NavigationSink for F {
    fn navigate_to(&mut self, path: &str) {
        self(path)
    }
}

/// A sink that only records the paths it was sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub paths: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }
}

impl NavigationSink for RecordingSink {
    fn navigate_to(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}
