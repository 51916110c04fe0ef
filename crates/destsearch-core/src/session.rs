// crates/destsearch-core/src/session.rs

//! Keyboard/pointer interaction state of one search box.
//!
//! The state is a plain value; every transition takes it by value and returns
//! the next one, so the machine can be driven and tested without any UI
//! framework.
//!
//! ```text
//!            type / focus (non-empty)
//!   Idle ─────────────────────────────▶ Suggesting ◀─┐ arrows
//!    ▲  ◀──────────── blur ────────────     │     ───┘
//!    │                                      │ enter / select
//!    └──────────── type ──────────── Committed
//! ```

use crate::model::SearchEntity;
use crate::search::SearchIndex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No suggestions shown.
    #[default]
    Idle,
    /// Suggestions visible (possibly an empty "no matches" list).
    Suggesting,
    /// Navigation was triggered.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What a commit navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommitKind {
    /// A highlighted or clicked suggestion.
    Selected { entity: SearchEntity },
    /// Free text that exactly named an entity.
    Resolved { entity: SearchEntity },
    /// Free text sent to the generic results route.
    Fallback { query: String },
}

/// Outcome of a commit: the path handed to the navigation sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub path: String,
    pub kind: CommitKind,
}

/// State of one search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Text currently in the input.
    pub query: String,
    pub phase: Phase,
    /// Highlighted row; `None` means nothing highlighted.
    pub selected: Option<usize>,
    /// Suggestions for `query`, already bounded by the index.
    pub results: Vec<SearchEntity>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Suggesting
    }

    /// Highlight as an integer in `[-1, N-1]`; `-1` means nothing highlighted.
    pub fn selected_index(&self) -> isize {
        self.selected.map_or(-1, |i| i as isize)
    }

    pub fn selected_entity(&self) -> Option<&SearchEntity> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// The input changed: recompute suggestions and reset the highlight.
    pub fn on_type(self, index: &SearchIndex, query: impl Into<String>) -> Self {
        let query = query.into();
        let results: Vec<SearchEntity> = index.search(&query).into_iter().cloned().collect();
        let phase = if query.is_empty() {
            Phase::Idle
        } else {
            Phase::Suggesting
        };
        Self {
            query,
            phase,
            selected: None,
            results,
        }
    }

    /// Move the highlight. Clamps at both ends, never wraps.
    pub fn on_arrow(mut self, direction: Direction) -> Self {
        if self.phase != Phase::Suggesting {
            return self;
        }
        let last = self.results.len().checked_sub(1);
        self.selected = match (direction, self.selected, last) {
            (_, _, None) => None,
            (Direction::Down, None, Some(_)) => Some(0),
            (Direction::Down, Some(i), Some(last)) => Some((i + 1).min(last)),
            (Direction::Up, None, _) => None,
            (Direction::Up, Some(0), _) => None,
            (Direction::Up, Some(i), _) => Some(i - 1),
        };
        self
    }

    /// Enter key.
    ///
    /// Commits the highlighted row if any. Otherwise the trimmed text is
    /// committed: to an exactly named entity when one exists, else to the
    /// index's fallback route. Blank text with nothing highlighted is a
    /// no-op.
    pub fn on_commit(self, index: &SearchIndex) -> (Self, Option<Commit>) {
        if let Some(entity) = self.selected_entity().cloned() {
            return Self::committed(entity.destination_path.clone(), CommitKind::Selected { entity });
        }
        let text = self.query.trim();
        if text.is_empty() {
            return (self, None);
        }
        match index.resolve(text) {
            Some(entity) => Self::committed(
                entity.destination_path.clone(),
                CommitKind::Resolved {
                    entity: entity.clone(),
                },
            ),
            None => Self::committed(
                index.fallback_path(text),
                CommitKind::Fallback {
                    query: text.to_string(),
                },
            ),
        }
    }

    /// Pointer selection of row `position`, independent of the keyboard
    /// highlight. Out-of-range rows are ignored.
    pub fn on_select(self, position: usize) -> (Self, Option<Commit>) {
        match self.results.get(position) {
            Some(entity) if self.phase == Phase::Suggesting => {
                let entity = entity.clone();
                Self::committed(entity.destination_path.clone(), CommitKind::Selected { entity })
            }
            _ => (self, None),
        }
    }

    /// Focus left the box: close the list, keep the typed text.
    pub fn on_blur(self) -> Self {
        Self {
            query: self.query,
            phase: Phase::Idle,
            selected: None,
            results: Vec::new(),
        }
    }

    /// Focus entered the box: re-show suggestions for the current text,
    /// recomputed rather than reused.
    pub fn on_focus(self, index: &SearchIndex) -> Self {
        if self.query.is_empty() {
            return self.on_blur();
        }
        let query = self.query;
        Self::new().on_type(index, query)
    }

    fn committed(path: String, kind: CommitKind) -> (Self, Option<Commit>) {
        (Self::new_committed(), Some(Commit { path, kind }))
    }

    fn new_committed() -> Self {
        Self {
            phase: Phase::Committed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::model::{EntityKind, LegalStatus};

    fn index() -> SearchIndex {
        let e = |name: &str, kind, path: &str| {
            SearchEntity::new(name, kind, LegalStatus::Medical, path, "")
        };
        SearchIndex::new(
            vec![
                e("Alabama", EntityKind::Region, "/usa/alabama"),
                e("Alaska", EntityKind::Region, "/usa/alaska"),
                e("Arkansas", EntityKind::Region, "/usa/arkansas"),
            ],
            vec![
                e("Netherlands", EntityKind::Country, "/world/netherlands"),
                e("Canada", EntityKind::Country, "/world/canada"),
            ],
            SearchConfig::default(),
        )
    }

    #[test]
    fn typing_opens_with_nothing_highlighted() {
        let idx = index();
        let s = SearchState::new().on_type(&idx, "a").on_arrow(Direction::Down);
        assert_eq!(s.selected_index(), 0);

        let s = s.on_type(&idx, "al");
        assert!(s.is_open());
        assert_eq!(s.selected_index(), -1);
        assert_eq!(s.results.len(), 2);
    }

    #[test]
    fn empty_text_closes_the_list() {
        let s = SearchState::new().on_type(&index(), "");
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.results.is_empty());
    }

    #[test]
    fn arrows_clamp_without_wrapping() {
        let idx = index();
        let mut s = SearchState::new().on_type(&idx, "al");
        for _ in 0..5 {
            s = s.on_arrow(Direction::Down);
        }
        assert_eq!(s.selected_index(), 1);
        for _ in 0..5 {
            s = s.on_arrow(Direction::Up);
        }
        assert_eq!(s.selected_index(), -1);
    }

    #[test]
    fn arrows_on_empty_results_stay_unhighlighted() {
        let s = SearchState::new()
            .on_type(&index(), "xyz")
            .on_arrow(Direction::Down);
        assert!(s.is_open());
        assert_eq!(s.selected_index(), -1);
    }

    #[test]
    fn arrows_are_ignored_while_closed() {
        let s = SearchState::new()
            .on_type(&index(), "al")
            .on_blur()
            .on_arrow(Direction::Down);
        assert_eq!(s.selected_index(), -1);
    }

    #[test]
    fn enter_commits_highlighted_row_and_clears() {
        let idx = index();
        let s = SearchState::new()
            .on_type(&idx, "a")
            .on_arrow(Direction::Down)
            .on_arrow(Direction::Down);
        let (s, commit) = s.on_commit(&idx);
        let commit = commit.expect("commit");
        assert_eq!(commit.path, "/usa/alaska");
        assert_eq!(s.phase, Phase::Committed);
        assert!(s.query.is_empty());
        assert!(s.results.is_empty());
    }

    #[test]
    fn enter_without_highlight_falls_back_to_raw_text() {
        let idx = index();
        let (s, commit) = SearchState::new().on_type(&idx, "neth").on_commit(&idx);
        let commit = commit.expect("fallback commit");
        assert_eq!(commit.path, "/search?q=neth");
        assert_eq!(
            commit.kind,
            CommitKind::Fallback {
                query: "neth".into()
            }
        );
        assert_eq!(s.phase, Phase::Committed);
    }

    #[test]
    fn fallback_commit_reports_the_text_it_routed() {
        let idx = index();
        let (_, commit) = SearchState::new().on_type(&idx, " neth ").on_commit(&idx);
        let commit = commit.expect("fallback commit");
        assert_eq!(commit.path, "/search?q=neth");
        assert_eq!(
            commit.kind,
            CommitKind::Fallback {
                query: "neth".into()
            }
        );
    }

    #[test]
    fn enter_with_exact_name_resolves_it() {
        let idx = index();
        let (_, commit) = SearchState::new().on_type(&idx, "canada").on_commit(&idx);
        let commit = commit.expect("resolved commit");
        assert_eq!(commit.path, "/world/canada");
        assert!(matches!(commit.kind, CommitKind::Resolved { .. }));
    }

    #[test]
    fn enter_on_blank_text_does_nothing() {
        let idx = index();
        let s = SearchState::new().on_type(&idx, "   ");
        let (after, commit) = s.clone().on_commit(&idx);
        assert!(commit.is_none());
        assert_eq!(after, s);
    }

    #[test]
    fn pointer_selection_ignores_keyboard_highlight() {
        let idx = index();
        let s = SearchState::new()
            .on_type(&idx, "a")
            .on_arrow(Direction::Down);
        let (_, commit) = s.on_select(3);
        assert_eq!(commit.expect("commit").path, "/world/netherlands");
    }

    #[test]
    fn pointer_selection_out_of_range_is_ignored() {
        let idx = index();
        let s = SearchState::new().on_type(&idx, "al");
        let (after, commit) = s.clone().on_select(9);
        assert!(commit.is_none());
        assert_eq!(after, s);
    }

    #[test]
    fn blur_keeps_text_and_focus_recomputes() {
        let idx = index();
        let s = SearchState::new()
            .on_type(&idx, "ala")
            .on_arrow(Direction::Down)
            .on_blur();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.query, "ala");
        assert!(s.results.is_empty());

        let s = s.on_focus(&idx);
        assert!(s.is_open());
        assert_eq!(s.selected_index(), -1);
        let names: Vec<_> = s.results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alabama", "Alaska"]);
    }

    #[test]
    fn focus_on_empty_input_stays_idle() {
        let s = SearchState::new().on_focus(&index());
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.results.is_empty());
    }
}
