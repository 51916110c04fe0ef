// crates/destsearch-core/src/widget.rs
use crate::search::SearchIndex;
use crate::session::{Commit, Direction, SearchState};
use crate::traits::NavigationSink;

/// UI events a search box reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input now holds this text.
    Type(String),
    ArrowDown,
    ArrowUp,
    Enter,
    /// Pointer/tap on suggestion row `n`.
    Select(usize),
    Blur,
    Focus,
}

/// One search box bound to an index and a navigation sink.
///
/// Applies [`SearchState`] transitions and forwards every commit to the sink,
/// exactly once per commit.
pub struct SearchWidget<'a, S: NavigationSink> {
    index: &'a SearchIndex,
    state: SearchState,
    sink: S,
}

impl<'a, S: NavigationSink> SearchWidget<'a, S> {
    pub fn new(index: &'a SearchIndex, sink: S) -> Self {
        Self {
            index,
            state: SearchState::new(),
            sink,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn index(&self) -> &SearchIndex {
        self.index
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply one event. Returns the commit it caused, if any.
    pub fn handle(&mut self, event: SearchEvent) -> Option<Commit> {
        let state = std::mem::take(&mut self.state);
        let (next, commit) = match event {
            SearchEvent::Type(text) => (state.on_type(self.index, text), None),
            SearchEvent::ArrowDown => (state.on_arrow(Direction::Down), None),
            SearchEvent::ArrowUp => (state.on_arrow(Direction::Up), None),
            SearchEvent::Enter => state.on_commit(self.index),
            SearchEvent::Select(row) => state.on_select(row),
            SearchEvent::Blur => (state.on_blur(), None),
            SearchEvent::Focus => (state.on_focus(self.index), None),
        };
        self.state = next;

        tracing::debug!(
            query = %self.state.query,
            phase = ?self.state.phase,
            selected = self.state.selected_index(),
            results = self.state.results.len(),
            "search: transition"
        );

        if let Some(commit) = &commit {
            tracing::debug!(path = %commit.path, "search: navigate");
            self.sink.navigate_to(&commit.path);
        }
        commit
    }

    /// Convenience for replaying a sequence of events.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = SearchEvent>) -> Vec<Commit> {
        events
            .into_iter()
            .filter_map(|event| self.handle(event))
            .collect()
    }
}
