// crates/destsearch-core/src/lib.rs

//! destsearch-core
//! ===============
//!
//! Destination search for travel guide catalogs: an in-memory index of
//! regions, countries, cities and other places, plus the keyboard/pointer
//! state machine of the autocomplete box that sits on top of it.
//!
//! ```rust
//! use destsearch_core::prelude::*;
//!
//! let catalog = Catalog::embedded().unwrap();
//! let index = SearchIndex::from_catalog(catalog, SearchConfig::default());
//!
//! let mut widget = SearchWidget::new(&index, RecordingSink::new());
//! widget.handle(SearchEvent::Type("cali".into()));
//! widget.handle(SearchEvent::ArrowDown);
//! widget.handle(SearchEvent::Enter);
//!
//! assert_eq!(widget.sink().last(), Some("/usa/california"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;
pub mod widget;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::config::{MatchMode, SearchConfig, MAX_SUGGESTIONS};
pub use crate::error::{CatalogError, Result};
pub use crate::model::{Catalog, EntityKind, KindStyle, LegalStatus, SearchEntity};
pub use crate::search::SearchIndex;
pub use crate::session::{Commit, CommitKind, Direction, Phase, SearchState};
pub use crate::traits::{NameMatch, NavigationSink, RecordingSink};
pub use crate::widget::{SearchEvent, SearchWidget};

pub mod prelude {
    pub use crate::{
        Catalog, CatalogError, CatalogStats, Commit, CommitKind, Direction, EntityKind,
        LegalStatus, MatchMode, NameMatch, NavigationSink, Phase, RecordingSink, Result,
        SearchConfig, SearchEntity, SearchEvent, SearchIndex, SearchState, SearchWidget,
        MAX_SUGGESTIONS,
    };
}
