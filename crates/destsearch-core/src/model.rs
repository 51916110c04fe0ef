// crates/destsearch-core/src/model.rs
pub mod catalog;
pub mod convert;
pub mod entity;
pub mod raw;

pub use catalog::Catalog;
pub use entity::{EntityKind, KindStyle, LegalStatus, SearchEntity};

/// File suffix of the binary cache written next to a JSON catalog.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "cache.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "cache.bin.gz";
