// crates/destsearch-core/src/loader.rs

//! # Catalog Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (JSON source vs bincode cache).

use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use bincode::Options;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

use common_io::SourceFormat;

/// Upper bound for a decoded binary cache.
const BINARY_LIMIT: u64 = 64 * 1024 * 1024;

#[cfg(feature = "json")]
static EMBEDDED_CATALOG: once_cell::sync::OnceCell<Catalog> = once_cell::sync::OnceCell::new();

#[cfg(feature = "json")]
const EMBEDDED_CATALOG_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json"));

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_catalog_filename() -> &'static str {
        "catalog.json"
    }

    pub fn default_catalog_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_catalog_filename())
    }

    /// The sample catalog compiled into the crate, parsed once per process.
    #[cfg(feature = "json")]
    pub fn embedded() -> Result<&'static Catalog> {
        EMBEDDED_CATALOG.get_or_try_init(|| {
            let catalog = Self::from_json_str(EMBEDDED_CATALOG_JSON)?;
            tracing::debug!(entities = catalog.len(), "embedded catalog parsed");
            Ok(catalog)
        })
    }

    /// Load a catalog from disk. The format follows the file name:
    /// `.json` / `.json.gz` are parsed as source JSON, `.bin` / `.bin.gz`
    /// as a binary cache.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = common_io::detect_format(path)?;
        let reader = common_io::open_stream(path)?;

        let catalog = match format {
            SourceFormat::Json => Self::from_json_reader(reader)?,
            SourceFormat::Binary => {
                let mut data = Vec::new();
                let mut reader = reader;
                reader.read_to_end(&mut data)?;
                Self::from_bytes(&data)?
            }
        };

        tracing::debug!(
            path = %path.display(),
            ?format,
            regions = catalog.regions.len(),
            world = catalog.world.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: crate::model::raw::CatalogRaw = serde_json::from_str(s)?;
        Ok(Self::from_raw(raw))
    }

    #[cfg(feature = "json")]
    fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: crate::model::raw::CatalogRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    #[cfg(not(feature = "json"))]
    fn from_json_reader(_reader: impl Read) -> Result<Self> {
        Err(CatalogError::InvalidData(
            "JSON catalogs require the 'json' feature".into(),
        ))
    }

    /// Decode a catalog from its bincode form.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let catalog: Catalog = bincode::DefaultOptions::new()
            .with_limit(BINARY_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(CatalogError::Bincode)?;
        Ok(catalog)
    }

    /// Encode the catalog with the same options [`Catalog::from_bytes`] reads.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::DefaultOptions::new()
            .with_limit(BINARY_LIMIT)
            .serialize(self)
            .map_err(CatalogError::Bincode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_parsed_once() {
        let a = Catalog::embedded().expect("embedded catalog");
        let b = Catalog::embedded().expect("embedded catalog");
        assert!(std::ptr::eq(a, b));
        assert!(!a.regions.is_empty());
        assert!(!a.world.is_empty());
    }

    #[test]
    fn binary_form_survives_encoding() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let bytes = catalog.to_bytes().expect("encode");
        assert_eq!(&Catalog::from_bytes(&bytes).expect("decode"), catalog);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = Catalog::from_bytes(&[0xff; 3]).unwrap_err();
        assert!(matches!(err, CatalogError::Bincode(_)));
    }
}
