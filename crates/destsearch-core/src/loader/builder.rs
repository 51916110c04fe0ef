// crates/destsearch-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, CACHE_SUFFIX};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    pub fn for_path(path: &Path) -> Self {
        if common_io::is_gzip(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

impl Catalog {
    /// **Smart Load:** reuses a fresh binary cache next to `json_path`, or
    /// parses the JSON and refreshes the cache.
    ///
    /// A failed cache write is logged and otherwise ignored; the parsed
    /// catalog is still returned.
    pub fn load_cached(json_path: impl AsRef<Path>) -> Result<Self> {
        let json_path = json_path.as_ref();
        let cache_path = common_io::get_cache_path(json_path, CACHE_SUFFIX);

        if is_cache_fresh(json_path, &cache_path) {
            match Self::load_from_path(&cache_path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    tracing::warn!(cache = %cache_path.display(), error = %e, "stale or corrupt catalog cache")
                }
            }
        }

        let catalog = Self::load_from_path(json_path)?;

        if let Err(e) = catalog.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write catalog cache");
        }

        Ok(catalog)
    }

    /// Write the binary cache. Gzip is used when `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_generic(path, self, CompressionMode::for_path(path))?;
        tracing::info!(path = %path.display(), entities = self.len(), "catalog cache written");
        Ok(())
    }
}

fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time <= cache_time,
        Err(_) => false,
    }
}

/// Writes any serializable value with the catalog's bincode options.
///
/// The gzip stream is finished explicitly so a failed trailer write is
/// reported instead of being lost on drop.
fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    use bincode::Options;

    let file = File::create(path).map_err(CatalogError::Io)?;
    let mut writer = BufWriter::new(file);
    let options = bincode::DefaultOptions::new().with_limit(super::BINARY_LIMIT);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(&mut writer, Compression::default());
                options
                    .serialize_into(&mut encoder, value)
                    .map_err(CatalogError::Bincode)?;
                encoder.finish().map_err(CatalogError::Io)?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(CatalogError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            options
                .serialize_into(&mut writer, value)
                .map_err(CatalogError::Bincode)?;
        }
    }

    writer.flush().map_err(CatalogError::Io)?;
    Ok(())
}
