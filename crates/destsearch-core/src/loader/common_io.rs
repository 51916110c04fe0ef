// crates/destsearch-core/src/loader/common_io.rs
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Payload format of a catalog file, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Binary,
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `catalog.json`, `catalog.json.gz` -> Json; `*.bin`, `*.bin.gz` -> Binary.
pub fn detect_format(path: &Path) -> Result<SourceFormat> {
    let inner = if is_gzip(path) {
        Path::new(path.file_stem().unwrap_or_default())
    } else {
        path
    };
    match inner.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(SourceFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("bin") => Ok(SourceFormat::Binary),
        _ => Err(CatalogError::InvalidData(format!(
            "Unrecognised catalog format: {}",
            path.display()
        ))),
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CatalogError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CatalogError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// `data/catalog.json` -> `data/catalog.json.<suffix>`
pub fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    source_path.with_file_name(format!("{filename}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_through_gzip_suffix() {
        assert_eq!(
            detect_format(Path::new("a/catalog.json")).ok(),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            detect_format(Path::new("catalog.JSON.gz")).ok(),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            detect_format(Path::new("catalog.json.cache.bin.gz")).ok(),
            Some(SourceFormat::Binary)
        );
        assert!(detect_format(Path::new("catalog.csv")).is_err());
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/catalog.json"), "cache.bin");
        assert_eq!(p, PathBuf::from("/data/catalog.json.cache.bin"));
    }
}
