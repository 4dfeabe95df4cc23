use crate::api::PriceSource;
use crate::error::{PriceError, Result};
use crate::query::SearchQuery;
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

const CACHE_EXTENSION: &str = "json";

/// Hex SHA-256 digest of a query URL, used as the cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryFingerprint(String);

impl QueryFingerprint {
    pub fn of(query_url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(query_url.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistent cache of raw search responses.
///
/// One file per fingerprint, holding the response body verbatim. Entries
/// never expire; they stay until removed by hand or by [`ResponseCache::clear`].
#[derive(Debug, Clone)]
pub struct ResponseCache {
    cache_dir: PathBuf,
}

impl ResponseCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the full path for a cached response
    pub fn path(&self, fingerprint: &QueryFingerprint) -> PathBuf {
        self.cache_dir
            .join(format!("{}.{}", fingerprint, CACHE_EXTENSION))
    }

    /// Read a stored response, `None` if nothing is cached for this fingerprint
    pub fn lookup(&self, fingerprint: &QueryFingerprint) -> Result<Option<Vec<u8>>> {
        let path = self.path(fingerprint);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PriceError::CacheRead { path, source }),
        }
    }

    /// Persist a response.
    ///
    /// The body is written to a temporary file in the cache directory and
    /// renamed into place, so the cache file either holds the whole body or
    /// does not exist.
    pub fn store(&self, fingerprint: &QueryFingerprint, bytes: &[u8]) -> Result<()> {
        let path = self.path(fingerprint);
        let write_error = |source: std::io::Error| PriceError::CacheWrite {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.cache_dir).map_err(write_error)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir).map_err(write_error)?;
        tmp.write_all(bytes).map_err(write_error)?;
        tmp.persist(&path).map_err(|e| write_error(e.error))?;

        log::debug!("Stored {} bytes in {}", bytes.len(), path.display());
        Ok(())
    }

    /// Remove every cached response, returning how many files were deleted
    pub fn clear(&self) -> Result<usize> {
        let entries = match std::fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(PriceError::CacheRead {
                    path: self.cache_dir.clone(),
                    source,
                })
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !is_cache_file(&path) {
                continue;
            }
            std::fs::remove_file(&path).map_err(|source| PriceError::CacheWrite {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }

        log::info!(
            "Removed {} cached responses from {}",
            removed,
            self.cache_dir.display()
        );
        Ok(removed)
    }
}

fn is_cache_file(path: &Path) -> bool {
    let has_extension = path.extension().and_then(|e| e.to_str()) == Some(CACHE_EXTENSION);
    let is_digest = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    path.is_file() && has_extension && is_digest
}

/// Fetch a search response, checking cache first.
///
/// On a miss the response is fetched once and stored before it is returned;
/// a failed store fails the call.
pub fn fetch_cached(
    cache: &ResponseCache,
    query: &SearchQuery,
    source: &dyn PriceSource,
) -> Result<Vec<u8>> {
    let fingerprint = QueryFingerprint::of(query.url());
    log::debug!("Query fingerprint: {}", fingerprint);

    if let Some(bytes) = cache.lookup(&fingerprint)? {
        log::info!("Reading prices from cache ({})", fingerprint);
        return Ok(bytes);
    }

    log::info!(
        "Cache miss for {}, requesting prices for {} cards",
        fingerprint,
        query.card_count()
    );
    let bytes = source.fetch(query.url())?;
    cache.store(&fingerprint, &bytes)?;

    Ok(bytes)
}

#[cfg(test)]
#[path = "response_cache_tests.rs"]
mod tests;
