//! Asset loading for a single bundling run

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::{BundleError, BundleOptions, BundleResult};

/// Loads every file referenced during one run
///
/// Files are read synchronously, one per call. With `cache_assets` enabled a
/// file referenced more than once is read from disk only the first time;
/// the produced document is the same either way.
pub struct Session {
    cache: Option<HashMap<PathBuf, Vec<u8>>>,
}

impl Session {
    pub fn new(options: BundleOptions) -> Self {
        let cache = if options.cache_assets {
            Some(HashMap::new())
        } else {
            None
        };

        Self { cache }
    }

    /// Reads a stylesheet, script or document as UTF-8 text
    pub fn retrieve_text(&mut self, path: &Path) -> BundleResult<String> {
        self.load(path)
            .and_then(|data| {
                String::from_utf8(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
            .map_err(|source| BundleError::ReadText {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads an icon or image as raw bytes
    pub fn retrieve_bytes(&mut self, path: &Path) -> BundleResult<Vec<u8>> {
        self.load(path).map_err(|source| BundleError::ReadBytes {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of files currently held in the cache
    pub fn cached_assets(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    fn load(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        let Some(cache) = self.cache.as_mut() else {
            return fs::read(path);
        };

        if let Some(data) = cache.get(path) {
            tracing::trace!(path = %path.display(), "asset cache hit");
            return Ok(data.clone());
        }

        let data = fs::read(path)?;
        cache.insert(path.to_path_buf(), data.clone());
        Ok(data)
    }
}
