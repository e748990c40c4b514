//! File-backed response cache keyed by endpoint, target id and date

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument, warn};

use super::eviction::{EvictionReport, evict_older_than};
use crate::constants::cache::MIN_CACHED_BYTES;
use crate::data_fetcher::api::Endpoint;
use crate::error::AppError;

/// Identity of one cached response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: Endpoint,
    pub id: Option<String>,
    pub date: String,
}

impl CacheKey {
    pub fn new(endpoint: Endpoint, id: Option<&str>, date: impl Into<String>) -> Self {
        Self {
            endpoint,
            id: id.map(str::to_string),
            date: date.into(),
        }
    }

    /// `<date>_<suffix>[_<id>]`. Characters outside `[A-Za-z0-9-]` in the id
    /// are replaced so an id can never leave the cache directory.
    pub fn file_name(&self) -> String {
        let suffix = self.endpoint.cache_suffix();
        match &self.id {
            Some(id) => format!("{}_{}_{}", self.date, suffix, sanitize_id(id)),
            None => format!("{}_{}", self.date, suffix),
        }
    }

    /// Path relative to the cache root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.endpoint.cache_subpath()).join(self.file_name())
    }
}

fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { 'x' })
        .collect()
}

/// Storage used by the fetch orchestrator and the readers.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Resolves the on-disk location of a key.
    fn path_for(&self, key: &CacheKey) -> PathBuf;

    /// True only if the file exists and holds at least [`MIN_CACHED_BYTES`].
    async fn exists(&self, path: &Path) -> bool;

    async fn read(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Replaces the whole file, creating parent directories as needed.
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError>;

    /// Removes dated entries older than `max_age` across every cache directory.
    async fn evict_older_than(&self, max_age: Duration) -> Result<EvictionReport, AppError>;
}

/// [`CacheStore`] rooted at a directory, one subdirectory per endpoint group.
#[derive(Debug)]
pub struct FileCacheStore {
    root: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileCacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tmp_counter: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories swept by eviction.
    pub fn eviction_roots(&self) -> Vec<PathBuf> {
        Endpoint::cache_subpaths()
            .into_iter()
            .map(|sub| self.root.join(sub))
            .collect()
    }

    fn temp_path_for(&self, path: &Path) -> PathBuf {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        path.with_file_name(format!(".{name}.tmp{}-{n}", std::process::id()))
    }
}

/// Temp file of an in-progress write. Removed on drop unless it was renamed
/// into place, so failed or cancelled writes do not leave it behind.
struct PendingFile {
    path: PathBuf,
    committed: bool,
}

impl PendingFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.relative_path())
    }

    async fn exists(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(meta) => meta.is_file() && meta.len() >= MIN_CACHED_BYTES,
            Err(_) => false,
        }
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).await.map_err(|e| AppError::cache_io(path, e))
    }

    #[instrument(skip(self, bytes), fields(path = %path.display(), len = bytes.len()))]
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::cache_io(parent, e))?;
        }

        // Concurrent writers to one key each rename a complete file into
        // place, so the last rename wins and readers never see a torn file.
        let mut pending = PendingFile::new(self.temp_path_for(path));
        fs::write(&pending.path, bytes)
            .await
            .map_err(|e| AppError::cache_io(&pending.path, e))?;
        if let Err(e) = fs::rename(&pending.path, path).await {
            warn!("Failed to move cache file into place: {e}");
            return Err(AppError::cache_io(path, e));
        }
        pending.committed = true;

        debug!("Cached {} bytes", bytes.len());
        Ok(())
    }

    async fn evict_older_than(&self, max_age: Duration) -> Result<EvictionReport, AppError> {
        evict_older_than(&self.eviction_roots(), max_age).await
    }
}
