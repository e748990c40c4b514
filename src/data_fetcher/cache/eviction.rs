//! Age-based sweep of dated cache files

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::NaiveDate;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::constants::cache::DATE_PREFIX_LEN;
use crate::error::AppError;

/// Outcome of a successful sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EvictionReport {
    /// Dated cache files and leftover temp files that were inspected.
    pub scanned: usize,
    pub removed: Vec<PathBuf>,
}

/// True for file names of the form `YYYY-MM-DD_<anything>`.
pub fn is_dated_cache_file(name: &str) -> bool {
    name.len() > DATE_PREFIX_LEN
        && name.is_char_boundary(DATE_PREFIX_LEN)
        && name.as_bytes()[DATE_PREFIX_LEN] == b'_'
        && NaiveDate::parse_from_str(&name[..DATE_PREFIX_LEN], "%Y-%m-%d").is_ok()
}

/// True for temp files left by an interrupted cache write, named
/// `.YYYY-MM-DD_<anything>.tmp<suffix>`.
pub fn is_cache_temp_file(name: &str) -> bool {
    name.strip_prefix('.')
        .and_then(|rest| rest.rfind(".tmp").map(|at| &rest[..at]))
        .is_some_and(is_dated_cache_file)
}

/// Removes dated cache files older than `max_age` from each base directory.
pub async fn evict_older_than(
    base_paths: &[PathBuf],
    max_age: Duration,
) -> Result<EvictionReport, AppError> {
    evict_older_than_at(base_paths, max_age, SystemTime::now()).await
}

/// Sweep with an explicit "now".
///
/// Directories are scanned non-recursively and missing directories are
/// skipped. Temp files orphaned by interrupted writes age out the same way.
/// A file that cannot be inspected or removed is recorded and the sweep
/// moves on; the failures are returned together once every candidate has
/// been visited.
#[instrument(skip(base_paths), fields(bases = base_paths.len()))]
pub async fn evict_older_than_at(
    base_paths: &[PathBuf],
    max_age: Duration,
    now: SystemTime,
) -> Result<EvictionReport, AppError> {
    let mut report = EvictionReport::default();
    let mut failed: Vec<String> = Vec::new();

    for base in base_paths {
        let mut entries = match fs::read_dir(base).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache directory {} does not exist, skipping", base.display());
                continue;
            }
            Err(e) => {
                warn!("Cannot scan cache directory {}: {}", base.display(), e);
                failed.push(base.display().to_string());
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!("Error while scanning {}: {}", base.display(), e);
                    failed.push(base.display().to_string());
                    break;
                }
            };

            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !is_dated_cache_file(name) && !is_cache_temp_file(name) {
                continue;
            }

            let path = entry.path();
            report.scanned += 1;

            match evict_if_expired(&path, max_age, now).await {
                Ok(true) => report.removed.push(path),
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to evict {}: {}", path.display(), e);
                    failed.push(path.display().to_string());
                }
            }
        }
    }

    if !failed.is_empty() {
        return Err(AppError::CacheEviction {
            failed: failed.len(),
            scanned: report.scanned,
            paths: failed,
        });
    }

    info!(
        "Cache eviction finished: {} scanned, {} removed",
        report.scanned,
        report.removed.len()
    );
    Ok(report)
}

async fn evict_if_expired(
    path: &Path,
    max_age: Duration,
    now: SystemTime,
) -> Result<bool, std::io::Error> {
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Ok(false);
    }

    // Modification times in the future count as fresh.
    let age = now
        .duration_since(metadata.modified()?)
        .unwrap_or(Duration::ZERO);
    if age <= max_age {
        return Ok(false);
    }

    debug!("Removing {} (age {:?})", path.display(), age);
    fs::remove_file(path).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    const DAY: Duration = Duration::from_secs(24 * 3600);

    fn touch(dir: &Path, name: &str, age: Duration) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"{}").unwrap();
        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
        path
    }

    #[test]
    fn test_dated_file_pattern() {
        assert!(is_dated_cache_file("2025-01-15_leaders"));
        assert!(is_dated_cache_file("2025-01-15_boxscore_0022400061"));
        assert!(!is_dated_cache_file("2025-01-15"));
        assert!(!is_dated_cache_file("2025-01-15-leaders"));
        assert!(!is_dated_cache_file("2025-13-15_leaders"));
        assert!(!is_dated_cache_file("config.toml"));
        assert!(!is_dated_cache_file(".2025-01-15_leaders.tmp1"));
        assert!(!is_dated_cache_file("2025-01-1é_x"));
    }

    #[test]
    fn test_temp_file_pattern() {
        assert!(is_cache_temp_file(".2025-01-15_leaders.tmp4242-0"));
        assert!(is_cache_temp_file(".2025-01-15_boxscore_0022400061.tmp1-17"));
        assert!(!is_cache_temp_file("2025-01-15_leaders.tmp1-0"));
        assert!(!is_cache_temp_file(".2025-01-15_leaders"));
        assert!(!is_cache_temp_file(".config.toml.tmp1-0"));
        assert!(!is_cache_temp_file(".tmp"));
    }

    #[tokio::test]
    async fn test_evicts_orphaned_temp_files() {
        let dir = tempdir().unwrap();
        let orphan = touch(dir.path(), ".2025-01-10_leaders.tmp999-3", 4 * DAY);
        let in_flight = touch(dir.path(), ".2025-01-15_scores.tmp999-4", Duration::ZERO);
        let hidden = touch(dir.path(), ".keep", 10 * DAY);

        let report = evict_older_than(&[dir.path().to_path_buf()], 3 * DAY)
            .await
            .unwrap();

        assert_eq!(report.scanned, 2);
        assert_eq!(report.removed, vec![orphan.clone()]);
        assert!(!orphan.exists());
        assert!(in_flight.exists());
        assert!(hidden.exists());
    }

    #[tokio::test]
    async fn test_evicts_only_old_matching_files() {
        let dir = tempdir().unwrap();
        let old = touch(dir.path(), "2025-01-10_leaders", 4 * DAY);
        let fresh = touch(dir.path(), "2025-01-14_leaders", DAY);
        let unrelated = touch(dir.path(), "notes.txt", 10 * DAY);

        let report = evict_older_than(&[dir.path().to_path_buf()], 3 * DAY)
            .await
            .unwrap();

        assert_eq!(report.scanned, 2);
        assert_eq!(report.removed, vec![old.clone()]);
        assert!(!old.exists());
        assert!(fresh.exists());
        assert!(unrelated.exists());
    }

    #[tokio::test]
    async fn test_boundary_is_exclusive() {
        let dir = tempdir().unwrap();
        let path = touch(dir.path(), "2025-01-12_scores", 3 * DAY);
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();

        let report = evict_older_than_at(&[dir.path().to_path_buf()], 3 * DAY, modified + 3 * DAY)
            .await
            .unwrap();
        assert!(report.removed.is_empty());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_missing_base_is_skipped() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let report = evict_older_than(&[missing], 3 * DAY).await.unwrap();
        assert_eq!(report, EvictionReport::default());
    }

    #[tokio::test]
    async fn test_sweep_is_not_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("2025-01-01_nested");
        std::fs::create_dir(&nested).unwrap();
        let inner = touch(&nested, "2025-01-01_leaders", 10 * DAY);

        evict_older_than(&[dir.path().to_path_buf()], 3 * DAY)
            .await
            .unwrap();
        assert!(inner.exists());
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_unreadable_base_reports_failure_but_processes_others() {
        let dir = tempdir().unwrap();
        // A regular file in place of a directory cannot be scanned.
        let not_a_dir = touch(dir.path(), "plain-file", DAY);
        let good = tempdir().unwrap();
        let old = touch(good.path(), "2025-01-01_team_1610612747", 5 * DAY);

        let err = evict_older_than(&[not_a_dir, good.path().to_path_buf()], 3 * DAY)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CacheEviction { failed: 1, .. }));
        assert!(!old.exists());
    }
}
