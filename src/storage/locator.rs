// ============================================================================
// File: src/storage/locator.rs
// ----------------------------------------------------------------------------
// Cache directory resolution with removable-storage preference.
//
// Resolution never fails: every failure on the preferred path degrades to a
// more conservative directory and leaves a log line behind.
// ============================================================================

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::StorageResult;

use super::config::{LocatorConfig, strip_root};
use super::environment::StorageEnvironment;
use super::fs_ops::{DirStatus, create_marker, ensure_dir, ensure_dir_all};
use super::types::{FallbackReason, Placement, ResolvedDirectory};

/// Resolves where application cache data should live
///
/// Holds only layout configuration, so one locator can be built once and
/// shared by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct CacheLocator {
    config: LocatorConfig,
}

impl CacheLocator {
    /// Create a locator with the given layout
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Application cache directory
    ///
    /// Uses `<removable root>/Android/data/<package>/cache` while removable
    /// storage is mounted, creating it together with a `.nomedia` marker on
    /// first use. Otherwise, or when that directory cannot be created,
    /// returns the internal cache root from `env`.
    pub fn cache_directory<E>(&self, env: &E) -> ResolvedDirectory
    where
        E: StorageEnvironment + ?Sized,
    {
        let reason = if env.is_removable_storage_mounted() {
            match self.external_cache_directory(env) {
                Ok(dir) => return ResolvedDirectory::preferred(dir, Placement::External),
                Err(e) => {
                    warn!("Unable to create external cache directory: {}", e);
                    FallbackReason::DirectoryCreateFailed
                }
            }
        } else {
            FallbackReason::MountUnavailable
        };

        self.internal(env, reason)
    }

    /// Named sub-directory of the application cache directory
    ///
    /// Falls back to the cache directory itself when the sub-directory
    /// cannot be created. Leading separators in `sub_name` are ignored, so
    /// the result never leaves the cache directory.
    pub fn individual_cache_directory<E>(&self, env: &E, sub_name: &str) -> ResolvedDirectory
    where
        E: StorageEnvironment + ?Sized,
    {
        let base = self.cache_directory(env);
        let individual = base.path().join(strip_root(sub_name));

        match ensure_dir(&individual) {
            Ok(_) => base.rebased(individual),
            Err(e) => {
                warn!("Unable to create individual cache directory: {}", e);
                let placement = base.placement();
                ResolvedDirectory::degraded(
                    base.into_path_buf(),
                    placement,
                    FallbackReason::DirectoryCreateFailed,
                )
            }
        }
    }

    /// Individual cache directory under the configured default name
    pub fn default_individual_cache_directory<E>(&self, env: &E) -> ResolvedDirectory
    where
        E: StorageEnvironment + ?Sized,
    {
        self.individual_cache_directory(env, &self.config.individual_dir_name)
    }

    /// Caller-named cache directory relative to the removable storage root
    ///
    /// `relative_path` may span several levels (e.g. "AppDir/cache/images").
    /// Falls back to the internal cache root when removable storage is not
    /// mounted or the directory does not exist after the creation attempt.
    pub fn own_cache_directory<E>(&self, env: &E, relative_path: &str) -> ResolvedDirectory
    where
        E: StorageEnvironment + ?Sized,
    {
        let reason = if env.is_removable_storage_mounted() {
            let dir = env
                .removable_storage_root()
                .join(strip_root(relative_path));

            match ensure_dir_all(&dir) {
                Ok(_) if dir.is_dir() => {
                    return ResolvedDirectory::preferred(dir, Placement::External);
                }
                Ok(_) => {
                    warn!(
                        "Own cache directory {} missing after creation",
                        dir.display()
                    );
                    FallbackReason::DirectoryCreateFailed
                }
                Err(e) => {
                    warn!("Unable to create own cache directory: {}", e);
                    FallbackReason::DirectoryCreateFailed
                }
            }
        } else {
            FallbackReason::MountUnavailable
        };

        self.internal(env, reason)
    }

    fn external_cache_directory<E>(&self, env: &E) -> StorageResult<PathBuf>
    where
        E: StorageEnvironment + ?Sized,
    {
        let dir = self
            .config
            .external_cache_dir(env.removable_storage_root(), &env.application_package_id());

        if ensure_dir_all(&dir)? == DirStatus::Created {
            if let Some(marker) = &self.config.marker_file_name {
                if let Err(e) = create_marker(&dir, marker) {
                    info!(
                        "Can't create \"{}\" file in application external cache directory: {}",
                        marker, e
                    );
                }
            }
        }

        Ok(dir)
    }

    fn internal<E>(&self, env: &E, reason: FallbackReason) -> ResolvedDirectory
    where
        E: StorageEnvironment + ?Sized,
    {
        let root = env.internal_cache_root();
        debug!("Using internal cache root {} ({})", root.display(), reason);
        ResolvedDirectory::degraded(root, Placement::Internal, reason)
    }
}
