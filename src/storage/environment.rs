// ============================================================================
// File: src/storage/environment.rs
// ----------------------------------------------------------------------------
// Host environment capability consumed by the cache locator.
//
// Provides:
// - StorageEnvironment trait (mount state, storage roots, package id)
// - StaticEnvironment with explicit values, loadable from JSON
// - HostEnvironment probing the running process
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

use super::types::MountState;

/// Environment variable Android sets to the primary external storage root
pub const EXTERNAL_STORAGE_VAR: &str = "EXTERNAL_STORAGE";

/// Host environment queries needed to place a cache directory
///
/// Implementations report values only; they perform no directory creation.
pub trait StorageEnvironment {
    /// Current removable storage mount state
    fn mount_state(&self) -> MountState;

    /// Whether removable storage is mounted read/write
    fn is_removable_storage_mounted(&self) -> bool {
        self.mount_state().is_mounted()
    }

    /// Root path of removable storage
    ///
    /// Only consulted when [`mount_state`](Self::mount_state) is mounted.
    fn removable_storage_root(&self) -> PathBuf;

    /// Application package identifier (e.g. "com.example.app")
    fn application_package_id(&self) -> String;

    /// Internal cache root, assumed to exist or be creatable by the host
    fn internal_cache_root(&self) -> PathBuf;
}

impl<T: StorageEnvironment + ?Sized> StorageEnvironment for &T {
    fn mount_state(&self) -> MountState {
        (**self).mount_state()
    }

    fn removable_storage_root(&self) -> PathBuf {
        (**self).removable_storage_root()
    }

    fn application_package_id(&self) -> String {
        (**self).application_package_id()
    }

    fn internal_cache_root(&self) -> PathBuf {
        (**self).internal_cache_root()
    }
}

/// Environment with fixed, caller-supplied values
///
/// Suited to tests, non-Android targets and hosts that hand over their
/// storage layout as configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticEnvironment {
    /// Reported mount state of removable storage
    pub mount_state: MountState,

    /// Root of removable storage
    pub removable_root: PathBuf,

    /// Application package identifier
    pub package_id: String,

    /// Internal cache root
    pub internal_cache_root: PathBuf,
}

impl StaticEnvironment {
    /// Create an environment with removable storage mounted
    pub fn new<P, R, I>(package_id: P, removable_root: R, internal_cache_root: I) -> Self
    where
        P: Into<String>,
        R: Into<PathBuf>,
        I: Into<PathBuf>,
    {
        Self {
            mount_state: MountState::Mounted,
            removable_root: removable_root.into(),
            package_id: package_id.into(),
            internal_cache_root: internal_cache_root.into(),
        }
    }

    /// Set the reported mount state
    pub fn with_mount_state(mut self, state: MountState) -> Self {
        self.mount_state = state;
        self
    }

    /// Parse an environment from a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an environment from a JSON file
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl StorageEnvironment for StaticEnvironment {
    fn mount_state(&self) -> MountState {
        self.mount_state.clone()
    }

    fn removable_storage_root(&self) -> PathBuf {
        self.removable_root.clone()
    }

    fn application_package_id(&self) -> String {
        self.package_id.clone()
    }

    fn internal_cache_root(&self) -> PathBuf {
        self.internal_cache_root.clone()
    }
}

/// Environment read from the running process
///
/// Removable storage is taken from `EXTERNAL_STORAGE` (or an explicit
/// override) and reported mounted while that path is a directory. The
/// internal cache root is the platform cache directory joined with the
/// package id, falling back to the temp directory.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    package_id: String,
    removable_root: Option<PathBuf>,
    internal_cache_root: Option<PathBuf>,
}

impl HostEnvironment {
    /// Create a host environment for the given package id
    pub fn new<P: Into<String>>(package_id: P) -> Self {
        let removable_root = std::env::var_os(EXTERNAL_STORAGE_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            package_id: package_id.into(),
            removable_root,
            internal_cache_root: None,
        }
    }

    /// Override the removable storage root
    pub fn with_removable_root<R: Into<PathBuf>>(mut self, root: R) -> Self {
        self.removable_root = Some(root.into());
        self
    }

    /// Override the internal cache root
    pub fn with_internal_cache_root<I: Into<PathBuf>>(mut self, root: I) -> Self {
        self.internal_cache_root = Some(root.into());
        self
    }
}

impl StorageEnvironment for HostEnvironment {
    fn mount_state(&self) -> MountState {
        match &self.removable_root {
            Some(root) if root.is_dir() => MountState::Mounted,
            Some(root) => {
                debug!("Removable storage root {} is not a directory", root.display());
                MountState::Unmounted
            }
            None => MountState::Unmounted,
        }
    }

    fn removable_storage_root(&self) -> PathBuf {
        self.removable_root.clone().unwrap_or_default()
    }

    fn application_package_id(&self) -> String {
        self.package_id.clone()
    }

    fn internal_cache_root(&self) -> PathBuf {
        if let Some(root) = &self.internal_cache_root {
            return root.clone();
        }

        match dirs::cache_dir() {
            Some(cache_dir) => cache_dir.join(&self.package_id),
            None => std::env::temp_dir().join(&self.package_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_environment_from_json() {
        let env = StaticEnvironment::from_json_str(
            r#"{
                "mount_state": "mounted",
                "removable_root": "/sdcard",
                "package_id": "com.example.app",
                "internal_cache_root": "/data/data/com.example.app/cache"
            }"#,
        )
        .expect("Failed to parse environment JSON in test");

        assert!(env.is_removable_storage_mounted());
        assert_eq!(env.removable_storage_root(), PathBuf::from("/sdcard"));
        assert_eq!(env.application_package_id(), "com.example.app");
        assert_eq!(
            env.internal_cache_root(),
            PathBuf::from("/data/data/com.example.app/cache")
        );
    }

    #[test]
    fn static_environment_other_mount_state() {
        let env = StaticEnvironment::from_json_str(
            r#"{
                "mount_state": { "other": "mounted_ro" },
                "removable_root": "/sdcard",
                "package_id": "pkg",
                "internal_cache_root": "/cache"
            }"#,
        )
        .expect("Failed to parse environment JSON in test");

        assert_eq!(env.mount_state(), MountState::Other("mounted_ro".to_string()));
        assert!(!env.is_removable_storage_mounted());
    }

    #[test]
    fn static_environment_rejects_malformed_json() {
        let result = StaticEnvironment::from_json_str("{ \"package_id\": 3 }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn static_environment_missing_file() {
        let result = StaticEnvironment::from_json_file(Path::new("/nonexistent/env.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn host_environment_mounted_only_when_root_is_directory() {
        let temp = tempfile::tempdir().expect("Failed to create temp dir in test");

        let mounted = HostEnvironment::new("pkg").with_removable_root(temp.path());
        assert_eq!(mounted.mount_state(), MountState::Mounted);
        assert_eq!(mounted.removable_storage_root(), temp.path());

        let missing = HostEnvironment::new("pkg").with_removable_root(temp.path().join("absent"));
        assert_eq!(missing.mount_state(), MountState::Unmounted);
    }

    #[test]
    fn host_environment_internal_root_ends_with_package_id() {
        let env = HostEnvironment::new("com.example.app");
        assert!(env.internal_cache_root().ends_with("com.example.app"));

        let overridden = HostEnvironment::new("pkg").with_internal_cache_root("/var/cache/pkg");
        assert_eq!(overridden.internal_cache_root(), PathBuf::from("/var/cache/pkg"));
    }
}
