// ============================================================================
// File: src/storage/types.rs
// ----------------------------------------------------------------------------
// Type definitions for cache directory resolution.
//
// Defines:
// - Removable storage mount state as reported by the host
// - Resolved directory value with its placement and fallback reason
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Removable storage mount state
///
/// Queried from the host environment on every resolution, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountState {
    /// Mounted with read/write access
    Mounted,
    /// Not present or not mounted
    Unmounted,
    /// Any other host-reported state (e.g. "mounted_ro", "shared", "removed")
    Other(String),
}

impl MountState {
    /// Parse a host-reported state string
    ///
    /// Uses the Android `MEDIA_*` state names. Only `"mounted"` maps to
    /// [`MountState::Mounted`]; read-only mounts are not usable for a cache.
    pub fn from_host_state(state: &str) -> Self {
        match state.trim() {
            "mounted" => MountState::Mounted,
            "unmounted" => MountState::Unmounted,
            other => MountState::Other(other.to_string()),
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, MountState::Mounted)
    }
}

impl fmt::Display for MountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountState::Mounted => f.write_str("mounted"),
            MountState::Unmounted => f.write_str("unmounted"),
            MountState::Other(state) => f.write_str(state),
        }
    }
}

/// Which storage area a resolved directory lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Removable/external storage
    External,
    /// Application-private internal cache root
    Internal,
}

/// Why a resolution degraded to a more conservative directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// Removable storage was not mounted
    MountUnavailable,
    /// The preferred directory could not be created
    DirectoryCreateFailed,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MountUnavailable => f.write_str("removable storage not mounted"),
            FallbackReason::DirectoryCreateFailed => f.write_str("directory creation failed"),
        }
    }
}

/// A directory chosen for cache data
///
/// Computed fresh on every call. When returned it denotes a directory that
/// existed (or was created) at the time of return; later external deletion
/// is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDirectory {
    path: PathBuf,
    placement: Placement,
    fallback: Option<FallbackReason>,
}

impl ResolvedDirectory {
    pub(crate) fn preferred(path: PathBuf, placement: Placement) -> Self {
        Self {
            path,
            placement,
            fallback: None,
        }
    }

    pub(crate) fn degraded(path: PathBuf, placement: Placement, reason: FallbackReason) -> Self {
        Self {
            path,
            placement,
            fallback: Some(reason),
        }
    }

    /// Same placement and fallback, different path
    pub(crate) fn rebased(self, path: PathBuf) -> Self {
        Self { path, ..self }
    }

    /// Resolved directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Storage area the directory lives on
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Reason the preferred location was not used, if any
    pub fn fallback(&self) -> Option<FallbackReason> {
        self.fallback
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedDirectory {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<ResolvedDirectory> for PathBuf {
    fn from(dir: ResolvedDirectory) -> Self {
        dir.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_state_from_host_state() {
        assert_eq!(MountState::from_host_state("mounted"), MountState::Mounted);
        assert_eq!(MountState::from_host_state("unmounted"), MountState::Unmounted);
        assert_eq!(
            MountState::from_host_state("mounted_ro"),
            MountState::Other("mounted_ro".to_string())
        );
        assert!(!MountState::from_host_state("mounted_ro").is_mounted());
        assert!(MountState::from_host_state(" mounted\n").is_mounted());
    }

    #[test]
    fn mount_state_display_round_trips_host_names() {
        for state in ["mounted", "unmounted", "shared"] {
            assert_eq!(MountState::from_host_state(state).to_string(), state);
        }
    }

    #[test]
    fn degraded_directory_reports_reason() {
        let dir = ResolvedDirectory::degraded(
            PathBuf::from("/data/cache"),
            Placement::Internal,
            FallbackReason::MountUnavailable,
        );

        assert!(dir.is_fallback());
        assert_eq!(dir.fallback(), Some(FallbackReason::MountUnavailable));
        assert_eq!(dir.placement(), Placement::Internal);
        assert_eq!(PathBuf::from(dir), PathBuf::from("/data/cache"));
    }
}
