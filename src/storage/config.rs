// ============================================================================
// File: src/storage/config.rs
// ----------------------------------------------------------------------------
// Layout configuration for the cache locator
// ============================================================================

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Hidden marker telling the Android media scanner to skip a directory
pub const NO_MEDIA_FILE_NAME: &str = ".nomedia";

/// Default sub-directory name for the individual (image) cache
pub const INDIVIDUAL_DIR_NAME: &str = "uil-images";

/// Directory layout used when placing caches
///
/// The defaults reproduce the Android external storage layout
/// `<root>/Android/data/<package>/cache` with a `.nomedia` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Path segments between the removable root and the package directory
    pub external_data_segments: Vec<String>,

    /// Name of the cache directory inside the package directory
    pub cache_dir_name: String,

    /// Marker file created in a fresh external cache directory, if any
    pub marker_file_name: Option<String>,

    /// Sub-directory used by the default individual cache
    pub individual_dir_name: String,
}

impl LocatorConfig {
    /// Create a configuration with the Android layout
    pub fn new() -> Self {
        Self {
            external_data_segments: vec!["Android".to_string(), "data".to_string()],
            cache_dir_name: "cache".to_string(),
            marker_file_name: Some(NO_MEDIA_FILE_NAME.to_string()),
            individual_dir_name: INDIVIDUAL_DIR_NAME.to_string(),
        }
    }

    /// Set the segments between removable root and package directory
    pub fn with_external_data_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_data_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cache directory name
    pub fn with_cache_dir_name<N: Into<String>>(mut self, name: N) -> Self {
        self.cache_dir_name = name.into();
        self
    }

    /// Set or disable (`None`) the marker file
    pub fn with_marker_file_name(mut self, name: Option<String>) -> Self {
        self.marker_file_name = name;
        self
    }

    /// Set the default individual cache name
    pub fn with_individual_dir_name<N: Into<String>>(mut self, name: N) -> Self {
        self.individual_dir_name = name.into();
        self
    }

    /// External cache directory for a package under a removable root
    pub fn external_cache_dir(&self, removable_root: PathBuf, package_id: &str) -> PathBuf {
        let mut path = removable_root;
        for segment in &self.external_data_segments {
            path.push(strip_root(segment));
        }
        path.push(strip_root(package_id));
        path.push(strip_root(&self.cache_dir_name));
        path
    }
}

/// Drop leading separators so a name always joins below its parent
///
/// `Path::join` replaces the parent when given an absolute path.
pub(crate) fn strip_root(name: &str) -> &str {
    name.trim_start_matches(['/', '\\'])
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
