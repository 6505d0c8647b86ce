// ============================================================================
// File: src/storage/mod.rs
// ----------------------------------------------------------------------------
// Cache directory resolution.
//
// Picks where an application cache lives on disk:
// - removable storage while it is mounted, with a media-scanner marker
// - the host's internal cache root otherwise
// - explicit fallback classification instead of surfaced errors
// ============================================================================

// Module declarations
pub mod api;
mod config;
mod environment;
mod fs_ops;
mod locator;
mod types;


// Re-export public API
pub use config::{INDIVIDUAL_DIR_NAME, LocatorConfig, NO_MEDIA_FILE_NAME};
pub use environment::{EXTERNAL_STORAGE_VAR, HostEnvironment, StaticEnvironment, StorageEnvironment};
pub use locator::CacheLocator;
pub use types::{FallbackReason, MountState, Placement, ResolvedDirectory};
