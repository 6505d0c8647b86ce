// ============================================================================
// File: src/storage/api.rs
// ----------------------------------------------------------------------------
// Free functions over a default-configured cache locator.
// ============================================================================

use std::sync::OnceLock;

use super::environment::StorageEnvironment;
use super::locator::CacheLocator;
use super::types::ResolvedDirectory;

/// Locator with the default Android layout
static DEFAULT_LOCATOR: OnceLock<CacheLocator> = OnceLock::new();

/// Get the shared default locator
pub fn default_locator() -> &'static CacheLocator {
    DEFAULT_LOCATOR.get_or_init(CacheLocator::default)
}

/// Application cache directory, see [`CacheLocator::cache_directory`]
pub fn cache_directory<E: StorageEnvironment + ?Sized>(env: &E) -> ResolvedDirectory {
    default_locator().cache_directory(env)
}

/// Named individual cache directory, see [`CacheLocator::individual_cache_directory`]
pub fn individual_cache_directory<E: StorageEnvironment + ?Sized>(
    env: &E,
    sub_name: &str,
) -> ResolvedDirectory {
    default_locator().individual_cache_directory(env, sub_name)
}

/// The "uil-images" individual cache directory
pub fn default_individual_cache_directory<E: StorageEnvironment + ?Sized>(
    env: &E,
) -> ResolvedDirectory {
    default_locator().default_individual_cache_directory(env)
}

/// Caller-named cache directory, see [`CacheLocator::own_cache_directory`]
pub fn own_cache_directory<E: StorageEnvironment + ?Sized>(
    env: &E,
    relative_path: &str,
) -> ResolvedDirectory {
    default_locator().own_cache_directory(env, relative_path)
}
