// ============================================================================
// File: src/lib.rs
// ----------------------------------------------------------------------------
// Cache directory resolution and async response listener contract.
//
// Two independent utilities:
// - storage: picks where an application cache lives on disk, preferring
//   mounted removable storage and degrading to the internal cache root
// - listener: callback contract for asynchronous fetch-and-parse requests
//   multiplexed by request code
// ============================================================================

pub mod error;
pub mod listener;
pub mod storage;

pub use error::{ConfigError, ConfigResult, FetchError, StorageError, StorageResult};
pub use listener::{
    AsyncOutcome, AsyncTask, ChannelListener, RequestCode, RequestTicket, ResponseListener,
    spawn_request,
};
pub use storage::{
    CacheLocator, FallbackReason, HostEnvironment, LocatorConfig, MountState, Placement,
    ResolvedDirectory, StaticEnvironment, StorageEnvironment,
};
