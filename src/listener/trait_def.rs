// ============================================================================
// File: src/listener/trait_def.rs
// ----------------------------------------------------------------------------
// ResponseListener trait definition
// ============================================================================

use crate::error::FetchError;

/// Task handle for spawned request pipelines
pub type AsyncTask<T> = tokio::task::JoinHandle<T>;

/// Caller-assigned identifier multiplexing requests through one listener
pub type RequestCode = i32;

/// Receiver of asynchronous fetch-and-parse outcomes
///
/// For each logical request exactly one of the two methods is called,
/// exactly once. Calls for different request codes may arrive in any order
/// and from any worker thread.
pub trait ResponseListener<E = FetchError>: Send + Sync {
    /// Called when the network operation or payload parsing failed
    ///
    /// # Arguments
    /// * `error` - Failure cause from the fetch pipeline, forwarded untouched
    /// * `request_code` - Code the request was issued with
    fn on_error(&self, error: E, request_code: RequestCode);

    /// Called when the transfer and payload parsing both succeeded
    ///
    /// # Arguments
    /// * `payload` - Parsed textual response content
    /// * `request_code` - Code the request was issued with
    fn on_success(&self, payload: String, request_code: RequestCode);
}
