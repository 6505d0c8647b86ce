// ============================================================================
// File: src/listener/types.rs
// ----------------------------------------------------------------------------
// Outcome of one asynchronous request
// ============================================================================

use crate::error::FetchError;

use super::trait_def::{RequestCode, ResponseListener};

/// Result of a single logical request, tagged with its request code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncOutcome<E = FetchError> {
    /// Network or parse failure
    Error { cause: E, request_code: RequestCode },

    /// Parsed response payload
    Success {
        payload: String,
        request_code: RequestCode,
    },
}

impl<E> AsyncOutcome<E> {
    /// Build an outcome from a pipeline result
    pub fn from_result(request_code: RequestCode, result: Result<String, E>) -> Self {
        match result {
            Ok(payload) => AsyncOutcome::Success {
                payload,
                request_code,
            },
            Err(cause) => AsyncOutcome::Error {
                cause,
                request_code,
            },
        }
    }

    pub fn request_code(&self) -> RequestCode {
        match self {
            AsyncOutcome::Error { request_code, .. } => *request_code,
            AsyncOutcome::Success { request_code, .. } => *request_code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AsyncOutcome::Success { .. })
    }

    /// Hand the outcome to the matching listener callback
    pub fn deliver_to<L>(self, listener: &L)
    where
        L: ResponseListener<E> + ?Sized,
    {
        match self {
            AsyncOutcome::Error {
                cause,
                request_code,
            } => listener.on_error(cause, request_code),
            AsyncOutcome::Success {
                payload,
                request_code,
            } => listener.on_success(payload, request_code),
        }
    }
}
