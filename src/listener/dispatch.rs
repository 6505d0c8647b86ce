// ============================================================================
// File: src/listener/dispatch.rs
// ----------------------------------------------------------------------------
// Exactly-once delivery of request outcomes to listeners.
//
// Provides:
// - RequestTicket: consumed on completion, reports cancellation on drop
// - spawn_request: runs fetch and parse on tokio and delivers the outcome
// - ChannelListener: forwards outcomes into an mpsc channel
// ============================================================================

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::error::FetchError;

use super::trait_def::{AsyncTask, RequestCode, ResponseListener};
use super::types::AsyncOutcome;

/// Error cause reported for a request abandoned without an outcome
pub trait CancelCause {
    fn cancelled() -> Self;
}

impl CancelCause for FetchError {
    fn cancelled() -> Self {
        FetchError::Cancelled
    }
}

/// Pending delivery for one logical request
///
/// Completing consumes the ticket, so a request cannot be answered twice.
/// A ticket dropped without completion (e.g. its task was aborted) reports
/// [`CancelCause::cancelled`] through `on_error`.
pub struct RequestTicket<E: CancelCause = FetchError> {
    listener: Option<Arc<dyn ResponseListener<E>>>,
    request_code: RequestCode,
}

impl<E: CancelCause> RequestTicket<E> {
    pub fn new(listener: Arc<dyn ResponseListener<E>>, request_code: RequestCode) -> Self {
        Self {
            listener: Some(listener),
            request_code,
        }
    }

    pub fn request_code(&self) -> RequestCode {
        self.request_code
    }

    /// Deliver a successful payload
    pub fn succeed(self, payload: String) {
        self.complete(Ok(payload));
    }

    /// Deliver a failure
    pub fn fail(self, cause: E) {
        self.complete(Err(cause));
    }

    /// Deliver the pipeline result
    pub fn complete(mut self, result: Result<String, E>) {
        if let Some(listener) = self.listener.take() {
            AsyncOutcome::from_result(self.request_code, result).deliver_to(listener.as_ref());
        }
    }
}

impl<E: CancelCause> Drop for RequestTicket<E> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            warn!("Request {} dropped without an outcome", self.request_code);
            listener.on_error(E::cancelled(), self.request_code);
        }
    }
}

impl<E: CancelCause> std::fmt::Debug for RequestTicket<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTicket")
            .field("request_code", &self.request_code)
            .field("pending", &self.listener.is_some())
            .finish()
    }
}

/// Run a fetch-and-parse request and report its outcome to `listener`
///
/// `fetch` yields the raw response body; `parse` turns it into the payload
/// handed to `on_success`. A failure at either stage goes to `on_error`.
/// Aborting the returned task reports a cancellation.
///
/// # Arguments
/// * `listener` - Receiver of the outcome
/// * `request_code` - Code identifying this request to the listener
/// * `fetch` - Future performing the network transfer
/// * `parse` - Payload parser applied to the response body
///
/// # Returns
/// AsyncTask that resolves once the outcome has been delivered
///
/// # Panics
/// Panics when called outside a tokio runtime. The pending ticket is dropped
/// while unwinding, so the listener receives a cancellation before the panic
/// reaches the caller.
pub fn spawn_request<E, F, P>(
    listener: Arc<dyn ResponseListener<E>>,
    request_code: RequestCode,
    fetch: F,
    parse: P,
) -> AsyncTask<()>
where
    E: CancelCause + Send + 'static,
    F: Future<Output = Result<String, E>> + Send + 'static,
    P: FnOnce(String) -> Result<String, E> + Send + 'static,
{
    let ticket = RequestTicket::new(listener, request_code);

    tokio::spawn(async move {
        let result = match fetch.await {
            Ok(body) => parse(body),
            Err(cause) => Err(cause),
        };
        debug!(
            "Request {} finished ({})",
            request_code,
            if result.is_ok() { "success" } else { "error" }
        );
        ticket.complete(result);
    })
}

/// Listener forwarding every outcome into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelListener<E = FetchError> {
    tx: mpsc::UnboundedSender<AsyncOutcome<E>>,
}

impl<E> ChannelListener<E> {
    /// Create a listener and the receiving end of its channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AsyncOutcome<E>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, outcome: AsyncOutcome<E>) {
        let request_code = outcome.request_code();
        if self.tx.send(outcome).is_err() {
            debug!("Outcome for request {} discarded, receiver closed", request_code);
        }
    }
}

impl<E: Send> ResponseListener<E> for ChannelListener<E> {
    fn on_error(&self, error: E, request_code: RequestCode) {
        self.forward(AsyncOutcome::Error {
            cause: error,
            request_code,
        });
    }

    fn on_success(&self, payload: String, request_code: RequestCode) {
        self.forward(AsyncOutcome::Success {
            payload,
            request_code,
        });
    }
}
