// ============================================================================
// File: src/listener/mod.rs
// ----------------------------------------------------------------------------
// Response listener contract for asynchronous fetch-and-parse requests.
//
// Provides:
// - ResponseListener trait receiving one outcome per request code
// - AsyncOutcome sum type for request results
// - RequestTicket and spawn_request enforcing exactly-once delivery
// - ChannelListener bridging callbacks into an mpsc channel
// ============================================================================

mod dispatch;
mod trait_def;
mod types;


// Re-export core types and traits
pub use dispatch::{CancelCause, ChannelListener, RequestTicket, spawn_request};
pub use trait_def::{AsyncTask, RequestCode, ResponseListener};
pub use types::AsyncOutcome;
