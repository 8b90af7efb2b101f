use thiserror::Error;

/// Errors surfaced by the remote task store.
///
/// Every failure maps to exactly one variant and is reported to the user at
/// the action boundary; there are no retries. Empty-title validation is
/// caught before the client is ever invoked, so it does not appear here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (unreachable host, connection reset)
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status without a more specific meaning
    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    /// The targeted task id no longer exists server-side
    #[error("task {id} not found")]
    NotFound { id: String },

    /// A success status whose body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}
