//! Crate-wide error taxonomy.
//!
//! Every failure surfaced by the SDK carries enough structured context
//! (remote code and log text where the node reported one) for callers to
//! branch programmatically, e.g. detect a [`ClientError::SequenceConflict`]
//! and retry with a refreshed sequence number. Nothing is retried
//! internally.

use thiserror::Error;

/// Errors that can occur while querying state or broadcasting transactions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No node connection has been configured on the transport.
    #[error("not connected: a node URL must be configured")]
    NotConnected,

    /// The node answered a query with a non-zero response code.
    #[error("query failed: ({code}) {log}")]
    RemoteError { code: u32, log: String },

    /// Raw bytes from the store did not match the expected record schema.
    #[error("failed to decode remote value: {cause}")]
    DecodeError { cause: String },

    /// A hex-encoded private or public key could not be parsed.
    #[error("failed to decode key: {cause}")]
    KeyDecodeError { cause: String },

    /// The node rejected the transaction because its sequence number is
    /// stale. Callers should refresh the sequence and rebuild the envelope.
    #[error("invalid sequence number: ({code}) {log}")]
    SequenceConflict { code: u32, log: String },

    /// The transaction was rejected at pending-pool admission.
    #[error("mempool rejected transaction: ({code}) {log}")]
    MempoolRejected { code: u32, log: String },

    /// The transaction was admitted but failed during execution.
    #[error("execution rejected transaction: ({code}) {log}")]
    ExecutionRejected { code: u32, log: String },

    /// The broadcast was cancelled or its deadline elapsed before the node
    /// answered. The in-flight round trip is abandoned, not awaited.
    #[error("broadcast timed out: {cause}")]
    Timeout { cause: String },

    /// The node's response did not match the expected structure for the
    /// request that was issued.
    #[error("protocol error: {detail}")]
    ProtocolError { detail: String },

    /// Low-level I/O failure talking to the node.
    #[error("transport failure: {cause}")]
    TransportError { cause: String },
}

/// Result type for all SDK operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_code_and_log() {
        let err = ClientError::RemoteError {
            code: 3,
            log: "record not found".to_string(),
        };
        assert_eq!(err.to_string(), "query failed: (3) record not found");

        let err = ClientError::SequenceConflict {
            code: 154,
            log: "expected seq 7".to_string(),
        };
        assert!(err.to_string().contains("154"));
        assert!(err.to_string().contains("expected seq 7"));
    }
}
