//! Typed read-only queries against the node's key-value stores.
//!
//! Each getter is one point lookup or one prefix scan through the
//! transport, decoded into the records of [`types`]. Decoding is
//! fail-fast: a single entry that does not match its schema aborts the
//! whole operation, since a schema mismatch would silently corrupt every
//! other result if ignored.

pub mod account;
pub mod developer;
pub mod infra;
pub mod post;
pub mod types;
pub mod validator;
pub mod vote;

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::transport::{keys, Transport};

/// Read handle over a transport. Cheap to clone; holds no state between
/// calls.
#[derive(Debug, Clone)]
pub struct Query {
    transport: Transport,
}

impl Query {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Scan a subspace and decode every entry, keyed by the identifier
    /// recovered from stripping the scan prefix.
    pub(crate) async fn collect_subspace<T: DeserializeOwned>(
        &self,
        prefix: &[u8],
        store: &str,
    ) -> ClientResult<HashMap<String, T>> {
        let pairs = self.transport.query_subspace(prefix, store).await?;

        let mut records = HashMap::new();
        for pair in pairs {
            let record = decode(&pair.value)?;
            let id = keys::strip_prefix(&pair.key, prefix).ok_or_else(|| {
                ClientError::ProtocolError {
                    detail: "subspace entry key lies outside the queried prefix".to_string(),
                }
            })?;
            records.insert(id, record);
        }
        Ok(records)
    }
}

/// Decode raw store bytes into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::DecodeError {
        cause: e.to_string(),
    })
}
