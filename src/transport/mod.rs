//! Node transport: raw key-value queries and signed transaction broadcast.
//!
//! # Data Flow
//! ```text
//! ClientConfig (node URL, chain id)
//!     → node.rs (JSON-RPC backend, mockable via NodeRpc)
//!     → keys.rs (logical key construction)
//!     → encode.rs (sign doc, signature, envelope)
//!     → Transport (query, query_subspace, sign_build_broadcast)
//! ```
//!
//! A `Transport` is cheap to clone and safe for concurrent use; each call
//! is an independent request with no cross-call locking or sequencing.

pub mod encode;
pub mod keys;
pub mod node;

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::broadcast::msgs::Msg;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub use node::{
    AbciQueryResponse, HttpNode, KvPair, NodeRpc, TxCommitResponse, TxResult, TxSyncResponse,
};

/// How long to wait on a broadcast: confirm-only returns at pending-pool
/// admission, full commit blocks until the execution result is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastMode {
    Sync,
    Commit,
}

/// Raw node response to a broadcast, shaped by the selected mode.
#[derive(Debug, Clone)]
pub enum TxResponse {
    Sync(TxSyncResponse),
    Commit(TxCommitResponse),
}

/// Hex-encoded `(key, value)` pair as the subspace endpoint returns it.
#[derive(Deserialize)]
struct WireKvPair {
    key: String,
    value: String,
}

/// Connection to a remote node.
#[derive(Clone)]
pub struct Transport {
    chain_id: String,
    node: Option<Arc<dyn NodeRpc>>,
}

impl Transport {
    /// Build a transport over an HTTP JSON-RPC connection. An empty node
    /// URL leaves the transport unconnected.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let node = if config.node_url.is_empty() {
            None
        } else {
            let http = HttpNode::new(
                &config.node_url,
                Duration::from_secs(config.rpc_timeout_secs),
            )?;
            tracing::info!(
                node_url = %config.node_url,
                chain_id = %config.chain_id,
                "transport initialized"
            );
            Some(Arc::new(http) as Arc<dyn NodeRpc>)
        };
        Ok(Self {
            chain_id: config.chain_id.clone(),
            node,
        })
    }

    /// Build a transport over an externally supplied RPC backend.
    pub fn with_node(config: &ClientConfig, node: Arc<dyn NodeRpc>) -> Self {
        Self {
            chain_id: config.chain_id.clone(),
            node: Some(node),
        }
    }

    /// Chain identifier mixed into every signed payload.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn node(&self) -> ClientResult<&Arc<dyn NodeRpc>> {
        self.node.as_ref().ok_or(ClientError::NotConnected)
    }

    /// Point lookup in a named store. Code 0 yields the raw value bytes,
    /// even when they are empty; any other code is a remote error carrying
    /// the node's code and log text.
    pub async fn query(&self, key: &[u8], store: &str) -> ClientResult<Vec<u8>> {
        let node = self.node()?;
        let path = format!("/{store}/key");
        tracing::debug!(store, key_len = key.len(), "issuing point query");

        let resp = node.abci_query(&path, key).await?;
        if resp.code != 0 {
            return Err(ClientError::RemoteError {
                code: resp.code,
                log: resp.log,
            });
        }
        Ok(resp.value)
    }

    /// Prefix range scan in a named store. Entries come back in server
    /// order and are not re-sorted locally.
    pub async fn query_subspace(&self, prefix: &[u8], store: &str) -> ClientResult<Vec<KvPair>> {
        let node = self.node()?;
        let path = format!("/{store}/subspace");
        tracing::debug!(store, prefix_len = prefix.len(), "issuing subspace query");

        let resp = node.abci_query(&path, prefix).await?;
        if resp.code != 0 {
            return Err(ClientError::RemoteError {
                code: resp.code,
                log: resp.log,
            });
        }
        if resp.value.is_empty() {
            return Ok(Vec::new());
        }

        let pairs: Vec<WireKvPair> =
            serde_json::from_slice(&resp.value).map_err(|e| ClientError::ProtocolError {
                detail: format!("malformed subspace result: {e}"),
            })?;
        pairs
            .into_iter()
            .map(|pair| {
                let key = hex::decode(&pair.key).map_err(|e| ClientError::ProtocolError {
                    detail: format!("subspace key is not valid hex: {e}"),
                })?;
                let value = hex::decode(&pair.value).map_err(|e| ClientError::ProtocolError {
                    detail: format!("subspace value is not valid hex: {e}"),
                })?;
                Ok(KvPair { key, value })
            })
            .collect()
    }

    /// Sign the message, assemble the transaction envelope and submit it
    /// via the RPC method selected by `mode`. Returns the node's raw
    /// response for the result interpreter.
    pub async fn sign_build_broadcast(
        &self,
        msg: &Msg,
        priv_key_hex: &str,
        sequence: u64,
        memo: &str,
        mode: BroadcastMode,
    ) -> ClientResult<TxResponse> {
        let node = self.node()?;

        let key = encode::parse_priv_key(priv_key_hex)?;
        let sign_doc = encode::encode_sign_doc(msg, &self.chain_id, sequence)?;
        let signature = encode::sign(&sign_doc, &key);
        let tx = encode::encode_tx(msg, &key, &signature, sequence, memo)?;

        tracing::debug!(
            mode = ?mode,
            sequence,
            tx_len = tx.len(),
            "broadcasting transaction"
        );
        match mode {
            BroadcastMode::Sync => Ok(TxResponse::Sync(node.broadcast_tx_sync(&tx).await?)),
            BroadcastMode::Commit => Ok(TxResponse::Commit(node.broadcast_tx_commit(&tx).await?)),
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("chain_id", &self.chain_id)
            .field("connected", &self.node.is_some())
            .finish()
    }
}
