//! Node RPC backend.
//!
//! [`NodeRpc`] is the seam between the transport and the wire: the real
//! backend speaks JSON-RPC 2.0 over HTTP, tests plug in an in-memory fake.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// One entry returned by a subspace scan, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Result of a key-value query against a store.
#[derive(Debug, Clone)]
pub struct AbciQueryResponse {
    pub code: u32,
    pub log: String,
    pub value: Vec<u8>,
}

/// Per-phase result carried in a full-commit broadcast response.
#[derive(Debug, Clone, Deserialize)]
pub struct TxResult {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub log: String,
}

/// Node response to a confirm-only broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct TxSyncResponse {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub log: String,
    pub hash: String,
}

/// Node response to a full-commit broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct TxCommitResponse {
    pub check_tx: TxResult,
    pub deliver_tx: TxResult,
    pub hash: String,
}

/// RPC surface the transport needs from a node.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Path-addressed key-value lookup, `path` being `/<store>/key` or
    /// `/<store>/subspace`.
    async fn abci_query(&self, path: &str, data: &[u8]) -> ClientResult<AbciQueryResponse>;

    /// Submit raw transaction bytes, returning once the pending pool has
    /// accepted or rejected them.
    async fn broadcast_tx_sync(&self, tx: &[u8]) -> ClientResult<TxSyncResponse>;

    /// Submit raw transaction bytes and block until the node reports both
    /// pending-pool admission and the execution result.
    async fn broadcast_tx_commit(&self, tx: &[u8]) -> ClientResult<TxCommitResponse>;
}

//
// JSON-RPC wire frames
//

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorFrame>,
}

#[derive(Deserialize)]
struct RpcErrorFrame {
    code: i64,
    message: String,
}

#[derive(Serialize)]
struct AbciQueryParams<'a> {
    path: &'a str,
    data: String,
}

#[derive(Serialize)]
struct BroadcastTxParams {
    tx: String,
}

#[derive(Deserialize)]
struct WireAbciQueryResult {
    response: WireAbciQueryResponse,
}

#[derive(Deserialize)]
struct WireAbciQueryResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    value: String,
}

/// JSON-RPC over HTTP backend.
#[derive(Debug)]
pub struct HttpNode {
    client: reqwest::Client,
    url: url::Url,
    request_id: AtomicU64,
}

impl HttpNode {
    /// Connect to a node's JSON-RPC endpoint. Requests share one pooled
    /// client with a per-request timeout.
    pub fn new(node_url: &str, timeout: Duration) -> ClientResult<Self> {
        let url: url::Url = node_url.parse().map_err(|e| ClientError::TransportError {
            cause: format!("invalid node URL '{node_url}': {e}"),
        })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::TransportError {
                cause: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            url,
            request_id: AtomicU64::new(1),
        })
    }

    async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> ClientResult<R> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::TransportError {
                cause: format!("{method} request failed: {e}"),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::TransportError {
                cause: format!("failed to read {method} response: {e}"),
            })?;
        if !status.is_success() {
            return Err(ClientError::TransportError {
                cause: format!("node returned HTTP {status} for {method}"),
            });
        }

        let frame: RpcResponse<R> =
            serde_json::from_str(&body).map_err(|e| ClientError::ProtocolError {
                detail: format!("malformed {method} response: {e}"),
            })?;
        if let Some(err) = frame.error {
            return Err(ClientError::ProtocolError {
                detail: format!("node rpc error ({}) {}", err.code, err.message),
            });
        }
        frame.result.ok_or_else(|| ClientError::ProtocolError {
            detail: format!("{method} response carried neither result nor error"),
        })
    }
}

#[async_trait]
impl NodeRpc for HttpNode {
    async fn abci_query(&self, path: &str, data: &[u8]) -> ClientResult<AbciQueryResponse> {
        let params = AbciQueryParams {
            path,
            data: hex::encode(data),
        };
        let result: WireAbciQueryResult = self.call("abci_query", params).await?;
        let value =
            hex::decode(&result.response.value).map_err(|e| ClientError::ProtocolError {
                detail: format!("query value is not valid hex: {e}"),
            })?;
        Ok(AbciQueryResponse {
            code: result.response.code,
            log: result.response.log,
            value,
        })
    }

    async fn broadcast_tx_sync(&self, tx: &[u8]) -> ClientResult<TxSyncResponse> {
        let params = BroadcastTxParams {
            tx: hex::encode(tx),
        };
        self.call("broadcast_tx_sync", params).await
    }

    async fn broadcast_tx_commit(&self, tx: &[u8]) -> ClientResult<TxCommitResponse> {
        let params = BroadcastTxParams {
            tx: hex::encode(tx),
        };
        self.call("broadcast_tx_commit", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        let err = HttpNode::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ClientError::TransportError { .. }));
        assert!(err.to_string().contains("invalid node URL"));
    }

    #[test]
    fn test_commit_response_requires_both_phases() {
        // A confirm-only shaped body must not parse as a commit response.
        let sync_shaped = r#"{"code":0,"log":"","hash":"AB12"}"#;
        assert!(serde_json::from_str::<TxCommitResponse>(sync_shaped).is_err());

        let commit_shaped =
            r#"{"check_tx":{"code":0,"log":""},"deliver_tx":{"code":3,"log":"out of gas"},"hash":"ab12"}"#;
        let parsed: TxCommitResponse = serde_json::from_str(commit_shaped).unwrap();
        assert_eq!(parsed.deliver_tx.code, 3);
    }
}
