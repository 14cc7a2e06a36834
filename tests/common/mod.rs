//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use plaza_sdk::error::{ClientError, ClientResult};
use plaza_sdk::transport::{
    AbciQueryResponse, NodeRpc, TxCommitResponse, TxResult, TxSyncResponse,
};

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory node with scriptable store contents and broadcast results.
#[derive(Default)]
pub struct FakeNode {
    entries: Mutex<Vec<(String, Vec<u8>, Vec<u8>)>>,
    sync_response: Mutex<Option<TxSyncResponse>>,
    commit_response: Mutex<Option<TxCommitResponse>>,
    delay: Option<Duration>,
    /// Raw envelopes the node has received, in arrival order.
    pub txs: Mutex<Vec<Vec<u8>>>,
}

#[allow(dead_code)]
impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every RPC, for cancellation-race tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn put(&self, store: &str, key: &[u8], value: &[u8]) {
        self.entries
            .lock()
            .unwrap()
            .push((store.to_string(), key.to_vec(), value.to_vec()));
    }

    pub fn set_sync_response(&self, code: u32, log: &str, hash: &str) {
        *self.sync_response.lock().unwrap() = Some(TxSyncResponse {
            code,
            log: log.to_string(),
            hash: hash.to_string(),
        });
    }

    pub fn set_commit_response(
        &self,
        check_code: u32,
        check_log: &str,
        deliver_code: u32,
        deliver_log: &str,
        hash: &str,
    ) {
        *self.commit_response.lock().unwrap() = Some(TxCommitResponse {
            check_tx: TxResult {
                code: check_code,
                log: check_log.to_string(),
            },
            deliver_tx: TxResult {
                code: deliver_code,
                log: deliver_log.to_string(),
            },
            hash: hash.to_string(),
        });
    }

    pub fn received_txs(&self) -> Vec<Vec<u8>> {
        self.txs.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl NodeRpc for FakeNode {
    async fn abci_query(&self, path: &str, data: &[u8]) -> ClientResult<AbciQueryResponse> {
        self.pause().await;

        let mut parts = path.trim_start_matches('/').splitn(2, '/');
        let store = parts.next().unwrap_or_default().to_string();
        let op = parts.next().unwrap_or_default();
        let entries = self.entries.lock().unwrap();

        match op {
            "key" => {
                let hit = entries
                    .iter()
                    .find(|(s, k, _)| *s == store && k == data)
                    .map(|(_, _, v)| v.clone());
                match hit {
                    Some(value) => Ok(AbciQueryResponse {
                        code: 0,
                        log: String::new(),
                        value,
                    }),
                    None => Ok(AbciQueryResponse {
                        code: 3,
                        log: "record not found".to_string(),
                        value: Vec::new(),
                    }),
                }
            }
            "subspace" => {
                let pairs: Vec<serde_json::Value> = entries
                    .iter()
                    .filter(|(s, k, _)| *s == store && k.starts_with(data))
                    .map(|(_, k, v)| json!({"key": hex::encode(k), "value": hex::encode(v)}))
                    .collect();
                Ok(AbciQueryResponse {
                    code: 0,
                    log: String::new(),
                    value: serde_json::to_vec(&pairs).unwrap(),
                })
            }
            other => Err(ClientError::ProtocolError {
                detail: format!("unsupported query path op '{other}'"),
            }),
        }
    }

    async fn broadcast_tx_sync(&self, tx: &[u8]) -> ClientResult<TxSyncResponse> {
        self.pause().await;
        self.txs.lock().unwrap().push(tx.to_vec());
        Ok(self
            .sync_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(TxSyncResponse {
                code: 0,
                log: String::new(),
                hash: "ab12".to_string(),
            }))
    }

    async fn broadcast_tx_commit(&self, tx: &[u8]) -> ClientResult<TxCommitResponse> {
        self.pause().await;
        self.txs.lock().unwrap().push(tx.to_vec());
        Ok(self
            .commit_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(TxCommitResponse {
                check_tx: TxResult {
                    code: 0,
                    log: String::new(),
                },
                deliver_tx: TxResult {
                    code: 0,
                    log: String::new(),
                },
                hash: "ab12".to_string(),
            }))
    }
}
