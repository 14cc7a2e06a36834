//! Broadcast result interpretation.
//!
//! Classifies the node's raw response into a committed hash or one of the
//! failure categories of the error taxonomy. Remote codes are namespaced
//! by module in the high bytes, so the reserved stale-sequence code is
//! compared against the low byte only; query-path codes are deliberately
//! not masked.

use crate::error::{ClientError, ClientResult};
use crate::transport::{BroadcastMode, TxResponse};

/// Reserved node code for a stale sequence number.
pub const INVALID_SEQ_ERR_CODE: u32 = 154;

/// Successful broadcast outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastResponse {
    /// Node-assigned transaction hash, uppercase hex.
    pub commit_hash: String,
}

/// Strip the module namespace from a node status code.
fn chain_code(code: u32) -> u32 {
    code & 0xff
}

fn commit_hash(hash: &str) -> String {
    hash.strip_prefix("0x").unwrap_or(hash).to_uppercase()
}

/// Classify the node's response for the mode the call was issued in.
pub(crate) fn interpret(mode: BroadcastMode, resp: TxResponse) -> ClientResult<BroadcastResponse> {
    match (mode, resp) {
        (BroadcastMode::Sync, TxResponse::Sync(resp)) => {
            if chain_code(resp.code) == INVALID_SEQ_ERR_CODE {
                return Err(ClientError::SequenceConflict {
                    code: resp.code,
                    log: resp.log,
                });
            }
            if resp.code != 0 {
                return Err(ClientError::MempoolRejected {
                    code: resp.code,
                    log: resp.log,
                });
            }
            Ok(BroadcastResponse {
                commit_hash: commit_hash(&resp.hash),
            })
        }
        (BroadcastMode::Commit, TxResponse::Commit(resp)) => {
            if chain_code(resp.check_tx.code) == INVALID_SEQ_ERR_CODE {
                return Err(ClientError::SequenceConflict {
                    code: resp.check_tx.code,
                    log: resp.check_tx.log,
                });
            }
            if resp.check_tx.code != 0 {
                return Err(ClientError::MempoolRejected {
                    code: resp.check_tx.code,
                    log: resp.check_tx.log,
                });
            }
            if resp.deliver_tx.code != 0 {
                return Err(ClientError::ExecutionRejected {
                    code: resp.deliver_tx.code,
                    log: resp.deliver_tx.log,
                });
            }
            Ok(BroadcastResponse {
                commit_hash: commit_hash(&resp.hash),
            })
        }
        (mode, _) => Err(ClientError::ProtocolError {
            detail: format!("node response does not match {mode:?} broadcast"),
        }),
    }
}
