//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Connection settings for a remote Plaza node.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint URL of the node. An empty string leaves the
    /// transport unconnected; every operation then fails before I/O.
    pub node_url: String,

    /// Chain identifier mixed into every signed payload.
    pub chain_id: String,

    /// Per-request timeout for query round trips, in seconds.
    pub rpc_timeout_secs: u64,

    /// Deadline for a broadcast call, in seconds. The in-flight round trip
    /// is abandoned once this elapses.
    pub broadcast_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_url: "http://localhost:26657".to_string(),
            chain_id: "plaza-test-chain".to_string(),
            rpc_timeout_secs: 10,
            broadcast_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.node_url, "http://localhost:26657");
        assert_eq!(config.chain_id, "plaza-test-chain");
        assert_eq!(config.rpc_timeout_secs, 10);
        assert_eq!(config.broadcast_timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig =
            toml::from_str("chain_id = \"plaza-main\"").unwrap();
        assert_eq!(config.chain_id, "plaza-main");
        assert_eq!(config.rpc_timeout_secs, 10);
    }
}
