//! Client SDK for the Plaza content blockchain.
//!
//! The SDK talks to a remote node over its RPC interface and exposes two
//! surfaces: typed read-only queries against the node's key-value stores
//! ([`query::Query`]) and signed transaction broadcast with classified
//! results ([`broadcast::Broadcast`]). It keeps no state of its own beyond
//! the node connection handle; sequence numbers are supplied and managed by
//! the caller.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod query;
pub mod transport;

pub use broadcast::{Broadcast, BroadcastResponse};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use query::Query;
pub use transport::{BroadcastMode, Transport};
