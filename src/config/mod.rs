//! Client configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or explicit construction
//!     → loader.rs (parse & deserialize, env overrides)
//!     → semantic validation
//!     → ClientConfig (validated, immutable)
//!     → Transport::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the transport is built
//! - All fields have defaults so a local dev node needs no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
