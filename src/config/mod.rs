//! Network registry and wiring configuration.
//!
//! # Data Flow
//! ```text
//! registry file (TOML) or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → OftConfig (validated, immutable)
//!     → endpoint resolution per workflow invocation
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one-shot invocations never reload
//! - Built-in defaults cover the standard testnet pair so the tool works
//!   without a file
//! - Pathway wiring is declarative: parsed and validated here, executed by
//!   the protocol's own tooling
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{NetworkConfig, OftConfig, PathwayConfig};
