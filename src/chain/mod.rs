//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! registry entry (name, eid, RPC URL)
//!     → wallet.rs (key loading, signing identity)
//!     → client.rs (wallet-bound RPC connection, gas oracle)
//!     → oft::contracts (narrow per-task call interfaces)
//! ```
//!
//! # Security Constraints
//! - Private keys come from the command line or environment, never config
//! - Keys are never logged or serialized
//! - Read calls are bounded by a fixed timeout; confirmation waits are not

pub mod client;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{Eid, NetworkEndpoint};
pub use wallet::Wallet;
