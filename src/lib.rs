//! Cross-chain OFT operations CLI
//!
//! Operator tooling for an Omnichain Fungible Token: mint tokens on a single
//! network, or send them across chains through the LayerZero messaging layer.
//!
//! # Architecture Overview
//!
//! ```text
//! registry file / defaults        command line
//!        │                             │
//!        ▼                             ▼
//!   ┌──────────┐                 ┌──────────┐
//!   │  config  │────────────────▶│   cli    │
//!   └──────────┘   endpoint      └────┬─────┘
//!                  resolution         │
//!                                     ▼
//!                  ┌──────────────────────────────────┐
//!                  │          oft workflows           │
//!                  │  mint: decimals → mint           │
//!                  │  send: decimals → quote → send   │
//!                  └───────┬───────────────┬──────────┘
//!                          │               │
//!                          ▼               ▼
//!                    ┌──────────┐   ┌──────────────┐
//!                    │  chain   │   │  contracts   │
//!                    │ (wallet, │   │ (narrow sol! │
//!                    │  client) │   │  interfaces) │
//!                    └──────────┘   └──────────────┘
//! ```
//!
//! The tool is a client of the messaging protocol: it guarantees submission
//! on the source chain, never delivery on the destination.

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod oft;

pub use config::OftConfig;
pub use error::OftError;
