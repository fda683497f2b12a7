//! Command-line surface: one subcommand per workflow.
//!
//! On success the confirmed receipt is printed to stdout as JSON for
//! programmatic chaining; progress and diagnostics go through tracing. The
//! process exits 0 whether or not a receipt was produced; failures are
//! reported, not raised.

use std::path::PathBuf;

use alloy::primitives::Address;
use alloy::rpc::types::TransactionReceipt;
use clap::{Args, Parser, Subcommand};

use crate::config::{self, ConfigError, OftConfig};
use crate::oft::{mint, send, MintRequest, SendRequest};

#[derive(Debug, Parser)]
#[command(name = "oft", about = "Cross-chain OFT operations over LayerZero", version)]
pub struct Cli {
    /// Network registry file; built-in defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mint tokens on a single network (mock OFT deployments only).
    Mint(MintArgs),
    /// Send tokens across chains through the messaging layer.
    Send(SendArgs),
}

#[derive(Debug, Args)]
pub struct MintArgs {
    /// Target network name from the registry.
    #[arg(long)]
    pub network: String,

    /// OFT contract address.
    #[arg(long)]
    pub contract: Address,

    /// Recipient of the minted tokens; defaults to the signer.
    #[arg(long)]
    pub recipient: Option<Address>,

    /// Amount in whole tokens (scaled by the contract's decimals).
    #[arg(long)]
    pub amount: String,

    /// Signer private key; falls back to OFT_PRIVATE_KEY.
    #[arg(long)]
    pub private_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Source network name from the registry.
    #[arg(long)]
    pub source: String,

    /// Destination network name from the registry.
    #[arg(long)]
    pub destination: String,

    /// OFT contract address on the source network.
    #[arg(long)]
    pub contract: Address,

    /// Recipient address on the destination network.
    #[arg(long)]
    pub recipient: Address,

    /// Amount in whole tokens (scaled by the contract's decimals).
    #[arg(long)]
    pub amount: String,

    /// Sender private key; falls back to OFT_PRIVATE_KEY.
    #[arg(long)]
    pub private_key: Option<String>,
}

impl Cli {
    /// Loads the registry and dispatches the subcommand.
    pub async fn execute(self) -> Result<(), ConfigError> {
        let registry = match &self.config {
            Some(path) => config::load_config(path)?,
            None => OftConfig::default(),
        };

        let receipt = match self.command {
            Commands::Mint(args) => {
                let request = MintRequest {
                    network: args.network,
                    contract: args.contract,
                    recipient: args.recipient,
                    amount: args.amount,
                };
                mint::run(&registry, request, args.private_key.as_deref()).await
            }
            Commands::Send(args) => {
                let request = SendRequest {
                    source: args.source,
                    destination: args.destination,
                    contract: args.contract,
                    recipient: args.recipient,
                    amount: args.amount,
                };
                send::run(&registry, request, args.private_key.as_deref()).await
            }
        };

        if let Some(receipt) = receipt {
            print_receipt(&receipt);
        }

        Ok(())
    }
}

fn print_receipt(receipt: &TransactionReceipt) {
    if let Ok(json) = serde_json::to_string_pretty(receipt) {
        println!("{json}");
    }
}
