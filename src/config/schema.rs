//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the registry file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chain::{Eid, NetworkEndpoint};
use crate::error::OftError;

/// Root configuration: the network registry plus declarative cross-chain
/// wiring.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OftConfig {
    /// Known networks, keyed by the name operators pass on the command line.
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Cross-chain pathway wiring. Validated for referential integrity but
    /// never executed by this tool.
    pub pathways: Vec<PathwayConfig>,
}

/// A single network registry entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// LayerZero endpoint id (not the chain's native chain id).
    pub eid: u32,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Environment variable that overrides `rpc_url` when set.
    #[serde(default)]
    pub rpc_url_env: Option<String>,
}

/// Declarative wiring for one direction of a cross-chain pathway.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathwayConfig {
    /// Source network name.
    pub from: String,

    /// Destination network name.
    pub to: String,

    /// Message library the source endpoint sends through.
    pub send_library: String,

    /// Message library the destination endpoint receives through.
    pub receive_library: String,

    /// Executor that triggers delivery on the destination chain.
    pub executor: String,

    /// Source-side confirmations required before verification.
    pub send_confirmations: u64,

    /// Destination-side confirmations required before delivery.
    pub receive_confirmations: u64,

    /// DVNs that must attest to every message on this pathway.
    pub required_dvns: Vec<String>,

    /// DVNs counted toward the optional threshold.
    #[serde(default)]
    pub optional_dvns: Vec<String>,

    /// How many optional DVN attestations are required.
    #[serde(default)]
    pub optional_dvn_threshold: u8,

    /// Maximum message size the executor accepts, in bytes.
    #[serde(default = "default_max_message_size")]
    pub max_message_size: u32,
}

fn default_max_message_size() -> u32 {
    10_000
}

impl Default for OftConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            "sepolia-testnet".to_string(),
            NetworkConfig {
                eid: 40161,
                rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
                rpc_url_env: Some("RPC_URL_SEPOLIA".to_string()),
            },
        );
        networks.insert(
            "rootstock-testnet".to_string(),
            NetworkConfig {
                eid: 40350,
                rpc_url: "https://public-node.testnet.rsk.co".to_string(),
                rpc_url_env: Some("RPC_URL_ROOTSTOCK_TESTNET".to_string()),
            },
        );
        Self {
            networks,
            pathways: Vec::new(),
        }
    }
}

impl OftConfig {
    /// Resolves a network name to a connectable endpoint. The environment
    /// override, when configured and set, wins over the static URL.
    pub fn endpoint(&self, name: &str) -> Result<NetworkEndpoint, OftError> {
        let network = self
            .networks
            .get(name)
            .ok_or_else(|| OftError::UnknownNetwork {
                name: name.to_string(),
                known: self.networks.keys().cloned().collect(),
            })?;

        let rpc_url = network
            .rpc_url_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| network.rpc_url.clone());

        Ok(NetworkEndpoint {
            name: name.to_string(),
            eid: Eid(network.eid),
            rpc_url,
        })
    }
}
