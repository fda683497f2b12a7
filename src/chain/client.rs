//! Wallet-bound RPC client for a resolved network endpoint.
//!
//! # Responsibilities
//! - Connect the signing identity to the endpoint's JSON-RPC URL
//! - Query the gas price fresh before each submission
//! - Bound read calls with a fixed timeout
//!
//! Connections are created fresh per invocation and never pooled; each
//! workflow is a one-shot operator tool.

use std::future::Future;
use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tokio::time::timeout;

use crate::chain::types::NetworkEndpoint;
use crate::chain::wallet::Wallet;
use crate::error::OftError;

/// Upper bound for a single read call. Confirmation waiting is deliberately
/// unbounded; interrupting the process is the only abort.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// RPC connection for one endpoint, signing with one wallet.
pub struct ChainClient {
    provider: DynProvider,
    endpoint: NetworkEndpoint,
}

impl ChainClient {
    /// Connects a wallet-backed HTTP provider to the endpoint.
    pub fn connect(endpoint: NetworkEndpoint, wallet: &Wallet) -> Result<Self, OftError> {
        let url: url::Url = endpoint.rpc_url.parse().map_err(|e| {
            OftError::Config(format!("invalid RPC URL '{}': {}", endpoint.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(wallet.signer()))
            .connect_http(url)
            .erased();

        tracing::debug!(network = %endpoint.name, eid = %endpoint.eid, "provider connected");

        Ok(Self { provider, endpoint })
    }

    /// Current gas price in wei.
    pub async fn gas_price(&self) -> Result<u128, OftError> {
        self.timed("gas price", self.provider.get_gas_price()).await
    }

    /// Handle for contract instances. Cloning is cheap; the connection is
    /// shared.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    async fn timed<T, E>(
        &self,
        what: &str,
        fut: impl Future<Output = Result<T, E>>,
    ) -> Result<T, OftError>
    where
        E: std::fmt::Display,
    {
        match timeout(READ_TIMEOUT, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(OftError::Rpc(format!("{what}: {e}"))),
            Err(_) => Err(OftError::Rpc(format!(
                "{what}: no response after {}s",
                READ_TIMEOUT.as_secs()
            ))),
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("network", &self.endpoint.name)
            .field("rpc_url", &self.endpoint.rpc_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::Eid;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_endpoint(rpc_url: &str) -> NetworkEndpoint {
        NetworkEndpoint {
            name: "local".to_string(),
            eid: Eid(40161),
            rpc_url: rpc_url.to_string(),
        }
    }

    #[test]
    fn test_connect_does_not_dial() {
        // Connecting only parses the URL; no request is made until a call.
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let client = ChainClient::connect(test_endpoint("http://localhost:8545"), &wallet);
        assert!(client.is_ok());
    }

    #[test]
    fn test_connect_rejects_invalid_url() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let result = ChainClient::connect(test_endpoint("not a url"), &wallet);
        assert!(matches!(result, Err(OftError::Config(_))));
    }

    #[test]
    fn test_debug_hides_provider_internals() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let client = ChainClient::connect(test_endpoint("http://localhost:8545"), &wallet).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("local"));
        assert!(debug.contains("http://localhost:8545"));
    }
}
