//! Mint workflow.
//!
//! Minting is an owner/operator action, only available on mock OFT
//! deployments; it never retries, given funds are at stake.

use alloy::primitives::Address;
use alloy::rpc::types::TransactionReceipt;

use crate::chain::{ChainClient, Wallet};
use crate::config::OftConfig;
use crate::error::{self, OftError};
use crate::oft::amount;
use crate::oft::contracts::IMintableOFT;

/// Gas limit ceiling for a mint submission.
const MINT_GAS_LIMIT: u64 = 500_000;

/// Inputs for the mint workflow. The signing secret travels separately so
/// this struct stays safe to log.
#[derive(Debug, Clone)]
pub struct MintRequest {
    /// Target network name from the registry.
    pub network: String,
    /// OFT contract address.
    pub contract: Address,
    /// Recipient of the minted tokens; the signer's own address when absent.
    pub recipient: Option<Address>,
    /// Amount in whole tokens.
    pub amount: String,
}

/// Mints tokens on the target network. Every stage failure is classified
/// and reported here; the caller observes only the receipt or its absence.
pub async fn run(
    config: &OftConfig,
    request: MintRequest,
    secret: Option<&str>,
) -> Option<TransactionReceipt> {
    match execute(config, &request, secret).await {
        Ok(receipt) => Some(receipt),
        Err(err) => {
            error::report("mint", &err);
            None
        }
    }
}

async fn execute(
    config: &OftConfig,
    request: &MintRequest,
    secret: Option<&str>,
) -> Result<TransactionReceipt, OftError> {
    let endpoint = config.endpoint(&request.network)?;
    tracing::info!(network = %endpoint.name, eid = %endpoint.eid, "network resolved");

    let wallet = Wallet::resolve(secret)?;
    tracing::info!(wallet = %wallet.address(), "wallet address");

    let recipient = request.recipient.unwrap_or_else(|| wallet.address());
    tracing::info!(recipient = %recipient, "recipient");

    let client = ChainClient::connect(endpoint, &wallet)?;
    let token = IMintableOFT::new(request.contract, client.provider());

    // decimals() reverting without data is the tell that this is not a mock
    // deployment; the mint call is never attempted in that case.
    let decimals = token
        .decimals()
        .call()
        .await
        .map_err(error::from_contract_error)?;
    let amount = amount::to_base_units(&request.amount, decimals)?;

    tracing::info!(
        amount = %amount::display_units(amount, decimals),
        recipient = %recipient,
        "minting"
    );

    let gas_price = client.gas_price().await?;
    let pending = token
        .mint(recipient, amount)
        .gas_price(mint_gas_price(gas_price))
        .gas(MINT_GAS_LIMIT)
        .send()
        .await
        .map_err(error::from_contract_error)?;

    let tx_hash = *pending.tx_hash();
    tracing::info!(%tx_hash, "transaction submitted");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| OftError::Rpc(e.to_string()))?;
    tracing::info!(
        block = receipt.block_number.unwrap_or_default(),
        "transaction confirmed"
    );
    tracing::info!(amount = %request.amount, recipient = %recipient, "mint complete");

    Ok(receipt)
}

/// Mint submissions pay double the current gas price.
fn mint_gas_price(current: u128) -> u128 {
    current * 2
}
