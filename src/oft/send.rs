//! Cross-chain send workflow.
//!
//! Submits the transfer on the source chain and waits for inclusion there.
//! Destination-side delivery is carried out by the messaging network's
//! executor and is not observed here; the tracking explorer link printed at
//! the end is where delivery can be followed.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionReceipt;

use crate::chain::{ChainClient, Wallet};
use crate::config::OftConfig;
use crate::error::{self, OftError};
use crate::oft::amount;
use crate::oft::contracts::{IOFT, MessagingFee, SendParam};
use crate::oft::options::{ExecutorOptions, LZ_RECEIVE_GAS, LZ_RECEIVE_VALUE};

/// Gas limit ceiling for a cross-chain send. Dispatch through the endpoint
/// is far heavier than a local mint.
const SEND_GAS_LIMIT: u64 = 6_000_000;

/// Tracking explorer for cross-chain messages.
const SCAN_URL: &str = "https://layerzeroscan.com/tx";

/// Inputs for the send workflow. The signing secret travels separately so
/// this struct stays safe to log.
#[derive(Debug, Clone)]
pub struct SendRequest {
    /// Source network name.
    pub source: String,
    /// Destination network name.
    pub destination: String,
    /// OFT contract address on the source network.
    pub contract: Address,
    /// Recipient address on the destination network.
    pub recipient: Address,
    /// Amount in whole tokens.
    pub amount: String,
}

/// Transfers tokens from the source chain to the destination chain. Every
/// stage failure is classified and reported here; the caller observes only
/// the receipt or its absence.
pub async fn run(
    config: &OftConfig,
    request: SendRequest,
    secret: Option<&str>,
) -> Option<TransactionReceipt> {
    match execute(config, &request, secret).await {
        Ok(receipt) => Some(receipt),
        Err(err) => {
            error::report("send", &err);
            None
        }
    }
}

async fn execute(
    config: &OftConfig,
    request: &SendRequest,
    secret: Option<&str>,
) -> Result<TransactionReceipt, OftError> {
    // Both names must resolve before any identity or contract work happens.
    let source = config.endpoint(&request.source)?;
    let destination = config.endpoint(&request.destination)?;
    tracing::info!(network = %source.name, eid = %source.eid, "source network");
    tracing::info!(network = %destination.name, eid = %destination.eid, "destination network");
    tracing::info!(contract = %request.contract, recipient = %request.recipient, "transfer route");

    let wallet = Wallet::resolve(secret)?;
    tracing::info!(sender = %wallet.address(), "sender address");

    let client = ChainClient::connect(source, &wallet)?;
    let token = IOFT::new(request.contract, client.provider());

    let decimals = token
        .decimals()
        .call()
        .await
        .map_err(error::from_contract_error)?;
    let amount_ld = amount::to_base_units(&request.amount, decimals)?;
    tracing::info!(amount = %request.amount, decimals, "amount to send");

    let extra_options = ExecutorOptions::new()
        .lz_receive(LZ_RECEIVE_GAS, LZ_RECEIVE_VALUE)
        .build();

    let send_param = SendParam {
        dstEid: destination.eid.into(),
        to: request.recipient.into_word(),
        amountLD: amount_ld,
        minAmountLD: amount::min_received(amount_ld),
        extraOptions: extra_options,
        composeMsg: Bytes::new(),
        oftCmd: Bytes::new(),
    };

    tracing::info!("estimating fees");
    let quote = token
        .quoteSend(send_param.clone(), false)
        .call()
        .await
        .map_err(error::from_contract_error)?;
    tracing::info!(native_fee = %format_ether(quote.nativeFee), "quoted fee");

    // The quote is a view call and can go stale before submission; double it
    // so price drift cannot fail the transaction. Excess is refunded.
    let native_fee = buffered_fee(quote.nativeFee);
    tracing::info!(native_fee = %format_ether(native_fee), "fee with buffer");

    let gas_price = client.gas_price().await?;

    let fee = MessagingFee {
        nativeFee: native_fee,
        lzTokenFee: quote.lzTokenFee,
    };

    tracing::info!(
        amount = %request.amount,
        source = %request.source,
        destination = %request.destination,
        "sending"
    );
    let pending = token
        .send(send_param, fee, wallet.address())
        .value(native_fee)
        .gas_price(send_gas_price(gas_price))
        .gas(SEND_GAS_LIMIT)
        .send()
        .await
        .map_err(error::from_contract_error)?;

    let tx_hash = *pending.tx_hash();
    tracing::info!(%tx_hash, "transaction submitted, waiting for confirmation");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| OftError::Rpc(e.to_string()))?;
    tracing::info!(
        block = receipt.block_number.unwrap_or_default(),
        "transaction confirmed"
    );
    tracing::info!("tokens sent, track delivery at {SCAN_URL}/{tx_hash}");

    Ok(receipt)
}

/// Send submissions pay 20% over the current gas price.
fn send_gas_price(current: u128) -> u128 {
    current * 12 / 10
}

/// Safety buffer against quote staleness: double the quoted native fee.
fn buffered_fee(quoted: U256) -> U256 {
    quoted * U256::from(2)
}
