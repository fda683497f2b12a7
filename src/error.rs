//! Error types and classification.
//!
//! # Responsibilities
//! - One closed error enum for every workflow stage
//! - Classify raw node error messages by known substrings, generic fallback
//! - Attach operator hints to known failure patterns
//!
//! # Design Decisions
//! - Classification is a pure function over the message text; no inspection
//!   of arbitrary error object shapes
//! - Workflow entry points convert every failure into an absent result, so
//!   failures never escape as process faults

use thiserror::Error;

/// Errors surfaced by the mint and send workflows.
#[derive(Debug, Error)]
pub enum OftError {
    /// Network name not present in the registry.
    #[error("unknown network '{name}' (configured: {})", .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },

    /// Invalid private key or missing environment fallback.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Human-entered amount could not be scaled to base units.
    #[error("invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: String },

    /// A required read reverted without data, typically because the deployed
    /// contract lacks the expected method.
    #[error("contract call failed: {0}")]
    ContractCall(String),

    /// Signer cannot cover value plus gas.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Any other on-chain revert; message and raw revert data surfaced
    /// verbatim.
    #[error("transaction reverted: {message}")]
    Reverted {
        message: String,
        data: Option<String>,
    },

    /// Transport-level or otherwise unclassified RPC failure.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// Registry or endpoint configuration problem.
    #[error("config error: {0}")]
    Config(String),
}

/// Classifies a node-reported error message. Known substrings map to their
/// specific kinds; anything else is treated as a generic revert with the
/// message kept verbatim.
pub fn classify(message: &str, data: Option<String>) -> OftError {
    if message.contains("missing revert data") {
        OftError::ContractCall(message.to_string())
    } else if message.contains("insufficient funds") {
        OftError::InsufficientFunds(message.to_string())
    } else {
        OftError::Reverted {
            message: message.to_string(),
            data,
        }
    }
}

/// Maps a contract call failure into an [`OftError`]. Error responses from
/// the node go through [`classify`]; transport failures stay unclassified.
pub fn from_contract_error(err: alloy::contract::Error) -> OftError {
    if let alloy::contract::Error::TransportError(transport) = &err {
        if let Some(payload) = transport.as_error_resp() {
            let data = payload.data.as_ref().map(|raw| raw.to_string());
            return classify(&payload.message, data);
        }
    }
    OftError::Rpc(err.to_string())
}

/// Clarifying hint for failure patterns operators hit often.
pub fn hint(err: &OftError) -> Option<&'static str> {
    match err {
        OftError::ContractCall(_) => {
            Some("Contract does not have a mint function. Use the MyOFTMock deployment.")
        }
        OftError::InsufficientFunds(_) => Some("Insufficient funds for transaction."),
        _ => None,
    }
}

/// Reports a workflow failure to the operator. The caller converts the
/// failure into an absent result afterwards; nothing is retried.
pub fn report(operation: &str, err: &OftError) {
    tracing::error!(operation, error = %err, "operation failed");
    if let Some(hint) = hint(err) {
        tracing::error!("{hint}");
    }
    if let OftError::Reverted {
        data: Some(data), ..
    } = err
    {
        tracing::error!(revert_data = %data, "contract revert data");
    }
}
