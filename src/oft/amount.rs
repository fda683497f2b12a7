//! Amount normalization between human-entered decimals and base units.
//!
//! Decimals come from the contract at call time, so the same human amount
//! can normalize differently per contract.

use alloy::primitives::utils::{format_units, parse_units};
use alloy::primitives::U256;

use crate::error::OftError;

/// Scales a human-entered decimal amount into base units:
/// `to_base_units(a, d) == a * 10^d`.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, OftError> {
    parse_units(amount, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| OftError::InvalidAmount {
            amount: amount.to_string(),
            reason: e.to_string(),
        })
}

/// 2% slippage tolerance: the smallest amount the sender accepts on the
/// destination, `floor(amount * 98 / 100)`. Fixed policy, not configurable.
pub fn min_received(amount: U256) -> U256 {
    amount * U256::from(98) / U256::from(100)
}

/// Renders a base-unit amount back into whole tokens for log lines.
pub fn display_units(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
