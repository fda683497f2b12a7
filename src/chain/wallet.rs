//! Signing identity management.
//!
//! # Security
//! - Private keys come from the command line or the environment only
//! - Keys are never logged or serialized

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::error::OftError;

/// Environment variable consulted when no key is passed explicitly.
pub const PRIVATE_KEY_ENV_VAR: &str = "OFT_PRIVATE_KEY";

/// Signing identity derived from a raw secret, bound to a connection by
/// [`crate::chain::ChainClient`].
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Parses a hex-encoded private key, with or without a `0x` prefix.
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, OftError> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| OftError::Wallet(format!("invalid private key format: {e}")))?;

        tracing::debug!(address = %signer.address(), "wallet initialized");

        Ok(Self { signer })
    }

    /// Loads the key from `OFT_PRIVATE_KEY`.
    pub fn from_env() -> Result<Self, OftError> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            OftError::Wallet(format!("environment variable {PRIVATE_KEY_ENV_VAR} not set"))
        })?;

        Self::from_private_key(&private_key)
    }

    /// Explicit key when given, environment fallback otherwise.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, OftError> {
        match explicit {
            Some(key) => Self::from_private_key(key),
            None => Self::from_env(),
        }
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub(crate) fn signer(&self) -> PrivateKeySigner {
        self.signer.clone()
    }
}
