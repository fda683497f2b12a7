//! Endpoint identity types shared across the chain subsystem.

use std::fmt;

/// LayerZero endpoint identifier. The messaging layer addresses chains by
/// this value; it is distinct from the chain's native chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Eid(pub u32);

impl fmt::Display for Eid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for Eid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Eid> for u32 {
    fn from(id: Eid) -> Self {
        id.0
    }
}

/// A resolved network: registry name, endpoint id, and connection URL.
/// Resolved once per invocation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEndpoint {
    pub name: String,
    pub eid: Eid,
    pub rpc_url: String,
}
