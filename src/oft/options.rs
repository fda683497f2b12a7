//! Executor options, LayerZero v2 type-3 wire encoding.
//!
//! Layout: a two-byte `0x0003` header, then one entry per option:
//! worker id, option length, option type, option params. The lzReceive
//! params are a big-endian u128 gas allowance, followed by a big-endian
//! u128 native value only when that value is nonzero.

use alloy::primitives::Bytes;

const TYPE_3: [u8; 2] = [0x00, 0x03];
const EXECUTOR_WORKER_ID: u8 = 1;
const OPTION_TYPE_LZRECEIVE: u8 = 1;

/// Gas the destination executor grants to the receiving-side execution.
/// Too low a value makes delivery fail on the destination chain, which this
/// tool cannot observe; it only watches the source chain.
pub const LZ_RECEIVE_GAS: u128 = 200_000;

/// Native value forwarded with the receiving-side execution.
pub const LZ_RECEIVE_VALUE: u128 = 0;

/// Builder for type-3 executor options.
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    buf: Vec<u8>,
}

impl ExecutorOptions {
    pub fn new() -> Self {
        Self {
            buf: TYPE_3.to_vec(),
        }
    }

    /// Appends an executor lzReceive option.
    pub fn lz_receive(mut self, gas: u128, value: u128) -> Self {
        let mut params = gas.to_be_bytes().to_vec();
        if value > 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }

        self.buf.push(EXECUTOR_WORKER_ID);
        self.buf
            .extend_from_slice(&(params.len() as u16 + 1).to_be_bytes());
        self.buf.push(OPTION_TYPE_LZRECEIVE);
        self.buf.extend_from_slice(&params);
        self
    }

    pub fn build(self) -> Bytes {
        self.buf.into()
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self::new()
    }
}
