//! Narrow contract interfaces for the OFT workflows.
//!
//! Each task binds only the functions it calls instead of the full published
//! ABI: the mint task needs `mint` and `decimals`, the send task needs
//! `decimals`, `quoteSend` and `send`. Structs mirror the OFT v2 wire types.

use alloy::sol;

sol! {
    /// Mint surface of the mock OFT deployments.
    #[sol(rpc)]
    interface IMintableOFT {
        function mint(address to, uint256 amount) external;
        function decimals() external view returns (uint8);
    }

    /// Cross-chain transfer parameters.
    #[derive(Debug)]
    struct SendParam {
        uint32 dstEid;
        bytes32 to;
        uint256 amountLD;
        uint256 minAmountLD;
        bytes extraOptions;
        bytes composeMsg;
        bytes oftCmd;
    }

    /// Fee quote for a transfer: native gas token plus optional LZ token.
    #[derive(Debug)]
    struct MessagingFee {
        uint256 nativeFee;
        uint256 lzTokenFee;
    }

    /// Receipt of the message handed to the endpoint.
    #[derive(Debug)]
    struct MessagingReceipt {
        bytes32 guid;
        uint64 nonce;
        uint256 fee;
    }

    /// Amounts debited on the source and credited on the destination.
    #[derive(Debug)]
    struct OFTReceipt {
        uint256 amountSentLD;
        uint256 amountReceivedLD;
    }

    /// Send surface of the OFT standard.
    #[sol(rpc)]
    interface IOFT {
        function decimals() external view returns (uint8);
        function quoteSend(SendParam calldata sendParam, bool payInLzToken)
            external view returns (MessagingFee memory fee);
        function send(SendParam calldata sendParam, MessagingFee calldata fee, address refundAddress)
            external payable returns (MessagingReceipt memory msgReceipt, OFTReceipt memory oftReceipt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::{SolCall, SolInterface};

    #[test]
    fn test_mint_interface_selectors() {
        // mint(address,uint256) and decimals() canonical selectors.
        assert_eq!(IMintableOFT::mintCall::SELECTOR, [0x40, 0xc1, 0x0f, 0x19]);
        assert_eq!(IMintableOFT::decimalsCall::SELECTOR, [0x31, 0x3c, 0xe5, 0x67]);
    }

    #[test]
    fn test_send_interface_is_narrow() {
        assert_eq!(IOFT::decimalsCall::SELECTOR, IMintableOFT::decimalsCall::SELECTOR);
        // The two task interfaces expose three functions each and nothing else.
        assert_eq!(
            IMintableOFT::IMintableOFTCalls::SELECTORS.len(),
            2,
        );
        assert_eq!(IOFT::IOFTCalls::SELECTORS.len(), 3);
    }
}
