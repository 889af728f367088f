//! CCIP `TokenBridge` router contract bindings.
//!
//! The bridge contract wraps a CCIP router: `prepareMessage` quotes the
//! routing fee for a send without submitting anything, `sendToken` performs
//! the cross-chain send. Fees are paid either in native coin (attached as
//! transaction value) or in LINK (pulled from a prior allowance).

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionReceipt;
use alloy_sol_types::sol;
use tracing::{debug, info};

use crate::error::Result;

use TokenBridge::TokenBridgeInstance;

/// CCIP token bridge contract wrapper.
pub struct TokenBridgeContract<P: Provider<Ethereum>> {
    instance: TokenBridgeInstance<P>,
}

impl<P: Provider<Ethereum>> TokenBridgeContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "token_bridge_initialized"
        );
        Self {
            instance: TokenBridgeInstance::new(address, provider),
        }
    }

    /// Quote the router fee for a cross-chain send without submitting it.
    pub async fn prepare_message(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        amount: U256,
        pay_fees_in: u8,
    ) -> Result<U256> {
        let quote = self
            .instance
            .prepareMessage(destination_chain_selector, receiver, to, amount, pay_fees_in)
            .call()
            .await?;

        debug!(
            destination_chain_selector = destination_chain_selector,
            receiver = %receiver,
            fee = %quote.fee,
            contract_address = %self.instance.address(),
            event = "router_fee_quoted"
        );

        Ok(quote.fee)
    }

    /// Submit a cross-chain token send and wait for one confirmation.
    ///
    /// `value` is attached as msg.value and must cover the router fee when
    /// paying fees in native coin; pass zero when paying in LINK.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_token(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        from: Address,
        amount: U256,
        pay_fees_in: u8,
        value: U256,
    ) -> Result<TransactionReceipt> {
        debug!(
            destination_chain_selector = destination_chain_selector,
            receiver = %receiver,
            to = %to,
            amount = %amount,
            value = %value,
            contract_address = %self.instance.address(),
            event = "submitting_ccip_send"
        );

        let pending = self
            .instance
            .sendToken(
                destination_chain_selector,
                receiver,
                to,
                from,
                amount,
                pay_fees_in,
            )
            .value(value)
            .send()
            .await?;
        let receipt = pending.get_receipt().await?;

        info!(
            tx_hash = %receipt.transaction_hash,
            block_number = ?receipt.block_number,
            event = "ccip_send_confirmed"
        );

        Ok(receipt)
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract TokenBridge {
        function prepareMessage(
            uint64 destinationChainSelector,
            address receiver,
            address to,
            uint256 amount,
            uint8 payFeesIn
        ) external view returns (bytes memory data, bytes memory message, uint256 fee);

        function sendToken(
            uint64 destinationChainSelector,
            address receiver,
            address to,
            address from,
            uint256 amount,
            uint8 payFeesIn
        ) external payable returns (bytes32 messageId);
    }
);
