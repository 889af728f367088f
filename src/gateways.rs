//! Production implementations of the gateway traits, backed by the alloy
//! contract wrappers in [`crate::contracts`].

use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use async_trait::async_trait;

use crate::contracts::{DestinationTokenContract, OriginTokenContract, TokenBridgeContract};
use crate::error::Result;
use crate::sender::FeePayment;
use crate::traits::{CcipGateway, DestinationGateway, OriginGateway};

/// Origin-chain gateway over the origin token contract.
pub struct AlloyOriginGateway<P: Provider<Ethereum>> {
    token: OriginTokenContract<P>,
}

impl<P: Provider<Ethereum>> AlloyOriginGateway<P> {
    pub fn new(token: OriginTokenContract<P>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl<P: Provider<Ethereum>> OriginGateway for AlloyOriginGateway<P> {
    async fn transfer(&self, to: Address, amount: U256) -> Result<TxHash> {
        let receipt = self.token.transfer(to, amount).await?;
        Ok(receipt.transaction_hash)
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        self.token.balance_of(account).await
    }
}

/// Destination-chain gateway over the wrapped token contract.
pub struct AlloyDestinationGateway<P: Provider<Ethereum>> {
    token: DestinationTokenContract<P>,
}

impl<P: Provider<Ethereum>> AlloyDestinationGateway<P> {
    pub fn new(token: DestinationTokenContract<P>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl<P: Provider<Ethereum>> DestinationGateway for AlloyDestinationGateway<P> {
    async fn mint(&self, recipient: Address, amount: U256) -> Result<TxHash> {
        let receipt = self.token.mint(recipient, amount).await?;
        Ok(receipt.transaction_hash)
    }

    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash> {
        let receipt = self.token.approve(spender, amount).await?;
        Ok(receipt.transaction_hash)
    }

    async fn burn_from(&self, owner: Address, amount: U256) -> Result<TxHash> {
        let receipt = self.token.burn_from(owner, amount).await?;
        Ok(receipt.transaction_hash)
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        self.token.balance_of(account).await
    }
}

/// CCIP gateway over a `TokenBridge` router contract.
///
/// When fees are paid in LINK the required allowance must already be in
/// place; the sender binaries set it up before quoting.
pub struct AlloyCcipGateway<P: Provider<Ethereum>> {
    bridge: TokenBridgeContract<P>,
}

impl<P: Provider<Ethereum>> AlloyCcipGateway<P> {
    pub fn new(bridge: TokenBridgeContract<P>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl<P: Provider<Ethereum>> CcipGateway for AlloyCcipGateway<P> {
    async fn quote_fee(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        amount: U256,
        fee_payment: FeePayment,
    ) -> Result<U256> {
        self.bridge
            .prepare_message(
                destination_chain_selector,
                receiver,
                to,
                amount,
                fee_payment.wire(),
            )
            .await
    }

    async fn send_token(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        from: Address,
        amount: U256,
        fee_payment: FeePayment,
        fee: U256,
    ) -> Result<TxHash> {
        let value = match fee_payment {
            FeePayment::Native => fee,
            FeePayment::Link => U256::ZERO,
        };
        let receipt = self
            .bridge
            .send_token(
                destination_chain_selector,
                receiver,
                to,
                from,
                amount,
                fee_payment.wire(),
                value,
            )
            .await?;
        Ok(receipt.transaction_hash)
    }
}
