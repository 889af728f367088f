//! Trait seams for the bridge's chain-facing operations.
//!
//! The watcher and the CCIP sender talk to the chains exclusively through
//! these traits. Production code uses the alloy-backed implementations in
//! [`crate::gateways`]; tests use the fakes in [`crate::testing`] to exercise
//! the reconciliation logic without a blockchain.

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::error::Result;
use crate::sender::FeePayment;

/// Write and read operations on the origin-chain token, performed with the
/// bridge credential.
#[async_trait]
pub trait OriginGateway: Send + Sync {
    /// Transfers `amount` of the origin token to `to` and waits for one
    /// confirmation.
    async fn transfer(&self, to: Address, amount: U256) -> Result<TxHash>;

    /// Reads the current origin-token balance of `account`.
    async fn balance_of(&self, account: Address) -> Result<U256>;
}

/// Write and read operations on the destination-chain wrapped token,
/// performed with the bridge credential.
#[async_trait]
pub trait DestinationGateway: Send + Sync {
    /// Mints `amount` of the wrapped token to `recipient` and waits for one
    /// confirmation.
    async fn mint(&self, recipient: Address, amount: U256) -> Result<TxHash>;

    /// Approves `spender` for `amount` of the wrapped token.
    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash>;

    /// Burns `amount` of the wrapped token previously approved by `owner`.
    async fn burn_from(&self, owner: Address, amount: U256) -> Result<TxHash>;

    /// Reads the current wrapped-token balance of `account`.
    async fn balance_of(&self, account: Address) -> Result<U256>;
}

/// Fee quoting and send submission against a CCIP `TokenBridge` router
/// contract.
#[async_trait]
pub trait CcipGateway: Send + Sync {
    /// Quotes the router fee for the described send without submitting it.
    async fn quote_fee(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        amount: U256,
        fee_payment: FeePayment,
    ) -> Result<U256>;

    /// Submits the cross-chain send, paying `fee` in the chosen mode, and
    /// waits for one confirmation.
    #[allow(clippy::too_many_arguments)]
    async fn send_token(
        &self,
        destination_chain_selector: u64,
        receiver: Address,
        to: Address,
        from: Address,
        amount: U256,
        fee_payment: FeePayment,
        fee: U256,
    ) -> Result<TxHash>;
}
