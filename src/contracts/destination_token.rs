//! Destination-chain wrapped token contract bindings.
//!
//! The wrapped token is mintable and burnable by the bridge, and keeps a
//! registered bridge address (`getBridge` / `setNewBridge`) that gates the
//! privileged operations on-chain.

use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionReceipt;
use alloy_sol_types::sol;
use tracing::{debug, info};

use crate::error::Result;

use DestinationToken::DestinationTokenInstance;

/// Destination (wrapped) token contract wrapper.
pub struct DestinationTokenContract<P: Provider<Ethereum>> {
    instance: DestinationTokenInstance<P>,
}

impl<P: Provider<Ethereum>> DestinationTokenContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "destination_token_initialized"
        );
        Self {
            instance: DestinationTokenInstance::new(address, provider),
        }
    }

    /// Mint wrapped tokens to `recipient` and wait for one confirmation.
    pub async fn mint(&self, recipient: Address, amount: U256) -> Result<TransactionReceipt> {
        debug!(
            recipient = %recipient,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "submitting_mint"
        );

        let pending = self.instance.mint(recipient, amount).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            recipient = %recipient,
            amount = %amount,
            tx_hash = %receipt.transaction_hash,
            block_number = ?receipt.block_number,
            event = "mint_confirmed"
        );

        Ok(receipt)
    }

    /// Approve a spender and wait for one confirmation.
    pub async fn approve(&self, spender: Address, amount: U256) -> Result<TransactionReceipt> {
        debug!(
            spender = %spender,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "submitting_approve"
        );

        let pending = self.instance.approve(spender, amount).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            spender = %spender,
            amount = %amount,
            tx_hash = %receipt.transaction_hash,
            event = "approve_confirmed"
        );

        Ok(receipt)
    }

    /// Burn previously approved tokens held by `owner`.
    pub async fn burn_from(&self, owner: Address, amount: U256) -> Result<TransactionReceipt> {
        debug!(
            owner = %owner,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "submitting_burn_from"
        );

        let pending = self.instance.burnFrom(owner, amount).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            owner = %owner,
            amount = %amount,
            tx_hash = %receipt.transaction_hash,
            block_number = ?receipt.block_number,
            event = "burn_confirmed"
        );

        Ok(receipt)
    }

    /// Transfer wrapped tokens and wait for one confirmation.
    pub async fn transfer(&self, to: Address, amount: U256) -> Result<TransactionReceipt> {
        debug!(
            to = %to,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "submitting_transfer"
        );

        let pending = self.instance.transfer(to, amount).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            to = %to,
            amount = %amount,
            tx_hash = %receipt.transaction_hash,
            block_number = ?receipt.block_number,
            event = "transfer_confirmed"
        );

        Ok(receipt)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        let result = self.instance.allowance(owner, spender).call().await?;

        debug!(
            owner = %owner,
            spender = %spender,
            allowance = %result,
            contract_address = %self.instance.address(),
            event = "allowance_retrieved"
        );

        Ok(result)
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        let result = self.instance.balanceOf(account).call().await?;

        debug!(
            account = %account,
            balance = %result,
            contract_address = %self.instance.address(),
            event = "balance_retrieved"
        );

        Ok(result)
    }

    /// Ensure the token's registered bridge address matches `expected`.
    ///
    /// Returns the update transaction hash when a `setNewBridge` was needed,
    /// `None` when the registered address was already current.
    pub async fn ensure_bridge(&self, expected: Address) -> Result<Option<TxHash>> {
        let current = self.instance.getBridge().call().await?;
        if current == expected {
            debug!(bridge = %current, event = "bridge_address_current");
            return Ok(None);
        }

        let pending = self.instance.setNewBridge(expected).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            bridge = %expected,
            previous = %current,
            tx_hash = %receipt.transaction_hash,
            event = "bridge_address_updated"
        );

        Ok(Some(receipt.transaction_hash))
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract DestinationToken {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function mint(address to, uint256 amount) external;
        function burnFrom(address account, uint256 amount) external;
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function getBridge() external view returns (address);
        function setNewBridge(address newBridge) external;
    }
);
