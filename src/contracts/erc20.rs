//! Minimal ERC20 contract bindings.
//!
//! Used for LINK fee allowances in the CCIP senders, and as the canonical
//! source of the `Transfer` event shape the watcher decodes from both token
//! contracts.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionReceipt;
use alloy_sol_types::sol;
use tracing::{debug, info};

use crate::error::Result;

use Erc20::Erc20Instance;

/// ERC20 contract wrapper for allowance, approval, and balance operations.
pub struct Erc20Contract<P: Provider<Ethereum>> {
    instance: Erc20Instance<P>,
}

impl<P: Provider<Ethereum>> Erc20Contract<P> {
    /// Create a new ERC20 contract wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "erc20_contract_initialized"
        );
        Self {
            instance: Erc20Instance::new(address, provider),
        }
    }

    /// Get the current allowance for a spender
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

    /// Approve a spender and wait for one confirmation
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
            contract_address = %self.instance.address(),
            event = "approve_confirmed"
        );

        Ok(receipt)
    }

    /// Get the token balance of an address
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

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

// Minimal ERC20 interface; the Transfer event is also what the watcher
// decodes from the token contracts' logs.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Erc20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
);
