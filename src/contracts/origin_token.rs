//! Origin-chain token contract bindings.
//!
//! The origin token is a plain ERC20 with a faucet-style `mint(address)`
//! used for test funding. The bridge releases deposits back to users with
//! `transfer`.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionReceipt;
use alloy_sol_types::sol;
use tracing::{debug, info};

use crate::error::Result;

use OriginToken::OriginTokenInstance;

/// Origin token contract wrapper.
pub struct OriginTokenContract<P: Provider<Ethereum>> {
    instance: OriginTokenInstance<P>,
}

impl<P: Provider<Ethereum>> OriginTokenContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "origin_token_initialized"
        );
        Self {
            instance: OriginTokenInstance::new(address, provider),
        }
    }

    /// Faucet-mint origin tokens to `recipient` and wait for one confirmation.
    pub async fn mint(&self, recipient: Address) -> Result<TransactionReceipt> {
        debug!(
            recipient = %recipient,
            contract_address = %self.instance.address(),
            event = "submitting_mint"
        );

        let pending = self.instance.mint(recipient).send().await?;
        let receipt = pending.get_receipt().await?;

        info!(
            recipient = %recipient,
            tx_hash = %receipt.transaction_hash,
            block_number = ?receipt.block_number,
            event = "mint_confirmed"
        );

        Ok(receipt)
    }

    /// Transfer tokens and wait for one confirmation.
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

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract OriginToken {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function mint(address to) external;
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
);
