//! Fake gateway implementations for testing the reconciliation logic.
//!
//! The fakes record every write operation into a shared [`CallLog`] so tests
//! can assert cross-chain ordering (approve before burn before release), and
//! individual operations can be armed to fail to exercise the watcher's
//! failure paths without a blockchain.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::error::{BridgeError, Result};
use crate::sender::FeePayment;
use crate::traits::{CcipGateway, DestinationGateway, OriginGateway};

/// A write operation observed by a fake gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    OriginTransfer { to: Address, amount: U256 },
    Mint { recipient: Address, amount: U256 },
    Approve { spender: Address, amount: U256 },
    BurnFrom { owner: Address, amount: U256 },
}

/// Ordered record of write operations, shareable across fakes so a single
/// log captures the interleaving of origin- and destination-side calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<GatewayCall>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: GatewayCall) -> TxHash {
        let mut calls = self.0.lock().unwrap();
        calls.push(call);
        // Deterministic per-position hash so tests can tell transactions apart.
        TxHash::from([calls.len() as u8; 32])
    }

    /// All recorded calls, in submission order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.0.lock().unwrap().clone()
    }
}

fn take_failure(slot: &Mutex<Option<String>>) -> Option<BridgeError> {
    slot.lock().unwrap().take().map(BridgeError::Provider)
}

/// Fake origin-chain gateway.
#[derive(Clone, Default)]
pub struct FakeOriginGateway {
    log: CallLog,
    balances: Arc<Mutex<HashMap<Address, U256>>>,
    transfer_failure: Arc<Mutex<Option<String>>>,
}

impl FakeOriginGateway {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn set_balance(&self, account: Address, balance: U256) {
        self.balances.lock().unwrap().insert(account, balance);
    }

    /// Arms the next `transfer` call to fail with the given reason.
    pub fn fail_next_transfer(&self, reason: &str) {
        *self.transfer_failure.lock().unwrap() = Some(reason.to_string());
    }
}

#[async_trait]
impl OriginGateway for FakeOriginGateway {
    async fn transfer(&self, to: Address, amount: U256) -> Result<TxHash> {
        if let Some(err) = take_failure(&self.transfer_failure) {
            return Err(err);
        }
        Ok(self.log.record(GatewayCall::OriginTransfer { to, amount }))
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&account)
            .copied()
            .unwrap_or(U256::ZERO))
    }
}

/// Fake destination-chain gateway.
#[derive(Clone, Default)]
pub struct FakeDestinationGateway {
    log: CallLog,
    balances: Arc<Mutex<HashMap<Address, U256>>>,
    mint_failure: Arc<Mutex<Option<String>>>,
    approve_failure: Arc<Mutex<Option<String>>>,
    burn_failure: Arc<Mutex<Option<String>>>,
}

impl FakeDestinationGateway {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn set_balance(&self, account: Address, balance: U256) {
        self.balances.lock().unwrap().insert(account, balance);
    }

    /// Arms the next `mint` call to fail with the given reason.
    pub fn fail_next_mint(&self, reason: &str) {
        *self.mint_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Arms the next `approve` call to fail with the given reason.
    pub fn fail_next_approve(&self, reason: &str) {
        *self.approve_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Arms the next `burn_from` call to fail with the given reason.
    pub fn fail_next_burn(&self, reason: &str) {
        *self.burn_failure.lock().unwrap() = Some(reason.to_string());
    }
}

#[async_trait]
impl DestinationGateway for FakeDestinationGateway {
    async fn mint(&self, recipient: Address, amount: U256) -> Result<TxHash> {
        if let Some(err) = take_failure(&self.mint_failure) {
            return Err(err);
        }
        Ok(self.log.record(GatewayCall::Mint { recipient, amount }))
    }

    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash> {
        if let Some(err) = take_failure(&self.approve_failure) {
            return Err(err);
        }
        Ok(self.log.record(GatewayCall::Approve { spender, amount }))
    }

    async fn burn_from(&self, owner: Address, amount: U256) -> Result<TxHash> {
        if let Some(err) = take_failure(&self.burn_failure) {
            return Err(err);
        }
        Ok(self.log.record(GatewayCall::BurnFrom { owner, amount }))
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&account)
            .copied()
            .unwrap_or(U256::ZERO))
    }
}

/// A CCIP send observed by [`FakeCcipGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentToken {
    pub destination_chain_selector: u64,
    pub receiver: Address,
    pub to: Address,
    pub from: Address,
    pub amount: U256,
    pub fee_payment: FeePayment,
    pub fee: U256,
}

/// Fake CCIP gateway with a configurable fee quote.
#[derive(Clone, Default)]
pub struct FakeCcipGateway {
    fee: Arc<Mutex<U256>>,
    sends: Arc<Mutex<Vec<SentToken>>>,
}

impl FakeCcipGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fee the next quote will return.
    pub fn set_fee(&self, fee: U256) {
        *self.fee.lock().unwrap() = fee;
    }

    /// All submitted sends, in order.
    pub fn sends(&self) -> Vec<SentToken> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl CcipGateway for FakeCcipGateway {
    async fn quote_fee(
        &self,
        _destination_chain_selector: u64,
        _receiver: Address,
        _to: Address,
        _amount: U256,
        _fee_payment: FeePayment,
    ) -> Result<U256> {
        Ok(*self.fee.lock().unwrap())
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
        let mut sends = self.sends.lock().unwrap();
        sends.push(SentToken {
            destination_chain_selector,
            receiver,
            to,
            from,
            amount,
            fee_payment,
            fee,
        });
        Ok(TxHash::from([sends.len() as u8; 32]))
    }
}
