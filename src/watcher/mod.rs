//! The bridge watcher: event-driven mint/burn reconciliation across two
//! chains.
//!
//! The watcher subscribes to `Transfer` events on the origin token and on the
//! destination wrapped token. A deposit into the bridge wallet on the origin
//! chain mints the same amount of wrapped token on the destination chain for
//! the depositor; a deposit on the destination chain burns the wrapped amount
//! there and releases the original token back on the origin chain.
//!
//! Handlers are not fire-and-forget: every accepted deposit produces a
//! [`HandlerOutcome`] on a bounded channel so failures reach the operator
//! through the log stream instead of being swallowed. A handler failure never
//! tears down the subscriptions.

mod deposit;
mod stream;

use std::collections::HashSet;

use alloy_primitives::{utils::format_ether, Address};
use bon::Builder;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::traits::{DestinationGateway, OriginGateway};

pub use deposit::{is_inbound_deposit, ChainSide, DepositKey, TransferEvent};

/// Result of one handler invocation, delivered on the watcher's outcome
/// channel.
#[derive(Debug)]
pub struct HandlerOutcome {
    pub side: ChainSide,
    pub deposit: TransferEvent,
    pub result: Result<()>,
}

/// Event-driven bridge watcher.
///
/// # Example
///
/// ```rust,ignore
/// let watcher = BridgeWatcher::builder()
///     .origin(AlloyOriginGateway::new(origin_token))
///     .destination(AlloyDestinationGateway::new(destination_token))
///     .bridge_address(bridge_signer.address())
///     .build();
///
/// watcher
///     .watch(origin_provider, origin_token_address, destination_provider, destination_token_address)
///     .await?;
/// ```
#[derive(Builder)]
pub struct BridgeWatcher<O: OriginGateway, D: DestinationGateway> {
    origin: O,
    destination: D,
    /// The bridge wallet address on both chains; deposits target it and its
    /// own outgoing transfers are ignored.
    bridge_address: Address,
    #[builder(skip)]
    seen: HashSet<DepositKey>,
}

impl<O: OriginGateway, D: DestinationGateway> BridgeWatcher<O, D> {
    /// Returns the bridge wallet address.
    pub fn bridge_address(&self) -> Address {
        self.bridge_address
    }

    /// Reacts to one observed `Transfer` event.
    ///
    /// Applies the filter policy, dedupes on the log's `(tx_hash, log_index)`
    /// key, dispatches the side-appropriate handler, and reports the result
    /// on `outcomes`. Errors are carried in the outcome, never returned; the
    /// caller's loop keeps running regardless of handler failures.
    pub async fn on_transfer(
        &mut self,
        side: ChainSide,
        event: TransferEvent,
        key: Option<DepositKey>,
        outcomes: &mpsc::Sender<HandlerOutcome>,
    ) {
        if !deposit::is_inbound_deposit(&event, self.bridge_address) {
            trace!(
                side = %side,
                from = %event.from,
                to = %event.to,
                event = "transfer_ignored"
            );
            return;
        }

        if let Some(key) = key {
            if !self.seen.insert(key) {
                debug!(
                    side = %side,
                    tx_hash = %key.tx_hash,
                    log_index = key.log_index,
                    event = "duplicate_deposit_skipped"
                );
                return;
            }
        }

        info!(
            side = %side,
            from = %event.from,
            amount = %format_ether(event.value),
            event = "inbound_deposit_detected"
        );

        let result = match side {
            ChainSide::Origin => self.mint_deposit(&event).await,
            ChainSide::Destination => self.burn_deposit(&event).await,
        };

        let outcome = HandlerOutcome {
            side,
            deposit: event,
            result,
        };
        if outcomes.send(outcome).await.is_err() {
            warn!(event = "outcome_receiver_dropped");
        }
    }

    /// Mint handler: a deposit on the origin chain mints the same amount of
    /// wrapped token for the depositor on the destination chain.
    async fn mint_deposit(&self, deposit: &TransferEvent) -> Result<()> {
        let tx_hash = self.destination.mint(deposit.from, deposit.value).await?;

        info!(
            recipient = %deposit.from,
            amount = %format_ether(deposit.value),
            tx_hash = %tx_hash,
            event = "wrapped_tokens_minted"
        );

        let origin_balance = self.origin.balance_of(deposit.from).await?;
        let destination_balance = self.destination.balance_of(deposit.from).await?;
        info!(
            account = %deposit.from,
            origin_balance = %format_ether(origin_balance),
            destination_balance = %format_ether(destination_balance),
            event = "balances_after_mint"
        );

        Ok(())
    }

    /// Burn handler: a deposit on the destination chain burns the wrapped
    /// amount there and releases the original token to the depositor on the
    /// origin chain.
    ///
    /// The three transactions run strictly in order. A failure stops the
    /// sequence where it happened; nothing compensates a burn whose release
    /// never ran, so the later steps must only execute after the earlier
    /// ones confirmed.
    async fn burn_deposit(&self, deposit: &TransferEvent) -> Result<()> {
        self.destination
            .approve(self.bridge_address, deposit.value)
            .await?;

        let burn_tx = self
            .destination
            .burn_from(self.bridge_address, deposit.value)
            .await?;

        info!(
            amount = %format_ether(deposit.value),
            tx_hash = %burn_tx,
            event = "wrapped_tokens_burned"
        );

        let destination_balance = self.destination.balance_of(deposit.from).await?;
        info!(
            account = %deposit.from,
            destination_balance = %format_ether(destination_balance),
            event = "balance_after_burn"
        );

        let release_tx = self.origin.transfer(deposit.from, deposit.value).await?;

        info!(
            recipient = %deposit.from,
            amount = %format_ether(deposit.value),
            tx_hash = %release_tx,
            event = "origin_tokens_released"
        );

        let origin_balance = self.origin.balance_of(deposit.from).await?;
        info!(
            account = %deposit.from,
            origin_balance = %format_ether(origin_balance),
            event = "balance_after_release"
        );

        Ok(())
    }
}
