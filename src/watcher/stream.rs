//! Log-poller wiring: turns the two token contracts' `Transfer` logs into
//! watcher invocations.

use alloy_network::Ethereum;
use alloy_primitives::{utils::format_ether, Address};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use futures_util::{pin_mut, stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::{BridgeWatcher, ChainSide, HandlerOutcome, TransferEvent};
use crate::contracts::erc20::Erc20;
use crate::error::Result;
use crate::traits::{DestinationGateway, OriginGateway};

/// Capacity of the handler outcome channel. Outcomes are drained after every
/// handled event, so this only buffers a short burst.
const OUTCOME_CAPACITY: usize = 32;

fn transfer_filter(token: Address) -> Filter {
    Filter::new()
        .address(token)
        .event_signature(Erc20::Transfer::SIGNATURE_HASH)
}

fn report(outcome: &HandlerOutcome) {
    match &outcome.result {
        Ok(()) => info!(
            side = %outcome.side,
            from = %outcome.deposit.from,
            amount = %format_ether(outcome.deposit.value),
            event = "bridge_transfer_completed"
        ),
        Err(err) => error!(
            side = %outcome.side,
            from = %outcome.deposit.from,
            amount = %format_ether(outcome.deposit.value),
            error = %err,
            event = "bridge_transfer_failed"
        ),
    }
}

impl<O: OriginGateway, D: DestinationGateway> BridgeWatcher<O, D> {
    /// Watches both token contracts indefinitely.
    ///
    /// Installs a `Transfer` log filter per chain and interleaves the two
    /// subscriptions in one select loop. Each handler invocation runs to
    /// completion before the next event is taken, so same-chain writes never
    /// overlap in-process. Returns only if a log stream ends, which the
    /// pollers do not do under normal operation.
    pub async fn watch<P1, P2>(
        mut self,
        origin_provider: P1,
        origin_token: Address,
        destination_provider: P2,
        destination_token: Address,
    ) -> Result<()>
    where
        P1: Provider<Ethereum>,
        P2: Provider<Ethereum>,
    {
        let origin_poller = origin_provider
            .watch_logs(&transfer_filter(origin_token))
            .await?;
        let destination_poller = destination_provider
            .watch_logs(&transfer_filter(destination_token))
            .await?;

        let origin_logs = origin_poller
            .into_stream()
            .flat_map(stream::iter)
            .fuse();
        let destination_logs = destination_poller
            .into_stream()
            .flat_map(stream::iter)
            .fuse();
        pin_mut!(origin_logs);
        pin_mut!(destination_logs);

        info!(
            bridge = %self.bridge_address(),
            origin_token = %origin_token,
            destination_token = %destination_token,
            event = "watching_started"
        );

        let (outcome_tx, mut outcome_rx) = mpsc::channel(OUTCOME_CAPACITY);

        loop {
            tokio::select! {
                maybe_log = origin_logs.next() => match maybe_log {
                    Some(log) => self.handle_log(ChainSide::Origin, &log, &outcome_tx).await,
                    None => break,
                },
                maybe_log = destination_logs.next() => match maybe_log {
                    Some(log) => self.handle_log(ChainSide::Destination, &log, &outcome_tx).await,
                    None => break,
                },
            }

            while let Ok(outcome) = outcome_rx.try_recv() {
                report(&outcome);
            }
        }

        while let Ok(outcome) = outcome_rx.try_recv() {
            report(&outcome);
        }

        warn!(event = "log_stream_ended");
        Ok(())
    }

    async fn handle_log(
        &mut self,
        side: ChainSide,
        log: &Log,
        outcomes: &mpsc::Sender<HandlerOutcome>,
    ) {
        // The topic filter only admits Transfer logs, but decoding can still
        // fail on malformed data from a flaky provider.
        match TransferEvent::from_log(log) {
            Ok((event, key)) => self.on_transfer(side, event, key, outcomes).await,
            Err(err) => warn!(
                side = %side,
                error = %err,
                event = "undecodable_log_skipped"
            ),
        }
    }
}
