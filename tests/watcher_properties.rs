//! Behavioral tests for the bridge watcher's reconciliation logic, run
//! against fake gateways so no blockchain is needed.

use alloy_primitives::{address, Address, TxHash, U256};
use tokio::sync::mpsc;

use tokenbridge_rs::testing::{
    CallLog, FakeDestinationGateway, FakeOriginGateway, GatewayCall,
};
use tokenbridge_rs::{BridgeWatcher, ChainSide, DepositKey, HandlerOutcome, TransferEvent};

const BRIDGE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
const USER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
const OTHER: Address = address!("cccccccccccccccccccccccccccccccccccccccc");

const ONE_TOKEN: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

struct Harness {
    watcher: BridgeWatcher<FakeOriginGateway, FakeDestinationGateway>,
    log: CallLog,
    origin: FakeOriginGateway,
    destination: FakeDestinationGateway,
    outcome_tx: mpsc::Sender<HandlerOutcome>,
    outcome_rx: mpsc::Receiver<HandlerOutcome>,
}

fn harness() -> Harness {
    let log = CallLog::new();
    let origin = FakeOriginGateway::new(log.clone());
    let destination = FakeDestinationGateway::new(log.clone());
    let watcher = BridgeWatcher::builder()
        .origin(origin.clone())
        .destination(destination.clone())
        .bridge_address(BRIDGE)
        .build();
    let (outcome_tx, outcome_rx) = mpsc::channel(8);
    Harness {
        watcher,
        log,
        origin,
        destination,
        outcome_tx,
        outcome_rx,
    }
}

fn deposit(from: Address, to: Address, value: U256) -> TransferEvent {
    TransferEvent { from, to, value }
}

fn key(byte: u8, log_index: u64) -> DepositKey {
    DepositKey {
        tx_hash: TxHash::from([byte; 32]),
        log_index,
    }
}

#[tokio::test]
async fn self_originated_transfer_fires_no_handler() {
    let mut h = harness();

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(BRIDGE, USER, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;

    assert!(h.log.calls().is_empty());
    assert!(h.outcome_rx.try_recv().is_err());
}

#[tokio::test]
async fn transfer_to_other_recipient_fires_no_handler() {
    let mut h = harness();

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(USER, OTHER, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;
    h.watcher
        .on_transfer(
            ChainSide::Destination,
            deposit(USER, OTHER, ONE_TOKEN),
            Some(key(2, 0)),
            &h.outcome_tx,
        )
        .await;

    assert!(h.log.calls().is_empty());
    assert!(h.outcome_rx.try_recv().is_err());
}

#[tokio::test]
async fn origin_deposit_mints_same_amount_for_depositor() {
    let mut h = harness();
    h.origin.set_balance(USER, U256::ZERO);
    h.destination.set_balance(USER, ONE_TOKEN);

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;

    assert_eq!(
        h.log.calls(),
        vec![GatewayCall::Mint {
            recipient: USER,
            amount: ONE_TOKEN,
        }]
    );

    let outcome = h.outcome_rx.try_recv().unwrap();
    assert_eq!(outcome.side, ChainSide::Origin);
    assert!(outcome.result.is_ok());
}

#[tokio::test]
async fn destination_deposit_burns_then_releases_in_order() {
    let mut h = harness();

    h.watcher
        .on_transfer(
            ChainSide::Destination,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;

    assert_eq!(
        h.log.calls(),
        vec![
            GatewayCall::Approve {
                spender: BRIDGE,
                amount: ONE_TOKEN,
            },
            GatewayCall::BurnFrom {
                owner: BRIDGE,
                amount: ONE_TOKEN,
            },
            GatewayCall::OriginTransfer {
                to: USER,
                amount: ONE_TOKEN,
            },
        ]
    );

    let outcome = h.outcome_rx.try_recv().unwrap();
    assert_eq!(outcome.side, ChainSide::Destination);
    assert!(outcome.result.is_ok());
}

#[tokio::test]
async fn burn_failure_stops_origin_release() {
    let mut h = harness();
    h.destination.fail_next_burn("burnFrom reverted");

    h.watcher
        .on_transfer(
            ChainSide::Destination,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;

    // Approve went through, burn failed, the origin release never ran.
    assert_eq!(
        h.log.calls(),
        vec![GatewayCall::Approve {
            spender: BRIDGE,
            amount: ONE_TOKEN,
        }]
    );

    let outcome = h.outcome_rx.try_recv().unwrap();
    assert!(outcome.result.is_err());
}

#[tokio::test]
async fn approve_failure_stops_burn_and_release() {
    let mut h = harness();
    h.destination.fail_next_approve("approve reverted");

    h.watcher
        .on_transfer(
            ChainSide::Destination,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;

    assert!(h.log.calls().is_empty());
    assert!(h.outcome_rx.try_recv().unwrap().result.is_err());
}

#[tokio::test]
async fn redelivered_log_is_handled_once() {
    let mut h = harness();
    let dup = key(7, 3);

    for _ in 0..3 {
        h.watcher
            .on_transfer(
                ChainSide::Origin,
                deposit(USER, BRIDGE, ONE_TOKEN),
                Some(dup),
                &h.outcome_tx,
            )
            .await;
    }

    assert_eq!(h.log.calls().len(), 1);
    assert!(h.outcome_rx.try_recv().is_ok());
    assert!(h.outcome_rx.try_recv().is_err());
}

#[tokio::test]
async fn distinct_logs_in_same_transaction_are_both_handled() {
    let mut h = harness();

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(7, 0)),
            &h.outcome_tx,
        )
        .await;
    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(OTHER, BRIDGE, ONE_TOKEN),
            Some(key(7, 1)),
            &h.outcome_tx,
        )
        .await;

    assert_eq!(h.log.calls().len(), 2);
}

#[tokio::test]
async fn handler_failure_is_reported_and_later_deposits_still_process() {
    let mut h = harness();
    h.destination.fail_next_mint("mint reverted");

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(USER, BRIDGE, ONE_TOKEN),
            Some(key(1, 0)),
            &h.outcome_tx,
        )
        .await;
    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(OTHER, BRIDGE, ONE_TOKEN),
            Some(key(2, 0)),
            &h.outcome_tx,
        )
        .await;

    let first = h.outcome_rx.try_recv().unwrap();
    assert!(first.result.is_err());

    let second = h.outcome_rx.try_recv().unwrap();
    assert!(second.result.is_ok());
    assert_eq!(
        h.log.calls(),
        vec![GatewayCall::Mint {
            recipient: OTHER,
            amount: ONE_TOKEN,
        }]
    );
}

#[tokio::test]
async fn pending_log_without_key_is_still_processed() {
    let mut h = harness();

    h.watcher
        .on_transfer(
            ChainSide::Origin,
            deposit(USER, BRIDGE, ONE_TOKEN),
            None,
            &h.outcome_tx,
        )
        .await;

    assert_eq!(h.log.calls().len(), 1);
}
