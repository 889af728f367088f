//! # tokenbridge-rs
//!
//! Rust SDK and operational binaries for a two-chain lock-and-mint ERC-20
//! token bridge.
//!
//! The core component is the [`BridgeWatcher`], a long-running process that
//! subscribes to `Transfer` events on a token contract per chain and keeps
//! total supply conserved across the bridge: a deposit into the bridge wallet
//! on the origin chain mints the same amount of wrapped token on the
//! destination chain, and a deposit on the destination chain burns the
//! wrapped amount and releases the original token back on the origin chain.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokenbridge_rs::{
//!     AlloyDestinationGateway, AlloyOriginGateway, BridgeWatcher,
//!     DestinationTokenContract, OriginTokenContract, WatcherConfig,
//! };
//! use alloy_provider::ProviderBuilder;
//!
//! # async fn example() -> tokenbridge_rs::Result<()> {
//! let config = WatcherConfig::from_env()?;
//! let signer = config.bridge_signer()?;
//! let bridge_address = signer.address();
//!
//! let origin_provider = ProviderBuilder::new()
//!     .wallet(signer.clone())
//!     .connect(config.origin_rpc_url.as_str())
//!     .await?;
//! let destination_provider = ProviderBuilder::new()
//!     .wallet(signer)
//!     .connect(config.destination_rpc_url.as_str())
//!     .await?;
//!
//! let watcher = BridgeWatcher::builder()
//!     .origin(AlloyOriginGateway::new(OriginTokenContract::new(
//!         config.origin_token,
//!         origin_provider.clone(),
//!     )))
//!     .destination(AlloyDestinationGateway::new(DestinationTokenContract::new(
//!         config.destination_token,
//!         destination_provider.clone(),
//!     )))
//!     .bridge_address(bridge_address)
//!     .build();
//!
//! watcher
//!     .watch(
//!         origin_provider,
//!         config.origin_token,
//!         destination_provider,
//!         config.destination_token,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## CCIP sends
//!
//! One-shot sends through a CCIP `TokenBridge` router contract quote the
//! routing fee first and abort when it exceeds a configured ceiling:
//!
//! ```rust,ignore
//! let sender = CcipSender::builder()
//!     .gateway(AlloyCcipGateway::new(bridge_contract))
//!     .destination_chain_selector(DESTINATION_CHAIN_SELECTOR)
//!     .receiver(destination_token_bridge)
//!     .fee_payment(FeePayment::Native)
//!     .fee_ceiling(FeePayment::Native.default_ceiling())
//!     .build();
//!
//! let tx_hash = sender.send(recipient, sender_address, amount).await?;
//! ```
//!
//! ## Public API
//!
//! - [`BridgeWatcher`], [`TransferEvent`], [`DepositKey`], [`HandlerOutcome`] -
//!   the watcher and its event model
//! - [`CcipSender`] and [`FeePayment`] - CCIP send flow with fee ceiling policy
//! - [`OriginGateway`], [`DestinationGateway`], [`CcipGateway`] - trait seams
//!   with alloy-backed implementations in [`AlloyOriginGateway`],
//!   [`AlloyDestinationGateway`], [`AlloyCcipGateway`]
//! - Contract wrappers: [`OriginTokenContract`], [`DestinationTokenContract`],
//!   [`TokenBridgeContract`], [`Erc20Contract`]
//! - [`WatcherConfig`], [`ScriptConfig`], [`CcipConfig`] - environment-backed
//!   configuration
//! - [`BridgeError`] and [`Result`] - error types

mod config;
pub mod contracts;
mod error;
mod gateways;
mod sender;
mod traits;
mod watcher;

pub use config::{
    CcipConfig, ScriptConfig, WatcherConfig, DESTINATION_CHAIN_SELECTOR,
    DESTINATION_LINK_ADDRESS, ORIGIN_CHAIN_SELECTOR,
};
pub use contracts::{
    DestinationTokenContract, Erc20Contract, OriginTokenContract, TokenBridgeContract,
};
pub use error::{BridgeError, Result};
pub use gateways::{AlloyCcipGateway, AlloyDestinationGateway, AlloyOriginGateway};
pub use sender::{CcipSender, FeePayment};
pub use traits::{CcipGateway, DestinationGateway, OriginGateway};
pub use watcher::{
    is_inbound_deposit, BridgeWatcher, ChainSide, DepositKey, HandlerOutcome, TransferEvent,
};

// Fake gateways for tests that exercise the reconciliation logic without a
// blockchain.
pub mod testing;
