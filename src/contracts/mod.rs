//! Typed contract bindings for the bridge tokens and the CCIP router bridge.
//!
//! Each contract gets a `sol!`-generated binding plus a thin wrapper that
//! submits transactions, waits for one confirmation, and emits structured
//! tracing events.

pub mod destination_token;
pub mod erc20;
pub mod origin_token;
pub mod token_bridge;

pub use destination_token::DestinationTokenContract;
pub use erc20::Erc20Contract;
pub use origin_token::OriginTokenContract;
pub use token_bridge::TokenBridgeContract;
