//! Long-running bridge watcher.
//!
//! Subscribes to `Transfer` events on both token contracts and reconciles
//! deposits into the bridge wallet: origin deposits mint wrapped tokens on
//! the destination chain, destination deposits burn and release back on the
//! origin chain.

use alloy_provider::ProviderBuilder;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tokenbridge_rs::{
    AlloyDestinationGateway, AlloyOriginGateway, BridgeWatcher, DestinationTokenContract,
    OriginTokenContract, WatcherConfig,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(error = %err, event = "bridge_watcher_failed");
        std::process::exit(1);
    }
}

async fn run() -> tokenbridge_rs::Result<()> {
    let config = WatcherConfig::from_env()?;
    let signer = config.bridge_signer()?;
    let bridge_address = signer.address();

    let origin_provider = ProviderBuilder::new()
        .wallet(signer.clone())
        .connect(config.origin_rpc_url.as_str())
        .await?;
    let destination_provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(config.destination_rpc_url.as_str())
        .await?;

    let origin = AlloyOriginGateway::new(OriginTokenContract::new(
        config.origin_token,
        origin_provider.clone(),
    ));
    let destination = AlloyDestinationGateway::new(DestinationTokenContract::new(
        config.destination_token,
        destination_provider.clone(),
    ));

    let watcher = BridgeWatcher::builder()
        .origin(origin)
        .destination(destination)
        .bridge_address(bridge_address)
        .build();

    watcher
        .watch(
            origin_provider,
            config.origin_token,
            destination_provider,
            config.destination_token,
        )
        .await
}
