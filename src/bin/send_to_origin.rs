//! Deposits 1 wrapped token into the bridge wallet on the destination chain,
//! which the running watcher answers with a burn there and a release on the
//! origin chain.

use alloy_primitives::utils::parse_ether;
use alloy_provider::ProviderBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tokenbridge_rs::{DestinationTokenContract, ScriptConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(error = %err, event = "deposit_failed");
        std::process::exit(1);
    }
}

async fn run() -> tokenbridge_rs::Result<()> {
    let config = ScriptConfig::from_env()?;
    let signer = config.signer()?;
    let bridge_address = config.bridge_address()?;

    let destination_provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(config.destination_rpc_url.as_str())
        .await?;

    let destination_token =
        DestinationTokenContract::new(config.destination_token, destination_provider);
    let receipt = destination_token
        .transfer(bridge_address, parse_ether("1")?)
        .await?;

    info!(
        tx_hash = %receipt.transaction_hash,
        block_number = ?receipt.block_number,
        event = "deposit_confirmed"
    );

    Ok(())
}
