//! Faucet-mints origin tokens to the caller's wallet for testing the bridge.

use alloy_primitives::utils::format_ether;
use alloy_provider::ProviderBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tokenbridge_rs::{OriginTokenContract, ScriptConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(error = %err, event = "mint_failed");
        std::process::exit(1);
    }
}

async fn run() -> tokenbridge_rs::Result<()> {
    let config = ScriptConfig::from_env()?;
    let signer = config.signer()?;
    let wallet_address = signer.address();

    let origin_provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(config.origin_rpc_url.as_str())
        .await?;

    let origin_token = OriginTokenContract::new(config.origin_token, origin_provider);
    let receipt = origin_token.mint(wallet_address).await?;

    info!(
        tx_hash = %receipt.transaction_hash,
        block_number = ?receipt.block_number,
        event = "mint_confirmed"
    );

    let balance = origin_token.balance_of(wallet_address).await?;
    info!(
        account = %wallet_address,
        balance = %format_ether(balance),
        event = "origin_wallet_balance"
    );

    Ok(())
}
