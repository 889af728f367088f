//! One-shot CCIP send from the origin chain to the destination chain.
//!
//! Ensures the destination token's registered bridge is current, approves the
//! origin bridge for the send amount, quotes the router fee (paid in native
//! coin), aborts when the quote exceeds the ceiling, then submits the send.

use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_provider::ProviderBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tokenbridge_rs::{
    AlloyCcipGateway, CcipConfig, CcipSender, DestinationTokenContract, FeePayment,
    OriginTokenContract, TokenBridgeContract, DESTINATION_CHAIN_SELECTOR,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(error = %err, event = "ccip_send_failed");
        std::process::exit(1);
    }
}

async fn run() -> tokenbridge_rs::Result<()> {
    let config = CcipConfig::from_env()?;
    let signer = config.signer()?;
    let wallet_address = signer.address();

    let origin_provider = ProviderBuilder::new()
        .wallet(signer.clone())
        .connect(config.origin_rpc_url.as_str())
        .await?;
    let destination_provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(config.destination_rpc_url.as_str())
        .await?;

    let destination_token =
        DestinationTokenContract::new(config.destination_token, destination_provider);
    destination_token
        .ensure_bridge(config.destination_token_bridge)
        .await?;

    let amount = parse_ether("1")?;

    let origin_token = OriginTokenContract::new(config.origin_token, origin_provider.clone());
    origin_token
        .approve(config.origin_token_bridge, amount)
        .await?;

    let bridge = TokenBridgeContract::new(config.origin_token_bridge, origin_provider);
    let sender = CcipSender::builder()
        .gateway(AlloyCcipGateway::new(bridge))
        .destination_chain_selector(DESTINATION_CHAIN_SELECTOR)
        .receiver(config.destination_token_bridge)
        .fee_payment(FeePayment::Native)
        .fee_ceiling(config.fee_ceiling(FeePayment::Native.default_ceiling()))
        .build();

    let tx_hash = sender.send(wallet_address, wallet_address, amount).await?;

    info!(
        tx_hash = %tx_hash,
        tracker = "https://ccip.chain.link/",
        event = "ccip_transfer_in_progress"
    );

    let balance = origin_token.balance_of(wallet_address).await?;
    info!(
        account = %wallet_address,
        balance = %format_ether(balance),
        event = "origin_sender_balance"
    );

    Ok(())
}
