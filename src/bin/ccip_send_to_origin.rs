//! One-shot CCIP send from the destination chain back to the origin chain.
//!
//! Router fees are paid in LINK on this side. The script tops up the
//! destination token and LINK allowances to the bridge contract when they
//! run low, quotes the fee, aborts above the ceiling, then submits the send.

use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_primitives::U256;
use alloy_provider::ProviderBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tokenbridge_rs::{
    AlloyCcipGateway, CcipConfig, CcipSender, DestinationTokenContract, Erc20Contract,
    FeePayment, TokenBridgeContract, DESTINATION_LINK_ADDRESS, ORIGIN_CHAIN_SELECTOR,
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

    let destination_provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(config.destination_rpc_url.as_str())
        .await?;

    let destination_token =
        DestinationTokenContract::new(config.destination_token, destination_provider.clone());
    destination_token
        .ensure_bridge(config.destination_token_bridge)
        .await?;

    let amount = parse_ether("1")?;

    let token_allowance = destination_token
        .allowance(wallet_address, config.destination_token_bridge)
        .await?;
    if token_allowance < amount {
        destination_token
            .approve(config.destination_token_bridge, U256::MAX)
            .await?;
        info!(event = "destination_token_allowance_topped_up");
    }

    let link = Erc20Contract::new(DESTINATION_LINK_ADDRESS, destination_provider.clone());
    let link_allowance = link
        .allowance(wallet_address, config.destination_token_bridge)
        .await?;
    if link_allowance < amount {
        link.approve(config.destination_token_bridge, U256::MAX)
            .await?;
        info!(event = "link_allowance_topped_up");
    }

    let bridge = TokenBridgeContract::new(config.destination_token_bridge, destination_provider);
    let sender = CcipSender::builder()
        .gateway(AlloyCcipGateway::new(bridge))
        .destination_chain_selector(ORIGIN_CHAIN_SELECTOR)
        .receiver(config.origin_token_bridge)
        .fee_payment(FeePayment::Link)
        .fee_ceiling(config.fee_ceiling(FeePayment::Link.default_ceiling()))
        .build();

    let tx_hash = sender.send(wallet_address, wallet_address, amount).await?;

    info!(
        tx_hash = %tx_hash,
        tracker = "https://ccip.chain.link/",
        event = "ccip_transfer_in_progress"
    );

    let balance = destination_token.balance_of(wallet_address).await?;
    info!(
        account = %wallet_address,
        balance = %format_ether(balance),
        event = "destination_sender_balance"
    );

    Ok(())
}
