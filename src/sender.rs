//! One-shot CCIP send flow: quote the router fee, enforce the fee ceiling,
//! submit the send.
//!
//! The sender is deliberately stateless; each invocation runs to completion
//! and the process exits. Allowance setup (token and LINK approvals) happens
//! in the binaries before the sender is invoked, mirroring the on-chain
//! ordering the bridge contract expects.

use alloy_primitives::{utils::format_ether, Address, TxHash, U256};
use bon::Builder;
use tracing::{info, warn};

use crate::error::{BridgeError, Result};
use crate::traits::CcipGateway;

/// How the CCIP router fee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePayment {
    /// Fee attached to the send transaction as native coin.
    Native,
    /// Fee pulled from a LINK allowance on the bridge contract.
    Link,
}

impl FeePayment {
    /// Wire encoding expected by the bridge contract's `payFeesIn` argument.
    pub fn wire(self) -> u8 {
        match self {
            FeePayment::Native => 0,
            FeePayment::Link => 1,
        }
    }

    /// Default fee ceiling in wei: 0.1 native coin, 2 LINK.
    pub fn default_ceiling(self) -> U256 {
        match self {
            FeePayment::Native => U256::from(100_000_000_000_000_000u128),
            FeePayment::Link => U256::from(2_000_000_000_000_000_000u128),
        }
    }
}

/// CCIP cross-chain token sender.
///
/// # Example
///
/// ```rust,ignore
/// let sender = CcipSender::builder()
///     .gateway(AlloyCcipGateway::new(bridge))
///     .destination_chain_selector(DESTINATION_CHAIN_SELECTOR)
///     .receiver(destination_token_bridge)
///     .fee_payment(FeePayment::Native)
///     .fee_ceiling(FeePayment::Native.default_ceiling())
///     .build();
///
/// let tx_hash = sender.send(recipient, sender_address, amount).await?;
/// ```
#[derive(Builder)]
pub struct CcipSender<G: CcipGateway> {
    gateway: G,
    destination_chain_selector: u64,
    /// The `TokenBridge` contract on the remote chain that receives the
    /// CCIP message.
    receiver: Address,
    fee_payment: FeePayment,
    /// Quotes above this ceiling abort the send.
    fee_ceiling: U256,
}

impl<G: CcipGateway> CcipSender<G> {
    /// Quote the router fee, enforce the ceiling, and submit the send.
    ///
    /// Returns [`BridgeError::FeeTooHigh`] without submitting anything when
    /// the quoted fee exceeds the configured ceiling.
    pub async fn send(&self, to: Address, from: Address, amount: U256) -> Result<TxHash> {
        let fee = self
            .gateway
            .quote_fee(
                self.destination_chain_selector,
                self.receiver,
                to,
                amount,
                self.fee_payment,
            )
            .await?;

        info!(
            fee = %format_ether(fee),
            fee_payment = ?self.fee_payment,
            event = "router_fee_quoted"
        );

        if fee > self.fee_ceiling {
            warn!(
                fee = %format_ether(fee),
                ceiling = %format_ether(self.fee_ceiling),
                event = "router_fee_above_ceiling"
            );
            return Err(BridgeError::FeeTooHigh {
                fee,
                ceiling: self.fee_ceiling,
            });
        }

        let tx_hash = self
            .gateway
            .send_token(
                self.destination_chain_selector,
                self.receiver,
                to,
                from,
                amount,
                self.fee_payment,
                fee,
            )
            .await?;

        info!(
            tx_hash = %tx_hash,
            amount = %format_ether(amount),
            event = "ccip_send_submitted"
        );

        Ok(tx_hash)
    }

    /// Returns the configured fee ceiling in wei.
    pub fn fee_ceiling(&self) -> U256 {
        self.fee_ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeCcipGateway;
    use alloy_primitives::address;

    const RECEIVER: Address = address!("4444444444444444444444444444444444444444");
    const USER: Address = address!("5555555555555555555555555555555555555555");

    fn sender(gateway: FakeCcipGateway, ceiling: U256) -> CcipSender<FakeCcipGateway> {
        CcipSender::builder()
            .gateway(gateway)
            .destination_chain_selector(crate::config::DESTINATION_CHAIN_SELECTOR)
            .receiver(RECEIVER)
            .fee_payment(FeePayment::Native)
            .fee_ceiling(ceiling)
            .build()
    }

    #[test]
    fn fee_payment_wire_encoding() {
        assert_eq!(FeePayment::Native.wire(), 0);
        assert_eq!(FeePayment::Link.wire(), 1);
    }

    #[test]
    fn default_ceilings() {
        assert_eq!(
            FeePayment::Native.default_ceiling(),
            U256::from(100_000_000_000_000_000u128)
        );
        assert_eq!(
            FeePayment::Link.default_ceiling(),
            U256::from(2_000_000_000_000_000_000u128)
        );
    }

    #[tokio::test]
    async fn aborts_without_sending_when_fee_exceeds_ceiling() {
        let gateway = FakeCcipGateway::new();
        gateway.set_fee(U256::from(11));
        let sender = sender(gateway.clone(), U256::from(10));

        let err = sender
            .send(USER, USER, U256::from(1000))
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::FeeTooHigh { .. }));
        assert!(gateway.sends().is_empty());
    }

    #[tokio::test]
    async fn fee_at_ceiling_still_sends() {
        let gateway = FakeCcipGateway::new();
        gateway.set_fee(U256::from(10));
        let sender = sender(gateway.clone(), U256::from(10));

        sender.send(USER, USER, U256::from(1000)).await.unwrap();

        assert_eq!(gateway.sends().len(), 1);
        let sent = &gateway.sends()[0];
        assert_eq!(sent.amount, U256::from(1000));
        assert_eq!(sent.fee, U256::from(10));
    }

    #[test]
    fn fee_too_high_error_display() {
        let err = BridgeError::FeeTooHigh {
            fee: U256::from(200_000_000_000_000_000u128),
            ceiling: U256::from(100_000_000_000_000_000u128),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"Router fee 200000000000000000 wei exceeds ceiling 100000000000000000 wei"
        );
    }
}
