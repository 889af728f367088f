//! Environment-backed configuration for the watcher and the one-shot scripts.
//!
//! All deployment-specific values (RPC endpoints, signing keys, contract
//! addresses) come from the process environment, typically loaded from a
//! `.env` file via [`dotenvy`]. Missing required variables are fatal at
//! startup: the binaries log the error and exit nonzero.

use alloy_primitives::{address, Address, U256};
use alloy_signer_local::PrivateKeySigner;
use url::Url;

use crate::error::{BridgeError, Result};

/// CCIP chain selector for the origin chain (Ethereum Sepolia).
pub const ORIGIN_CHAIN_SELECTOR: u64 = 16015286601757825753;

/// CCIP chain selector for the destination chain (Polygon Amoy).
pub const DESTINATION_CHAIN_SELECTOR: u64 = 16281711391670634445;

/// LINK token on the destination chain, used when router fees are paid in LINK.
pub const DESTINATION_LINK_ADDRESS: Address =
    address!("0Fd9e8d3aF1aaee056EB9e802c3A762a667b1904");

fn require(get: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    get(name).ok_or_else(|| BridgeError::MissingEnv {
        name: name.to_string(),
    })
}

fn parse_address(name: &str, value: &str) -> Result<Address> {
    value
        .parse()
        .map_err(|e| BridgeError::InvalidConfig(format!("{name}: {e}")))
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| BridgeError::InvalidConfig(format!("{name}: {e}")))
}

fn parse_signer(name: &str, value: &str) -> Result<PrivateKeySigner> {
    value
        .parse()
        .map_err(|e| BridgeError::InvalidConfig(format!("{name}: {e}")))
}

/// Configuration for the long-running bridge watcher.
///
/// The watcher signs on both chains with the same bridge credential; the
/// bridge account address is derived from that key at startup.
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    pub origin_rpc_url: Url,
    pub destination_rpc_url: Url,
    pub origin_token: Address,
    pub destination_token: Address,
    bridge_wallet_key: String,
}

impl WatcherConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            origin_rpc_url: parse_url("ORIGIN_RPC_URL", &require(&get, "ORIGIN_RPC_URL")?)?,
            destination_rpc_url: parse_url(
                "DESTINATION_RPC_URL",
                &require(&get, "DESTINATION_RPC_URL")?,
            )?,
            origin_token: parse_address(
                "ORIGIN_TOKEN_ADDRESS",
                &require(&get, "ORIGIN_TOKEN_ADDRESS")?,
            )?,
            destination_token: parse_address(
                "DESTINATION_TOKEN_ADDRESS",
                &require(&get, "DESTINATION_TOKEN_ADDRESS")?,
            )?,
            bridge_wallet_key: require(&get, "BRIDGE_WALLET_PRIVATE_KEY")?,
        })
    }

    /// Parses the bridge signing credential.
    pub fn bridge_signer(&self) -> Result<PrivateKeySigner> {
        parse_signer("BRIDGE_WALLET_PRIVATE_KEY", &self.bridge_wallet_key)
    }
}

/// Configuration for the standalone scripts (`mint-origin`, `send-to-destination`,
/// `send-to-origin`).
///
/// The bridge key is optional here: it is only needed by the scripts that
/// derive the bridge wallet address to send deposits to.
#[derive(Clone, Debug)]
pub struct ScriptConfig {
    pub origin_rpc_url: Url,
    pub destination_rpc_url: Url,
    pub origin_token: Address,
    pub destination_token: Address,
    wallet_key: String,
    bridge_wallet_key: Option<String>,
}

impl ScriptConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            origin_rpc_url: parse_url("ORIGIN_RPC_URL", &require(&get, "ORIGIN_RPC_URL")?)?,
            destination_rpc_url: parse_url(
                "DESTINATION_RPC_URL",
                &require(&get, "DESTINATION_RPC_URL")?,
            )?,
            origin_token: parse_address(
                "ORIGIN_TOKEN_ADDRESS",
                &require(&get, "ORIGIN_TOKEN_ADDRESS")?,
            )?,
            destination_token: parse_address(
                "DESTINATION_TOKEN_ADDRESS",
                &require(&get, "DESTINATION_TOKEN_ADDRESS")?,
            )?,
            wallet_key: require(&get, "WALLET_PRIVATE_KEY")?,
            bridge_wallet_key: get("BRIDGE_WALLET_PRIVATE_KEY"),
        })
    }

    /// Parses the user signing credential.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        parse_signer("WALLET_PRIVATE_KEY", &self.wallet_key)
    }

    /// Derives the bridge wallet address from the bridge credential.
    ///
    /// Deposits are plain ERC-20 transfers to this address; the scripts never
    /// sign with the bridge key, they only need to know where to send.
    pub fn bridge_address(&self) -> Result<Address> {
        let key = self
            .bridge_wallet_key
            .as_deref()
            .ok_or_else(|| BridgeError::MissingEnv {
                name: "BRIDGE_WALLET_PRIVATE_KEY".to_string(),
            })?;
        Ok(parse_signer("BRIDGE_WALLET_PRIVATE_KEY", key)?.address())
    }
}

/// Configuration for the CCIP sender scripts.
#[derive(Clone, Debug)]
pub struct CcipConfig {
    pub origin_rpc_url: Url,
    pub destination_rpc_url: Url,
    pub origin_token: Address,
    pub destination_token: Address,
    pub origin_token_bridge: Address,
    pub destination_token_bridge: Address,
    wallet_key: String,
    fee_ceiling_override: Option<U256>,
}

impl CcipConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fee_ceiling_override = match get("CCIP_FEE_CEILING_WEI") {
            Some(raw) => Some(U256::from_str_radix(&raw, 10).map_err(|e| {
                BridgeError::InvalidConfig(format!("CCIP_FEE_CEILING_WEI: {e}"))
            })?),
            None => None,
        };
        Ok(Self {
            origin_rpc_url: parse_url("ORIGIN_RPC_URL", &require(&get, "ORIGIN_RPC_URL")?)?,
            destination_rpc_url: parse_url(
                "DESTINATION_RPC_URL",
                &require(&get, "DESTINATION_RPC_URL")?,
            )?,
            origin_token: parse_address(
                "ORIGIN_TOKEN_ADDRESS",
                &require(&get, "ORIGIN_TOKEN_ADDRESS")?,
            )?,
            destination_token: parse_address(
                "DESTINATION_TOKEN_ADDRESS",
                &require(&get, "DESTINATION_TOKEN_ADDRESS")?,
            )?,
            origin_token_bridge: parse_address(
                "ORIGIN_TOKEN_BRIDGE",
                &require(&get, "ORIGIN_TOKEN_BRIDGE")?,
            )?,
            destination_token_bridge: parse_address(
                "DESTINATION_TOKEN_BRIDGE",
                &require(&get, "DESTINATION_TOKEN_BRIDGE")?,
            )?,
            wallet_key: require(&get, "WALLET_PRIVATE_KEY")?,
            fee_ceiling_override,
        })
    }

    /// Parses the user signing credential.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        parse_signer("WALLET_PRIVATE_KEY", &self.wallet_key)
    }

    /// Returns the fee ceiling in wei, preferring the environment override
    /// over the default for the given fee payment mode.
    pub fn fee_ceiling(&self, default: U256) -> U256 {
        self.fee_ceiling_override.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn watcher_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ORIGIN_RPC_URL", "https://sepolia.example.org"),
            ("DESTINATION_RPC_URL", "https://amoy.example.org"),
            (
                "ORIGIN_TOKEN_ADDRESS",
                "0x1111111111111111111111111111111111111111",
            ),
            (
                "DESTINATION_TOKEN_ADDRESS",
                "0x2222222222222222222222222222222222222222",
            ),
            (
                "BRIDGE_WALLET_PRIVATE_KEY",
                "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
            ),
        ])
    }

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn watcher_config_parses_full_environment() {
        let vars = watcher_vars();
        let config = WatcherConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.origin_rpc_url.as_str(), "https://sepolia.example.org/");
        assert_eq!(
            config.origin_token,
            address!("1111111111111111111111111111111111111111")
        );
        assert!(config.bridge_signer().is_ok());
    }

    #[test]
    fn watcher_config_missing_key_is_fatal() {
        let mut vars = watcher_vars();
        vars.remove("BRIDGE_WALLET_PRIVATE_KEY");

        let err = WatcherConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(
            matches!(err, BridgeError::MissingEnv { ref name } if name == "BRIDGE_WALLET_PRIVATE_KEY")
        );
    }

    #[test]
    fn watcher_config_rejects_malformed_address() {
        let mut vars = watcher_vars();
        vars.insert("ORIGIN_TOKEN_ADDRESS", "not-an-address");

        let err = WatcherConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidConfig(_)));
    }

    #[test]
    fn script_config_bridge_address_requires_bridge_key() {
        let mut vars = watcher_vars();
        vars.insert(
            "WALLET_PRIVATE_KEY",
            "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
        );
        vars.remove("BRIDGE_WALLET_PRIVATE_KEY");

        let config = ScriptConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(matches!(
            config.bridge_address().unwrap_err(),
            BridgeError::MissingEnv { .. }
        ));
    }

    #[test]
    fn ccip_config_fee_ceiling_override() {
        let mut vars = watcher_vars();
        vars.insert(
            "WALLET_PRIVATE_KEY",
            "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
        );
        vars.insert(
            "ORIGIN_TOKEN_BRIDGE",
            "0x3333333333333333333333333333333333333333",
        );
        vars.insert(
            "DESTINATION_TOKEN_BRIDGE",
            "0x4444444444444444444444444444444444444444",
        );
        vars.insert("CCIP_FEE_CEILING_WEI", "250000000000000000");

        let config = CcipConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(
            config.fee_ceiling(U256::ZERO),
            U256::from(250_000_000_000_000_000u128)
        );

        vars.remove("CCIP_FEE_CEILING_WEI");
        let config = CcipConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.fee_ceiling(U256::from(7)), U256::from(7));
    }
}
