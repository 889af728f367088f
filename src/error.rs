use alloy_primitives::U256;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Signer error: {0}")]
    Signer(#[from] alloy_signer_local::LocalSignerError),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract call failed: {0}")]
    ContractCall(#[from] alloy_contract::Error),

    #[error("Transaction failed: {0}")]
    PendingTransaction(#[from] alloy_provider::PendingTransactionError),

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Router fee {fee} wei exceeds ceiling {ceiling} wei")]
    FeeTooHigh { fee: U256, ceiling: U256 },

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("Unit conversion error: {0}")]
    Units(#[from] alloy_primitives::utils::UnitsError),

    #[error("Hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
