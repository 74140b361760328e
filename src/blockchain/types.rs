//! Chain-specific types and error definitions.

use std::time::Duration;

use solana_client::client_error::ClientError;
use solana_sdk::signature::Signature;
use solana_sdk::signer::SignerError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed, including preflight rejections.
    #[error("RPC error: {0}")]
    Rpc(#[from] Box<ClientError>),

    /// Transaction landed but failed on-chain.
    #[error("Transaction {signature} failed: {error}")]
    TransactionFailed {
        signature: Signature,
        error: TransactionError,
    },

    /// Transaction did not reach the commitment level in time.
    #[error("Transaction {signature} not confirmed after {timeout:?}")]
    ConfirmationTimeout {
        signature: Signature,
        timeout: Duration,
    },

    /// Keypair file unreadable or malformed.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Signing the transaction failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),

    /// Seeds rejected by address derivation.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

impl From<ClientError> for ChainError {
    fn from(err: ClientError) -> Self {
        ChainError::Rpc(Box::new(err))
    }
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;
