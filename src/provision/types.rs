//! Provisioning results and errors.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

use crate::blockchain::ChainError;
use crate::config::ConfigError;

/// Errors that abort a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Missing or invalid configuration; raised before any network call.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Wallet, RPC, or on-chain failure.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Console output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ProvisionError {
    /// True for failures that happened before touching the network.
    pub fn is_config(&self) -> bool {
        matches!(self, ProvisionError::Config(_))
    }
}

/// Result type for provisioning.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// What happened at the derived address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The account was created and the transaction confirmed.
    Created { signature: Signature, lamports: u64 },
    /// The account was already there and `skip_existing` was set.
    AlreadyExists,
}

/// Summary of a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub address: Pubkey,
    pub bump: u8,
    pub payer: Pubkey,
    pub outcome: ProvisionOutcome,
}

impl ProvisionReport {
    pub fn signature(&self) -> Option<&Signature> {
        match &self.outcome {
            ProvisionOutcome::Created { signature, .. } => Some(signature),
            ProvisionOutcome::AlreadyExists => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_classified() {
        let err = ProvisionError::from(ConfigError::MissingEnv("ANCHOR_WALLET".to_string()));
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Configuration error: ANCHOR_WALLET environment variable not set"
        );

        let err = ProvisionError::from(ChainError::Wallet("bad".to_string()));
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "Wallet error: bad");
    }

    #[test]
    fn test_report_signature() {
        let report = ProvisionReport {
            address: Pubkey::new_unique(),
            bump: 255,
            payer: Pubkey::new_unique(),
            outcome: ProvisionOutcome::AlreadyExists,
        };
        assert!(report.signature().is_none());
    }
}
