//! Wallet loading for the fee payer.
//!
//! # Security
//! - The keypair file path comes from configuration (an environment variable)
//! - Secret key bytes are never logged or serialized
//! - Only the public key appears in logs

use std::fs;
use std::path::Path;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::signer::keypair::keypair_from_seed;

use crate::blockchain::types::{ChainError, ChainResult};

/// Fee payer and sole signer for the provisioning transaction.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Load a keypair file: a JSON array of the 64 secret key bytes.
    pub fn from_file(path: &Path) -> ChainResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChainError::Wallet(format!("Cannot read keypair file {}: {}", path.display(), e))
        })?;

        let wallet = Self::from_json(&content).map_err(|e| match e {
            ChainError::Wallet(msg) => ChainError::Wallet(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            pubkey = %wallet.pubkey(),
            "Wallet loaded"
        );

        Ok(wallet)
    }

    /// Parse the JSON byte-array keypair encoding.
    pub fn from_json(content: &str) -> ChainResult<Self> {
        let bytes: Vec<u8> = serde_json::from_str(content)
            .map_err(|e| ChainError::Wallet(format!("Invalid keypair JSON: {}", e)))?;

        Self::from_bytes(&bytes)
    }

    /// Build from raw secret key bytes (secret half followed by public half).
    pub fn from_bytes(bytes: &[u8]) -> ChainResult<Self> {
        if bytes.len() != 64 {
            return Err(ChainError::Wallet(format!(
                "Invalid keypair length: {} bytes, expected 64",
                bytes.len()
            )));
        }

        let keypair = keypair_from_seed(&bytes[..32])
            .map_err(|e| ChainError::Wallet(format!("Invalid secret key: {}", e)))?;

        if keypair.pubkey().to_bytes()[..] != bytes[32..] {
            return Err(ChainError::Wallet(
                "Public key does not match secret key".to_string(),
            ));
        }

        Ok(Self { keypair })
    }

    /// Get the wallet's public key.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get the signer.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Fail unless this wallet's public key is `expected`.
    pub fn verify_pubkey(&self, expected: &Pubkey) -> ChainResult<()> {
        let actual = self.pubkey();
        if actual != *expected {
            return Err(ChainError::Wallet(format!(
                "Keypair mismatch: file holds {}, expected {}",
                actual, expected
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("pubkey", &self.pubkey())
            .finish()
    }
}
