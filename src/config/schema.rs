//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! account initializer. All types derive Serde traits for deserialization
//! from config files, and every default matches the stock localnet setup.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

/// Root configuration for the account initializer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InitConfig {
    /// RPC endpoint and confirmation settings.
    pub network: NetworkConfig,

    /// Target program and derived account settings.
    pub account: AccountConfig,

    /// Where the fee payer keypair comes from.
    pub wallet: WalletConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Commitment level used for queries and confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn to_commitment_config(self) -> CommitmentConfig {
        match self {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Network configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Commitment level for every RPC call.
    pub commitment: Commitment,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for the transaction to reach the commitment level.
    pub confirm_timeout_secs: u64,

    /// Delay between signature status polls in milliseconds.
    pub confirm_poll_interval_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            commitment: Commitment::Confirmed,
            rpc_timeout_secs: 30,
            confirm_timeout_secs: 60,
            confirm_poll_interval_ms: 500,
        }
    }
}

/// Derived account configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Base58 id of the program that will own the new account.
    pub program_id: String,

    /// First PDA seed (e.g., "game").
    pub seed_prefix: String,

    /// Second PDA seed, encoded as a little-endian u32.
    pub account_number: u32,

    /// Account data size in bytes.
    pub space: u64,

    /// Query the address first and exit cleanly if the account exists.
    pub skip_existing: bool,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            program_id: "HP9ucKGU9Sad7EaWjrGULC2ZSyYD1ScxVPh15QmdRmut".to_string(),
            seed_prefix: "game".to_string(),
            account_number: 1,
            space: 15_000,
            skip_existing: false,
        }
    }
}

/// Wallet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Environment variable holding the keypair file path.
    pub path_env_var: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            path_env_var: "ANCHOR_WALLET".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
