//! Typed view of a validated configuration.

use std::str::FromStr;
use std::time::Duration;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::config::loader::ConfigError;
use crate::config::schema::InitConfig;
use crate::config::validation::validate_config;

/// Everything the provisioning run needs, parsed out of [`InitConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionPlan {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub rpc_timeout: Duration,
    pub confirm_timeout: Duration,
    pub poll_interval: Duration,
    pub program_id: Pubkey,
    pub seed_prefix: String,
    pub account_number: u32,
    pub space: u64,
    pub skip_existing: bool,
    pub wallet_env_var: String,
}

impl TryFrom<&InitConfig> for ProvisionPlan {
    type Error = ConfigError;

    fn try_from(config: &InitConfig) -> Result<Self, Self::Error> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let program_id = Pubkey::from_str(&config.account.program_id).map_err(|e| {
            ConfigError::InvalidValue {
                field: "account.program_id",
                message: format!("'{}': {}", config.account.program_id, e),
            }
        })?;

        Ok(Self {
            rpc_url: config.network.rpc_url.clone(),
            commitment: config.network.commitment.to_commitment_config(),
            rpc_timeout: Duration::from_secs(config.network.rpc_timeout_secs),
            confirm_timeout: Duration::from_secs(config.network.confirm_timeout_secs),
            poll_interval: Duration::from_millis(config.network.confirm_poll_interval_ms),
            program_id,
            seed_prefix: config.account.seed_prefix.clone(),
            account_number: config.account.account_number,
            space: config.account.space,
            skip_existing: config.account.skip_existing,
            wallet_env_var: config.wallet.path_env_var.clone(),
        })
    }
}
