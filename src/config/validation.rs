//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the RPC URL, program id and seed constraints
//! - Validate value ranges (timeouts > 0, account size within system limits)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: InitConfig → Result<(), Vec<ValidationError>>
//! - Runs before any wallet or network access

use std::fmt;
use std::str::FromStr;

use solana_sdk::pubkey::{Pubkey, MAX_SEED_LEN};
use solana_sdk::system_instruction::MAX_PERMITTED_DATA_LENGTH;

use crate::config::schema::InitConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "account.space").
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &InitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.network.rpc_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "network.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "network.rpc_url",
            format!("invalid URL '{}': {}", config.network.rpc_url, e),
        )),
    }

    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("network.rpc_timeout_secs", "must be > 0"));
    }
    if config.network.confirm_timeout_secs == 0 {
        errors.push(ValidationError::new("network.confirm_timeout_secs", "must be > 0"));
    }
    if config.network.confirm_poll_interval_ms == 0 {
        errors.push(ValidationError::new("network.confirm_poll_interval_ms", "must be > 0"));
    }

    if let Err(e) = Pubkey::from_str(&config.account.program_id) {
        errors.push(ValidationError::new(
            "account.program_id",
            format!("invalid public key '{}': {}", config.account.program_id, e),
        ));
    }

    let prefix_len = config.account.seed_prefix.len();
    if prefix_len == 0 {
        errors.push(ValidationError::new("account.seed_prefix", "must not be empty"));
    } else if prefix_len > MAX_SEED_LEN {
        errors.push(ValidationError::new(
            "account.seed_prefix",
            format!("{} bytes exceeds the {} byte seed limit", prefix_len, MAX_SEED_LEN),
        ));
    }

    if config.account.space == 0 {
        errors.push(ValidationError::new("account.space", "must be > 0"));
    } else if config.account.space > MAX_PERMITTED_DATA_LENGTH {
        errors.push(ValidationError::new(
            "account.space",
            format!(
                "{} bytes exceeds the {} byte account limit",
                config.account.space, MAX_PERMITTED_DATA_LENGTH
            ),
        ));
    }

    if config.wallet.path_env_var.trim().is_empty() {
        errors.push(ValidationError::new("wallet.path_env_var", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&InitConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = InitConfig::default();
        config.network.rpc_url = "not a url".to_string();
        config.account.program_id = "xyz0".to_string();
        config.account.space = 0;
        config.network.confirm_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "network.rpc_url",
                "network.confirm_timeout_secs",
                "account.program_id",
                "account.space",
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = InitConfig::default();
        config.network.rpc_url = "ws://127.0.0.1:8900".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("ws"));
    }

    #[test]
    fn test_seed_prefix_limits() {
        let mut config = InitConfig::default();
        config.account.seed_prefix = String::new();
        assert!(validate_config(&config).is_err());

        config.account.seed_prefix = "a".repeat(MAX_SEED_LEN);
        assert!(validate_config(&config).is_ok());

        config.account.seed_prefix = "a".repeat(MAX_SEED_LEN + 1);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "account.seed_prefix");
    }

    #[test]
    fn test_space_upper_bound() {
        let mut config = InitConfig::default();
        config.account.space = MAX_PERMITTED_DATA_LENGTH + 1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "account.space");
    }
}
