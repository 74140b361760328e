//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML) or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → plan.rs (typed ProvisionPlan: Pubkey, CommitmentConfig, Durations)
//!
//! wallet path:
//!     environment variable (ANCHOR_WALLET by default)
//!     → loader::wallet_path_from_env
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file reproduces the localnet setup
//! - Validation separates syntactic (serde) from semantic checks
//! - Every configuration failure surfaces before any network call

pub mod loader;
pub mod plan;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, wallet_path_from_env, ConfigError};
pub use plan::ProvisionPlan;
pub use schema::{AccountConfig, Commitment, InitConfig, NetworkConfig};
