//! Program-derived account initializer library.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod provision;

pub use config::schema::InitConfig;
pub use provision::{ProvisionError, ProvisionReport};
