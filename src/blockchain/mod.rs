//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Keypair file (path from environment)
//!     → wallet.rs (key loading)
//! Program id + seeds
//!     → pda.rs (derived address + bump)
//! client.rs (RPC: rent minimum, blockhash, submit, status)
//!     → transaction.rs (build, sign, confirm)
//! ```
//!
//! # Security Constraints
//! - Never log secret key material
//! - All RPC calls have a configurable timeout
//! - The fee payer is the only signer of anything this crate sends

pub mod client;
pub mod pda;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{ChainRpc, SolanaRpc};
pub use pda::DerivedAccount;
pub use types::{ChainError, ChainResult};
pub use wallet::Wallet;
