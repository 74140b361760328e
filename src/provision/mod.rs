//! Account provisioning.
//!
//! # Data Flow
//! ```text
//! InitConfig
//!     → runner::prepare (plan, wallet path from env, keypair file)
//!     → runner::execute
//!         derive PDA          → print "<Label> PDA: ..."
//!         [skip_existing]     → account_exists? → stop
//!         rent minimum        → latest blockhash
//!         build + sign        → send               → print signature
//!         wait_for_confirmation                    → print success line
//!     → ProvisionReport
//! ```
//!
//! # Failure Model
//! - Configuration errors surface from `prepare`, before any RPC call
//! - RPC and on-chain errors propagate unchanged; a second run against an
//!   existing account fails at submission (address already in use)

pub mod runner;
pub mod types;

pub use runner::{execute, prepare, run};
pub use types::{ProvisionError, ProvisionOutcome, ProvisionReport, ProvisionResult};
