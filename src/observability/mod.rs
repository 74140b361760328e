//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, wallet, blockchain, provision
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
