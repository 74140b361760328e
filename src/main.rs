//! Program-derived account initializer.
//!
//! Creates the account at the PDA `[seed_prefix, account_number as u32 LE]`
//! of the target program on a local cluster, funded at the rent-exempt
//! minimum and paid for by the wallet named in `ANCHOR_WALLET`.
//!
//! # Flow
//!
//! ```text
//!   config (defaults or --config TOML)
//!       │
//!       ▼
//!   ANCHOR_WALLET ──▶ keypair file ──▶ Wallet          (no network yet)
//!       │
//!       ▼
//!   PDA ──▶ rent minimum ──▶ blockhash ──▶ sign ──▶ send ──▶ confirm
//! ```
//!
//! Run with no arguments to use the built-in localnet settings.

use std::path::PathBuf;

use clap::Parser;

use pda_account_init::blockchain::SolanaRpc;
use pda_account_init::config::load_or_default;
use pda_account_init::observability::init_logging;
use pda_account_init::provision;

#[derive(Parser)]
#[command(name = "account-init")]
#[command(about = "Create the program-derived account on a local cluster", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exit cleanly if the account already exists instead of failing
    #[arg(long)]
    skip_existing: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if cli.skip_existing {
        config.account.skip_existing = true;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability.log_level);

    tracing::info!(
        rpc_url = %config.network.rpc_url,
        program_id = %config.account.program_id,
        seed_prefix = %config.account.seed_prefix,
        account_number = config.account.account_number,
        space = config.account.space,
        "Configuration loaded"
    );

    let (plan, wallet) = provision::prepare(&config)?;

    let rpc = SolanaRpc::new(&plan.rpc_url, plan.rpc_timeout, plan.commitment);
    let mut stdout = std::io::stdout();
    let report = provision::execute(&plan, &wallet, &rpc, &mut stdout).await?;

    tracing::info!(address = %report.address, outcome = ?report.outcome, "Done");
    Ok(())
}
