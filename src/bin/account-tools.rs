use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

use pda_account_init::blockchain::{DerivedAccount, Wallet};
use pda_account_init::config::schema::WalletConfig;
use pda_account_init::config::{wallet_path_from_env, AccountConfig};
use pda_account_init::observability::init_logging;

#[derive(Parser)]
#[command(name = "account-tools")]
#[command(about = "Offline helpers for the account initializer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived address and bump
    Derive {
        #[arg(long)]
        program_id: Option<String>,

        #[arg(long)]
        seed_prefix: Option<String>,

        #[arg(long)]
        number: Option<u32>,
    },
    /// Load a keypair file and print its public key
    Wallet {
        /// Keypair file; falls back to the ANCHOR_WALLET variable
        #[arg(long)]
        path: Option<PathBuf>,

        /// Fail unless the wallet's public key equals this one
        #[arg(long)]
        expect: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging("warn");

    let defaults = AccountConfig::default();

    match cli.command {
        Commands::Derive {
            program_id,
            seed_prefix,
            number,
        } => {
            let program_id = Pubkey::from_str(&program_id.unwrap_or(defaults.program_id))?;
            let seed_prefix = seed_prefix.unwrap_or(defaults.seed_prefix);
            let number = number.unwrap_or(defaults.account_number);

            let derived = DerivedAccount::derive(&program_id, &seed_prefix, number)?;
            println!("{} PDA: {}", derived.label(), derived.address);
            println!("  Bump: {}", derived.bump);
            println!("  Seeds: [\"{}\", {}u32 LE]", seed_prefix, number);
        }
        Commands::Wallet { path, expect } => {
            let path = match path {
                Some(path) => path,
                None => wallet_path_from_env(&WalletConfig::default().path_env_var)?,
            };
            let wallet = Wallet::from_file(&path)?;
            println!("Wallet pubkey: {}", wallet.pubkey());

            if let Some(expected) = expect {
                let expected = Pubkey::from_str(&expected)?;
                wallet.verify_pubkey(&expected)?;
                println!("Keypair matches expected pubkey.");
            }
        }
    }

    Ok(())
}
