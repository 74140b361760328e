//! The account initialization run.
//!
//! Steps execute strictly in order and the first failure ends the run:
//! configuration, wallet, derivation, optional existence check, rent query,
//! blockhash, sign, submit, confirm. Nothing is retried.

use std::io::Write;

use crate::blockchain::transaction::{build_create_account_tx, wait_for_confirmation};
use crate::blockchain::{ChainRpc, DerivedAccount, Wallet};
use crate::config::{wallet_path_from_env, InitConfig, ProvisionPlan};
use crate::provision::types::{ProvisionOutcome, ProvisionReport, ProvisionResult};

/// Resolve configuration and the wallet. Makes no network calls.
pub fn prepare(config: &InitConfig) -> ProvisionResult<(ProvisionPlan, Wallet)> {
    let plan = ProvisionPlan::try_from(config)?;
    let wallet_path = wallet_path_from_env(&plan.wallet_env_var)?;
    let wallet = Wallet::from_file(&wallet_path)?;
    Ok((plan, wallet))
}

/// Create the derived account described by `config`, writing the console
/// lines to `out`.
pub async fn run<R, W>(config: &InitConfig, rpc: &R, out: &mut W) -> ProvisionResult<ProvisionReport>
where
    R: ChainRpc,
    W: Write,
{
    let (plan, wallet) = prepare(config)?;
    execute(&plan, &wallet, rpc, out).await
}

/// Run the network half of provisioning with an already prepared plan.
pub async fn execute<R, W>(
    plan: &ProvisionPlan,
    wallet: &Wallet,
    rpc: &R,
    out: &mut W,
) -> ProvisionResult<ProvisionReport>
where
    R: ChainRpc,
    W: Write,
{
    let derived = DerivedAccount::derive(&plan.program_id, &plan.seed_prefix, plan.account_number)?;
    let label = derived.label();

    writeln!(out, "{} PDA: {}", label, derived.address)?;
    tracing::info!(
        address = %derived.address,
        bump = derived.bump,
        program_id = %plan.program_id,
        seed_prefix = %plan.seed_prefix,
        account_number = plan.account_number,
        "Derived account address"
    );

    let mut report = ProvisionReport {
        address: derived.address,
        bump: derived.bump,
        payer: wallet.pubkey(),
        outcome: ProvisionOutcome::AlreadyExists,
    };

    if plan.skip_existing && rpc.account_exists(&derived.address).await? {
        writeln!(out, "{} account already exists. Skipping initialization.", label)?;
        tracing::info!(address = %derived.address, "Account exists, nothing to do");
        return Ok(report);
    }

    let lamports = rpc.minimum_balance_for_rent_exemption(plan.space as usize).await?;
    tracing::debug!(space = plan.space, lamports = lamports, "Rent-exempt minimum");

    let blockhash = rpc.latest_blockhash().await?;
    let transaction = build_create_account_tx(
        wallet.keypair(),
        &derived.address,
        lamports,
        plan.space,
        &plan.program_id,
        blockhash,
    )?;

    let signature = rpc.send_transaction(&transaction).await?;
    writeln!(out, "{} account creation transaction signature: {}", label, signature)?;
    tracing::info!(signature = %signature, payer = %wallet.pubkey(), "Transaction submitted");

    wait_for_confirmation(rpc, &signature, plan.poll_interval, plan.confirm_timeout).await?;
    writeln!(
        out,
        "{} account created successfully. You can now call initialize_{} separately.",
        label, plan.seed_prefix
    )?;
    tracing::info!(signature = %signature, address = %derived.address, "Account created");

    report.outcome = ProvisionOutcome::Created { signature, lamports };
    Ok(report)
}
