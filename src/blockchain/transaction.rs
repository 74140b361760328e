//! Transaction building, signing, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build the single create-account transaction for the derived address
//! - Sign it with the fee payer only
//! - Poll signature status until confirmed, failed, or timed out

use std::time::Duration;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use tokio::time::{interval, timeout};

use crate::blockchain::client::ChainRpc;
use crate::blockchain::types::{ChainError, ChainResult};

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Build a transaction with one `create_account` instruction funding
/// `address` with `lamports` and `space` bytes owned by `owner`.
///
/// The payer is the fee payer and the only signer. The derived address has
/// no private key, so its signature slot is left empty.
pub fn build_create_account_tx(
    payer: &Keypair,
    address: &Pubkey,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
    recent_blockhash: Hash,
) -> ChainResult<Transaction> {
    let instruction =
        system_instruction::create_account(&payer.pubkey(), address, lamports, space, owner);

    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
    transaction.try_partial_sign(&[payer], recent_blockhash)?;

    Ok(transaction)
}

/// Wait for a submitted transaction to reach the client's commitment level.
///
/// Returns once the status reports success; an on-chain error or running out
/// of time is an error.
///
/// # Arguments
/// * `rpc` - Client used for status polls
/// * `signature` - Signature returned at submission
/// * `poll_interval` - Delay between polls (the first poll is immediate, minimum 1ms)
/// * `max_wait` - Maximum time to wait before giving up
pub async fn wait_for_confirmation<R: ChainRpc>(
    rpc: &R,
    signature: &Signature,
    poll_interval: Duration,
    max_wait: Duration,
) -> ChainResult<()> {
    let result = timeout(max_wait, async {
        let mut ticker = interval(poll_interval.max(MIN_POLL_INTERVAL));

        loop {
            ticker.tick().await;

            match rpc.signature_status(signature).await? {
                None => {
                    tracing::debug!(signature = %signature, "Transaction pending");
                }
                Some(Ok(())) => return Ok(()),
                Some(Err(error)) => {
                    return Err(ChainError::TransactionFailed {
                        signature: *signature,
                        error,
                    })
                }
            }
        }
    })
    .await;

    match result {
        Ok(confirmed) => confirmed,
        Err(_) => Err(ChainError::ConfirmationTimeout {
            signature: *signature,
            timeout: max_wait,
        }),
    }
}
