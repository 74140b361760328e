//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint with a request timeout and commitment
//! - Query chain state (rent minimum, blockhash, account existence)
//! - Submit transactions and report signature status
//!
//! Every call is a single request. Failures are returned as-is; nothing here
//! retries or fails over.

use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};

use crate::blockchain::types::ChainResult;

/// The RPC operations the provisioning flow depends on.
///
/// Implemented by [`SolanaRpc`] for real clusters and by in-memory doubles in
/// tests.
#[allow(async_fn_in_trait)]
pub trait ChainRpc {
    /// Lamports an account of `space` bytes must hold to be rent exempt.
    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> ChainResult<u64>;

    /// Most recent blockhash at the client's commitment.
    async fn latest_blockhash(&self) -> ChainResult<Hash>;

    /// Whether an account currently exists at `address`.
    async fn account_exists(&self, address: &Pubkey) -> ChainResult<bool>;

    /// Submit a signed transaction with preflight checks; returns its signature.
    async fn send_transaction(&self, transaction: &Transaction) -> ChainResult<Signature>;

    /// `None` while the signature is unknown at the client's commitment.
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> ChainResult<Option<Result<(), TransactionError>>>;
}

/// Solana JSON-RPC client wrapper.
pub struct SolanaRpc {
    client: RpcClient,
    rpc_url: String,
    commitment: CommitmentConfig,
}

impl SolanaRpc {
    /// Create a client. No request is made until the first call.
    pub fn new(rpc_url: &str, timeout: Duration, commitment: CommitmentConfig) -> Self {
        let client =
            RpcClient::new_with_timeout_and_commitment(rpc_url.to_string(), timeout, commitment);

        tracing::debug!(
            rpc_url = %rpc_url,
            commitment = ?commitment.commitment,
            timeout_secs = timeout.as_secs(),
            "RPC client created"
        );

        Self {
            client,
            rpc_url: rpc_url.to_string(),
            commitment,
        }
    }

    /// Get the endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl ChainRpc for SolanaRpc {
    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> ChainResult<u64> {
        let lamports = self.client.get_minimum_balance_for_rent_exemption(space).await?;
        Ok(lamports)
    }

    async fn latest_blockhash(&self) -> ChainResult<Hash> {
        let blockhash = self.client.get_latest_blockhash().await?;
        Ok(blockhash)
    }

    async fn account_exists(&self, address: &Pubkey) -> ChainResult<bool> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .await?;
        Ok(response.value.is_some())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> ChainResult<Signature> {
        let signature = self.client.send_transaction(transaction).await?;
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> ChainResult<Option<Result<(), TransactionError>>> {
        let status = self
            .client
            .get_signature_status_with_commitment(signature, self.commitment)
            .await?;
        Ok(status)
    }
}

impl std::fmt::Debug for SolanaRpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaRpc")
            .field("rpc_url", &self.rpc_url)
            .field("commitment", &self.commitment.commitment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_is_offline() {
        let rpc = SolanaRpc::new(
            "http://127.0.0.1:8899",
            Duration::from_secs(5),
            CommitmentConfig::confirmed(),
        );
        assert_eq!(rpc.rpc_url(), "http://127.0.0.1:8899");
        assert!(format!("{:?}", rpc).contains("Confirmed"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_returns_rpc_error() {
        // Port 9 (discard) is not an RPC server; the request must fail, not hang.
        let rpc = SolanaRpc::new(
            "http://127.0.0.1:9",
            Duration::from_secs(2),
            CommitmentConfig::confirmed(),
        );
        let result = rpc.latest_blockhash().await;
        assert!(matches!(result, Err(crate::blockchain::ChainError::Rpc(_))));
    }
}
