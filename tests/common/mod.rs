//! Shared utilities for provisioning integration tests.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use pda_account_init::blockchain::{ChainError, ChainResult, ChainRpc};
use pda_account_init::config::InitConfig;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

/// How the mock answers signature status polls.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum ConfirmBehavior {
    Confirm,
    Fail(TransactionError),
    Never,
}

/// In-memory cluster: records every call and tracks created accounts.
pub struct MockRpc {
    pub calls: Mutex<Vec<&'static str>>,
    pub accounts: Mutex<HashSet<Pubkey>>,
    pub sent: Mutex<Vec<Transaction>>,
    pub rent_lamports: u64,
    pub blockhash: Hash,
    pub confirm: ConfirmBehavior,
    pub fail_rent_query: bool,
}

#[allow(dead_code)]
impl MockRpc {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            accounts: Mutex::new(HashSet::new()),
            sent: Mutex::new(Vec::new()),
            rent_lamports: 105_290_880,
            blockhash: Hash::new_unique(),
            confirm: ConfirmBehavior::Confirm,
            fail_rent_query: false,
        }
    }

    pub fn with_confirm(mut self, confirm: ConfirmBehavior) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn with_account(self, address: Pubkey) -> Self {
        self.accounts.lock().unwrap().insert(address);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn client_error(message: String) -> ChainError {
    ChainError::from(ClientError::from(ClientErrorKind::Custom(message)))
}

impl ChainRpc for MockRpc {
    async fn minimum_balance_for_rent_exemption(&self, _space: usize) -> ChainResult<u64> {
        self.record("minimum_balance_for_rent_exemption");
        if self.fail_rent_query {
            return Err(client_error("error sending request: connection refused".to_string()));
        }
        Ok(self.rent_lamports)
    }

    async fn latest_blockhash(&self) -> ChainResult<Hash> {
        self.record("latest_blockhash");
        Ok(self.blockhash)
    }

    async fn account_exists(&self, address: &Pubkey) -> ChainResult<bool> {
        self.record("account_exists");
        Ok(self.accounts.lock().unwrap().contains(address))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> ChainResult<Signature> {
        self.record("send_transaction");

        let instruction = &transaction.message.instructions[0];
        let new_account = transaction.message.account_keys[instruction.accounts[1] as usize];

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains(&new_account) {
            return Err(client_error(format!(
                "Transaction simulation failed: Allocate: account Address {{ address: {}, base: None }} already in use",
                new_account
            )));
        }
        accounts.insert(new_account);
        self.sent.lock().unwrap().push(transaction.clone());

        Ok(transaction.signatures[0])
    }

    async fn signature_status(
        &self,
        _signature: &Signature,
    ) -> ChainResult<Option<Result<(), TransactionError>>> {
        self.record("signature_status");
        Ok(match &self.confirm {
            ConfirmBehavior::Confirm => Some(Ok(())),
            ConfirmBehavior::Fail(error) => Some(Err(error.clone())),
            ConfirmBehavior::Never => None,
        })
    }
}

/// A keypair written to a temp file, exposed through a test-unique env var.
pub struct TestWallet {
    pub keypair: Keypair,
    pub path: PathBuf,
    pub env_var: String,
}

impl TestWallet {
    pub fn new(tag: &str) -> Self {
        let keypair = Keypair::new();
        let path = std::env::temp_dir().join(format!("account-init-{}-{}.json", tag, keypair.pubkey()));
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        std::fs::write(&path, json).unwrap();

        let env_var = format!("ACCOUNT_INIT_TEST_WALLET_{}", tag.to_uppercase());
        std::env::set_var(&env_var, &path);

        Self {
            keypair,
            path,
            env_var,
        }
    }

    /// Default config pointed at this wallet's env var.
    pub fn config(&self) -> InitConfig {
        let mut config = InitConfig::default();
        config.wallet.path_env_var = self.env_var.clone();
        config
    }
}

impl Drop for TestWallet {
    fn drop(&mut self) {
        std::env::remove_var(&self.env_var);
        let _ = std::fs::remove_file(&self.path);
    }
}
