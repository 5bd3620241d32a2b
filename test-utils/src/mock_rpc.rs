use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
    sync::Mutex,
};

use async_trait::async_trait;
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    rent::Rent,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use tokensmith_client::rpc::{ConfirmationStatus, RpcConnection, RpcError};

/// Outcome the mock reports for every submitted transaction.
#[derive(Clone, Debug, Default)]
pub enum MockBehavior {
    /// Report the signature as confirmed.
    #[default]
    Confirm,
    /// Report the transaction as processed but failed.
    FailWith(TransactionError),
    /// Never confirm, so every bounded wait elapses.
    TimeOut,
}

/// In-memory [`RpcConnection`] for exercising submission flows without a
/// cluster.
///
/// Submitted transactions are recorded before the configured
/// [`MockBehavior`] resolves them, so a timed-out submission is still
/// visible to assertions while a validation failure never reaches the
/// record.
pub struct MockRpcConnection {
    behavior: MockBehavior,
    accounts: Mutex<HashMap<Pubkey, Account>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl Debug for MockRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRpcConnection")
            .field("behavior", &self.behavior)
            .finish()
    }
}

impl Default for MockRpcConnection {
    fn default() -> Self {
        Self::new(MockBehavior::Confirm)
    }
}

impl MockRpcConnection {
    pub fn new(behavior: MockBehavior) -> Self {
        MockRpcConnection {
            behavior,
            accounts: Mutex::new(HashMap::new()),
            transactions: Mutex::new(Vec::new()),
        }
    }

    /// Seed an account the connection will report as existing.
    pub fn set_account(&self, address: Pubkey, account: Account) {
        self.accounts.lock().unwrap().insert(address, account);
    }

    /// Every transaction submitted so far, in submission order.
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcConnection for MockRpcConnection {
    fn get_url(&self) -> String {
        "mock://localhost".to_string()
    }

    async fn health(&self) -> Result<(), RpcError> {
        Ok(())
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        Ok(self.accounts.lock().unwrap().get(&address).cloned())
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .get(pubkey)
            .map(|account| account.lamports)
            .unwrap_or_default())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        Ok(Rent::default().minimum_balance(data_len))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        Ok(Hash::default())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction
            .signatures
            .first()
            .copied()
            .unwrap_or_default())
    }

    async fn confirm_signature(
        &self,
        _signature: &Signature,
    ) -> Result<ConfirmationStatus, RpcError> {
        Ok(match &self.behavior {
            MockBehavior::Confirm => ConfirmationStatus::Confirmed,
            MockBehavior::FailWith(err) => ConfirmationStatus::Failed(err.clone()),
            MockBehavior::TimeOut => ConfirmationStatus::Pending,
        })
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        let signature = self.send_transaction(&transaction).await?;
        match self.confirm_signature(&signature).await? {
            ConfirmationStatus::Confirmed => Ok(signature),
            ConfirmationStatus::Failed(err) => Err(RpcError::from(err)),
            // The mock's deadline elapses immediately.
            ConfirmationStatus::Pending => Err(RpcError::ConfirmationTimeout(signature)),
        }
    }

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let mut accounts = self.accounts.lock().unwrap();
        accounts.entry(*to).or_default().lamports += lamports;
        Ok(Signature::default())
    }
}
