use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::{
    account::Account,
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::{Transaction, TransactionError},
};

use crate::rpc::errors::RpcError;

/// Confirmation state the cluster reports for a submitted signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// The transaction reached the connection's commitment level.
    Confirmed,
    /// The transaction was processed and failed.
    Failed(TransactionError),
    /// The cluster has not confirmed the signature yet.
    Pending,
}

/// Connection to a transaction-accepting RPC endpoint.
///
/// Operations take the connection and every signer as explicit parameters;
/// nothing is held in process-wide state. Errors are surfaced to the caller
/// unmodified and no method retries on failure.
#[async_trait]
pub trait RpcConnection: Send + Sync + Debug + 'static {
    fn get_url(&self) -> String;

    async fn health(&self) -> Result<(), RpcError>;
    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError>;
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError>;
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError>;
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError>;

    /// Submit a signed transaction without waiting for confirmation.
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError>;

    /// Report the confirmation state of a previously submitted signature.
    async fn confirm_signature(
        &self,
        signature: &Signature,
    ) -> Result<ConfirmationStatus, RpcError>;

    /// Submit a signed transaction and block until the cluster confirms it
    /// or the confirmation deadline elapses.
    ///
    /// Once submitted, a transaction resolves to exactly one of confirmed
    /// (the signature is returned verbatim), failed
    /// ([`RpcError::TransactionError`]) or timed out
    /// ([`RpcError::ConfirmationTimeout`]).
    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError>;

    async fn create_and_send_transaction<'a>(
        &'a mut self,
        instructions: &'a [Instruction],
        payer: &'a Pubkey,
        signers: &'a [&'a Keypair],
    ) -> Result<Signature, RpcError> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(payer), signers, blockhash);
        self.process_transaction(transaction).await
    }

    async fn airdrop_lamports(&mut self, to: &Pubkey, lamports: u64)
        -> Result<Signature, RpcError>;
}
