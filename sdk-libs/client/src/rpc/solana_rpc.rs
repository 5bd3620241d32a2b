use std::{
    fmt::{Debug, Display, Formatter},
    time::Duration,
};

use async_trait::async_trait;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::rpc::{
    errors::RpcError,
    rpc_connection::{ConfirmationStatus, RpcConnection},
};

pub enum SolanaRpcUrl {
    Mainnet,
    Devnet,
    Testnet,
    Localnet,
    Custom(String),
}

impl Display for SolanaRpcUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SolanaRpcUrl::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            SolanaRpcUrl::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaRpcUrl::Testnet => "https://api.testnet.solana.com".to_string(),
            SolanaRpcUrl::Localnet => "http://localhost:8899".to_string(),
            SolanaRpcUrl::Custom(url) => url.clone(),
        };
        write!(f, "{}", str)
    }
}

impl From<&str> for SolanaRpcUrl {
    fn from(value: &str) -> Self {
        match value {
            "mainnet" | "mainnet-beta" => SolanaRpcUrl::Mainnet,
            "devnet" => SolanaRpcUrl::Devnet,
            "testnet" => SolanaRpcUrl::Testnet,
            "localnet" | "localhost" => SolanaRpcUrl::Localnet,
            url => SolanaRpcUrl::Custom(url.to_string()),
        }
    }
}

impl SolanaRpcUrl {
    fn explorer_cluster(&self) -> Option<&'static str> {
        match self {
            SolanaRpcUrl::Mainnet => None,
            SolanaRpcUrl::Devnet => Some("devnet"),
            SolanaRpcUrl::Testnet => Some("testnet"),
            SolanaRpcUrl::Localnet | SolanaRpcUrl::Custom(_) => Some("custom"),
        }
    }

    /// Explorer link for a confirmed transaction on this cluster.
    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        match self.explorer_cluster() {
            Some(cluster) => {
                format!("https://explorer.solana.com/tx/{signature}?cluster={cluster}")
            }
            None => format!("https://explorer.solana.com/tx/{signature}"),
        }
    }
}

/// Bounds for the confirmation wait after a transaction is submitted.
#[derive(Clone, Debug, Copy)]
pub struct ConfirmConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        ConfirmConfig {
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }
}

pub struct SolanaRpcConnection {
    pub client: RpcClient,
    pub confirm_config: ConfirmConfig,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolanaRpcConnection {{ client: {:?} }}",
            self.client.url()
        )
    }
}

impl SolanaRpcConnection {
    pub fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self {
        Self::new_with_config(url, commitment_config, ConfirmConfig::default())
    }

    pub fn new_with_config<U: ToString>(
        url: U,
        commitment_config: Option<CommitmentConfig>,
        confirm_config: ConfirmConfig,
    ) -> Self {
        let commitment_config = commitment_config.unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self {
            client,
            confirm_config,
        }
    }

    /// Poll the signature status until the commitment is reached or the
    /// deadline elapses. No resubmission happens here; a timed-out
    /// transaction may still land later.
    async fn wait_for_confirmation(&self, signature: Signature) -> Result<Signature, RpcError> {
        let deadline = Instant::now() + self.confirm_config.timeout;
        loop {
            match self.confirm_signature(&signature).await? {
                ConfirmationStatus::Confirmed => return Ok(signature),
                ConfirmationStatus::Failed(err) => return Err(RpcError::from(err)),
                ConfirmationStatus::Pending => {}
            }
            if Instant::now() >= deadline {
                warn!("confirmation deadline elapsed for {}", signature);
                return Err(RpcError::ConfirmationTimeout(signature));
            }
            sleep(self.confirm_config.poll_interval).await;
        }
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    fn get_url(&self) -> String {
        self.client.url()
    }

    async fn health(&self) -> Result<(), RpcError> {
        self.client.get_health().map_err(RpcError::from)
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.client
            .get_account_with_commitment(&address, self.client.commitment())
            .map(|response| response.value)
            .map_err(RpcError::from)
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.client.get_balance(pubkey).map_err(RpcError::from)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .map_err(RpcError::from)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        self.client
            // Confirmed commitments land more reliably than finalized
            // https://www.helius.dev/blog/how-to-deal-with-blockhash-errors-on-solana#how-to-deal-with-blockhash-errors
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .map(|(hash, _)| hash)
            .map_err(RpcError::from)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, RpcError> {
        self.client
            .send_transaction_with_config(
                transaction,
                RpcSendTransactionConfig {
                    // the node must not rebroadcast on our behalf
                    max_retries: Some(0),
                    preflight_commitment: Some(self.client.commitment().commitment),
                    ..Default::default()
                },
            )
            .map_err(RpcError::from)
    }

    async fn confirm_signature(
        &self,
        signature: &Signature,
    ) -> Result<ConfirmationStatus, RpcError> {
        let statuses = self
            .client
            .get_signature_statuses(&[*signature])
            .map(|response| response.value)
            .map_err(RpcError::from)?;
        match statuses.into_iter().next().flatten() {
            Some(status) => {
                if let Some(err) = &status.err {
                    return Ok(ConfirmationStatus::Failed(err.clone()));
                }
                if status.satisfies_commitment(self.client.commitment()) {
                    Ok(ConfirmationStatus::Confirmed)
                } else {
                    Ok(ConfirmationStatus::Pending)
                }
            }
            None => Ok(ConfirmationStatus::Pending),
        }
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        let signature = self.send_transaction(&transaction).await?;
        debug!("submitted transaction {}", signature);
        self.wait_for_confirmation(signature).await
    }

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let signature = self
            .client
            .request_airdrop(to, lamports)
            .map_err(RpcError::from)?;
        debug!("requested airdrop of {} lamports to {}", lamports, to);
        self.wait_for_confirmation(signature).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moniker_resolves_to_cluster_endpoint() {
        assert_eq!(
            SolanaRpcUrl::from("devnet").to_string(),
            "https://api.devnet.solana.com"
        );
        assert_eq!(
            SolanaRpcUrl::from("mainnet-beta").to_string(),
            "https://api.mainnet-beta.solana.com"
        );
        assert_eq!(
            SolanaRpcUrl::from("localhost").to_string(),
            "http://localhost:8899"
        );
    }

    #[test]
    fn unknown_value_is_treated_as_custom_url() {
        let url = SolanaRpcUrl::from("https://rpc.example.com");
        assert!(matches!(&url, SolanaRpcUrl::Custom(u) if u == "https://rpc.example.com"));
        assert_eq!(url.to_string(), "https://rpc.example.com");
    }

    #[test]
    fn explorer_url_carries_cluster_param_except_mainnet() {
        let signature = Signature::default();
        assert!(!SolanaRpcUrl::Mainnet
            .explorer_tx_url(&signature)
            .contains("cluster"));
        assert!(SolanaRpcUrl::Devnet
            .explorer_tx_url(&signature)
            .ends_with("?cluster=devnet"));
        assert!(SolanaRpcUrl::Custom("http://127.0.0.1:8899".into())
            .explorer_tx_url(&signature)
            .ends_with("?cluster=custom"));
    }
}
