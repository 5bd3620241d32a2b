use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{error::UploadError, StorageUploader};

/// Devnet upload node of the Irys network.
pub const DEVNET_NODE: &str = "https://devnet.irys.xyz";
/// Gateway serving uploaded content.
pub const GATEWAY: &str = "https://gateway.irys.xyz";

/// Thin client for an Irys upload node.
///
/// The node bundles and funds the upload internally; this client submits the
/// payload and reports the resulting gateway URI. Any node error is surfaced
/// to the caller unmodified.
#[derive(Clone)]
pub struct IrysUploader {
    node_url: String,
    gateway_url: String,
    client: reqwest::Client,
}

impl Debug for IrysUploader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IrysUploader")
            .field("node_url", &self.node_url)
            .finish()
    }
}

impl Default for IrysUploader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct UploadReceipt {
    id: String,
}

impl IrysUploader {
    pub fn new() -> Self {
        Self::with_node(DEVNET_NODE, GATEWAY)
    }

    pub fn with_node(node_url: impl Into<String>, gateway_url: impl Into<String>) -> Self {
        IrysUploader {
            node_url: node_url.into(),
            gateway_url: gateway_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/tx/solana", self.node_url)
    }
}

#[async_trait]
impl StorageUploader for IrysUploader {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, UploadError> {
        let payload_len = bytes.len();
        let response = self
            .client
            .post(self.upload_url())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status { status, body });
        }

        let receipt: UploadReceipt = response.json().await?;
        debug!("uploaded {} bytes as {}", payload_len, receipt.id);
        Ok(format!("{}/{}", self.gateway_url, receipt.id))
    }
}
