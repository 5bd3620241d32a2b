use std::{fs, io, path::Path};

use solana_sdk::signature::Keypair;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("failed to read keypair file: {0}")]
    Io(#[from] io::Error),

    #[error("keypair file is not a JSON byte array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("keypair bytes are invalid: {0}")]
    InvalidKey(String),
}

/// Load a signing keypair from the JSON byte-array format written by
/// `solana-keygen` (`[12,34,...]`, 64 bytes).
///
/// The keypair is read once and never written back.
pub fn read_keypair_file<P: AsRef<Path>>(path: P) -> Result<Keypair, WalletError> {
    let contents = fs::read_to_string(path)?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)?;
    Keypair::from_bytes(&bytes).map_err(|e| WalletError::InvalidKey(e.to_string()))
}
