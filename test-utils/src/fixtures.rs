use std::{io, path::PathBuf};

use solana_sdk::{signature::Keypair, signer::Signer};

/// Write `keypair` in the JSON byte-array format under the system temp
/// directory and return the file path.
pub fn write_keypair_file(keypair: &Keypair) -> io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("tokensmith-wallet-{}.json", keypair.pubkey()));
    let bytes = keypair.to_bytes().to_vec();
    std::fs::write(&path, serde_json::to_string(&bytes)?)?;
    Ok(path)
}
