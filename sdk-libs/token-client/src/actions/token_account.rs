use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use tokensmith_client::rpc::RpcConnection;
use tracing::debug;

use crate::{
    errors::TokenClientError,
    instructions::{associated_token_address, create_ata_instruction},
};

/// Return the associated token account for `owner` and `mint`, creating it
/// when it does not exist yet.
///
/// The create instruction is idempotent, so a creation that races another
/// party cannot fail the call.
pub async fn get_or_create_associated_token_account<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, TokenClientError> {
    let ata = associated_token_address(owner, mint);
    if rpc.get_account(ata).await?.is_none() {
        let instruction = create_ata_instruction(&payer.pubkey(), owner, mint);
        rpc.create_and_send_transaction(&[instruction], &payer.pubkey(), &[payer])
            .await?;
        debug!("created associated token account {} for owner {}", ata, owner);
    }
    Ok(ata)
}
