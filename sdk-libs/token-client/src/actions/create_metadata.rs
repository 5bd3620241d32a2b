use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tokensmith_client::rpc::RpcConnection;
use tracing::info;

use crate::{
    errors::TokenClientError,
    instructions::{create_metadata_account_instruction, CreateMetadataAccounts},
    metadata::{find_metadata_address, MetadataArgs},
};

/// Create the metadata account for an existing mint.
///
/// Derives the account address from the fixed seed set, validates `args`
/// locally so malformed input fails before any network call, then submits a
/// single instruction signed by the mint authority.
///
/// # Returns
/// `Result<(Pubkey, Signature), TokenClientError>` - The derived metadata
/// address and the confirmed signature
pub async fn create_metadata_account<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    mint: &Pubkey,
    mint_authority: &Keypair,
    args: MetadataArgs,
) -> Result<(Pubkey, Signature), TokenClientError> {
    let (metadata, _bump) = find_metadata_address(mint)?;
    let is_mutable = args.is_mutable;
    let data = args.into_data_v2()?;

    let accounts = CreateMetadataAccounts::new(
        metadata,
        *mint,
        mint_authority.pubkey(),
        payer.pubkey(),
    );
    let instruction = create_metadata_account_instruction(&accounts, data, is_mutable, None);

    let mut signers = vec![payer];
    if mint_authority.pubkey() != payer.pubkey() {
        signers.push(mint_authority);
    }

    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &signers)
        .await?;
    info!("created metadata account {} for mint {}", metadata, mint);
    Ok((metadata, signature))
}
