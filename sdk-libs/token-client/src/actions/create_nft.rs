use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use spl_token::state::Mint;
use tokensmith_client::rpc::RpcConnection;
use tracing::info;

use crate::{
    errors::TokenClientError,
    instructions::{
        associated_token_address, create_ata_instruction, create_master_edition_instruction,
        create_metadata_account_instruction, create_mint_instructions, mint_to_instruction,
        CreateMasterEditionAccounts, CreateMetadataAccounts,
    },
    metadata::{find_master_edition_address, find_metadata_address, MetadataArgs},
};

/// Mint a one-of-one NFT in a single transaction: the mint account (zero
/// decimals), the payer's associated account, a supply of one, the metadata
/// account and a zero-print master edition.
///
/// The payer acts as mint, freeze and update authority; `mint_keypair` signs
/// alongside it.
///
/// # Returns
/// `Result<(Pubkey, Signature), TokenClientError>` - The mint address and
/// the confirmed signature
pub async fn create_nft<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    mint_keypair: &Keypair,
    args: MetadataArgs,
) -> Result<(Pubkey, Signature), TokenClientError> {
    let mint = mint_keypair.pubkey();
    let (metadata, _) = find_metadata_address(&mint)?;
    let (master_edition, _) = find_master_edition_address(&mint)?;
    let is_mutable = args.is_mutable;
    let data = args.into_data_v2()?;

    let rent = rpc
        .get_minimum_balance_for_rent_exemption(Mint::LEN)
        .await?;
    let [create_account_ix, init_mint_ix] = create_mint_instructions(
        &payer.pubkey(),
        &payer.pubkey(),
        Some(&payer.pubkey()),
        0,
        rent,
        &mint,
    )?;

    let ata = associated_token_address(&payer.pubkey(), &mint);
    let create_ata_ix = create_ata_instruction(&payer.pubkey(), &payer.pubkey(), &mint);
    let mint_one_ix = mint_to_instruction(&mint, &ata, &payer.pubkey(), 1)?;

    let metadata_ix = create_metadata_account_instruction(
        &CreateMetadataAccounts::new(metadata, mint, payer.pubkey(), payer.pubkey()),
        data,
        is_mutable,
        None,
    );
    let edition_ix = create_master_edition_instruction(
        &CreateMasterEditionAccounts::new(master_edition, mint, metadata, payer.pubkey()),
        Some(0),
    );

    let signature = rpc
        .create_and_send_transaction(
            &[
                create_account_ix,
                init_mint_ix,
                create_ata_ix,
                mint_one_ix,
                metadata_ix,
                edition_ix,
            ],
            &payer.pubkey(),
            &[payer, mint_keypair],
        )
        .await?;
    info!("minted nft {}", mint);
    Ok((mint, signature))
}
