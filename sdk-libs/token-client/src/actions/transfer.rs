use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use spl_token::state::Mint;
use tokensmith_client::rpc::RpcConnection;

use crate::{
    actions::get_or_create_associated_token_account,
    errors::TokenClientError,
    instructions::transfer_checked_instruction,
};

/// Transfer tokens between two owners' associated token accounts, creating
/// either account when missing.
///
/// Decimals are read from the mint so the transfer is checked on-chain.
pub async fn transfer<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    mint: &Pubkey,
    from_owner: &Keypair,
    to_owner: &Pubkey,
    amount: u64,
) -> Result<Signature, TokenClientError> {
    let source =
        get_or_create_associated_token_account(rpc, payer, &from_owner.pubkey(), mint).await?;
    let destination = get_or_create_associated_token_account(rpc, payer, to_owner, mint).await?;
    let decimals = mint_decimals(rpc, mint).await?;

    let instruction = transfer_checked_instruction(
        &source,
        mint,
        &destination,
        &from_owner.pubkey(),
        amount,
        decimals,
    )?;

    let mut signers = vec![payer];
    if from_owner.pubkey() != payer.pubkey() {
        signers.push(from_owner);
    }

    rpc.create_and_send_transaction(&[instruction], &payer.pubkey(), &signers)
        .await
        .map_err(Into::into)
}

async fn mint_decimals<R: RpcConnection>(
    rpc: &mut R,
    mint: &Pubkey,
) -> Result<u8, TokenClientError> {
    let account = rpc
        .get_account(*mint)
        .await?
        .ok_or(TokenClientError::AccountNotFound(*mint))?;
    let state = Mint::unpack(&account.data)?;
    Ok(state.decimals)
}
