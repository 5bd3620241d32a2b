use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_token::state::Mint;
use tokensmith_client::rpc::RpcConnection;
use tracing::info;

use crate::{errors::TokenClientError, instructions::create_mint_instructions};

/// Create and initialize a new token mint, then send the transaction.
///
/// # Arguments
/// * `rpc` - RPC connection
/// * `payer` - Transaction fee payer keypair
/// * `mint_authority` - Account that will control minting
/// * `freeze_authority` - Optional account that can freeze token accounts
/// * `decimals` - Location of the decimal place
/// * `mint_keypair` - Optional mint keypair, defaulting to a new random one
///
/// # Returns
/// `Result<Pubkey, TokenClientError>` - Address of the new mint
pub async fn create_mint<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    mint_keypair: Option<&Keypair>,
) -> Result<Pubkey, TokenClientError> {
    let generated;
    let mint_keypair = match mint_keypair {
        Some(mint_keypair) => mint_keypair,
        None => {
            generated = Keypair::new();
            &generated
        }
    };
    let mint_pubkey = mint_keypair.pubkey();
    let rent = rpc
        .get_minimum_balance_for_rent_exemption(Mint::LEN)
        .await?;

    let instructions = create_mint_instructions(
        &payer.pubkey(),
        mint_authority,
        freeze_authority,
        decimals,
        rent,
        &mint_pubkey,
    )?;

    let mut signers = vec![payer];
    if mint_keypair.pubkey() != payer.pubkey() {
        signers.push(mint_keypair);
    }

    rpc.create_and_send_transaction(&instructions, &payer.pubkey(), &signers)
        .await?;
    info!("created mint {}", mint_pubkey);
    Ok(mint_pubkey)
}
