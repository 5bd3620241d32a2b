use solana_sdk::{
    instruction::Instruction, program_pack::Pack, pubkey::Pubkey, system_instruction,
};
use spl_token::state::Mint;

use crate::errors::TokenClientError;

/// Instructions that create and initialize a mint account.
///
/// `rent` must be the rent-exempt balance for [`Mint::LEN`] bytes; the mint
/// keypair signs the transaction alongside the payer.
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    rent: u64,
    mint: &Pubkey,
) -> Result<[Instruction; 2], TokenClientError> {
    let create_account_ix = system_instruction::create_account(
        payer,
        mint,
        rent,
        Mint::LEN as u64,
        &spl_token::id(),
    );
    let initialize_mint_ix = spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        mint,
        mint_authority,
        freeze_authority,
        decimals,
    )?;
    Ok([create_account_ix, initialize_mint_ix])
}
