use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};

use crate::errors::TokenClientError;

/// Derived associated token account address for `owner` and `mint`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Idempotent create: succeeds whether or not the account already exists.
pub fn create_ata_instruction(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, &spl_token::id())
}

pub fn mint_to_instruction(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, TokenClientError> {
    spl_token::instruction::mint_to(&spl_token::id(), mint, destination, authority, &[], amount)
        .map_err(Into::into)
}

/// `transfer_checked`: the mint and its decimals ride along so the token
/// program can reject a stale decimal assumption.
pub fn transfer_checked_instruction(
    source: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<Instruction, TokenClientError> {
    spl_token::instruction::transfer_checked(
        &spl_token::id(),
        source,
        mint,
        destination,
        owner,
        &[],
        amount,
        decimals,
    )
    .map_err(Into::into)
}
