use mpl_token_metadata::{
    instructions::{
        CreateMasterEditionV3, CreateMasterEditionV3InstructionArgs, CreateMetadataAccountV3,
        CreateMetadataAccountV3InstructionArgs,
    },
    types::{CollectionDetails, DataV2},
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};

/// Accounts of the create-metadata instruction.
///
/// Every optional account is defaulted at construction; callers override
/// fields after [`CreateMetadataAccounts::new`] only when they diverge from
/// the common case.
#[derive(Clone, Debug)]
pub struct CreateMetadataAccounts {
    /// Derived metadata account (pda of `["metadata", program id, mint id]`).
    pub metadata: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub payer: Pubkey,
    /// Update authority and whether it signs the transaction.
    pub update_authority: (Pubkey, bool),
    pub system_program: Pubkey,
    pub rent: Option<Pubkey>,
}

impl CreateMetadataAccounts {
    pub fn new(metadata: Pubkey, mint: Pubkey, mint_authority: Pubkey, payer: Pubkey) -> Self {
        CreateMetadataAccounts {
            metadata,
            mint,
            mint_authority,
            payer,
            update_authority: (mint_authority, true),
            system_program: system_program::id(),
            rent: None,
        }
    }
}

pub fn create_metadata_account_instruction(
    accounts: &CreateMetadataAccounts,
    data: DataV2,
    is_mutable: bool,
    collection_details: Option<CollectionDetails>,
) -> Instruction {
    CreateMetadataAccountV3 {
        metadata: accounts.metadata,
        mint: accounts.mint,
        mint_authority: accounts.mint_authority,
        payer: accounts.payer,
        update_authority: accounts.update_authority,
        system_program: accounts.system_program,
        rent: accounts.rent,
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data,
        is_mutable,
        collection_details,
    })
}

/// Accounts of the create-master-edition instruction, optional fields
/// defaulted at construction.
#[derive(Clone, Debug)]
pub struct CreateMasterEditionAccounts {
    /// Derived edition account (pda of `["metadata", program id, mint id,
    /// "edition"]`).
    pub edition: Pubkey,
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub update_authority: Pubkey,
    pub mint_authority: Pubkey,
    pub payer: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent: Option<Pubkey>,
}

impl CreateMasterEditionAccounts {
    pub fn new(edition: Pubkey, mint: Pubkey, metadata: Pubkey, authority: Pubkey) -> Self {
        CreateMasterEditionAccounts {
            edition,
            mint,
            metadata,
            update_authority: authority,
            mint_authority: authority,
            payer: authority,
            token_program: spl_token::id(),
            system_program: system_program::id(),
            rent: None,
        }
    }
}

/// `max_supply` of zero forbids printing editions from the master.
pub fn create_master_edition_instruction(
    accounts: &CreateMasterEditionAccounts,
    max_supply: Option<u64>,
) -> Instruction {
    CreateMasterEditionV3 {
        edition: accounts.edition,
        mint: accounts.mint,
        update_authority: accounts.update_authority,
        mint_authority: accounts.mint_authority,
        payer: accounts.payer,
        metadata: accounts.metadata,
        token_program: accounts.token_program,
        system_program: accounts.system_program,
        rent: accounts.rent,
    }
    .instruction(CreateMasterEditionV3InstructionArgs { max_supply })
}

#[cfg(test)]
mod tests {
    use crate::metadata::{find_metadata_address, TOKEN_METADATA_PROGRAM_ID};

    use super::*;

    #[test]
    fn metadata_instruction_targets_the_metadata_program() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let (metadata, _) = find_metadata_address(&mint).unwrap();

        let data = DataV2 {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            uri: String::new(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };
        let accounts = CreateMetadataAccounts::new(metadata, mint, authority, authority);
        let ix = create_metadata_account_instruction(&accounts, data, true, None);

        assert_eq!(ix.program_id, TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(ix.accounts[0].pubkey, metadata);
    }
}
