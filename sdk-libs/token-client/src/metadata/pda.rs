use solana_sdk::pubkey::Pubkey;

use crate::errors::TokenClientError;

/// The token-metadata program.
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = mpl_token_metadata::ID;

/// Discriminator seed shared by every token-metadata account.
pub const METADATA_SEED: &[u8] = b"metadata";
/// Additional seed for master-edition accounts.
pub const EDITION_SEED: &[u8] = b"edition";

/// Derive the metadata account address for `mint`.
///
/// Seed order is fixed and must match every other deriver: the `"metadata"`
/// discriminator first, then the program id, then the mint id. Any party
/// holding the same inputs derives the same `(address, bump)`.
pub fn find_metadata_address(mint: &Pubkey) -> Result<(Pubkey, u8), TokenClientError> {
    Pubkey::try_find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .ok_or(TokenClientError::NoViableBump(*mint))
}

/// Derive the master-edition account address for `mint`.
pub fn find_master_edition_address(mint: &Pubkey) -> Result<(Pubkey, u8), TokenClientError> {
    Pubkey::try_find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .ok_or(TokenClientError::NoViableBump(*mint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let mint = Pubkey::new_unique();
        let first = find_metadata_address(&mint).unwrap();
        let second = find_metadata_address(&mint).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derived_address_is_off_curve() {
        let mint = Pubkey::new_unique();
        let (address, _bump) = find_metadata_address(&mint).unwrap();
        assert!(!address.is_on_curve());
    }

    #[test]
    fn distinct_mints_derive_distinct_addresses() {
        let a = find_metadata_address(&Pubkey::new_unique()).unwrap().0;
        let b = find_metadata_address(&Pubkey::new_unique()).unwrap().0;
        assert_ne!(a, b);
    }

    #[test]
    fn edition_address_differs_from_metadata_address() {
        let mint = Pubkey::new_unique();
        let metadata = find_metadata_address(&mint).unwrap().0;
        let edition = find_master_edition_address(&mint).unwrap().0;
        assert_ne!(metadata, edition);
    }

    #[test]
    fn bump_reproduces_the_derived_address() {
        let mint = Pubkey::new_unique();
        let (address, bump) = find_metadata_address(&mint).unwrap();
        let recreated = Pubkey::create_program_address(
            &[
                METADATA_SEED,
                TOKEN_METADATA_PROGRAM_ID.as_ref(),
                mint.as_ref(),
                &[bump],
            ],
            &TOKEN_METADATA_PROGRAM_ID,
        )
        .unwrap();
        assert_eq!(address, recreated);
    }
}
