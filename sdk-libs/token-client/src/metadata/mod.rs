mod data;
mod pda;

pub use data::{
    MetadataArgs, MAX_NAME_LENGTH, MAX_SELLER_FEE_BASIS_POINTS, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH,
};
pub use mpl_token_metadata::types::{Collection, Creator, Uses};
pub use pda::{
    find_master_edition_address, find_metadata_address, EDITION_SEED, METADATA_SEED,
    TOKEN_METADATA_PROGRAM_ID,
};
