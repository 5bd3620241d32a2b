mod create_metadata;
mod create_mint;
mod create_nft;
mod mint_to;
mod token_account;
mod transfer;

pub use create_metadata::*;
pub use create_mint::*;
pub use create_nft::*;
pub use mint_to::*;
pub use token_account::*;
pub use transfer::*;
