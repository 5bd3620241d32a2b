mod create_mint;
mod metadata;
mod token;

pub use create_mint::*;
pub use metadata::*;
pub use token::*;
