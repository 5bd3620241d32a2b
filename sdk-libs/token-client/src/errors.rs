use solana_sdk::{program_error::ProgramError, pubkey::Pubkey};
use thiserror::Error;
use tokensmith_client::rpc::RpcError;

#[derive(Error, Debug)]
pub enum TokenClientError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// No bump in the allowed range produced a valid off-curve address.
    /// Fatal configuration error, never retried.
    #[error("no viable bump seed when deriving an address for mint {0}")]
    NoViableBump(Pubkey),

    #[error("seller fee must be within [0, 10000] basis points, got {0}")]
    FeeBasisPointsOutOfRange(u16),

    #[error("creator shares must sum to 100, got {0}")]
    CreatorShareSum(u32),

    #[error("{field} exceeds the metadata limit of {max} bytes")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("account {0} does not exist")]
    AccountNotFound(Pubkey),

    #[error("ProgramError: {0}")]
    Program(#[from] ProgramError),
}
