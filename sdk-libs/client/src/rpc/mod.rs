pub mod errors;
mod rpc_connection;
mod solana_rpc;

pub use errors::RpcError;
pub use rpc_connection::{ConfirmationStatus, RpcConnection};
pub use solana_rpc::{ConfirmConfig, SolanaRpcConnection, SolanaRpcUrl};
