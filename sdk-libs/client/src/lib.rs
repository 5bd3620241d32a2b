pub mod rpc;
pub mod wallet;

pub use rpc::{
    ConfirmConfig, ConfirmationStatus, RpcConnection, RpcError, SolanaRpcConnection, SolanaRpcUrl,
};
pub use wallet::{read_keypair_file, WalletError};
