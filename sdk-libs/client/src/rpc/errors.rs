use std::io;

use solana_client::client_error::ClientError;
use solana_sdk::{signature::Signature, transaction::TransactionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("TransactionError: {0}")]
    TransactionError(#[from] Box<TransactionError>),

    #[error("IoError: {0}")]
    IoError(#[from] Box<io::Error>),

    /// The transaction was submitted but the cluster did not report the
    /// configured commitment before the confirmation deadline.
    #[error("transaction {0} was not confirmed before the deadline")]
    ConfirmationTimeout(Signature),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}

impl From<TransactionError> for RpcError {
    fn from(err: TransactionError) -> Self {
        RpcError::TransactionError(Box::new(err))
    }
}

impl From<io::Error> for RpcError {
    fn from(err: io::Error) -> Self {
        RpcError::IoError(Box::new(err))
    }
}
