//! Client-side operations for SPL token mints and token-metadata accounts.
//!
//! Instruction builders live in [`instructions`] and have no network access;
//! [`actions`] wire them to an [`tokensmith_client::RpcConnection`] and a set
//! of explicit signers. Metadata payload assembly and derived-address logic
//! live in [`metadata`].

pub mod actions;
pub mod errors;
pub mod instructions;
pub mod metadata;

pub use errors::TokenClientError;
