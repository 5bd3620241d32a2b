use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tokensmith_client::rpc::RpcConnection;

use crate::{errors::TokenClientError, instructions::mint_to_instruction};

/// Parameters for minting tokens to a token account.
///
/// # Example
/// ```ignore
/// MintTo {
///     mint,
///     destination: ata,
///     amount: 100_000_000,
/// }.execute(&mut rpc, &payer, &mint_authority).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MintTo {
    /// The mint public key.
    pub mint: Pubkey,
    /// The destination token account.
    pub destination: Pubkey,
    /// Amount of tokens to mint, in base units.
    pub amount: u64,
}

impl MintTo {
    /// Execute the mint_to action via RPC.
    ///
    /// # Arguments
    /// * `rpc` - RPC connection
    /// * `payer` - Transaction fee payer keypair
    /// * `authority` - The mint authority keypair
    ///
    /// # Returns
    /// `Result<Signature, TokenClientError>` - The confirmed signature
    pub async fn execute<R: RpcConnection>(
        self,
        rpc: &mut R,
        payer: &Keypair,
        authority: &Keypair,
    ) -> Result<Signature, TokenClientError> {
        let instruction = mint_to_instruction(
            &self.mint,
            &self.destination,
            &authority.pubkey(),
            self.amount,
        )?;

        let mut signers = vec![payer];
        if authority.pubkey() != payer.pubkey() {
            signers.push(authority);
        }

        rpc.create_and_send_transaction(&[instruction], &payer.pubkey(), &signers)
            .await
            .map_err(Into::into)
    }
}
