use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

#[derive(Parser)]
#[clap(author, version, about = "Client tooling for SPL token mints, transfers and token metadata", long_about = None)]
pub struct Cli {
    /// RPC endpoint: a URL or a cluster moniker (mainnet, devnet, testnet,
    /// localnet).
    #[arg(
        long,
        env = "TOKENSMITH_RPC_URL",
        default_value = "devnet",
        global = true
    )]
    pub rpc_url: String,

    /// Payer keypair file in the JSON byte-array format.
    #[arg(
        long,
        env = "TOKENSMITH_KEYPAIR",
        default_value = "wallet.json",
        global = true
    )]
    pub keypair: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create and initialize a new token mint.
    CreateMint(CreateMintArgs),
    /// Mint tokens to an owner's associated token account.
    MintTokens(MintTokensArgs),
    /// Transfer tokens to another owner.
    Transfer(TransferArgs),
    /// Request an airdrop of lamports to the payer.
    Airdrop(AirdropArgs),
    /// Upload a binary asset and print its content URI.
    UploadAsset(UploadAssetArgs),
    /// Assemble an off-chain metadata document and upload it.
    UploadMetadata(UploadMetadataArgs),
    /// Create the metadata account for an existing mint.
    CreateMetadata(CreateMetadataArgs),
    /// Mint a one-of-one NFT with metadata and master edition.
    MintNft(MintNftArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct CreateMintArgs {
    #[arg(long, default_value = "6")]
    pub decimals: u8,

    /// Account allowed to freeze token accounts; omitted means none.
    #[arg(long)]
    pub freeze_authority: Option<Pubkey>,
}

#[derive(Parser, Clone, Debug)]
pub struct MintTokensArgs {
    #[arg(long)]
    pub mint: Pubkey,

    /// Amount in base units.
    #[arg(long)]
    pub amount: u64,

    /// Owner of the destination account; defaults to the payer.
    #[arg(long)]
    pub recipient: Option<Pubkey>,
}

#[derive(Parser, Clone, Debug)]
pub struct TransferArgs {
    #[arg(long)]
    pub mint: Pubkey,

    /// Owner receiving the tokens.
    #[arg(long)]
    pub to: Pubkey,

    /// Amount in base units.
    #[arg(long)]
    pub amount: u64,
}

#[derive(Parser, Clone, Debug)]
pub struct AirdropArgs {
    #[arg(long, default_value = "1000000000")]
    pub lamports: u64,
}

#[derive(Parser, Clone, Debug)]
pub struct UploadAssetArgs {
    /// File to upload.
    #[arg(long)]
    pub path: PathBuf,

    /// Upload node; defaults to the Irys devnet node.
    #[arg(long, env = "TOKENSMITH_IRYS_NODE")]
    pub node_url: Option<String>,
}

#[derive(Parser, Clone, Debug)]
pub struct UploadMetadataArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub symbol: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Content URI of an already-uploaded image.
    #[arg(long)]
    pub image_uri: Option<String>,

    /// `TRAIT=VALUE` pairs; repeat for multiple attributes.
    #[arg(long = "attribute")]
    pub attributes: Vec<String>,

    /// Upload node; defaults to the Irys devnet node.
    #[arg(long, env = "TOKENSMITH_IRYS_NODE")]
    pub node_url: Option<String>,
}

#[derive(Parser, Clone, Debug)]
pub struct CreateMetadataArgs {
    #[arg(long)]
    pub mint: Pubkey,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub symbol: String,

    /// URI of the off-chain metadata document.
    #[arg(long)]
    pub uri: String,

    #[arg(long, default_value = "0")]
    pub seller_fee_basis_points: u16,

    /// `ADDRESS:SHARE` entries; shares must sum to 100.
    #[arg(long = "creator")]
    pub creators: Vec<String>,

    /// Create the metadata account as immutable.
    #[arg(long)]
    pub immutable: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct MintNftArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub symbol: String,

    /// URI of the off-chain metadata document.
    #[arg(long)]
    pub uri: String,

    #[arg(long, default_value = "0")]
    pub seller_fee_basis_points: u16,
}
