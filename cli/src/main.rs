use std::fs;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use tokensmith_client::{
    read_keypair_file,
    rpc::{RpcConnection, SolanaRpcConnection, SolanaRpcUrl},
};
use tokensmith_token_client::{
    actions::{
        create_metadata_account, create_mint, create_nft,
        get_or_create_associated_token_account, transfer, MintTo,
    },
    metadata::{Creator, MetadataArgs},
};
use tokensmith_uploader::{
    content_type_for_path,
    json::{Attribute, FileSpec, JsonCreator, OffChainMetadata, Properties},
    IrysUploader, StorageUploader, GATEWAY,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

/// Build a connection and fail early when the endpoint is unreachable.
async fn connect(rpc_url: &SolanaRpcUrl) -> Result<SolanaRpcConnection> {
    let rpc = SolanaRpcConnection::new(rpc_url.to_string(), None);
    rpc.health()
        .await
        .with_context(|| format!("RPC endpoint {} is not healthy", rpc.get_url()))?;
    Ok(rpc)
}

fn uploader_for(node_url: Option<String>) -> IrysUploader {
    match node_url {
        Some(node) => IrysUploader::with_node(node, GATEWAY),
        None => IrysUploader::new(),
    }
}

fn parse_attribute(entry: &str) -> Result<Attribute> {
    let (trait_type, value) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("attribute must be TRAIT=VALUE, got `{entry}`"))?;
    Ok(Attribute {
        trait_type: trait_type.to_string(),
        value: value.to_string(),
    })
}

/// Parse an `ADDRESS:SHARE` creator entry. A creator is marked verified only
/// when it is the payer, the single signer of the transaction.
fn parse_creator(entry: &str, payer: &Pubkey) -> Result<Creator> {
    let (address, share) = entry
        .split_once(':')
        .ok_or_else(|| anyhow!("creator must be ADDRESS:SHARE, got `{entry}`"))?;
    let address: Pubkey = address
        .parse()
        .map_err(|_| anyhow!("invalid creator address `{address}`"))?;
    let share: u8 = share
        .parse()
        .with_context(|| format!("invalid creator share `{share}`"))?;
    Ok(Creator {
        address,
        verified: address == *payer,
        share,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let rpc_url = SolanaRpcUrl::from(cli.rpc_url.as_str());
    let payer = read_keypair_file(&cli.keypair)
        .with_context(|| format!("failed to load keypair from {}", cli.keypair.display()))?;
    info!("payer: {}", payer.pubkey());

    match cli.command {
        Commands::CreateMint(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let mint = create_mint(
                &mut rpc,
                &payer,
                &payer.pubkey(),
                args.freeze_authority.as_ref(),
                args.decimals,
                None,
            )
            .await?;
            println!("Created mint: {mint}");
        }
        Commands::MintTokens(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let owner = args.recipient.unwrap_or_else(|| payer.pubkey());
            let ata =
                get_or_create_associated_token_account(&mut rpc, &payer, &owner, &args.mint)
                    .await?;
            println!("Token account: {ata}");
            let signature = MintTo {
                mint: args.mint,
                destination: ata,
                amount: args.amount,
            }
            .execute(&mut rpc, &payer, &payer)
            .await?;
            println!("Minted {} to {ata}", args.amount);
            println!("{}", rpc_url.explorer_tx_url(&signature));
        }
        Commands::Transfer(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let signature =
                transfer(&mut rpc, &payer, &args.mint, &payer, &args.to, args.amount).await?;
            println!("Transferred {} to {}", args.amount, args.to);
            println!("{}", rpc_url.explorer_tx_url(&signature));
        }
        Commands::Airdrop(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let signature = rpc.airdrop_lamports(&payer.pubkey(), args.lamports).await?;
            let balance = rpc.get_balance(&payer.pubkey()).await?;
            println!(
                "Airdropped {} lamports to {}, balance is now {balance}",
                args.lamports,
                payer.pubkey()
            );
            println!("{}", rpc_url.explorer_tx_url(&signature));
        }
        Commands::UploadAsset(args) => {
            let uploader = uploader_for(args.node_url);
            let bytes = fs::read(&args.path)
                .with_context(|| format!("failed to read {}", args.path.display()))?;
            let content_type = content_type_for_path(&args.path);
            let uri = uploader.upload(bytes, content_type).await?;
            println!("{uri}");
        }
        Commands::UploadMetadata(args) => {
            let uploader = uploader_for(args.node_url);
            let creators = vec![JsonCreator {
                address: payer.pubkey().to_string(),
                share: 100,
            }];
            let document = OffChainMetadata {
                name: args.name,
                symbol: args.symbol,
                description: args.description,
                image: args.image_uri.clone(),
                attributes: args
                    .attributes
                    .iter()
                    .map(|entry| parse_attribute(entry))
                    .collect::<Result<_>>()?,
                properties: args.image_uri.map(|uri| Properties {
                    files: vec![FileSpec {
                        uri,
                        content_type: "image/png".to_string(),
                    }],
                    creators: creators.clone(),
                }),
                creators,
            };
            let uri = uploader.upload_json(&document).await?;
            println!("{uri}");
        }
        Commands::CreateMetadata(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let creators = args
                .creators
                .iter()
                .map(|entry| parse_creator(entry, &payer.pubkey()))
                .collect::<Result<Vec<_>>>()?;
            let metadata_args = MetadataArgs {
                name: args.name,
                symbol: args.symbol,
                uri: args.uri,
                seller_fee_basis_points: args.seller_fee_basis_points,
                creators,
                is_mutable: !args.immutable,
                ..Default::default()
            };
            let (metadata, signature) =
                create_metadata_account(&mut rpc, &payer, &args.mint, &payer, metadata_args)
                    .await?;
            println!("Created metadata account {metadata} for mint {}", args.mint);
            println!("{}", rpc_url.explorer_tx_url(&signature));
        }
        Commands::MintNft(args) => {
            let mut rpc = connect(&rpc_url).await?;
            let mint_keypair = Keypair::new();
            let metadata_args = MetadataArgs {
                name: args.name,
                symbol: args.symbol,
                uri: args.uri,
                seller_fee_basis_points: args.seller_fee_basis_points,
                creators: vec![Creator {
                    address: payer.pubkey(),
                    verified: true,
                    share: 100,
                }],
                ..Default::default()
            };
            let (mint, signature) = create_nft(&mut rpc, &payer, &mint_keypair, metadata_args).await?;
            println!("Minted NFT: {mint}");
            println!("{}", rpc_url.explorer_tx_url(&signature));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_entry_parses_address_and_share() {
        let payer = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let creator = parse_creator(&format!("{other}:60"), &payer).unwrap();
        assert_eq!(creator.address, other);
        assert_eq!(creator.share, 60);
        assert!(!creator.verified);
    }

    #[test]
    fn payer_creator_is_verified() {
        let payer = Pubkey::new_unique();
        let creator = parse_creator(&format!("{payer}:100"), &payer).unwrap();
        assert!(creator.verified);
    }

    #[test]
    fn malformed_creator_entries_are_rejected() {
        let payer = Pubkey::new_unique();
        assert!(parse_creator("not-a-creator", &payer).is_err());
        assert!(parse_creator("abc:100", &payer).is_err());
        assert!(parse_creator(&format!("{payer}:many"), &payer).is_err());
    }

    #[test]
    fn attribute_entry_splits_on_the_first_equals() {
        let attribute = parse_attribute("background=deep=teal").unwrap();
        assert_eq!(attribute.trait_type, "background");
        assert_eq!(attribute.value, "deep=teal");
        assert!(parse_attribute("no-separator").is_err());
    }
}
