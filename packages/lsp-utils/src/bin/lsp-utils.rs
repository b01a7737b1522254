//! LSP Utils binary.

use clap::{Parser, Subcommand, ValueEnum};
use lsp_utils::signer::{self, LspContract};
use lsp_utils::{
    add_digital_asset_creators, add_issued_assets, get_array_elements,
    remove_digital_asset_creators, remove_issued_assets, ArrayEntry, Config, ContractRef, Error,
    LSP12_ISSUED_ASSETS, LSP4_CREATORS,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append creators to a digital asset's `LSP4Creators[]`
    AddCreators {
        /// Digital asset address
        asset: String,
        /// Creator as `<address>[:<interfaceId>]`
        #[arg(long = "entry", required = true)]
        entries: Vec<ArrayEntry>,
    },
    /// Clear a digital asset's `LSP4Creators[]`
    RemoveCreators {
        /// Digital asset address
        asset: String,
    },
    /// Append assets to an issuer's `LSP12IssuedAssets[]`
    AddIssuedAssets {
        /// Issuer address
        issuer: String,
        /// Asset as `<address>[:<interfaceId>]`
        #[arg(long = "entry", required = true)]
        entries: Vec<ArrayEntry>,
    },
    /// Clear an issuer's `LSP12IssuedAssets[]`
    RemoveIssuedAssets {
        /// Issuer address
        issuer: String,
    },
    /// Print the elements of an array
    List {
        /// Contract address
        contract: String,
        #[arg(long, value_enum, default_value_t = ArrayKind::Creators)]
        array: ArrayKind,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArrayKind {
    Creators,
    IssuedAssets,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config: Config = config::Config::builder()
        .add_source(config::File::with_name("lsp-utils").required(false))
        .add_source(config::Environment::with_prefix("LSP_UTILS").try_parsing(true))
        .build()?
        .try_deserialize()?;

    info!(rpc = %config.rpc_url, chain_id = ?config.chain_id, "Configuration loaded");

    let client = signer::connect(&config).await?;

    match args.command {
        Command::AddCreators { asset, entries } => {
            add_digital_asset_creators(
                ContractRef::<LspContract>::Address(asset),
                &entries,
                Some(&client),
            )
            .await?
        }
        Command::RemoveCreators { asset } => {
            remove_digital_asset_creators(ContractRef::<LspContract>::Address(asset), Some(&client))
                .await?
        }
        Command::AddIssuedAssets { issuer, entries } => {
            add_issued_assets(
                ContractRef::<LspContract>::Address(issuer),
                &entries,
                Some(&client),
            )
            .await?
        }
        Command::RemoveIssuedAssets { issuer } => {
            remove_issued_assets(ContractRef::<LspContract>::Address(issuer), Some(&client)).await?
        }
        Command::List { contract, array } => {
            let address = lsp_types::parse_address(&contract)
                .ok_or_else(|| Error::InvalidReference(contract.clone()))?;
            let handle = LspContract::new(address, Arc::clone(&client));
            let array = match array {
                ArrayKind::Creators => &LSP4_CREATORS,
                ArrayKind::IssuedAssets => &LSP12_ISSUED_ASSETS,
            };
            let elements = get_array_elements(&handle, array).await?;
            info!(array = array.name, count = elements.len(), "Array read");
            for (index, value) in elements.iter().enumerate() {
                println!("[{index}] {value}");
            }
        }
    }

    Ok(())
}
