//! # LSP Utils
//!
//! Helpers that edit LSP2 arrays stored on ERC725Y contracts: the
//! `LSP4Creators[]` of a digital asset and the `LSP12IssuedAssets[]` of an
//! issuer. Each helper writes the array, its reverse-lookup mapping entries
//! and its length in a single `setDataBatch` transaction.
//!
//! ## Quick Start
//! ```bash
//! LSP_UTILS_PRIVATE_KEY=0x… cargo run --bin lsp-utils -- remove-creators 0xAsset…
//! ```
//!
//! ## Operations
//! - [`add_digital_asset_creators`] / [`remove_digital_asset_creators`]
//! - [`add_issued_assets`] / [`remove_issued_assets`]
//! - [`get_array_elements`] - read the current elements

pub mod array;
pub mod config;
pub mod erc725y;
mod error;
pub mod lsp12;
pub mod lsp4;
pub mod reference;
pub mod signer;

pub use array::{get_array_elements, ArrayEntry, BatchUpdate, LspArray};
pub use config::Config;
pub use erc725y::{Erc725y, Erc725yHandle};
pub use error::Error;
pub use lsp12::{add_issued_assets, remove_issued_assets, IssuedAsset, LSP12_ISSUED_ASSETS};
pub use lsp4::{add_digital_asset_creators, remove_digital_asset_creators, Issuer, LSP4_CREATORS};
pub use reference::{Connect, ContractRef};
pub use signer::{LspClient, LspContract};
