//! LSP12 Issued Assets: `LSP12IssuedAssets[]` helpers.

use lsp_types::constants::{
    LSP12_ISSUED_ASSETS_ARRAY_KEY, LSP12_ISSUED_ASSETS_ARRAY_NAME, LSP12_ISSUED_ASSETS_MAP_PREFIX,
};

use crate::array::{update_array, AppendEntries, ArrayEntry, ClearArray, LspArray};
use crate::erc725y::Erc725y;
use crate::reference::{Connect, ContractRef};
use crate::Error;

/// `LSP12IssuedAssets[]` with its `LSP12IssuedAssetsMap:<address>` reverse lookup.
pub const LSP12_ISSUED_ASSETS: LspArray = LspArray {
    name: LSP12_ISSUED_ASSETS_ARRAY_NAME,
    length_key: LSP12_ISSUED_ASSETS_ARRAY_KEY,
    map_prefix: LSP12_ISSUED_ASSETS_MAP_PREFIX,
};

/// An asset issued by an ERC725Y contract.
pub type IssuedAsset = ArrayEntry;

/// Append `assets` to the `LSP12IssuedAssets[]` of an issuer.
pub async fn add_issued_assets<C>(
    issuer: ContractRef<C>,
    assets: &[IssuedAsset],
    signer: Option<&C::Signer>,
) -> Result<(), Error>
where
    C: Connect + Erc725y,
{
    update_array(
        issuer,
        signer,
        &LSP12_ISSUED_ASSETS,
        &AppendEntries::new(assets),
    )
    .await
}

/// Remove every `LSP12IssuedAssets[]` entry of an issuer along with its
/// `LSP12IssuedAssetsMap` entries.
pub async fn remove_issued_assets<C>(
    issuer: ContractRef<C>,
    signer: Option<&C::Signer>,
) -> Result<(), Error>
where
    C: Connect + Erc725y,
{
    update_array(issuer, signer, &LSP12_ISSUED_ASSETS, &ClearArray).await
}
