//! LSP4 Digital Asset Metadata: `LSP4Creators[]` helpers.
//!
//! See <https://github.com/lukso-network/LIPs/blob/main/LSPs/LSP-4-DigitalAsset-Metadata.md>.

use lsp_types::constants::{
    LSP4_CREATORS_ARRAY_KEY, LSP4_CREATORS_ARRAY_NAME, LSP4_CREATORS_MAP_PREFIX,
};

use crate::array::{update_array, AppendEntries, ArrayEntry, ClearArray, LspArray};
use crate::erc725y::Erc725y;
use crate::reference::{Connect, ContractRef};
use crate::Error;

/// `LSP4Creators[]` with its `LSP4CreatorsMap:<address>` reverse lookup.
pub const LSP4_CREATORS: LspArray = LspArray {
    name: LSP4_CREATORS_ARRAY_NAME,
    length_key: LSP4_CREATORS_ARRAY_KEY,
    map_prefix: LSP4_CREATORS_MAP_PREFIX,
};

/// A creator of a digital asset.
pub type Issuer = ArrayEntry;

/// Append `creators` to the `LSP4Creators[]` of a digital asset.
///
/// Fails with `NoEntries` for an empty list and `DuplicateEntry` when a
/// creator is listed twice or already registered.
pub async fn add_digital_asset_creators<C>(
    digital_asset: ContractRef<C>,
    creators: &[Issuer],
    signer: Option<&C::Signer>,
) -> Result<(), Error>
where
    C: Connect + Erc725y,
{
    update_array(
        digital_asset,
        signer,
        &LSP4_CREATORS,
        &AppendEntries::new(creators),
    )
    .await
}

/// Remove every `LSP4Creators[]` entry of a digital asset along with its
/// `LSP4CreatorsMap` entries. The array length is reset to zero.
///
/// Fails with:
/// - `InvalidReference` when `digital_asset` is not a valid address nor a handle,
/// - `UnsupportedInterface` when the contract does not support ERC725Y,
/// - `EmptyArray` when there are no creators,
/// - `InvalidLengthEncoding` when the stored length is not a valid LSP2 array length.
pub async fn remove_digital_asset_creators<C>(
    digital_asset: ContractRef<C>,
    signer: Option<&C::Signer>,
) -> Result<(), Error>
where
    C: Connect + Erc725y,
{
    update_array(digital_asset, signer, &LSP4_CREATORS, &ClearArray).await
}
