//! Standard LSP data keys and ERC165 interface ids.

/// `LSP4Creators[]` array name.
pub const LSP4_CREATORS_ARRAY_NAME: &str = "LSP4Creators[]";
/// `LSP4CreatorsMap` mapping name.
pub const LSP4_CREATORS_MAP_NAME: &str = "LSP4CreatorsMap";
/// `LSP12IssuedAssets[]` array name.
pub const LSP12_ISSUED_ASSETS_ARRAY_NAME: &str = "LSP12IssuedAssets[]";
/// `LSP12IssuedAssetsMap` mapping name.
pub const LSP12_ISSUED_ASSETS_MAP_NAME: &str = "LSP12IssuedAssetsMap";

/// `keccak256("LSP4Creators[]")`.
pub const LSP4_CREATORS_ARRAY_KEY: [u8; 32] = [
    0x11, 0x4b, 0xd0, 0x3b, 0x3a, 0x46, 0xd4, 0x87, 0x59, 0x68, 0x0d, 0x81, 0xeb, 0xb2, 0xb4, 0x14,
    0xfd, 0xa7, 0xd0, 0x30, 0xa7, 0x10, 0x5a, 0x85, 0x18, 0x67, 0xac, 0xcf, 0x1c, 0x23, 0x52, 0xe7,
];

/// `bytes10(keccak256("LSP4CreatorsMap")) | 0x0000`.
pub const LSP4_CREATORS_MAP_PREFIX: [u8; 12] = [
    0x6d, 0xe8, 0x5e, 0xaf, 0x5d, 0x98, 0x2b, 0x4e, 0x5d, 0xa0, 0x00, 0x00,
];

/// `keccak256("LSP12IssuedAssets[]")`.
pub const LSP12_ISSUED_ASSETS_ARRAY_KEY: [u8; 32] = [
    0x7c, 0x8c, 0x34, 0x16, 0xd6, 0xcd, 0xa8, 0x7c, 0xd4, 0x2c, 0x71, 0xea, 0x18, 0x43, 0xdf, 0x28,
    0xac, 0x48, 0x50, 0x35, 0x4f, 0x98, 0x8d, 0x55, 0xee, 0x2e, 0xaa, 0x47, 0xb6, 0xdc, 0x05, 0xcd,
];

/// `bytes10(keccak256("LSP12IssuedAssetsMap")) | 0x0000`.
pub const LSP12_ISSUED_ASSETS_MAP_PREFIX: [u8; 12] = [
    0x74, 0xac, 0x25, 0x55, 0xc1, 0x0b, 0x93, 0x49, 0xe7, 0x8f, 0x00, 0x00,
];

/// ERC165 interface ids.
pub mod interface_ids {
    pub const ERC165: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];
    /// `getData ^ setData ^ getDataBatch ^ setDataBatch`.
    pub const ERC725Y: [u8; 4] = [0x62, 0x9a, 0xa6, 0x94];
    pub const LSP0_ERC725_ACCOUNT: [u8; 4] = [0x24, 0x87, 0x1b, 0x3d];
    /// Registered for entries that are not contracts (EOAs).
    pub const NONE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
}
