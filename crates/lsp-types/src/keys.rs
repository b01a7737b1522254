//! LSP2 data key derivation for `Array` and `Mapping` key types.

use ethers_core::types::{Address, H256};
use ethers_core::utils::keccak256;

/// `keccak256(name)`. The length key of an `Array` such as `"LSP4Creators[]"`.
pub fn array_key(name: &str) -> H256 {
    H256(keccak256(name.as_bytes()))
}

/// Format: `bytes16(array_key) | uint128(index)`.
pub fn array_element_key(array_key: &H256, index: u128) -> H256 {
    let mut key = [0u8; 32];
    key[..16].copy_from_slice(&array_key.as_bytes()[..16]);
    key[16..].copy_from_slice(&index.to_be_bytes());
    H256(key)
}

/// Format: `bytes10(keccak256(map_name)) | 0x0000`.
pub fn mapping_key_prefix(map_name: &str) -> [u8; 12] {
    let hash = keccak256(map_name.as_bytes());
    let mut prefix = [0u8; 12];
    prefix[..10].copy_from_slice(&hash[..10]);
    prefix
}

/// Key for `<map_name>:<address>`.
pub fn mapping_key(map_name: &str, address: &Address) -> H256 {
    mapping_key_with_prefix(&mapping_key_prefix(map_name), address)
}

/// Format: `prefix | bytes20(address)`.
pub fn mapping_key_with_prefix(prefix: &[u8; 12], address: &Address) -> H256 {
    let mut key = [0u8; 32];
    key[..12].copy_from_slice(prefix);
    key[12..].copy_from_slice(address.as_bytes());
    H256(key)
}
