//! LSP2 value encodings: `Array` length and `(bytes4,uint128)` mapping values.

use crate::Lsp2Error;

/// An array length is stored as a `uint128`.
pub const ARRAY_LENGTH_BYTES: usize = 16;
/// Mapping value layout: `bytes4(interface_id) | uint128(index)`.
pub const MAP_VALUE_BYTES: usize = 4 + ARRAY_LENGTH_BYTES;

pub fn is_valid_array_length_value(value: &[u8]) -> bool {
    value.len() == ARRAY_LENGTH_BYTES
}

/// Decode a big-endian `uint128` array length.
pub fn decode_array_length(value: &[u8]) -> Result<u128, Lsp2Error> {
    let bytes: [u8; ARRAY_LENGTH_BYTES] = value
        .try_into()
        .map_err(|_| Lsp2Error::InvalidArrayLength(value.len()))?;
    Ok(u128::from_be_bytes(bytes))
}

/// Fixed-width encoding; zero is 16 zero bytes, never empty.
pub fn encode_array_length(length: u128) -> [u8; ARRAY_LENGTH_BYTES] {
    length.to_be_bytes()
}

pub fn encode_map_value(interface_id: [u8; 4], index: u128) -> [u8; MAP_VALUE_BYTES] {
    let mut value = [0u8; MAP_VALUE_BYTES];
    value[..4].copy_from_slice(&interface_id);
    value[4..].copy_from_slice(&index.to_be_bytes());
    value
}

/// Returns `(interface_id, index)`.
pub fn decode_map_value(value: &[u8]) -> Result<([u8; 4], u128), Lsp2Error> {
    if value.len() != MAP_VALUE_BYTES {
        return Err(Lsp2Error::InvalidMapValue(value.len()));
    }
    let mut interface_id = [0u8; 4];
    interface_id.copy_from_slice(&value[..4]);
    let mut index = [0u8; ARRAY_LENGTH_BYTES];
    index.copy_from_slice(&value[4..]);
    Ok((interface_id, u128::from_be_bytes(index)))
}
