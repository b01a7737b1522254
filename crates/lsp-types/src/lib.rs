//! LSP2 data key derivation and value encoding for LUKSO ERC725Y storage.
//! No RPC client dependency: usable by any ERC725Y client.

mod address;
pub mod constants;
mod error;
mod keys;
mod values;

pub use address::{address_from_value, parse_address};
pub use error::Lsp2Error;
pub use keys::{
    array_element_key, array_key, mapping_key, mapping_key_prefix, mapping_key_with_prefix,
};
pub use values::{
    ARRAY_LENGTH_BYTES, MAP_VALUE_BYTES, decode_array_length, decode_map_value,
    encode_array_length, encode_map_value, is_valid_array_length_value,
};
