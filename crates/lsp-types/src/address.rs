//! Account address validation.

use ethers_core::types::Address;
use ethers_core::utils::to_checksum;

/// Parse a hex account address; the `0x` prefix is optional.
/// Mixed-case input must carry a valid EIP-55 checksum.
pub fn parse_address(value: &str) -> Option<Address> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.len() != 40 {
        return None;
    }
    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).ok()?;
    let address = Address::from(bytes);

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&address, None)[2..] != *digits {
        return None;
    }
    Some(address)
}

/// An ERC725Y value holds an address when it is exactly 20 bytes.
pub fn address_from_value(value: &[u8]) -> Option<Address> {
    (value.len() == 20).then(|| Address::from_slice(value))
}
