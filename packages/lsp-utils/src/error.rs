//! Error types for the LSP helpers.

use ethers::types::{Address, Bytes, TxHash};
use std::fmt;

use crate::array::MAX_ARRAY_LENGTH;

/// LSP helper error type.
///
/// Every variant except `Rpc` and `Reverted` is raised before any
/// transaction is submitted.
#[derive(Debug)]
pub enum Error {
    /// Neither a valid address nor a usable contract handle. Holds the offending value.
    InvalidReference(String),
    /// Contract does not advertise the ERC725Y interface.
    UnsupportedInterface(Address),
    /// The array length value is empty or zero.
    EmptyArray(&'static str),
    /// The array length value is not a 16-byte `uint128`.
    InvalidLengthEncoding { array: &'static str, value: Bytes },
    /// The array holds, or would hold, more than `MAX_ARRAY_LENGTH` elements.
    ArrayTooLong { array: &'static str, length: u128 },
    /// An entry's interface id is not 4 hex-encoded bytes.
    InvalidInterfaceId(String),
    /// Nothing to add.
    NoEntries(&'static str),
    /// Address already present in the array, or listed twice.
    DuplicateEntry {
        array: &'static str,
        address: Address,
    },
    /// RPC communication or contract call error.
    Rpc(String),
    /// Transaction mined with a failure status.
    Reverted(TxHash),
    /// Configuration error.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidReference(value) => write!(
                f,
                "not a valid address nor a valid ERC725Y contract instance: '{value}'"
            ),
            Error::UnsupportedInterface(address) => write!(
                f,
                "contract {address:?} does not support ERC725Y, cannot use getData() or setData()"
            ),
            Error::EmptyArray(array) => write!(f, "there are no entries in `{array}`"),
            Error::InvalidLengthEncoding { array, value } => write!(
                f,
                "the value for `{array}` is not a valid LSP2 array length value: {value}"
            ),
            Error::ArrayTooLong { array, length } => write!(
                f,
                "`{array}` has {length} elements, more than the {MAX_ARRAY_LENGTH} these helpers handle"
            ),
            Error::InvalidInterfaceId(value) => {
                write!(f, "not a valid interface id: '{value}'")
            }
            Error::NoEntries(array) => write!(f, "no entries given to add to `{array}`"),
            Error::DuplicateEntry { array, address } => {
                write!(f, "{address:?} is already present in `{array}`")
            }
            Error::Rpc(msg) => write!(f, "rpc error: {msg}"),
            Error::Reverted(tx_hash) => write!(f, "transaction {tx_hash:?} reverted"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
