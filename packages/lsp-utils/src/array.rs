//! LSP2 array editing: one shared routine plus per-operation batch planners.
//!
//! Flow for every helper: resolve the reference, check ERC725Y support, read
//! the array length, plan a [`BatchUpdate`], submit it in one `setDataBatch`
//! and wait for one confirmation. Any failure before submission leaves the
//! contract untouched.

use async_trait::async_trait;
use ethers::types::{Address, Bytes, H256};
use lsp_types::constants::interface_ids;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::erc725y::Erc725y;
use crate::reference::{Connect, ContractRef};
use crate::Error;

/// Confirmations awaited after the batch is submitted.
pub const CONFIRMATIONS: usize = 1;

/// Longest array the helpers read, clear or grow to.
pub const MAX_ARRAY_LENGTH: u128 = 1 << 16;

/// An LSP2 `Array` with its reverse-lookup `Mapping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspArray {
    /// Array name, e.g. `LSP4Creators[]`.
    pub name: &'static str,
    pub length_key: [u8; 32],
    /// `bytes10(keccak256(map_name)) | 0x0000`.
    pub map_prefix: [u8; 12],
}

impl LspArray {
    pub fn length_key(&self) -> H256 {
        H256(self.length_key)
    }

    pub fn element_key(&self, index: u128) -> H256 {
        lsp_types::array_element_key(&self.length_key(), index)
    }

    pub fn map_key(&self, address: &Address) -> H256 {
        lsp_types::mapping_key_with_prefix(&self.map_prefix, address)
    }
}

/// A new array element: the member address and the interface id it supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayEntry {
    pub address: Address,
    pub interface_id: [u8; 4],
}

impl ArrayEntry {
    pub fn new(address: Address, interface_id: [u8; 4]) -> Self {
        Self {
            address,
            interface_id,
        }
    }

    /// Entry for an address that is not a contract.
    pub fn account(address: Address) -> Self {
        Self::new(address, interface_ids::NONE)
    }
}

/// Parses `<address>[:<interfaceId>]`, e.g. `0xabc…:0x24871b3d`.
impl FromStr for ArrayEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, interface_id) = match s.split_once(':') {
            Some((address, id)) => (address, Some(id)),
            None => (s, None),
        };
        let address = lsp_types::parse_address(address)
            .ok_or_else(|| Error::InvalidReference(address.to_string()))?;
        let interface_id = match interface_id {
            None => interface_ids::NONE,
            Some(id) => {
                let mut bytes = [0u8; 4];
                hex::decode_to_slice(id.strip_prefix("0x").unwrap_or(id), &mut bytes)
                    .map_err(|_| Error::InvalidInterfaceId(id.to_string()))?;
                bytes
            }
        };
        Ok(Self::new(address, interface_id))
    }
}

/// Ordered `(key, value)` pairs written by one `setDataBatch`.
/// Keys and values only grow together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchUpdate {
    keys: Vec<H256>,
    values: Vec<Bytes>,
}

impl BatchUpdate {
    pub fn push(&mut self, key: H256, value: Bytes) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub fn extend(&mut self, edits: impl IntoIterator<Item = (H256, Bytes)>) {
        for (key, value) in edits {
            self.push(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[H256] {
        &self.keys
    }

    pub fn values(&self) -> &[Bytes] {
        &self.values
    }

    pub fn into_parts(self) -> (Vec<H256>, Vec<Bytes>) {
        (self.keys, self.values)
    }
}

/// Edits clearing slot `index` holding `value`.
///
/// A 20-byte value is a member address: its mapping entry is cleared too.
/// Anything else only gets its element key cleared.
pub fn clear_slot_edits(array: &LspArray, index: u128, value: &[u8]) -> Vec<(H256, Bytes)> {
    let element_key = array.element_key(index);
    match lsp_types::address_from_value(value) {
        Some(address) => vec![
            (element_key, Bytes::new()),
            (array.map_key(&address), Bytes::new()),
        ],
        None => vec![(element_key, Bytes::new())],
    }
}

/// Edits writing `entry` into slot `index` with its mapping entry.
pub fn append_slot_edits(array: &LspArray, index: u128, entry: &ArrayEntry) -> Vec<(H256, Bytes)> {
    vec![
        (
            array.element_key(index),
            Bytes::from(entry.address.as_bytes().to_vec()),
        ),
        (
            array.map_key(&entry.address),
            Bytes::from(lsp_types::encode_map_value(entry.interface_id, index).to_vec()),
        ),
    ]
}

/// Decode a non-empty length value, bounded by [`MAX_ARRAY_LENGTH`].
fn decode_length(array: &LspArray, raw_length: &Bytes) -> Result<u128, Error> {
    let length = lsp_types::decode_array_length(raw_length).map_err(|_| {
        Error::InvalidLengthEncoding {
            array: array.name,
            value: raw_length.clone(),
        }
    })?;
    if length > MAX_ARRAY_LENGTH {
        return Err(Error::ArrayTooLong {
            array: array.name,
            length,
        });
    }
    Ok(length)
}

fn length_value(length: u128) -> Bytes {
    Bytes::from(lsp_types::encode_array_length(length).to_vec())
}

/// Produces the batch for one array operation from the current length value.
#[async_trait]
pub trait ArrayOperation: Send + Sync {
    async fn plan<C: Erc725y>(
        &self,
        contract: &C,
        array: &LspArray,
        raw_length: &Bytes,
    ) -> Result<BatchUpdate, Error>;
}

/// Clears every element, its mapping entry, and resets the length to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearArray;

#[async_trait]
impl ArrayOperation for ClearArray {
    async fn plan<C: Erc725y>(
        &self,
        contract: &C,
        array: &LspArray,
        raw_length: &Bytes,
    ) -> Result<BatchUpdate, Error> {
        if raw_length.is_empty() {
            return Err(Error::EmptyArray(array.name));
        }
        let length = decode_length(array, raw_length)?;
        if length == 0 {
            return Err(Error::EmptyArray(array.name));
        }

        let mut batch = BatchUpdate::default();
        batch.push(array.length_key(), length_value(0));

        for index in 0..length {
            let value = contract.get_data(array.element_key(index)).await?;
            if !value.is_empty() && lsp_types::address_from_value(&value).is_none() {
                warn!(array = array.name, index, value = %value, "Array element is not an address");
            }
            batch.extend(clear_slot_edits(array, index, &value));
        }
        Ok(batch)
    }
}

/// Appends entries after the current last element.
#[derive(Debug, Clone, Default)]
pub struct AppendEntries {
    pub entries: Vec<ArrayEntry>,
}

impl AppendEntries {
    pub fn new(entries: impl Into<Vec<ArrayEntry>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

#[async_trait]
impl ArrayOperation for AppendEntries {
    async fn plan<C: Erc725y>(
        &self,
        contract: &C,
        array: &LspArray,
        raw_length: &Bytes,
    ) -> Result<BatchUpdate, Error> {
        if self.entries.is_empty() {
            return Err(Error::NoEntries(array.name));
        }
        let length = if raw_length.is_empty() {
            0
        } else {
            decode_length(array, raw_length)?
        };
        let new_length = length + self.entries.len() as u128;
        if new_length > MAX_ARRAY_LENGTH {
            return Err(Error::ArrayTooLong {
                array: array.name,
                length: new_length,
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.address) {
                return Err(Error::DuplicateEntry {
                    array: array.name,
                    address: entry.address,
                });
            }
        }
        let map_keys = self
            .entries
            .iter()
            .map(|entry| array.map_key(&entry.address))
            .collect();
        let existing = contract.get_data_batch(map_keys).await?;
        if let Some((entry, _)) = self
            .entries
            .iter()
            .zip(&existing)
            .find(|(_, value)| !value.is_empty())
        {
            return Err(Error::DuplicateEntry {
                array: array.name,
                address: entry.address,
            });
        }

        let mut batch = BatchUpdate::default();
        batch.push(array.length_key(), length_value(new_length));
        for (offset, entry) in self.entries.iter().enumerate() {
            batch.extend(append_slot_edits(array, length + offset as u128, entry));
        }
        Ok(batch)
    }
}

/// Resolve `reference`, check ERC725Y support, plan with `operation`, then
/// submit the batch and wait for [`CONFIRMATIONS`].
pub async fn update_array<C, O>(
    reference: ContractRef<C>,
    signer: Option<&C::Signer>,
    array: &LspArray,
    operation: &O,
) -> Result<(), Error>
where
    C: Connect + Erc725y,
    O: ArrayOperation,
{
    let contract = reference.resolve(signer)?;
    let address = contract.address();

    if !contract.supports_interface(interface_ids::ERC725Y).await? {
        return Err(Error::UnsupportedInterface(address));
    }

    let raw_length = contract.get_data(array.length_key()).await?;
    debug!(contract = ?address, array = array.name, length = %raw_length, "Read array length");

    let batch = operation.plan(&contract, array, &raw_length).await?;
    let entries = batch.len();
    let (keys, values) = batch.into_parts();

    let tx_hash = contract.set_data_batch(keys, values).await?;
    contract.wait(tx_hash, CONFIRMATIONS).await?;

    info!(contract = ?address, array = array.name, entries, tx = ?tx_hash, "Array updated");
    Ok(())
}

/// Read every element value of `array`. An empty length reads as no elements.
pub async fn get_array_elements<C: Erc725y>(
    contract: &C,
    array: &LspArray,
) -> Result<Vec<Bytes>, Error> {
    let raw_length = contract.get_data(array.length_key()).await?;
    if raw_length.is_empty() {
        return Ok(Vec::new());
    }
    let length = decode_length(array, &raw_length)?;
    if length == 0 {
        return Ok(Vec::new());
    }
    let keys = (0..length).map(|index| array.element_key(index)).collect();
    contract.get_data_batch(keys).await
}
