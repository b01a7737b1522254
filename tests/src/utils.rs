//! In-memory ERC725Y chain standing in for a node.
//!
//! Contracts are owned by the account that deployed them; `setDataBatch`
//! from any other sender reverts, as on an `Ownable` ERC725Y. Every remote
//! call made through a [`MemoryErc725y`] bumps a shared call counter.

use async_trait::async_trait;
use ethers::types::{Address, Bytes, TxHash, H256};
use lsp_types::constants::interface_ids;
use lsp_utils::{Connect, Erc725y, Error};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

struct ContractState {
    owner: Address,
    interfaces: HashSet<[u8; 4]>,
    storage: HashMap<H256, Bytes>,
}

#[derive(Default)]
struct ChainState {
    contracts: HashMap<Address, ContractState>,
    deployed: u64,
    mined: HashSet<TxHash>,
    calls: usize,
}

/// Shared chain state; clones observe the same contracts.
#[derive(Clone, Default)]
pub struct MemoryChain {
    state: Arc<Mutex<ChainState>>,
}

impl MemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ChainState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Externally owned account with a deterministic address.
    pub fn account(&self, seed: u64) -> MemorySigner {
        MemorySigner {
            chain: self.clone(),
            account: Address::from_low_u64_be(seed),
        }
    }

    /// Deploy a contract advertising ERC165, ERC725Y and `extra` interfaces.
    pub fn deploy_erc725y(&self, owner: &MemorySigner, extra: &[[u8; 4]]) -> MemoryErc725y {
        let mut interfaces = vec![interface_ids::ERC165, interface_ids::ERC725Y];
        interfaces.extend_from_slice(extra);
        self.deploy(owner, &interfaces)
    }

    /// Deploy a contract advertising exactly `interfaces`.
    pub fn deploy(&self, owner: &MemorySigner, interfaces: &[[u8; 4]]) -> MemoryErc725y {
        let mut state = self.lock();
        state.deployed += 1;
        let address = Address::from_low_u64_be(0xc0de_0000 + state.deployed);
        state.contracts.insert(
            address,
            ContractState {
                owner: owner.account,
                interfaces: interfaces.iter().copied().collect(),
                storage: HashMap::new(),
            },
        );
        MemoryErc725y {
            chain: self.clone(),
            address,
            sender: Some(owner.account),
        }
    }

    /// Remote calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls
    }

    /// Read storage without going through a contract call.
    pub fn storage(&self, contract: Address, key: H256) -> Bytes {
        self.lock()
            .contracts
            .get(&contract)
            .and_then(|c| c.storage.get(&key).cloned())
            .unwrap_or_default()
    }

    /// Write storage directly, bypassing ownership.
    pub fn set_storage(&self, contract: Address, key: H256, value: impl Into<Bytes>) {
        if let Some(c) = self.lock().contracts.get_mut(&contract) {
            c.storage.insert(key, value.into());
        }
    }

    /// Number of non-empty keys stored by `contract`.
    pub fn stored_keys(&self, contract: Address) -> usize {
        self.lock()
            .contracts
            .get(&contract)
            .map(|c| c.storage.values().filter(|v| !v.is_empty()).count())
            .unwrap_or(0)
    }

    fn call<T>(
        &self,
        contract: Address,
        f: impl FnOnce(&mut ContractState) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut state = self.lock();
        state.calls += 1;
        let contract = state
            .contracts
            .get_mut(&contract)
            .ok_or_else(|| Error::Rpc(format!("call to non-contract account {contract:?}")))?;
        f(contract)
    }
}

/// Account that signs transactions on a [`MemoryChain`].
#[derive(Clone)]
pub struct MemorySigner {
    chain: MemoryChain,
    account: Address,
}

impl MemorySigner {
    pub fn address(&self) -> Address {
        self.account
    }
}

/// Contract handle on a [`MemoryChain`]. `sender` is `None` for a read-only handle.
#[derive(Clone)]
pub struct MemoryErc725y {
    chain: MemoryChain,
    address: Address,
    sender: Option<Address>,
}

impl MemoryErc725y {
    /// Same contract, no signer attached.
    pub fn read_only(&self) -> Self {
        Self {
            sender: None,
            ..self.clone()
        }
    }

    /// Same contract, sending as `signer`.
    pub fn connected(&self, signer: &MemorySigner) -> Self {
        self.clone().connect(signer)
    }
}

impl Connect for MemoryErc725y {
    type Signer = MemorySigner;

    fn connect_at(address: Address, signer: &Self::Signer) -> Self {
        Self {
            chain: signer.chain.clone(),
            address,
            sender: Some(signer.account),
        }
    }

    fn connect(self, signer: &Self::Signer) -> Self {
        Self {
            sender: Some(signer.account),
            ..self
        }
    }
}

#[async_trait]
impl Erc725y for MemoryErc725y {
    fn address(&self) -> Address {
        self.address
    }

    async fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, Error> {
        self.chain
            .call(self.address, |c| Ok(c.interfaces.contains(&interface_id)))
    }

    async fn get_data(&self, key: H256) -> Result<Bytes, Error> {
        self.chain.call(self.address, |c| {
            Ok(c.storage.get(&key).cloned().unwrap_or_default())
        })
    }

    async fn get_data_batch(&self, keys: Vec<H256>) -> Result<Vec<Bytes>, Error> {
        self.chain.call(self.address, |c| {
            Ok(keys
                .iter()
                .map(|key| c.storage.get(key).cloned().unwrap_or_default())
                .collect())
        })
    }

    async fn set_data_batch(&self, keys: Vec<H256>, values: Vec<Bytes>) -> Result<TxHash, Error> {
        let sender = self
            .sender
            .ok_or_else(|| Error::Rpc("sending a transaction requires a signer".into()))?;
        self.chain.call(self.address, |c| {
            if sender != c.owner {
                return Err(Error::Rpc(
                    "execution reverted: Ownable: caller is not the owner".into(),
                ));
            }
            if keys.len() != values.len() {
                return Err(Error::Rpc(
                    "execution reverted: ERC725Y_DataKeysValuesLengthMismatch".into(),
                ));
            }
            for (key, value) in keys.into_iter().zip(values) {
                if value.is_empty() {
                    c.storage.remove(&key);
                } else {
                    c.storage.insert(key, value);
                }
            }
            Ok(())
        })?;

        let mut state = self.chain.lock();
        let tx_hash = H256::from_low_u64_be(state.mined.len() as u64 + 1);
        state.mined.insert(tx_hash);
        Ok(tx_hash)
    }

    async fn wait(&self, tx_hash: TxHash, _confirmations: usize) -> Result<(), Error> {
        let mut state = self.chain.lock();
        state.calls += 1;
        if state.mined.contains(&tx_hash) {
            Ok(())
        } else {
            Err(Error::Rpc(format!("unknown transaction {tx_hash:?}")))
        }
    }
}

/// Value stored for an address element.
pub fn address_value(address: Address) -> Bytes {
    Bytes::from(address.as_bytes().to_vec())
}

/// Encoded array length.
pub fn length_value(length: u128) -> Bytes {
    Bytes::from(lsp_types::encode_array_length(length).to_vec())
}
