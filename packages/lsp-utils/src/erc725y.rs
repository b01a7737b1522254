//! ERC725Y client seam and its `ethers` contract binding.
//!
//! Every remote call the helpers make goes through [`Erc725y`]. Transport and
//! contract-call failures are surfaced as [`Error::Rpc`] without retry.

use async_trait::async_trait;
use ethers::contract::abigen;
use ethers::providers::{Middleware, PendingTransaction};
use ethers::types::{Address, Bytes, TxHash, H256, U64};
use std::sync::Arc;
use tracing::{debug, info};

use crate::reference::Connect;
use crate::Error;

abigen!(
    Erc725yContract,
    r#"[
        function supportsInterface(bytes4 interfaceId) external view returns (bool)
        function getData(bytes32 dataKey) external view returns (bytes)
        function getDataBatch(bytes32[] dataKeys) external view returns (bytes[])
        function setDataBatch(bytes32[] dataKeys, bytes[] dataValues) external payable
    ]"#
);

/// Remote calls against a contract implementing ERC725Y and ERC165.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Erc725y: Send + Sync {
    /// Address of the bound contract.
    fn address(&self) -> Address;

    async fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, Error>;

    async fn get_data(&self, key: H256) -> Result<Bytes, Error>;

    async fn get_data_batch(&self, keys: Vec<H256>) -> Result<Vec<Bytes>, Error>;

    /// Submit one `setDataBatch` transaction. Returns once it is broadcast.
    async fn set_data_batch(&self, keys: Vec<H256>, values: Vec<Bytes>) -> Result<TxHash, Error>;

    /// Wait until `tx_hash` has `confirmations` confirmations.
    async fn wait(&self, tx_hash: TxHash, confirmations: usize) -> Result<(), Error>;
}

/// ERC725Y contract bound to an `ethers` middleware.
pub struct Erc725yHandle<M> {
    contract: Erc725yContract<M>,
}

impl<M: Middleware> Erc725yHandle<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: Erc725yContract::new(address, client),
        }
    }
}

impl<M: Middleware> Clone for Erc725yHandle<M> {
    fn clone(&self) -> Self {
        Self {
            contract: self.contract.clone(),
        }
    }
}

impl<M: Middleware> std::fmt::Debug for Erc725yHandle<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Erc725yHandle({:?})", self.contract.address())
    }
}

impl<M: Middleware> Connect for Erc725yHandle<M> {
    type Signer = Arc<M>;

    fn connect_at(address: Address, signer: &Self::Signer) -> Self {
        Self::new(address, Arc::clone(signer))
    }

    fn connect(self, signer: &Self::Signer) -> Self {
        Self::new(self.contract.address(), Arc::clone(signer))
    }
}

#[async_trait]
impl<M: Middleware + 'static> Erc725y for Erc725yHandle<M> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, Error> {
        self.contract
            .supports_interface(interface_id)
            .call()
            .await
            .map_err(|e| Error::Rpc(format!("supportsInterface failed: {e}")))
    }

    async fn get_data(&self, key: H256) -> Result<Bytes, Error> {
        self.contract
            .get_data(key.0)
            .call()
            .await
            .map_err(|e| Error::Rpc(format!("getData({key:?}) failed: {e}")))
    }

    async fn get_data_batch(&self, keys: Vec<H256>) -> Result<Vec<Bytes>, Error> {
        let count = keys.len();
        self.contract
            .get_data_batch(keys.into_iter().map(|k| k.0).collect())
            .call()
            .await
            .map_err(|e| Error::Rpc(format!("getDataBatch of {count} keys failed: {e}")))
    }

    async fn set_data_batch(&self, keys: Vec<H256>, values: Vec<Bytes>) -> Result<TxHash, Error> {
        let count = keys.len();
        let call = self
            .contract
            .set_data_batch(keys.into_iter().map(|k| k.0).collect(), values);
        let pending = call
            .send()
            .await
            .map_err(|e| Error::Rpc(format!("setDataBatch failed: {e}")))?;
        let tx_hash = *pending;
        info!(contract = ?self.contract.address(), tx = ?tx_hash, entries = count, "setDataBatch sent");
        Ok(tx_hash)
    }

    async fn wait(&self, tx_hash: TxHash, confirmations: usize) -> Result<(), Error> {
        let client = self.contract.client();
        let receipt = PendingTransaction::new(tx_hash, client.provider())
            .confirmations(confirmations)
            .await
            .map_err(|e| Error::Rpc(format!("waiting for {tx_hash:?} failed: {e}")))?
            .ok_or_else(|| Error::Rpc(format!("transaction {tx_hash:?} dropped from mempool")))?;

        if receipt.status == Some(U64::zero()) {
            return Err(Error::Reverted(tx_hash));
        }
        debug!(tx = ?tx_hash, block = ?receipt.block_number, "Transaction confirmed");
        Ok(())
    }
}
