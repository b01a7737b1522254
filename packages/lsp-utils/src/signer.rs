//! Signer construction: local private key or encrypted JSON keystore.
//!
//! The resulting `SignerMiddleware` is the `Signer` type of [`LspContract`],
//! so it can bind address references and rebind handles.

use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::erc725y::Erc725yHandle;

/// HTTP provider with a local wallet.
pub type LspClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// ERC725Y handle signing through [`LspClient`].
pub type LspContract = Erc725yHandle<LspClient>;

/// Build the signing client from configuration.
pub async fn connect(config: &Config) -> Result<Arc<LspClient>, crate::Error> {
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str()).map_err(|e| {
        crate::Error::Config(format!("Invalid RPC URL '{}': {e}", config.rpc_url))
    })?;

    let chain_id = match config.chain_id {
        Some(id) => id,
        None => provider
            .get_chainid()
            .await
            .map_err(|e| crate::Error::Rpc(format!("chain id query failed: {e}")))?
            .as_u64(),
    };

    let wallet = load_wallet(config)?.with_chain_id(chain_id);
    info!(account = ?wallet.address(), chain_id, rpc = %config.rpc_url, "Loaded signer");

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}

/// Load the wallet from `private_key`, falling back to the keystore.
pub fn load_wallet(config: &Config) -> Result<LocalWallet, crate::Error> {
    if let Some(key) = &config.private_key {
        let key = key.trim();
        return LocalWallet::from_str(key.strip_prefix("0x").unwrap_or(key))
            .map_err(|e| crate::Error::Config(format!("Invalid private key: {e}")));
    }

    match (&config.keystore_path, &config.keystore_password) {
        (Some(path), Some(password)) => LocalWallet::decrypt_keystore(path, password)
            .map_err(|e| crate::Error::Config(format!("Failed to decrypt keystore {path}: {e}"))),
        (Some(path), None) => Err(crate::Error::Config(format!(
            "keystore_password required to decrypt {path}"
        ))),
        (None, _) => Err(crate::Error::Config(
            "neither private_key nor keystore_path is configured".to_string(),
        )),
    }
}
