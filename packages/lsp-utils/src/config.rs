//! Client configuration.

use serde::Deserialize;

/// Configuration for connecting to a LUKSO network and signing transactions.
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::rpc_url")]
    pub rpc_url: String,

    /// Queried from the node when unset.
    #[serde(default = "defaults::chain_id")]
    pub chain_id: Option<u64>,

    /// Hex-encoded secp256k1 private key.
    #[serde(default)]
    pub private_key: Option<String>,

    /// Encrypted JSON keystore, used when `private_key` is unset.
    #[serde(default)]
    pub keystore_path: Option<String>,

    #[serde(default)]
    pub keystore_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: defaults::rpc_url(),
            chain_id: defaults::chain_id(),
            private_key: None,
            keystore_path: None,
            keystore_password: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("keystore_path", &self.keystore_path)
            .field(
                "keystore_password",
                &self.keystore_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

mod defaults {
    const MAINNET_CHAIN_ID: u64 = 42;
    const TESTNET_CHAIN_ID: u64 = 4201;

    fn network() -> String {
        std::env::var("LSP_UTILS_NETWORK")
            .or_else(|_| std::env::var("LUKSO_NETWORK"))
            .unwrap_or_else(|_| "testnet".into())
    }

    pub fn rpc_url() -> String {
        // Priority: LSP_UTILS_RPC_URL > network default
        if let Ok(url) = std::env::var("LSP_UTILS_RPC_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        if network().contains("mainnet") {
            "https://rpc.mainnet.lukso.network".into()
        } else {
            "https://rpc.testnet.lukso.network".into()
        }
    }

    pub fn chain_id() -> Option<u64> {
        if network().contains("mainnet") {
            Some(MAINNET_CHAIN_ID)
        } else if network().contains("testnet") {
            Some(TESTNET_CHAIN_ID)
        } else {
            None
        }
    }
}
