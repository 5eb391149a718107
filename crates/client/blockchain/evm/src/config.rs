//! EVM adapter configuration.

use std::env;

use client_blockchain_core::{BlockchainConfig, ChainId};

/// Endpoints and accounts used by the HTTP adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmConfig {
    /// Voucher issuance endpoint (`POST`)
    pub voucher_api_url: String,

    /// Relay that submits signed vouchers to the collection contract (`POST`)
    pub mint_relay_url: String,

    /// Index listing minted tokens (`GET`); the scoreboard is empty without it
    pub collection_api_url: Option<String>,

    /// Address of the deployed collection contract
    pub collection_address: String,

    /// Player account; the wallet reports unavailable when unset
    pub wallet_address: Option<String>,

    pub chain_id: ChainId,
}

impl EvmConfig {
    pub fn new(
        voucher_api_url: impl Into<String>,
        mint_relay_url: impl Into<String>,
        collection_address: impl Into<String>,
    ) -> Self {
        Self {
            voucher_api_url: voucher_api_url.into(),
            mint_relay_url: mint_relay_url.into(),
            collection_api_url: None,
            collection_address: collection_address.into(),
            wallet_address: None,
            chain_id: ChainId::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VOUCHER_API_URL` - Voucher issuance endpoint (required)
    /// - `MINT_RELAY_URL` - Mint relay endpoint (required)
    /// - `NFT_COLLECTION_ADDRESS` - Collection contract address (required)
    /// - `COLLECTION_API_URL` - Minted token index
    /// - `WALLET_ADDRESS` - Player account
    /// - `CHAIN_ID` - EVM chain id (default: 80001)
    pub fn from_env() -> Result<Self, String> {
        let voucher_api_url = required("VOUCHER_API_URL")?;
        let mint_relay_url = required("MINT_RELAY_URL")?;
        let collection_address = required("NFT_COLLECTION_ADDRESS")?;

        let chain_id = match optional("CHAIN_ID") {
            Some(raw) => raw
                .parse::<u64>()
                .map(ChainId)
                .map_err(|_| format!("Invalid CHAIN_ID: {}", raw))?,
            None => ChainId::default(),
        };

        Ok(Self {
            voucher_api_url,
            mint_relay_url,
            collection_api_url: optional("COLLECTION_API_URL"),
            collection_address,
            wallet_address: optional("WALLET_ADDRESS"),
            chain_id,
        })
    }

    pub fn with_collection_api_url(mut self, url: impl Into<String>) -> Self {
        self.collection_api_url = Some(url.into());
        self
    }

    pub fn with_wallet_address(mut self, address: impl Into<String>) -> Self {
        self.wallet_address = Some(address.into());
        self
    }

    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(key: &str) -> Result<String, String> {
    optional(key).ok_or_else(|| format!("{} is not set", key))
}

fn check_url(name: &str, url: &str) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("Invalid {} format: {}", name, url));
    }
    Ok(())
}

/// `0x` followed by 40 hex digits.
pub(crate) fn is_evm_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

impl BlockchainConfig for EvmConfig {
    fn network_name(&self) -> &str {
        match self.chain_id {
            ChainId::MUMBAI => "polygon-mumbai",
            ChainId::POLYGON => "polygon-mainnet",
            _ => "evm-custom",
        }
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    fn validate(&self) -> Result<(), String> {
        check_url("voucher API URL", &self.voucher_api_url)?;
        check_url("mint relay URL", &self.mint_relay_url)?;
        if let Some(ref url) = self.collection_api_url {
            check_url("collection API URL", url)?;
        }

        if !is_evm_address(&self.collection_address) {
            return Err(format!(
                "Invalid collection address: {}",
                self.collection_address
            ));
        }

        // The wallet address is checked on connect so a typo shows up as an
        // unavailable wallet rather than a startup failure.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    #[test]
    fn validates_url_schemes() {
        let config = EvmConfig::new("https://api.example/server", "http://relay", COLLECTION);
        assert!(config.validate().is_ok());

        let bad = EvmConfig::new("ftp://api.example", "http://relay", COLLECTION);
        assert!(bad.validate().unwrap_err().contains("voucher API URL"));

        let bad_index = config.clone().with_collection_api_url("localhost:3000");
        assert!(bad_index.validate().is_err());
    }

    #[test]
    fn validates_collection_address() {
        let config = EvmConfig::new("https://api", "https://relay", "0x1234");
        assert!(config.validate().unwrap_err().contains("collection address"));
    }

    #[test]
    fn network_name_follows_chain() {
        let config = EvmConfig::new("https://api", "https://relay", COLLECTION);
        assert_eq!(config.network_name(), "polygon-mumbai");
        assert_eq!(
            config.with_chain_id(ChainId(31337)).network_name(),
            "evm-custom"
        );
    }

    #[test]
    fn recognises_evm_addresses() {
        assert!(is_evm_address(COLLECTION));
        assert!(!is_evm_address("5FbDB2315678afecb367f032d93F642f64180aa3"));
        assert!(!is_evm_address("0xZZbDB2315678afecb367f032d93F642f64180aa3"));
    }
}
