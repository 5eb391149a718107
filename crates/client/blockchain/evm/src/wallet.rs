//! Wallet resolved from configuration.

use async_trait::async_trait;

use client_blockchain_core::{
    ChainId, WalletAddress, WalletConnection, WalletConnector, WalletError,
};

use crate::config::is_evm_address;

/// Wallet whose account is fixed at startup.
///
/// A terminal has no injected browser provider, so the account comes from
/// `WALLET_ADDRESS`. Connecting on a chain other than the configured one is
/// refused.
#[derive(Debug, Clone)]
pub struct ConfiguredWallet {
    address: Option<WalletAddress>,
    chain: ChainId,
}

impl ConfiguredWallet {
    pub fn new(address: Option<String>, chain: ChainId) -> Self {
        Self {
            address: address.map(WalletAddress::new),
            chain,
        }
    }
}

#[async_trait]
impl WalletConnector for ConfiguredWallet {
    async fn connect(&self, chain: ChainId) -> Result<WalletConnection, WalletError> {
        let address = self
            .address
            .as_ref()
            .ok_or_else(|| WalletError::Unavailable("WALLET_ADDRESS is not set".into()))?;

        if !is_evm_address(address.as_str()) {
            return Err(WalletError::Unavailable(format!(
                "malformed account address: {address}"
            )));
        }

        if chain != self.chain {
            return Err(WalletError::Rejected(format!(
                "wallet is configured for chain {}, requested {chain}",
                self.chain
            )));
        }

        tracing::info!(address = %address, chain = %chain, "wallet connected");
        Ok(WalletConnection {
            address: address.clone(),
            chain_id: chain,
        })
    }
}
