//! EVM adapter bundle.

use std::sync::Arc;
use std::time::Duration;

use client_blockchain_core::{BlockchainConfig, CollectionReader, MintCapabilities};

use crate::collection::{EmptyCollection, HttpCollectionReader};
use crate::config::EvmConfig;
use crate::error::{EvmError, Result};
use crate::mint::HttpMintSubmitter;
use crate::voucher::HttpVoucherIssuer;
use crate::wallet::ConfiguredWallet;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds every HTTP adapter on one shared connection pool.
pub struct EvmClient {
    config: EvmConfig,
    http_client: reqwest::Client,
}

impl EvmClient {
    /// Create a new client after validating `config`.
    pub fn new(config: EvmConfig) -> Result<Self> {
        config.validate().map_err(EvmError::InvalidConfig)?;

        // Only the connect phase is bounded; a slow issuer keeps the
        // workflow waiting instead of failing the attempt.
        let http_client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        tracing::info!(
            network = config.network_name(),
            chain = %config.chain_id,
            collection = %config.collection_address,
            "EVM adapters configured"
        );

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &EvmConfig {
        &self.config
    }

    pub fn voucher_issuer(&self) -> HttpVoucherIssuer {
        HttpVoucherIssuer::new(self.http_client.clone(), &self.config.voucher_api_url)
    }

    pub fn mint_submitter(&self) -> HttpMintSubmitter {
        HttpMintSubmitter::new(
            self.http_client.clone(),
            &self.config.mint_relay_url,
            &self.config.collection_address,
            self.config.chain_id,
        )
    }

    pub fn wallet(&self) -> ConfiguredWallet {
        ConfiguredWallet::new(self.config.wallet_address.clone(), self.config.chain_id)
    }

    pub fn collection_reader(&self) -> Arc<dyn CollectionReader> {
        match &self.config.collection_api_url {
            Some(url) => Arc::new(HttpCollectionReader::new(self.http_client.clone(), url)),
            None => Arc::new(EmptyCollection),
        }
    }

    /// Capabilities for the minting workflow.
    pub fn capabilities(&self) -> MintCapabilities {
        MintCapabilities {
            chain: self.config.chain_id,
            wallet: Arc::new(self.wallet()),
            issuer: Arc::new(self.voucher_issuer()),
            minter: Arc::new(self.mint_submitter()),
            collection: self.collection_reader(),
        }
    }
}
