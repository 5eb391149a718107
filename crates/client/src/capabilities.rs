//! Resolution of the mint capabilities at startup.

use std::env;
use std::sync::Arc;

use client_blockchain_core::{
    ChainId, LocalCollection, LocalVoucherAuthority, LocalWallet, MintCapabilities, WalletAddress,
};

/// Capabilities backed by the in-process voucher authority.
///
/// The collection verifies vouchers against the authority's key and doubles
/// as the scoreboard source.
pub fn local(wallet: Option<WalletAddress>) -> MintCapabilities {
    let authority = LocalVoucherAuthority::generate();
    let collection = Arc::new(LocalCollection::for_authority(&authority));

    MintCapabilities {
        chain: ChainId::MUMBAI,
        wallet: Arc::new(LocalWallet::new(wallet)),
        issuer: Arc::new(authority),
        minter: collection.clone(),
        collection,
    }
}

/// Local capabilities using the `WALLET_ADDRESS` account, if set.
pub fn local_from_env() -> MintCapabilities {
    let wallet = env::var("WALLET_ADDRESS")
        .ok()
        .filter(|address| !address.trim().is_empty())
        .map(WalletAddress::new);
    local(wallet)
}

/// HTTP capabilities configured from the environment.
#[cfg(feature = "blockchain-evm")]
pub fn evm_from_env() -> anyhow::Result<MintCapabilities> {
    use anyhow::Context;
    use client_blockchain_core::BlockchainConfig;
    use client_blockchain_evm::{EvmClient, EvmConfig};

    let config = EvmConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("EVM configuration not found")?;

    tracing::info!(
        "EVM configuration loaded: network={}, chain={}",
        config.network_name(),
        config.chain_id()
    );

    let client = EvmClient::new(config).context("Failed to initialize EVM client")?;
    Ok(client.capabilities())
}

/// Prefers the HTTP endpoints and falls back to the local authority.
pub fn resolve() -> MintCapabilities {
    #[cfg(feature = "blockchain-evm")]
    {
        match evm_from_env() {
            Ok(capabilities) => {
                tracing::info!("EVM minting enabled");
                return capabilities;
            }
            Err(e) => {
                tracing::warn!(
                    "{:#}. Continuing with the local voucher authority.",
                    e
                );
            }
        }
    }

    #[cfg(not(feature = "blockchain-evm"))]
    {
        tracing::debug!("EVM integration disabled (blockchain-evm feature not enabled)");
    }

    local_from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::VoucherRequest;

    #[tokio::test]
    async fn local_capabilities_share_one_collection() {
        let capabilities = local(Some(WalletAddress::new("0xabc")));

        let connection = capabilities.wallet.connect(capabilities.chain).await.unwrap();
        let voucher = capabilities
            .issuer
            .issue(&VoucherRequest {
                player_address: connection.address,
                username: "Alice".into(),
                record_seconds: 12.345,
            })
            .await
            .unwrap();
        capabilities.minter.mint(&voucher).await.unwrap();

        let minted = capabilities.collection.list_minted().await.unwrap();
        assert_eq!(minted.len(), 1);
        assert_eq!(minted[0].name, "Alice");
    }
}
