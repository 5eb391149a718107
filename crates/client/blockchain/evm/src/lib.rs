//! HTTP adapters for minting on an EVM chain.
//!
//! This crate connects the minting capabilities to the outside world:
//! - the voucher issuance endpoint (server-side signer)
//! - a mint relay that submits signed vouchers to the collection contract
//! - the collection index used by the scoreboard
//! - a wallet resolved from configuration
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_evm::{EvmClient, EvmConfig};
//!
//! let config = EvmConfig::from_env()?;
//! let client = EvmClient::new(config)?;
//! let capabilities = client.capabilities();
//! ```

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
mod http;
pub mod mint;
pub mod voucher;
pub mod wallet;

pub use client::EvmClient;
pub use collection::HttpCollectionReader;
pub use config::EvmConfig;
pub use error::{EvmError, Result};
pub use mint::HttpMintSubmitter;
pub use voucher::HttpVoucherIssuer;
pub use wallet::ConfiguredWallet;
