//! Minting capability layer for the platformer client.
//!
//! This crate defines the capabilities the minting workflow consumes and the
//! types that cross them.
//!
//! # Architecture
//!
//! ```text
//! MintCapabilities (bundle handed to the workflow at startup)
//!   ├── WalletConnector   connect → {address, chainId}
//!   ├── VoucherIssuer     {playerAddress, username, recordSeconds} → signed voucher
//!   ├── MintSubmitter     signed voucher → minted token
//!   └── CollectionReader  minted tokens (scoreboard)
//! ```
//!
//! Concrete adapters live in other crates (`client-blockchain-evm` for HTTP
//! endpoints). [`authority`] holds an in-process issuer and collection that
//! honour the same contract, used offline and in tests.
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{MintCapabilities, VoucherRequest};
//!
//! async fn mint(caps: &MintCapabilities, request: VoucherRequest) {
//!     let voucher = caps.issuer.issue(&request).await?;
//!     let token = caps.minter.mint(&voucher).await?;
//! }
//! ```

pub mod authority;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export all traits
pub use traits::{
    CollectionError, CollectionReader, IssuanceError, MintCapabilities, MintError,
    MintSubmitter, TransportError, VoucherIssuer, WalletConnector, WalletError,
};

// Re-export all types
pub use types::{
    BlockchainConfig, ChainId, CollectionEntry, MintedToken, TokenId, Voucher, VoucherRequest,
    WalletAddress, WalletConnection,
};

pub use authority::{LocalCollection, LocalVoucherAuthority, LocalWallet, SignedPayload};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCollection, MockMinter, MockVoucherIssuer, MockWallet};
