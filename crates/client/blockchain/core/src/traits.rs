//! Minting capability traits.
//!
//! Each step of the minting workflow is a separate capability so adapters
//! can be mixed: a browser-less wallet, an HTTP issuer, a relayed minter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{
    ChainId, CollectionEntry, MintedToken, Voucher, VoucherRequest, WalletConnection,
};

// ============================================================================
// Error Types
// ============================================================================

/// Transport layer errors shared by the HTTP adapters.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Wallet connection errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet provider is present.
    #[error("Wallet unavailable: {0}")]
    Unavailable(String),

    /// The user or wallet refused the connection.
    #[error("Wallet connection rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

/// Voucher issuance errors.
#[derive(Debug, thiserror::Error)]
pub enum IssuanceError {
    /// The issuer answered with a non-success status and a reason.
    #[error("Voucher rejected ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// The issuer answered with success but no usable voucher.
    #[error("Invalid issuer response: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

impl IssuanceError {
    /// Reason shown to the player.
    ///
    /// A rejection carries the issuer's message verbatim; anything else is
    /// reduced to a fixed sentence.
    pub fn user_reason(&self) -> String {
        match self {
            IssuanceError::Rejected { reason, .. } => reason.clone(),
            IssuanceError::InvalidResponse(_) | IssuanceError::TransportError(_) => {
                "Could not obtain a mint voucher".to_string()
            }
        }
    }
}

/// Mint submission errors.
#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("Mint transaction rejected: {0}")]
    Rejected(String),

    #[error("Invalid voucher: {0}")]
    InvalidVoucher(String),

    #[error("Voucher already used")]
    VoucherReplayed,

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

/// Collection query errors.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Invalid collection data: {0}")]
    InvalidData(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

// ============================================================================
// Capabilities
// ============================================================================

/// Account connection.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Connect an account on `chain`.
    ///
    /// Returns [`WalletError::Unavailable`] when no provider exists.
    async fn connect(&self, chain: ChainId) -> Result<WalletConnection, WalletError>;
}

/// Voucher issuance service.
///
/// Contract: rejects an address that already holds a voucher and an empty
/// username; otherwise returns a voucher bound to the exact request fields.
#[async_trait]
pub trait VoucherIssuer: Send + Sync {
    async fn issue(&self, request: &VoucherRequest) -> Result<Voucher, IssuanceError>;
}

/// Mint submission with a signed voucher.
#[async_trait]
pub trait MintSubmitter: Send + Sync {
    async fn mint(&self, voucher: &Voucher) -> Result<MintedToken, MintError>;
}

/// Read access to the minted collection.
#[async_trait]
pub trait CollectionReader: Send + Sync {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError>;
}

// ============================================================================
// Bundle
// ============================================================================

/// Capabilities resolved at process start and handed to the workflow.
#[derive(Clone)]
pub struct MintCapabilities {
    pub chain: ChainId,
    pub wallet: Arc<dyn WalletConnector>,
    pub issuer: Arc<dyn VoucherIssuer>,
    pub minter: Arc<dyn MintSubmitter>,
    pub collection: Arc<dyn CollectionReader>,
}

impl std::fmt::Debug for MintCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MintCapabilities")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_reason_is_verbatim() {
        let error = IssuanceError::Rejected {
            status: 400,
            reason: "Already minted".into(),
        };
        assert_eq!(error.user_reason(), "Already minted");
    }

    #[test]
    fn transport_failure_hides_cause() {
        let error = IssuanceError::from(TransportError::NetworkError("connection reset".into()));
        assert_eq!(error.user_reason(), "Could not obtain a mint voucher");
    }
}
