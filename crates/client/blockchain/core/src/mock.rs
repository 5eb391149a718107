//! Mock capabilities for testing.
//!
//! Every mock records its calls so tests can assert how many network round
//! trips a workflow made.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::traits::{
    CollectionError, CollectionReader, IssuanceError, MintCapabilities, MintError,
    MintSubmitter, VoucherIssuer, WalletConnector, WalletError,
};
use crate::types::{
    ChainId, CollectionEntry, MintedToken, TokenId, Voucher, VoucherRequest, WalletAddress,
    WalletConnection,
};

/// Wallet that either connects a fixed address or reports no provider.
pub struct MockWallet {
    address: Option<WalletAddress>,
    connects: AtomicUsize,
}

impl MockWallet {
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(WalletAddress::new(address)),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            address: None,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    async fn connect(&self, chain: ChainId) -> Result<WalletConnection, WalletError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        match &self.address {
            Some(address) => Ok(WalletConnection {
                address: address.clone(),
                chain_id: chain,
            }),
            None => Err(WalletError::Unavailable("no provider".into())),
        }
    }
}

/// Issuer returning a scripted answer, optionally held until released.
pub struct MockVoucherIssuer {
    response: Result<serde_json::Value, (u16, String)>,
    requests: Mutex<Vec<VoucherRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockVoucherIssuer {
    pub fn succeeding(signed_payload: serde_json::Value) -> Self {
        Self {
            response: Ok(signed_payload),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn rejecting(status: u16, reason: impl Into<String>) -> Self {
        Self {
            response: Err((status, reason.into())),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Holds every request until the returned [`Notify`] is signalled.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<VoucherRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoucherIssuer for MockVoucherIssuer {
    async fn issue(&self, request: &VoucherRequest) -> Result<Voucher, IssuanceError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.response {
            Ok(payload) => Ok(Voucher::new(payload.clone())),
            Err((status, reason)) => Err(IssuanceError::Rejected {
                status: *status,
                reason: reason.clone(),
            }),
        }
    }
}

/// Minter returning a fixed token id or a fault.
pub struct MockMinter {
    outcome: Result<TokenId, String>,
    submitted: Mutex<Vec<Voucher>>,
}

impl MockMinter {
    pub fn minting(token_id: impl Into<String>) -> Self {
        Self {
            outcome: Ok(TokenId::new(token_id)),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<Voucher> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MintSubmitter for MockMinter {
    async fn mint(&self, voucher: &Voucher) -> Result<MintedToken, MintError> {
        self.submitted.lock().unwrap().push(voucher.clone());
        match &self.outcome {
            Ok(token_id) => Ok(MintedToken {
                token_id: token_id.clone(),
            }),
            Err(reason) => Err(MintError::Rejected(reason.clone())),
        }
    }
}

/// Collection with a fixed listing.
#[derive(Default)]
pub struct MockCollection {
    entries: Vec<CollectionEntry>,
}

impl MockCollection {
    pub fn with_entries(entries: Vec<CollectionEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl CollectionReader for MockCollection {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
        Ok(self.entries.clone())
    }
}

impl MintCapabilities {
    /// Bundles mocks, keeping typed handles available to the caller.
    pub fn from_mocks(
        wallet: Arc<MockWallet>,
        issuer: Arc<MockVoucherIssuer>,
        minter: Arc<MockMinter>,
    ) -> Self {
        Self {
            chain: ChainId::MUMBAI,
            wallet,
            issuer,
            minter,
            collection: Arc::new(MockCollection::default()),
        }
    }
}
