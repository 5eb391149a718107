//! Scoreboard listings fetched off the frame path.
//!
//! A listing can take as long as the collection endpoint does, so it runs on
//! its own task and reaches the event loop through a channel, like workflow
//! snapshots do.

use anyhow::{Result, anyhow};
use tokio::sync::mpsc;

use client_frontend_core::{MintHandle, ScoreboardView};

pub(crate) type Listing = Result<ScoreboardView>;

/// At most one listing request in flight, plus the channel its result lands on.
pub(crate) struct ScoreboardRequests {
    tx: mpsc::UnboundedSender<Listing>,
    rx: mpsc::UnboundedReceiver<Listing>,
    pending: bool,
}

impl ScoreboardRequests {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: false,
        }
    }

    /// Starts a listing and returns immediately.
    ///
    /// Returns `false` when one is already running.
    pub(crate) fn request(&mut self, handle: &MintHandle) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;

        let handle = handle.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let listing = handle
                .list_collection()
                .await
                .map(|entries| ScoreboardView::from_entries(&entries));
            if tx.send(listing).is_err() {
                tracing::debug!("Scoreboard listing finished after the event loop stopped");
            }
        });
        true
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Waits for the running listing. Cancel-safe.
    pub(crate) async fn next(&mut self) -> Listing {
        let listing = self
            .rx
            .recv()
            .await
            .unwrap_or_else(|| Err(anyhow!("scoreboard channel closed")));
        self.pending = false;
        listing
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use client_blockchain_core::{
        CollectionEntry, CollectionError, CollectionReader, MintCapabilities, MockCollection,
        MockMinter, MockVoucherIssuer, MockWallet, TokenId, WalletAddress,
    };
    use client_frontend_core::{FrontendConfig, MintCoordinator};
    use tokio::time::timeout;

    use super::*;

    /// Collection endpoint that accepts the request and never answers.
    struct StalledCollection;

    #[async_trait]
    impl CollectionReader for StalledCollection {
        async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
            std::future::pending().await
        }
    }

    fn handle_with(collection: Arc<dyn CollectionReader>) -> MintHandle {
        let mut capabilities = MintCapabilities::from_mocks(
            Arc::new(MockWallet::unavailable()),
            Arc::new(MockVoucherIssuer::succeeding(serde_json::json!("abc"))),
            Arc::new(MockMinter::minting("0")),
        );
        capabilities.collection = collection;
        MintCoordinator::spawn(capabilities, &FrontendConfig::default())
    }

    #[tokio::test]
    async fn stalled_listing_returns_control_at_once() {
        let handle = handle_with(Arc::new(StalledCollection));
        let mut requests = ScoreboardRequests::new();

        assert!(requests.request(&handle));
        assert!(requests.is_pending());
        assert!(!requests.request(&handle));

        assert!(
            timeout(Duration::from_millis(50), requests.next())
                .await
                .is_err()
        );
        assert!(requests.is_pending());
    }

    #[tokio::test]
    async fn listing_arrives_as_a_view() {
        let entry = CollectionEntry {
            token_id: TokenId::new("0"),
            name: "Alice".into(),
            description: "Finished in 12.345 seconds".into(),
            owner: WalletAddress::new("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        };
        let handle = handle_with(Arc::new(MockCollection::with_entries(vec![entry])));
        let mut requests = ScoreboardRequests::new();

        assert!(requests.request(&handle));
        let view = requests.next().await.unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].handle, "@Alice");

        assert!(!requests.is_pending());
        assert!(requests.request(&handle));
    }
}
