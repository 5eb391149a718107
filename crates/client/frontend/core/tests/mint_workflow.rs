//! Mint coordinator driven against mock and local capabilities.

use std::sync::Arc;

use async_trait::async_trait;
use client_blockchain_core::{
    ChainId, CollectionEntry, CollectionError, CollectionReader, LocalCollection,
    LocalVoucherAuthority, MintCapabilities, MockMinter, MockVoucherIssuer, MockWallet, TokenId,
};
use client_frontend_core::{
    EndingView, FrontendConfig, MintCoordinator, MintHandle, MintSnapshot, MintState, Notice,
    WorkflowError,
};
use game_core::SessionSummary;
use serde_json::json;
use tokio::time::{Duration, timeout};

const PLAYER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

struct Harness {
    handle: MintHandle,
    wallet: Arc<MockWallet>,
    issuer: Arc<MockVoucherIssuer>,
    minter: Arc<MockMinter>,
}

async fn harness(wallet: MockWallet, issuer: MockVoucherIssuer, minter: MockMinter) -> Harness {
    let wallet = Arc::new(wallet);
    let issuer = Arc::new(issuer);
    let minter = Arc::new(minter);
    let capabilities = MintCapabilities::from_mocks(wallet.clone(), issuer.clone(), minter.clone());

    let handle = MintCoordinator::spawn(capabilities, &FrontendConfig::default());
    handle
        .scene_ended(SessionSummary::new(120, 12_345))
        .await
        .unwrap();

    Harness {
        handle,
        wallet,
        issuer,
        minter,
    }
}

async fn terminal(handle: &MintHandle) -> MintSnapshot {
    handle.wait_for(|s| s.state.is_terminal()).await.unwrap()
}

#[tokio::test]
async fn empty_name_makes_no_requests() {
    let h = harness(
        MockWallet::connected(PLAYER),
        MockVoucherIssuer::succeeding(json!("abc")),
        MockMinter::minting("1"),
    )
    .await;

    h.handle.submit("").await.unwrap();
    let snapshot = h.handle.wait_for(|s| s.notice_seq == 1).await.unwrap();

    assert_eq!(snapshot.state, MintState::AwaitingName);
    assert_eq!(snapshot.notice, Some(Notice::NameRequired));
    assert_eq!(
        EndingView::from_snapshot(&snapshot).message.as_deref(),
        Some("Write your nickname")
    );
    assert_eq!(h.wallet.connect_count(), 0);
    assert_eq!(h.issuer.request_count(), 0);
}

#[tokio::test]
async fn successful_mint_congratulates_player() {
    let h = harness(
        MockWallet::connected(PLAYER),
        MockVoucherIssuer::succeeding(json!("abc")),
        MockMinter::minting("5"),
    )
    .await;

    h.handle.submit("Alice").await.unwrap();
    let snapshot = terminal(&h.handle).await;

    assert_eq!(snapshot.state, MintState::Success);
    assert_eq!(snapshot.token_id, Some(TokenId::new("5")));
    assert_eq!(
        snapshot.notice.map(|n| n.to_string()).as_deref(),
        Some("Congrats Alice for scoring 120 in 12.345 seconds.")
    );

    let requests = h.issuer.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].player_address.as_str(), PLAYER);
    assert_eq!(requests[0].username, "Alice");
    assert_eq!(requests[0].record_seconds, 12.345);

    let submissions = h.minter.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].signed_payload(), &json!("abc"));
}

#[tokio::test]
async fn issuer_rejection_is_shown_verbatim() {
    let h = harness(
        MockWallet::connected(PLAYER),
        MockVoucherIssuer::rejecting(400, "Already minted"),
        MockMinter::minting("1"),
    )
    .await;

    h.handle.submit("Alice").await.unwrap();
    let snapshot = terminal(&h.handle).await;

    assert_eq!(snapshot.state, MintState::Failed);
    assert_eq!(
        snapshot.notice,
        Some(Notice::VoucherRejected("Already minted".into()))
    );
    assert!(h.minter.submissions().is_empty());
}

#[tokio::test]
async fn repeated_submit_while_requesting_sends_one_request() {
    let (issuer, gate) = MockVoucherIssuer::succeeding(json!("abc")).gated();
    let h = harness(MockWallet::connected(PLAYER), issuer, MockMinter::minting("1")).await;

    h.handle.submit("Alice").await.unwrap();
    h.handle
        .wait_for(|s| s.state == MintState::RequestingVoucher)
        .await
        .unwrap();

    for _ in 0..3 {
        h.handle.submit("Alice").await.unwrap();
    }
    // Round trip through the worker so the submits above are processed.
    assert_eq!(
        h.handle.rearm().await,
        Err(WorkflowError::CannotRearm(MintState::RequestingVoucher))
    );

    gate.notify_one();
    let snapshot = terminal(&h.handle).await;

    assert_eq!(snapshot.state, MintState::Success);
    assert_eq!(h.wallet.connect_count(), 1);
    assert_eq!(h.issuer.request_count(), 1);
}

#[tokio::test]
async fn missing_wallet_keeps_name_entry_open() {
    let h = harness(
        MockWallet::unavailable(),
        MockVoucherIssuer::succeeding(json!("abc")),
        MockMinter::minting("1"),
    )
    .await;

    h.handle.submit("Alice").await.unwrap();
    let snapshot = h.handle.wait_for(|s| s.notice_seq == 1).await.unwrap();

    assert_eq!(snapshot.state, MintState::AwaitingName);
    assert!(!snapshot.in_flight);
    assert_eq!(snapshot.notice, Some(Notice::WalletUnavailable));
    assert_eq!(h.issuer.request_count(), 0);
}

#[tokio::test]
async fn mint_fault_reports_generic_reason() {
    let h = harness(
        MockWallet::connected(PLAYER),
        MockVoucherIssuer::succeeding(json!("abc")),
        MockMinter::failing("execution reverted: insufficient funds"),
    )
    .await;

    h.handle.submit("Alice").await.unwrap();
    let snapshot = terminal(&h.handle).await;

    assert_eq!(snapshot.state, MintState::Failed);
    assert_eq!(
        snapshot.notice.map(|n| n.to_string()).as_deref(),
        Some("Failed to mint your collectible")
    );
}

#[tokio::test]
async fn failed_attempt_can_be_rearmed() {
    let h = harness(
        MockWallet::connected(PLAYER),
        MockVoucherIssuer::rejecting(500, "Signer offline"),
        MockMinter::minting("1"),
    )
    .await;

    h.handle.submit("Alice").await.unwrap();
    terminal(&h.handle).await;

    h.handle.rearm().await.unwrap();
    let snapshot = h.handle.snapshot();
    assert_eq!(snapshot.state, MintState::AwaitingName);
    assert!(EndingView::from_snapshot(&snapshot).accepts_name);

    h.handle.submit("Alice").await.unwrap();
    h.handle
        .wait_for(|s| s.state == MintState::Failed)
        .await
        .unwrap();
    assert_eq!(h.issuer.request_count(), 2);
}

#[tokio::test]
async fn local_authority_allows_one_mint_per_address() {
    let authority = Arc::new(LocalVoucherAuthority::generate());
    let collection = Arc::new(LocalCollection::for_authority(&authority));
    let capabilities = MintCapabilities {
        chain: ChainId::MUMBAI,
        wallet: Arc::new(MockWallet::connected(PLAYER)),
        issuer: authority.clone(),
        minter: collection.clone(),
        collection: collection.clone(),
    };

    let first = MintCoordinator::spawn(capabilities.clone(), &FrontendConfig::default());
    first
        .scene_ended(SessionSummary::new(120, 12_345))
        .await
        .unwrap();
    first.submit("Alice").await.unwrap();
    assert_eq!(terminal(&first).await.state, MintState::Success);

    let second = MintCoordinator::spawn(capabilities, &FrontendConfig::default());
    second
        .scene_ended(SessionSummary::new(120, 9_000))
        .await
        .unwrap();
    second.submit("Alice again").await.unwrap();
    let snapshot = terminal(&second).await;
    assert_eq!(
        snapshot.notice,
        Some(Notice::VoucherRejected("Already minted".into()))
    );

    let minted = first.list_collection().await.unwrap();
    assert_eq!(minted.len(), 1);
    assert_eq!(minted[0].name, "Alice");
    assert_eq!(minted[0].description, "Finished in 12.345 seconds");
}

/// Collection endpoint that accepts the request and never answers.
struct StalledCollection;

#[async_trait]
impl CollectionReader for StalledCollection {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn stalled_listing_does_not_hold_up_minting() {
    let mut capabilities = MintCapabilities::from_mocks(
        Arc::new(MockWallet::connected(PLAYER)),
        Arc::new(MockVoucherIssuer::succeeding(json!("abc"))),
        Arc::new(MockMinter::minting("2")),
    );
    capabilities.collection = Arc::new(StalledCollection);
    let handle = MintCoordinator::spawn(capabilities, &FrontendConfig::default());

    let listing = tokio::spawn({
        let handle = handle.clone();
        async move { handle.list_collection().await }
    });

    handle
        .scene_ended(SessionSummary::new(120, 12_345))
        .await
        .unwrap();
    handle.submit("Alice").await.unwrap();
    let snapshot = timeout(Duration::from_secs(2), terminal(&handle))
        .await
        .unwrap();
    assert_eq!(snapshot.state, MintState::Success);

    assert!(!listing.is_finished());
    listing.abort();
}
