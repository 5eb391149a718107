//! Client assembly with a scripted frontend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_blockchain_core::{MintCapabilities, MockMinter, MockVoucherIssuer, MockWallet};
use client_frontend_core::{MintHandle, MintSnapshot, MintState};
use game_core::SessionSummary;
use star_client::{Client, Frontend, capabilities};

/// Frontend that ends the scene at once and submits a fixed name.
struct ScriptedFrontend {
    name: &'static str,
    outcome: Arc<Mutex<Option<MintSnapshot>>>,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, handle: MintHandle) -> anyhow::Result<()> {
        handle.scene_ended(SessionSummary::new(120, 12_345)).await?;
        handle.submit(self.name).await?;
        let snapshot = handle.wait_for(|s| s.state.is_terminal()).await?;
        *self.outcome.lock().unwrap() = Some(snapshot);
        Ok(())
    }
}

fn scripted(name: &'static str) -> (ScriptedFrontend, Arc<Mutex<Option<MintSnapshot>>>) {
    let outcome = Arc::new(Mutex::new(None));
    (
        ScriptedFrontend {
            name,
            outcome: outcome.clone(),
        },
        outcome,
    )
}

#[test]
fn builder_requires_frontend_and_capabilities() {
    let missing_frontend = Client::builder().capabilities(capabilities::local(None)).build();
    assert!(missing_frontend.is_err());

    let (frontend, _) = scripted("Alice");
    assert!(Client::builder().frontend(frontend).build().is_err());
}

#[tokio::test]
async fn run_hands_the_frontend_a_live_workflow() {
    let wallet = Arc::new(MockWallet::connected("0xabc"));
    let issuer = Arc::new(MockVoucherIssuer::succeeding(serde_json::json!("abc")));
    let minter = Arc::new(MockMinter::minting("3"));
    let capabilities = MintCapabilities::from_mocks(wallet, issuer.clone(), minter);

    let (frontend, outcome) = scripted("Alice");
    Client::builder()
        .frontend(frontend)
        .capabilities(capabilities)
        .build()
        .unwrap()
        .run()
        .await
        .unwrap();

    let snapshot = outcome.lock().unwrap().clone().unwrap();
    assert_eq!(snapshot.state, MintState::Success);
    assert_eq!(snapshot.token_id.map(|id| id.to_string()), Some("3".to_string()));
    assert_eq!(issuer.request_count(), 1);
}

#[tokio::test]
async fn local_authority_mints_without_endpoints() {
    let capabilities = capabilities::local(Some(client_blockchain_core::WalletAddress::new(
        "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    )));
    let collection = capabilities.collection.clone();

    let (frontend, outcome) = scripted("Bob");
    Client::builder()
        .frontend(frontend)
        .capabilities(capabilities)
        .build()
        .unwrap()
        .run()
        .await
        .unwrap();

    let snapshot = outcome.lock().unwrap().clone().unwrap();
    assert_eq!(snapshot.state, MintState::Success);

    let minted = collection.list_minted().await.unwrap();
    assert_eq!(minted.len(), 1);
    assert_eq!(minted[0].name, "Bob");
    assert_eq!(minted[0].description, "Finished in 12.345 seconds");
}
