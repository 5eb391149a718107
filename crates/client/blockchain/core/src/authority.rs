//! In-process voucher authority and collection.
//!
//! [`LocalVoucherAuthority`] plays the issuance service: one voucher per
//! address, non-empty usernames only, and an Ed25519 signature over the
//! request fields plus a random uid. [`LocalCollection`] plays the contract:
//! it verifies the signature against the authority's key, refuses a uid it
//! has already seen, and hands out sequential token ids. [`LocalWallet`]
//! stands in for a browser wallet with a fixed account.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::traits::{
    CollectionError, CollectionReader, IssuanceError, MintError, MintSubmitter, VoucherIssuer,
    WalletConnector, WalletError,
};
use crate::types::{
    ChainId, CollectionEntry, MintedToken, TokenId, Voucher, VoucherRequest, WalletAddress,
    WalletConnection,
};

/// Status the authority reports for rejected requests.
const REJECTED_STATUS: u16 = 400;

/// Voucher body produced by [`LocalVoucherAuthority`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedPayload {
    pub player_address: WalletAddress,
    pub username: String,
    pub record_seconds: f64,
    /// Random hex nonce; makes each voucher single-use.
    pub uid: String,
    /// Hex-encoded Ed25519 signature over [`SignedPayload::digest`].
    pub signature: String,
}

impl SignedPayload {
    /// SHA-256 over the newline-joined bound fields.
    pub fn digest(
        player_address: &WalletAddress,
        username: &str,
        record_seconds: f64,
        uid: &str,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(player_address.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(username.as_bytes());
        hasher.update(b"\n");
        hasher.update(record_seconds.to_string().as_bytes());
        hasher.update(b"\n");
        hasher.update(uid.as_bytes());
        hasher.finalize().into()
    }

    fn verify(&self, key: &VerifyingKey) -> Result<(), MintError> {
        let bytes = hex::decode(&self.signature)
            .map_err(|e| MintError::InvalidVoucher(format!("signature encoding: {e}")))?;
        let signature = Signature::from_slice(&bytes)
            .map_err(|_| MintError::InvalidVoucher("signature must be 64 bytes".into()))?;
        let digest = Self::digest(
            &self.player_address,
            &self.username,
            self.record_seconds,
            &self.uid,
        );
        key.verify(&digest, &signature)
            .map_err(|_| MintError::InvalidVoucher("signature does not match".into()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Voucher issuer holding the signing key and the issued-address ledger.
pub struct LocalVoucherAuthority {
    signing_key: SigningKey,
    issued: Mutex<HashSet<WalletAddress>>,
}

impl LocalVoucherAuthority {
    pub fn new(signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            issued: Mutex::new(HashSet::new()),
        }
    }

    /// Authority with a fresh key from the OS RNG.
    pub fn generate() -> Self {
        Self::new(SigningKey::generate(&mut OsRng))
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::new(SigningKey::from_bytes(&seed))
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn has_issued(&self, address: &WalletAddress) -> bool {
        lock(&self.issued).contains(address)
    }
}

#[async_trait]
impl VoucherIssuer for LocalVoucherAuthority {
    async fn issue(&self, request: &VoucherRequest) -> Result<Voucher, IssuanceError> {
        if request.username.trim().is_empty() {
            return Err(IssuanceError::Rejected {
                status: REJECTED_STATUS,
                reason: "Username is required".into(),
            });
        }

        // Claim the address before signing so concurrent requests cannot both pass.
        if !lock(&self.issued).insert(request.player_address.clone()) {
            tracing::info!(address = %request.player_address, "voucher refused: already issued");
            return Err(IssuanceError::Rejected {
                status: REJECTED_STATUS,
                reason: "Already minted".into(),
            });
        }

        let mut nonce = [0u8; 16];
        OsRng.fill_bytes(&mut nonce);
        let uid = hex::encode(nonce);

        let digest = SignedPayload::digest(
            &request.player_address,
            &request.username,
            request.record_seconds,
            &uid,
        );
        let signature = self.signing_key.sign(&digest);

        let payload = SignedPayload {
            player_address: request.player_address.clone(),
            username: request.username.clone(),
            record_seconds: request.record_seconds,
            uid,
            signature: hex::encode(signature.to_bytes()),
        };

        tracing::debug!(address = %payload.player_address, uid = %payload.uid, "voucher issued");

        serde_json::to_value(&payload)
            .map(Voucher::new)
            .map_err(|e| IssuanceError::InvalidResponse(e.to_string()))
    }
}

#[derive(Default)]
struct CollectionState {
    minted: Vec<CollectionEntry>,
    used_uids: HashSet<String>,
}

/// Collection that accepts vouchers from one authority.
pub struct LocalCollection {
    verifying_key: VerifyingKey,
    state: Mutex<CollectionState>,
}

impl LocalCollection {
    pub fn new(verifying_key: VerifyingKey) -> Self {
        Self {
            verifying_key,
            state: Mutex::new(CollectionState::default()),
        }
    }

    pub fn for_authority(authority: &LocalVoucherAuthority) -> Self {
        Self::new(authority.verifying_key())
    }
}

#[async_trait]
impl MintSubmitter for LocalCollection {
    async fn mint(&self, voucher: &Voucher) -> Result<MintedToken, MintError> {
        let payload: SignedPayload = serde_json::from_value(voucher.signed_payload().clone())
            .map_err(|e| MintError::InvalidVoucher(e.to_string()))?;
        payload.verify(&self.verifying_key)?;

        let mut state = lock(&self.state);
        if !state.used_uids.insert(payload.uid.clone()) {
            return Err(MintError::VoucherReplayed);
        }

        let token_id = TokenId::new(state.minted.len().to_string());
        state.minted.push(CollectionEntry {
            token_id: token_id.clone(),
            name: payload.username,
            description: format!("Finished in {} seconds", payload.record_seconds),
            owner: payload.player_address,
        });

        tracing::info!(token_id = %token_id, "collectible minted");
        Ok(MintedToken { token_id })
    }
}

#[async_trait]
impl CollectionReader for LocalCollection {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
        Ok(lock(&self.state).minted.clone())
    }
}

/// Wallet with a fixed account, or none at all.
#[derive(Debug, Clone, Default)]
pub struct LocalWallet {
    address: Option<WalletAddress>,
}

impl LocalWallet {
    pub fn new(address: Option<WalletAddress>) -> Self {
        Self { address }
    }
}

#[async_trait]
impl WalletConnector for LocalWallet {
    async fn connect(&self, chain: ChainId) -> Result<WalletConnection, WalletError> {
        let address = self
            .address
            .clone()
            .ok_or_else(|| WalletError::Unavailable("no local account configured".into()))?;
        Ok(WalletConnection {
            address,
            chain_id: chain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(address: &str, username: &str) -> VoucherRequest {
        VoucherRequest {
            player_address: WalletAddress::new(address),
            username: username.into(),
            record_seconds: 12.345,
        }
    }

    #[tokio::test]
    async fn issues_once_per_address() {
        let authority = LocalVoucherAuthority::from_seed([7u8; 32]);

        authority.issue(&request("0xaaa", "Alice")).await.unwrap();
        let second = authority.issue(&request("0xaaa", "Alice again")).await;

        match second {
            Err(IssuanceError::Rejected { reason, .. }) => assert_eq!(reason, "Already minted"),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(authority.has_issued(&WalletAddress::new("0xaaa")));
    }

    #[tokio::test]
    async fn empty_username_is_rejected_without_claiming_address() {
        let authority = LocalVoucherAuthority::from_seed([7u8; 32]);

        let result = authority.issue(&request("0xbbb", "  ")).await;
        assert!(matches!(result, Err(IssuanceError::Rejected { .. })));
        assert!(!authority.has_issued(&WalletAddress::new("0xbbb")));
    }

    #[tokio::test]
    async fn voucher_is_bound_to_request_fields() {
        let authority = LocalVoucherAuthority::from_seed([1u8; 32]);
        let voucher = authority.issue(&request("0xccc", "Bob")).await.unwrap();

        let payload: SignedPayload =
            serde_json::from_value(voucher.signed_payload().clone()).unwrap();
        assert_eq!(payload.player_address, WalletAddress::new("0xccc"));
        assert_eq!(payload.username, "Bob");
        assert_eq!(payload.record_seconds, 12.345);
        assert!(payload.verify(&authority.verifying_key()).is_ok());
    }

    #[tokio::test]
    async fn collection_mints_verified_vouchers_once() {
        let authority = LocalVoucherAuthority::from_seed([2u8; 32]);
        let collection = LocalCollection::for_authority(&authority);
        let voucher = authority.issue(&request("0xddd", "Carol")).await.unwrap();

        let token = collection.mint(&voucher).await.unwrap();
        assert_eq!(token.token_id, TokenId::new("0"));
        assert!(matches!(
            collection.mint(&voucher).await,
            Err(MintError::VoucherReplayed)
        ));

        let minted = collection.list_minted().await.unwrap();
        assert_eq!(minted.len(), 1);
        assert_eq!(minted[0].name, "Carol");
        assert_eq!(minted[0].description, "Finished in 12.345 seconds");
    }

    #[tokio::test]
    async fn collection_rejects_tampered_voucher() {
        let authority = LocalVoucherAuthority::from_seed([3u8; 32]);
        let collection = LocalCollection::for_authority(&authority);
        let voucher = authority.issue(&request("0xeee", "Dave")).await.unwrap();

        let mut payload = voucher.into_signed_payload();
        payload["username"] = serde_json::json!("Mallory");

        assert!(matches!(
            collection.mint(&Voucher::new(payload)).await,
            Err(MintError::InvalidVoucher(_))
        ));
    }

    #[tokio::test]
    async fn collection_rejects_foreign_authority() {
        let authority = LocalVoucherAuthority::from_seed([4u8; 32]);
        let other = LocalVoucherAuthority::from_seed([5u8; 32]);
        let collection = LocalCollection::for_authority(&authority);
        let voucher = other.issue(&request("0xfff", "Eve")).await.unwrap();

        assert!(matches!(
            collection.mint(&voucher).await,
            Err(MintError::InvalidVoucher(_))
        ));
    }

    #[tokio::test]
    async fn local_wallet_needs_an_account() {
        let wallet = LocalWallet::new(Some(WalletAddress::new("0xabc")));
        let connection = wallet.connect(ChainId::MUMBAI).await.unwrap();
        assert_eq!(connection.address, WalletAddress::new("0xabc"));

        assert!(matches!(
            LocalWallet::default().connect(ChainId::MUMBAI).await,
            Err(WalletError::Unavailable(_))
        ));
    }
}
