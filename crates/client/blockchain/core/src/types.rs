//! Common types for minting interactions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Blockchain account identifier as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for lists: first 6 characters, `...`, last 4.
    ///
    /// Addresses too short to abbreviate are returned whole.
    pub fn shortened(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// EVM chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Polygon Mumbai testnet, where the collection is deployed.
    pub const MUMBAI: Self = Self(80001);
    pub const POLYGON: Self = Self(137);
}

impl Default for ChainId {
    fn default() -> Self {
        Self::MUMBAI
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful wallet connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnection {
    pub address: WalletAddress,
    pub chain_id: ChainId,
}

/// Body sent to the voucher issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRequest {
    pub player_address: WalletAddress,
    pub username: String,
    pub record_seconds: f64,
}

/// Signed authorization to mint one collectible.
///
/// The payload is opaque to the client: it is received from the issuer and
/// handed to the minter untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Voucher(serde_json::Value);

impl Voucher {
    pub fn new(signed_payload: serde_json::Value) -> Self {
        Self(signed_payload)
    }

    pub fn signed_payload(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_signed_payload(self) -> serde_json::Value {
        self.0
    }
}

/// On-chain token identifier (decimal string; ids can exceed u64).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor returned by a successful mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedToken {
    pub token_id: TokenId,
}

/// One minted collectible, as listed on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub token_id: TokenId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner: WalletAddress,
}

/// Chain-specific configuration.
///
/// This is a trait to allow different adapters to provide their own config types.
pub trait BlockchainConfig: Send + Sync {
    /// Human-readable network name (e.g., "polygon-mumbai")
    fn network_name(&self) -> &str;

    fn chain_id(&self) -> ChainId;

    /// Validate configuration (endpoint formats, required addresses)
    fn validate(&self) -> Result<(), String>;
}
