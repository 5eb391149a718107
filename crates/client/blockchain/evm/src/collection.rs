//! Minted token index over HTTP.

use async_trait::async_trait;
use serde::Deserialize;

use client_blockchain_core::{
    CollectionEntry, CollectionError, CollectionReader, TokenId, WalletAddress,
};

use crate::http::{RawResponse, network_error, token_id_text};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexedToken {
    token_id: serde_json::Value,
    owner: String,
    #[serde(default)]
    metadata: IndexedMetadata,
}

#[derive(Default, Deserialize)]
struct IndexedMetadata {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Reads minted collectibles from `GET {url}`.
///
/// The index answers a JSON array of `{tokenId, owner, metadata: {name,
/// description}}`.
#[derive(Clone)]
pub struct HttpCollectionReader {
    http_client: reqwest::Client,
    url: String,
}

impl HttpCollectionReader {
    pub fn new(http_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CollectionReader for HttpCollectionReader {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| network_error("collection query failed", e))?;
        let response = RawResponse::read(response).await?;

        if !response.is_success() {
            return Err(response.unexpected().into());
        }

        let tokens: Vec<IndexedToken> = response.json()?;
        let entries = tokens
            .into_iter()
            .map(|token| {
                let token_id = token_id_text(&token.token_id)
                    .map_err(|e| CollectionError::InvalidData(e.to_string()))?;
                Ok(CollectionEntry {
                    token_id: TokenId::new(token_id),
                    name: token.metadata.name.unwrap_or_default(),
                    description: token.metadata.description.unwrap_or_default(),
                    owner: WalletAddress::new(token.owner),
                })
            })
            .collect::<Result<Vec<_>, CollectionError>>()?;

        tracing::debug!(count = entries.len(), "collection listed");
        Ok(entries)
    }
}

/// Reader used when no index is configured.
pub(crate) struct EmptyCollection;

#[async_trait]
impl CollectionReader for EmptyCollection {
    async fn list_minted(&self) -> Result<Vec<CollectionEntry>, CollectionError> {
        Ok(Vec::new())
    }
}
