//! Mint submission through a relay.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use client_blockchain_core::{
    ChainId, MintError, MintSubmitter, MintedToken, TokenId, Voucher,
};

use crate::http::{RawResponse, network_error, token_id_text};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MintRequest<'a> {
    signed_payload: &'a serde_json::Value,
    collection: &'a str,
    chain_id: ChainId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MintResponse {
    token_id: serde_json::Value,
}

/// Submits signed vouchers to the collection contract via a relay.
///
/// `POST {url}` with `{signedPayload, collection, chainId}`; answers
/// `{tokenId}` once the transaction is mined.
#[derive(Clone)]
pub struct HttpMintSubmitter {
    http_client: reqwest::Client,
    url: String,
    collection: String,
    chain: ChainId,
}

impl HttpMintSubmitter {
    pub fn new(
        http_client: reqwest::Client,
        url: impl Into<String>,
        collection: impl Into<String>,
        chain: ChainId,
    ) -> Self {
        Self {
            http_client,
            url: url.into(),
            collection: collection.into(),
            chain,
        }
    }
}

#[async_trait]
impl MintSubmitter for HttpMintSubmitter {
    async fn mint(&self, voucher: &Voucher) -> Result<MintedToken, MintError> {
        let request = MintRequest {
            signed_payload: voucher.signed_payload(),
            collection: &self.collection,
            chain_id: self.chain,
        };

        tracing::debug!(collection = %self.collection, chain = %self.chain, "submitting mint");

        let response = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| network_error("mint submission failed", e))?;
        let response = RawResponse::read(response).await?;

        if !response.is_success() {
            return Err(MintError::Rejected(response.error_reason()));
        }

        let body: MintResponse = response.json()?;
        let token_id = TokenId::new(token_id_text(&body.token_id)?);

        tracing::info!(token_id = %token_id, "mint confirmed");
        Ok(MintedToken { token_id })
    }
}
