//! Voucher issuance over HTTP.

use async_trait::async_trait;
use serde::Deserialize;

use client_blockchain_core::{IssuanceError, Voucher, VoucherIssuer, VoucherRequest};

use crate::http::{RawResponse, network_error};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueResponse {
    signed_payload: Option<serde_json::Value>,
}

/// Client for the issuance endpoint.
///
/// `POST {url}` with `{playerAddress, username, recordSeconds}`; a success
/// answers `{signedPayload}`, a failure `{error}` with a non-success status.
#[derive(Clone)]
pub struct HttpVoucherIssuer {
    http_client: reqwest::Client,
    url: String,
}

impl HttpVoucherIssuer {
    pub fn new(http_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl VoucherIssuer for HttpVoucherIssuer {
    async fn issue(&self, request: &VoucherRequest) -> Result<Voucher, IssuanceError> {
        tracing::debug!(address = %request.player_address, "requesting mint voucher");

        let response = self
            .http_client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| network_error("voucher request failed", e))?;
        let response = RawResponse::read(response).await?;

        if !response.is_success() {
            let reason = response.error_reason();
            tracing::warn!(status = %response.status, %reason, "voucher request rejected");
            return Err(IssuanceError::Rejected {
                status: response.status.as_u16(),
                reason,
            });
        }

        let body: IssueResponse = response.json()?;
        match body.signed_payload {
            Some(serde_json::Value::Null) | None => Err(IssuanceError::InvalidResponse(
                "response carries no signedPayload".into(),
            )),
            Some(payload) => {
                tracing::info!(address = %request.player_address, "mint voucher received");
                Ok(Voucher::new(payload))
            }
        }
    }
}
