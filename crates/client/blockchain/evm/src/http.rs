//! Shared request plumbing for the HTTP adapters.

use client_blockchain_core::TransportError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Response read to completion: status plus raw body.
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub async fn read(response: reqwest::Response) -> Result<Self, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::NetworkError(format!("failed to read body: {e}")))?;
        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| {
            TransportError::SerializationError(format!("{e}. Raw response: {}", self.body))
        })
    }

    /// Reason from an `{"error": "..."}` body, falling back to the raw text.
    pub fn error_reason(&self) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(body) => body.error,
            Err(_) if self.body.trim().is_empty() => self
                .status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => self.body.trim().to_string(),
        }
    }

    pub fn unexpected(&self) -> TransportError {
        TransportError::UnexpectedStatus {
            status: self.status.as_u16(),
            body: self.error_reason(),
        }
    }
}

pub(crate) fn network_error(context: &str, error: reqwest::Error) -> TransportError {
    TransportError::NetworkError(format!("{context}: {error}"))
}

/// Token ids arrive as JSON strings or numbers depending on the backend.
pub(crate) fn token_id_text(value: &serde_json::Value) -> Result<String, TransportError> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(TransportError::SerializationError(format!(
            "token id must be a string or number, got {other}"
        ))),
    }
}
