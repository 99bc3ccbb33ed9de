//! The response envelope every collaborator speaks
//!
//! Success responses carry `status: true` and a `data` payload; failures
//! carry `status: false` and a human-readable `message`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};

/// The `{status, data|message}` wrapper used by all endpoints
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload or turn the failure half into an [`ApiError`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.status {
            // A success envelope with no payload is a broken server, not a
            // usable success
            self.data
                .ok_or_else(|| ApiError::Application(GENERIC_ERROR_MESSAGE.to_string()))
        } else {
            Err(ApiError::Application(
                self.message
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            ))
        }
    }
}

/// Decode a collaborator response into its payload.
///
/// HTTP 5xx short-circuits to [`ApiError::Server`] before the body is even
/// consulted. Everything else is expected to be an envelope; a body that
/// is not one degrades to the generic message.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_server_error() {
        return Err(ApiError::Server);
    }

    let body = response.text().await?;
    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) => envelope.into_result(),
        Err(e) => {
            tracing::debug!(status = %status, error = %e, "Response body is not an envelope");
            Err(ApiError::Application(GENERIC_ERROR_MESSAGE.to_string()))
        }
    }
}
