use crate::core::Transport;
use crate::utils::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// One GET, one status check, one decode. No retries and no caching.
pub struct FetchPipeline {
    transport: Arc<dyn Transport>,
}

impl FetchPipeline {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches `url` and decodes the body as `T`.
    ///
    /// Statuses of 400 and above fail with `HttpStatus` before the body is read.
    /// A body that is not valid JSON, or does not have the shape of `T`, fails
    /// with `Decode`. Use `serde_json::Value` for an unvalidated parse.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let mut response = self.transport.get(url).await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status >= 400 {
            return Err(ReportError::HttpStatus {
                code: status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Read {} bytes from {}", body.len(), url);
        decode_json(&body)
    }
}

pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ReportError::decode(e.to_string(), body))
}
