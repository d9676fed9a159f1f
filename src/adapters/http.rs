use crate::domain::ports::{Transport, TransportResponse};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `Transport` backed by a shared reqwest client with its default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

struct ReqwestResponse {
    url: String,
    status: u16,
    inner: Option<reqwest::Response>,
}

#[async_trait]
impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn bytes(&mut self) -> Result<Vec<u8>> {
        let response = self.inner.take().ok_or_else(|| {
            ReportError::network(&self.url, "response body was already consumed")
        })?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ReportError::network(&self.url, e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::network(url, e))?;

        Ok(Box::new(ReqwestResponse {
            url: url.to_string(),
            status: response.status().as_u16(),
            inner: Some(response),
        }))
    }
}
