use crate::domain::model::ReportKind;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;

/// A response whose status is known but whose body has not been read yet.
#[async_trait]
pub trait TransportResponse: Send {
    fn status(&self) -> u16;

    async fn bytes(&mut self) -> Result<Vec<u8>>;
}

/// Outbound HTTP. Implementations map transport failures to `ReportError::Network`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>>;
}

/// Where finished reports and report failures are written.
pub trait ReportSink: Send + Sync {
    fn write_report(&self, kind: ReportKind, text: &str);
    fn write_error(&self, kind: ReportKind, error: &ReportError);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn reports(&self) -> &[ReportKind];
    fn fact_limit(&self) -> u32;
    fn breed_limit(&self) -> Option<u32>;
    fn fact_max_length(&self) -> Option<u32>;
    fn sequential(&self) -> bool;
}
