pub mod engine;
pub mod fetch;
pub mod report;
pub mod request;

pub use crate::domain::model::{
    BreedCollection, BreedRecord, EndpointDescriptor, FactCollection, FactRecord, ReportKind,
};
pub use crate::domain::ports::{ConfigProvider, ReportSink, Transport, TransportResponse};
pub use crate::utils::error::Result;
