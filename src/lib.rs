pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{ConsoleSink, MemorySink, ReqwestTransport};
pub use crate::config::{toml_config::TomlConfig, ExecutionMode, Settings};
pub use crate::core::{engine::ReportEngine, fetch::FetchPipeline, request::build_url};
pub use crate::utils::error::{ErrorKind, ReportError, Result};
