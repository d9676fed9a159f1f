#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, ReportKind};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://catfact.ninja";
pub const DEFAULT_FACT_LIMIT: u32 = 3;
pub const MAX_LIMIT: u32 = 100;
pub const MAX_FACT_LENGTH: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Concurrent,
    Sequential,
}

/// Fully resolved, validated run configuration. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub reports: Vec<ReportKind>,
    pub fact_limit: u32,
    pub breed_limit: Option<u32>,
    pub fact_max_length: Option<u32>,
    pub mode: ExecutionMode,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reports: ReportKind::ALL.to_vec(),
            fact_limit: DEFAULT_FACT_LIMIT,
            breed_limit: None,
            fact_max_length: None,
            mode: ExecutionMode::Concurrent,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn reports(&self) -> &[ReportKind] {
        &self.reports
    }

    fn fact_limit(&self) -> u32 {
        self.fact_limit
    }

    fn breed_limit(&self) -> Option<u32> {
        self.breed_limit
    }

    fn fact_max_length(&self) -> Option<u32> {
        self.fact_max_length
    }

    fn sequential(&self) -> bool {
        self.mode == ExecutionMode::Sequential
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("fact_limit", self.fact_limit, 1, MAX_LIMIT)?;
        if let Some(limit) = self.breed_limit {
            validate_range("breed_limit", limit, 1, MAX_LIMIT)?;
        }
        if let Some(max_length) = self.fact_max_length {
            validate_range("fact_max_length", max_length, 1, MAX_FACT_LENGTH)?;
        }
        if self.reports.is_empty() {
            return Err(ReportError::InvalidConfigValue {
                field: "reports".to_string(),
                value: "[]".to_string(),
                reason: "At least one report must be enabled".to_string(),
            });
        }
        Ok(())
    }
}
