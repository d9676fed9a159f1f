use crate::config::{ExecutionMode, Settings, DEFAULT_FACT_LIMIT};
use crate::core::ReportKind;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration, e.g.
///
/// ```toml
/// [api]
/// base_url = "${CATFACT_BASE_URL}"
///
/// [reports]
/// enabled = ["single-fact", "facts"]
/// fact_limit = 5
///
/// [execution]
/// mode = "sequential"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub reports: Option<ReportsConfig>,
    pub execution: Option<ExecutionConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportsConfig {
    pub enabled: Option<Vec<ReportKind>>,
    pub fact_limit: Option<u32>,
    pub breed_limit: Option<u32>,
    pub fact_max_length: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionConfig {
    pub mode: Option<ExecutionMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with the value of the environment variable.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn reports_config(&self) -> ReportsConfig {
        self.reports.clone().unwrap_or_default()
    }

    pub fn to_settings(&self) -> Settings {
        let reports = self.reports_config();
        let logging = self.logging.clone().unwrap_or_default();

        Settings {
            base_url: self.api.base_url.clone(),
            reports: reports.enabled.unwrap_or_else(|| ReportKind::ALL.to_vec()),
            fact_limit: reports.fact_limit.unwrap_or(DEFAULT_FACT_LIMIT),
            breed_limit: reports.breed_limit,
            fact_max_length: reports.fact_max_length,
            mode: self
                .execution
                .as_ref()
                .and_then(|execution| execution.mode)
                .unwrap_or_default(),
            verbose: logging.verbose.unwrap_or(false),
            json_logs: logging.json.unwrap_or(false),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
