use crate::config::toml_config::TomlConfig;
use crate::config::{ExecutionMode, Settings};
use crate::core::ReportKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "catfact-report")]
#[command(about = "Print random cat facts and cat breeds from the CatFacts API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the CatFacts API [default: https://catfact.ninja]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of facts requested by the facts report [default: 3]
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of breeds requested by the breeds report
    #[arg(long)]
    pub breed_limit: Option<u32>,

    /// Maximum length of the single random fact
    #[arg(long)]
    pub max_length: Option<u32>,

    /// Reports to run, comma separated [default: all]
    #[arg(long, value_enum, value_delimiter = ',')]
    pub reports: Vec<ReportKind>,

    /// Run reports one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file if given, then command-line flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_settings(),
            None => Settings::default(),
        };

        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            settings.fact_limit = limit;
        }
        if self.breed_limit.is_some() {
            settings.breed_limit = self.breed_limit;
        }
        if self.max_length.is_some() {
            settings.fact_max_length = self.max_length;
        }
        if !self.reports.is_empty() {
            settings.reports = self.reports.clone();
        }
        if self.sequential {
            settings.mode = ExecutionMode::Sequential;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "catfact-report",
            "--base-url",
            "http://localhost:9000",
            "--limit",
            "5",
            "--reports",
            "facts,breeds",
            "--sequential",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.fact_limit, 5);
        assert_eq!(settings.reports, vec![ReportKind::Facts, ReportKind::Breeds]);
        assert_eq!(settings.mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["catfact-report"]);
        assert_eq!(cli.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[api]
base_url = "https://catfact.ninja"

[reports]
enabled = ["breeds"]
fact_limit = 7
breed_limit = 4
"#,
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            limit: Some(2),
            ..CliConfig::default()
        };

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.fact_limit, 2);
        assert_eq!(settings.breed_limit, Some(4));
        assert_eq!(settings.reports, vec![ReportKind::Breeds]);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig {
            base_url: Some("ftp://catfact.ninja".to_string()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
