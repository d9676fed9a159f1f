use anyhow::Context;
use catfact_report::utils::logger;
use catfact_report::{CliConfig, ConsoleSink, FetchPipeline, ReportEngine, ReqwestTransport};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("💡 {}", e.recovery_suggestion());
            return Err(e).context("Invalid configuration");
        }
    };

    logger::init_cli_logger(settings.verbose, settings.json_logs);
    tracing::debug!("Resolved settings: {:?}", settings);

    let fetcher = FetchPipeline::new(Arc::new(ReqwestTransport::new()));
    let engine = ReportEngine::new(settings, fetcher, Arc::new(ConsoleSink::new()));

    let summary = engine.run().await;

    if !summary.all_succeeded() {
        for failure in summary.failures() {
            tracing::debug!("{} report did not complete", failure.kind);
        }
        std::process::exit(2);
    }

    Ok(())
}
