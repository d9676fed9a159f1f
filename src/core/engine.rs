use crate::core::fetch::FetchPipeline;
use crate::core::report::{report_breeds, report_facts, report_single_fact, ReportOutcome};
use crate::core::{ConfigProvider, ReportKind, ReportSink};
use crate::utils::error::ReportError;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ReportOutcome>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ReportOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }
}

/// Everything one report task needs, owned so it can move into a spawned task.
struct ReportJob {
    kind: ReportKind,
    base_url: String,
    fact_limit: u32,
    breed_limit: Option<u32>,
    fact_max_length: Option<u32>,
    fetcher: Arc<FetchPipeline>,
    sink: Arc<dyn ReportSink>,
}

impl ReportJob {
    async fn run(self) -> ReportOutcome {
        let sink = self.sink.as_ref();
        match self.kind {
            ReportKind::SingleFact => {
                report_single_fact(&self.fetcher, &self.base_url, self.fact_max_length, sink).await
            }
            ReportKind::Facts => {
                report_facts(&self.fetcher, &self.base_url, self.fact_limit, sink).await
            }
            ReportKind::Breeds => {
                report_breeds(&self.fetcher, &self.base_url, self.breed_limit, sink).await
            }
        }
    }
}

pub struct ReportEngine<C: ConfigProvider> {
    config: C,
    fetcher: Arc<FetchPipeline>,
    sink: Arc<dyn ReportSink>,
}

impl<C: ConfigProvider> ReportEngine<C> {
    pub fn new(config: C, fetcher: FetchPipeline, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            config,
            fetcher: Arc::new(fetcher),
            sink,
        }
    }

    /// Runs every configured report and waits for all of them.
    ///
    /// In concurrent mode each report is its own task and output appears in
    /// completion order. In sequential mode reports run in configured order.
    /// Outcomes are always listed in configured order.
    pub async fn run(&self) -> RunSummary {
        let started = Instant::now();
        let jobs: Vec<ReportJob> = self.config.reports().iter().map(|kind| self.job(*kind)).collect();

        tracing::info!(
            "🚀 Running {} report(s) against {} ({})",
            jobs.len(),
            self.config.base_url(),
            if self.config.sequential() { "sequential" } else { "concurrent" }
        );

        let outcomes = if self.config.sequential() {
            Self::run_sequentially(jobs).await
        } else {
            Self::run_concurrently(jobs).await
        };

        let summary = RunSummary { outcomes };
        tracing::info!(
            "📊 {} report(s) finished, {} failed, in {:?}",
            summary.outcomes.len(),
            summary.failures().count(),
            started.elapsed()
        );
        summary
    }

    fn job(&self, kind: ReportKind) -> ReportJob {
        ReportJob {
            kind,
            base_url: self.config.base_url().to_string(),
            fact_limit: self.config.fact_limit(),
            breed_limit: self.config.breed_limit(),
            fact_max_length: self.config.fact_max_length(),
            fetcher: self.fetcher.clone(),
            sink: self.sink.clone(),
        }
    }

    /// Each report still gets its own task so a panic stays inside that report.
    async fn run_sequentially(jobs: Vec<ReportJob>) -> Vec<ReportOutcome> {
        let mut outcomes = Vec::with_capacity(jobs.len());
        for job in jobs {
            let kind = job.kind;
            let sink = job.sink.clone();
            let outcome = match tokio::spawn(job.run()).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Report task did not complete: {}", e);
                    task_failed(kind, sink.as_ref())
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn run_concurrently(jobs: Vec<ReportJob>) -> Vec<ReportOutcome> {
        let kinds: Vec<ReportKind> = jobs.iter().map(|job| job.kind).collect();
        let mut slots: Vec<Option<ReportOutcome>> = vec![None; jobs.len()];
        let mut sinks: Vec<Arc<dyn ReportSink>> = Vec::with_capacity(jobs.len());

        let mut set = JoinSet::new();
        for (index, job) in jobs.into_iter().enumerate() {
            let sink = job.sink.clone();
            set.spawn(async move { (index, job.run().await) });
            sinks.push(sink);
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => tracing::error!("Report task did not complete: {}", e),
            }
        }

        // A task that panicked leaves its slot empty.
        kinds
            .into_iter()
            .zip(slots)
            .zip(sinks)
            .map(|((kind, slot), sink)| slot.unwrap_or_else(|| task_failed(kind, sink.as_ref())))
            .collect()
    }
}

fn task_failed(kind: ReportKind, sink: &dyn ReportSink) -> ReportOutcome {
    let error = ReportError::TaskFailed {
        message: "task panicked before writing its report".to_string(),
    };
    sink.write_error(kind, &error);
    ReportOutcome {
        kind,
        error: Some(error.kind()),
    }
}
