//! The three CatFacts reports.
//!
//! Each report builds its endpoint, fetches through [`FetchPipeline`], and on
//! success hands the decoded body to a projection that renders the console
//! block. Failures are written to the sink's error channel and stop there.

use crate::core::fetch::FetchPipeline;
use crate::core::request::endpoint_url;
use crate::core::{
    BreedCollection, EndpointDescriptor, FactCollection, FactRecord, ReportKind, ReportSink,
};
use crate::utils::error::{ErrorKind, ReportError};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    pub kind: ReportKind,
    pub error: Option<ErrorKind>,
}

impl ReportOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub fn single_fact_endpoint(max_length: Option<u32>) -> EndpointDescriptor {
    EndpointDescriptor::new("/fact").with_optional_param("max_length", max_length)
}

pub fn facts_endpoint(limit: u32) -> EndpointDescriptor {
    EndpointDescriptor::new("/facts").with_param("limit", limit)
}

pub fn breeds_endpoint(limit: Option<u32>) -> EndpointDescriptor {
    EndpointDescriptor::new("/breeds").with_optional_param("limit", limit)
}

pub fn format_single_fact(record: &FactRecord) -> String {
    format!("Random Cat Fact:\n{}\n", record.fact)
}

/// Header line followed by a 1-based list, in the order given.
pub fn format_numbered_list<'a, I>(header: &str, items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = format!("{}\n", header);
    for (index, item) in items.into_iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, item));
    }
    out
}

/// The header states the requested `limit`, which can exceed the records returned.
pub fn format_facts(limit: u32, facts: &FactCollection) -> String {
    format_numbered_list(
        &format!("{} Random Cat Facts:", limit),
        facts.data.iter().map(|record| record.fact.as_str()),
    )
}

pub fn format_breeds(breeds: &BreedCollection) -> String {
    format_numbered_list(
        "List of Cat Breeds:",
        breeds.data.iter().map(|record| record.breed.as_str()),
    )
}

pub fn format_error_line(kind: ReportKind, error: &ReportError) -> String {
    format!("❌ {} report failed: {}: {}", kind.label(), error.kind(), error)
}

/// Fetches `endpoint` under `base_url`, projects the decoded body, and writes
/// the result or the failure to `sink`. Never returns an error.
pub async fn run_report<T, F>(
    fetcher: &FetchPipeline,
    base_url: &str,
    kind: ReportKind,
    endpoint: &EndpointDescriptor,
    sink: &dyn ReportSink,
    projection: F,
) -> ReportOutcome
where
    T: DeserializeOwned,
    F: FnOnce(T) -> String,
{
    tracing::info!("📡 {}: fetching {}", kind, endpoint.path);

    let fetched = match endpoint_url(base_url, endpoint) {
        Ok(url) => fetcher.fetch_json::<T>(&url).await,
        Err(e) => Err(e),
    };

    match fetched {
        Ok(value) => {
            let text = projection(value);
            sink.write_report(kind, &text);
            tracing::info!("✅ {}: report written", kind);
            ReportOutcome { kind, error: None }
        }
        Err(e) => {
            tracing::warn!("❌ {}: {} ({})", kind, e, e.kind());
            sink.write_error(kind, &e);
            ReportOutcome {
                kind,
                error: Some(e.kind()),
            }
        }
    }
}

pub async fn report_single_fact(
    fetcher: &FetchPipeline,
    base_url: &str,
    max_length: Option<u32>,
    sink: &dyn ReportSink,
) -> ReportOutcome {
    run_report(
        fetcher,
        base_url,
        ReportKind::SingleFact,
        &single_fact_endpoint(max_length),
        sink,
        |fact: FactRecord| format_single_fact(&fact),
    )
    .await
}

pub async fn report_facts(
    fetcher: &FetchPipeline,
    base_url: &str,
    limit: u32,
    sink: &dyn ReportSink,
) -> ReportOutcome {
    run_report(
        fetcher,
        base_url,
        ReportKind::Facts,
        &facts_endpoint(limit),
        sink,
        |facts: FactCollection| format_facts(limit, &facts),
    )
    .await
}

pub async fn report_breeds(
    fetcher: &FetchPipeline,
    base_url: &str,
    limit: Option<u32>,
    sink: &dyn ReportSink,
) -> ReportOutcome {
    run_report(
        fetcher,
        base_url,
        ReportKind::Breeds,
        &breeds_endpoint(limit),
        sink,
        |breeds: BreedCollection| format_breeds(&breeds),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemorySink, SinkEntry};
    use crate::core::{Transport, TransportResponse};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct FixedResponse {
        status: u16,
        body: Vec<u8>,
    }

    #[async_trait]
    impl TransportResponse for FixedResponse {
        fn status(&self) -> u16 {
            self.status
        }

        async fn bytes(&mut self) -> Result<Vec<u8>> {
            Ok(std::mem::take(&mut self.body))
        }
    }

    /// Answers by full URL and remembers every URL it was asked for.
    #[derive(Default)]
    struct RoutedTransport {
        routes: HashMap<String, (u16, String)>,
        requested: Mutex<Vec<String>>,
    }

    impl RoutedTransport {
        fn route(mut self, url: &str, status: u16, body: serde_json::Value) -> Self {
            self.routes.insert(url.to_string(), (status, body.to_string()));
            self
        }

        fn raw_route(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes.insert(url.to_string(), (status, body.to_string()));
            self
        }
    }

    #[async_trait]
    impl Transport for RoutedTransport {
        async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>> {
            self.requested.lock().unwrap().push(url.to_string());
            let (status, body) = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or((404, String::new()));
            Ok(Box::new(FixedResponse {
                status,
                body: body.into_bytes(),
            }))
        }
    }

    fn pipeline(transport: RoutedTransport) -> (FetchPipeline, Arc<RoutedTransport>) {
        let transport = Arc::new(transport);
        (FetchPipeline::new(transport.clone()), transport)
    }

    #[test]
    fn test_format_numbered_list() {
        let text = format_numbered_list("List of Cat Breeds:", ["Abyssinian", "Aegean"]);
        assert_eq!(text, "List of Cat Breeds:\n1. Abyssinian\n2. Aegean\n");
    }

    #[test]
    fn test_format_numbered_list_empty() {
        assert_eq!(format_numbered_list("List of Cat Breeds:", []), "List of Cat Breeds:\n");
    }

    #[test]
    fn test_endpoints() {
        assert!(single_fact_endpoint(None).query.is_empty());
        assert_eq!(
            single_fact_endpoint(Some(80)).query,
            vec![("max_length".to_string(), "80".to_string())]
        );
        assert_eq!(facts_endpoint(3).path, "/facts");
        assert_eq!(breeds_endpoint(Some(5)).query[0].1, "5");
    }

    #[tokio::test]
    async fn test_single_fact_output() {
        let (fetcher, _) = pipeline(RoutedTransport::default().route(
            "https://x/fact",
            200,
            serde_json::json!({"fact": "A cat's nose print is unique.", "length": 29}),
        ));
        let sink = MemorySink::new();

        let outcome = report_single_fact(&fetcher, "https://x", None, &sink).await;

        assert!(outcome.is_success());
        assert_eq!(sink.stdout(), "Random Cat Fact:\nA cat's nose print is unique.\n");
        assert!(sink.stderr_lines().is_empty());
    }

    #[tokio::test]
    async fn test_facts_keep_server_order() {
        let (fetcher, transport) = pipeline(RoutedTransport::default().route(
            "https://x/facts?limit=3",
            200,
            serde_json::json!({"data": [{"fact": "C"}, {"fact": "A"}, {"fact": "B"}]}),
        ));
        let sink = MemorySink::new();

        let outcome = report_facts(&fetcher, "https://x", 3, &sink).await;

        assert!(outcome.is_success());
        assert_eq!(sink.stdout(), "3 Random Cat Facts:\n1. C\n2. A\n3. B\n");
        assert_eq!(
            *transport.requested.lock().unwrap(),
            vec!["https://x/facts?limit=3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_facts_three_numbered_lines() {
        let (fetcher, _) = pipeline(RoutedTransport::default().route(
            "https://x/facts?limit=3",
            200,
            serde_json::json!({"data": [{"fact": "A"}, {"fact": "B"}, {"fact": "C"}]}),
        ));
        let sink = MemorySink::new();

        report_facts(&fetcher, "https://x", 3, &sink).await;

        let output = sink.stdout();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["3 Random Cat Facts:", "1. A", "2. B", "3. C"]);
    }

    #[test]
    fn test_facts_header_uses_requested_limit() {
        let facts = FactCollection {
            data: vec![
                FactRecord { fact: "A".to_string(), length: 1 },
                FactRecord { fact: "B".to_string(), length: 1 },
            ],
        };

        assert_eq!(format_facts(3, &facts), "3 Random Cat Facts:\n1. A\n2. B\n");
    }

    #[tokio::test]
    async fn test_breeds_output() {
        let (fetcher, _) = pipeline(RoutedTransport::default().route(
            "https://x/breeds",
            200,
            serde_json::json!({
                "current_page": 1,
                "data": [
                    {"breed": "Abyssinian", "country": "Ethiopia"},
                    {"breed": "Aegean", "country": "Greece"}
                ]
            }),
        ));
        let sink = MemorySink::new();

        report_breeds(&fetcher, "https://x", None, &sink).await;

        assert_eq!(sink.stdout(), "List of Cat Breeds:\n1. Abyssinian\n2. Aegean\n");
    }

    #[tokio::test]
    async fn test_decode_failure_skips_projection() {
        let (fetcher, _) =
            pipeline(RoutedTransport::default().raw_route("https://x/fact", 200, "not json {"));
        let sink = MemorySink::new();
        let mut projected = false;

        let outcome = run_report(
            &fetcher,
            "https://x",
            ReportKind::SingleFact,
            &single_fact_endpoint(None),
            &sink,
            |fact: FactRecord| {
                projected = true;
                format_single_fact(&fact)
            },
        )
        .await;

        assert!(!projected);
        assert_eq!(outcome.error, Some(ErrorKind::Decode));
        assert_eq!(sink.stdout(), "");
        let errors = sink.stderr_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("❌ Random cat fact report failed: DecodeError:"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let (fetcher, _) = pipeline(RoutedTransport::default().route(
            "https://x/breeds",
            200,
            serde_json::json!({"data": [{"name": "Abyssinian"}]}),
        ));
        let sink = MemorySink::new();

        let outcome = report_breeds(&fetcher, "https://x", None, &sink).await;

        assert_eq!(outcome.error, Some(ErrorKind::Decode));
        assert!(sink.stdout().is_empty());
    }

    #[tokio::test]
    async fn test_failed_report_does_not_touch_sibling_output() {
        let (fetcher, _) = pipeline(
            RoutedTransport::default()
                .route(
                    "https://x/facts?limit=2",
                    200,
                    serde_json::json!({"data": [{"fact": "A"}, {"fact": "B"}]}),
                )
                .route("https://x/breeds", 500, serde_json::json!({"error": "boom"})),
        );
        let sink = MemorySink::new();

        let facts = report_facts(&fetcher, "https://x", 2, &sink).await;
        let breeds = report_breeds(&fetcher, "https://x", None, &sink).await;

        assert!(facts.is_success());
        assert_eq!(breeds.error, Some(ErrorKind::HttpStatus));
        assert_eq!(
            sink.entries(),
            vec![
                SinkEntry::Report(ReportKind::Facts, "2 Random Cat Facts:\n1. A\n2. B\n".to_string()),
                SinkEntry::Error(
                    ReportKind::Breeds,
                    "❌ Cat breeds report failed: HttpStatusError: HTTP 500 returned by https://x/breeds"
                        .to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_base_is_reported_not_raised() {
        let (fetcher, transport) = pipeline(RoutedTransport::default());
        let sink = MemorySink::new();

        let outcome = report_single_fact(&fetcher, "", None, &sink).await;

        assert_eq!(outcome.error, Some(ErrorKind::InvalidArgument));
        assert!(transport.requested.lock().unwrap().is_empty());
        assert_eq!(sink.stderr_lines().len(), 1);
    }
}
