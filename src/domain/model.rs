use serde::{Deserialize, Serialize};
use std::fmt;

/// Path plus ordered query parameters, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl EndpointDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_optional_param<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactRecord {
    pub fact: String,
    #[serde(default)]
    pub length: usize,
}

/// `/facts` body. Pagination metadata is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FactCollection {
    pub data: Vec<FactRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreedRecord {
    pub breed: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreedCollection {
    pub data: Vec<BreedRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    SingleFact,
    Facts,
    Breeds,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::SingleFact, ReportKind::Facts, ReportKind::Breeds];

    /// Human label used as the prefix of error lines.
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::SingleFact => "Random cat fact",
            ReportKind::Facts => "Random cat facts",
            ReportKind::Breeds => "Cat breeds",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::SingleFact => "single-fact",
            ReportKind::Facts => "facts",
            ReportKind::Breeds => "breeds",
        };
        f.write_str(name)
    }
}
