use std::fmt;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("HTTP {code} returned by {url}")]
    HttpStatus { code: u16, url: String },

    #[error("Could not decode response: {message} (body: {snippet})")]
    Decode { message: String, snippet: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report task failed: {message}")]
    TaskFailed { message: String },
}

/// Coarse classification printed next to every failed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Network,
    HttpStatus,
    Decode,
    Config,
    Io,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::Network => "NetworkError",
            ErrorKind::HttpStatus => "HttpStatusError",
            ErrorKind::Decode => "DecodeError",
            ErrorKind::Config => "ConfigError",
            ErrorKind::Io => "IoError",
            ErrorKind::Internal => "InternalError",
        };
        f.write_str(name)
    }
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ReportError::Network { .. } => ErrorKind::Network,
            ReportError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ReportError::Decode { .. } => ErrorKind::Decode,
            ReportError::Config { .. } | ReportError::InvalidConfigValue { .. } => {
                ErrorKind::Config
            }
            ReportError::Io(_) => ErrorKind::Io,
            ReportError::TaskFailed { .. } => ErrorKind::Internal,
        }
    }

    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        ReportError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn network(url: &str, source: impl Into<BoxError>) -> Self {
        ReportError::Network {
            url: url.to_string(),
            source: source.into(),
        }
    }

    /// Builds a decode error carrying the start of the offending body.
    pub fn decode(message: impl Into<String>, body: &[u8]) -> Self {
        ReportError::Decode {
            message: message.into(),
            snippet: body_snippet(body, SNIPPET_CHARS),
        }
    }

    /// Hint shown under configuration failures.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidArgument => "Check the base URL and report paths",
            ErrorKind::Network => "Check network connectivity and the --base-url value",
            ErrorKind::HttpStatus => "The API rejected the request; try again later",
            ErrorKind::Decode => "The API returned an unexpected body; check --base-url",
            ErrorKind::Config => "Fix the configuration file or command-line flags",
            ErrorKind::Io => "Check that the file exists and is readable",
            ErrorKind::Internal => "Re-run with --verbose and report the log",
        }
    }
}

const SNIPPET_CHARS: usize = 200;

fn body_snippet(body: &[u8], max_chars: usize) -> String {
    let text = String::from_utf8_lossy(body);
    let mut snippet: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        snippet.push('…');
    }
    snippet
}

pub type Result<T> = std::result::Result<T, ReportError>;
