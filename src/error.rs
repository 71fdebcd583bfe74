//! Error types for the whole application
//!
//! Every failure a user can run into is local and recoverable (pick another
//! photo, press diagnose again) except `ConfigError`, which stops startup.

use std::path::PathBuf;

use thiserror::Error;

/// Maximum number of characters of provider text kept inside an error
const EXCERPT_LEN: usize = 120;

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API credential configured (set OPENAI_API_KEY or apiKey in {0})")]
    MissingCredential(String),

    #[error("failed to read config file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// The chosen file could not be turned into an embeddable image
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("could not read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The call to the inference provider failed
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to inference provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("inference provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unreadable response envelope: {0}")]
    MalformedEnvelope(String),

    #[error("inference provider returned no text")]
    EmptyCompletion,
}

/// The provider answered, but not with a usable diagnosis
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response contained no JSON payload")]
    Empty,

    #[error("response is not valid JSON ({source}): {excerpt}")]
    Syntax {
        excerpt: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response JSON is not an object: {excerpt}")]
    NotAnObject { excerpt: String },

    #[error("response JSON does not match the diagnosis shape ({source}): {excerpt}")]
    Schema {
        excerpt: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can go wrong during one diagnosis attempt
#[derive(Debug, Error)]
pub enum DiagnoseError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Shorten provider text so it fits in a log line
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "x".repeat(500);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), EXCERPT_LEN + 1);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn test_diagnose_error_wraps_both_kinds() {
        let inference: DiagnoseError = InferenceError::EmptyCompletion.into();
        assert!(matches!(inference, DiagnoseError::Inference(_)));

        let parse: DiagnoseError = ParseError::Empty.into();
        assert!(matches!(parse, DiagnoseError::Parse(_)));
        assert_eq!(parse.to_string(), "response contained no JSON payload");
    }
}
