//! Error types for report-dl
//!
//! This module provides error handling for the library, including:
//! - A single `Error` enum covering every failure mode of the pipeline
//! - A [`Stage`] marker identifying which pipeline stage an error came from
//! - `#[from]` conversions for transport, serialization, decode, and I/O errors
//!
//! Errors are terminal for the run: a non-success HTTP status at any stage
//! aborts immediately and is never retried. The bounded status-poll loop is
//! not an error path but a "not ready yet" path; only its exhaustion surfaces
//! here, as [`Error::PollTimedOut`].

use crate::types::JobId;
use thiserror::Error;

/// Result type alias for report-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage markers, used in errors and tracing output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Token-grant request
    Auth,
    /// Report job submission
    StartJob,
    /// Job status polling
    PollStatus,
    /// Result artifact fetch
    Download,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Auth => "auth",
            Stage::StartJob => "start_job",
            Stage::PollStatus => "poll_status",
            Stage::Download => "download",
        };
        write!(f, "{name}")
    }
}

/// Main error type for report-dl
///
/// Each variant carries enough context to diagnose the failure without
/// re-running the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "report_id")
        key: Option<String>,
    },

    /// Token-grant request was rejected. Fatal, never retried.
    #[error("authentication failed with status {status}: {body}")]
    Auth {
        /// HTTP status code returned by the token endpoint
        status: u16,
        /// Response body, useful for diagnosing rejected credentials
        body: String,
    },

    /// A post-authentication endpoint returned a non-success status. Fatal.
    #[error("{stage} request failed with status {status}: {body}")]
    UnexpectedStatus {
        /// The pipeline stage whose request was rejected
        stage: Stage,
        /// HTTP status code returned by the service
        status: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A required field was absent from an otherwise well-formed response
    #[error("{stage} response is missing required field '{field}'")]
    MissingField {
        /// The pipeline stage whose response was incomplete
        stage: Stage,
        /// Dotted path of the missing field (e.g., "files.file")
        field: &'static str,
    },

    /// Malformed JSON response body
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed base64 in the report payload
    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded report payload is not valid UTF-8
    #[error("report payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Output file write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The poll budget was exhausted before the job produced a result
    #[error("report job {job_id} not ready after {attempts} status checks")]
    PollTimedOut {
        /// The job that never became ready
        job_id: JobId,
        /// Total number of status checks performed
        attempts: u32,
    },
}
