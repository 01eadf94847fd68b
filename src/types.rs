//! Core types for report-dl

use serde::{Deserialize, Serialize};

/// Opaque identifier of a server-side report job
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new JobId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ephemeral session obtained from the token-grant endpoint
///
/// Valid for the duration of one run; there is no refresh logic. A token that
/// expires mid-run surfaces as an [`UnexpectedStatus`](crate::Error::UnexpectedStatus)
/// on the next request.
#[derive(Clone)]
pub struct Session {
    /// Bearer token presented on every subsequent request
    pub access_token: String,
    /// Base resource URL all report endpoints are relative to
    pub resource_server_base_uri: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("resource_server_base_uri", &self.resource_server_base_uri)
            .finish()
    }
}

/// Terminal outcome of the status-poll loop
///
/// The poll budget running out is a distinct variant, not an empty location:
/// callers must decide what an unready report means instead of silently
/// passing an empty URL to the download stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The job finished and its result is downloadable at this URL
    Ready(String),
    /// The poll budget was exhausted before a result location appeared
    TimedOut,
}

// ---------------------------------------------------------------------------
// Wire-contract response types
//
// Field names below are the remote service's external contract
// (resource_server_base_uri, access_token, jobId, jobResult.resultFileURL,
// files.file). Renaming any of them is a breaking change that this client
// cannot absorb. Unknown extra fields are ignored.
// ---------------------------------------------------------------------------

/// Token-grant response body
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub access_token: Option<String>,
    /// Base URL of the resource server assigned to this session
    pub resource_server_base_uri: Option<String>,
}

/// Job-start response body
#[derive(Debug, Deserialize)]
pub struct StartJobResponse {
    /// Identifier of the newly created report job
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

/// Job-status response body
#[derive(Debug, Deserialize)]
pub struct JobStatusResponse {
    /// Result block, present once the service has progressed the job
    #[serde(rename = "jobResult")]
    pub job_result: Option<JobResult>,
}

/// Result block inside a job-status response
#[derive(Debug, Deserialize)]
pub struct JobResult {
    /// Location of the finished artifact; absent or empty while the job runs
    #[serde(rename = "resultFileURL")]
    pub result_file_url: Option<String>,
}

impl JobStatusResponse {
    /// Extract a usable result location, treating absent and empty as "not ready"
    pub fn result_location(self) -> Option<String> {
        self.job_result
            .and_then(|r| r.result_file_url)
            .filter(|url| !url.is_empty())
    }
}

/// File-fetch response body
#[derive(Debug, Deserialize)]
pub struct FileResponse {
    /// Container for the artifact payload
    pub files: Option<Files>,
}

/// Artifact payload container inside a file-fetch response
#[derive(Debug, Deserialize)]
pub struct Files {
    /// Base64-encoded text content of the report
    pub file: Option<String>,
}
