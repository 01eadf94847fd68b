//! Core report fetcher implementation split into focused submodules.
//!
//! The `ReportFetcher` struct and its methods are organized by pipeline stage:
//! - [`auth`] - Credential encoding and token grant
//! - [`job`] - Report job submission
//! - [`poll`] - Bounded status polling
//! - [`download`] - Artifact fetch, decode, and write
//!
//! Stages run strictly in sequence; at most one request is in flight at any
//! time, and the only suspension point is the poll wait between status checks.

mod auth;
mod download;
mod job;
mod poll;


pub use auth::encode_auth_key;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{PollOutcome, Session};
use crate::wait::{TokioWaiter, Waiter};
use std::path::PathBuf;
use std::sync::Arc;

/// Client for the four-stage report retrieval pipeline
///
/// Construct with a validated [`Config`], then call
/// [`fetch_report`](ReportFetcher::fetch_report) to run
/// authenticate, start-job, poll, and download as one sequence.
///
/// # Examples
///
/// ```no_run
/// use report_dl::{Config, ReportFetcher};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let fetcher = ReportFetcher::new(config)?;
/// let written = fetcher.fetch_report().await?;
/// println!("report written to {}", written.display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ReportFetcher {
    /// Configuration (immutable for the fetcher's lifetime)
    pub(crate) config: Arc<Config>,
    /// Shared HTTP client with the configured per-request timeout
    pub(crate) client: reqwest::Client,
    /// Pre-encoded authorization blob for the token-grant request
    pub(crate) auth_key: String,
    /// Wait primitive used between status checks (trait object for test injection)
    pub(crate) waiter: Arc<dyn Waiter>,
}

impl std::fmt::Debug for ReportFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportFetcher")
            .field("config", &self.config)
            .field("client", &self.client)
            .field("auth_key", &self.auth_key)
            .field("waiter", &self.waiter.name())
            .finish()
    }
}

impl ReportFetcher {
    /// Create a new fetcher from the given configuration
    ///
    /// Validates the configuration and builds the HTTP client. The encoded
    /// authorization blob is derived once here; credentials are not re-read
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when validation fails and
    /// [`Error::Network`] when the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let auth_key = encode_auth_key(
            &config.credentials.app,
            &config.credentials.vendor,
            &config.credentials.business_unit,
        );

        Ok(Self {
            config: Arc::new(config),
            client,
            auth_key,
            waiter: Arc::new(TokioWaiter),
        })
    }

    /// Replace the wait primitive used between status checks
    ///
    /// The default is [`TokioWaiter`]. Tests and embedders that manage pacing
    /// themselves can substitute [`NoWait`](crate::NoWait) or a custom
    /// implementation.
    #[must_use]
    pub fn with_waiter(mut self, waiter: Arc<dyn Waiter>) -> Self {
        self.waiter = waiter;
        self
    }

    /// Run the full pipeline and return the path the report was written to
    ///
    /// Authenticates, starts a report job, polls until the job has a
    /// downloadable result, then fetches, decodes, and writes the artifact to
    /// the configured output path.
    ///
    /// # Errors
    ///
    /// Any non-success HTTP status aborts the run immediately; nothing is
    /// retried. An exhausted poll budget surfaces as
    /// [`Error::PollTimedOut`], never as an empty result location.
    pub async fn fetch_report(&self) -> Result<PathBuf> {
        tracing::info!(report_id = %self.config.report_id, "starting report retrieval");

        let session = self.authenticate().await?;
        let report_url = self.report_jobs_url(&session);
        let job_id = self.start_job(&session, &report_url).await?;

        match self.poll_result(&session, &report_url, &job_id).await? {
            PollOutcome::Ready(location) => self.download_report(&session, &location).await,
            PollOutcome::TimedOut => Err(Error::PollTimedOut {
                job_id,
                attempts: self.config.poll.max_attempts + 1,
            }),
        }
    }

    /// Base URL for report-job endpoints within the session's resource server
    fn report_jobs_url(&self, session: &Session) -> String {
        let base = session.resource_server_base_uri.trim_end_matches('/');
        format!("{base}/services/{}/report-jobs/", self.config.api_version)
    }
}
