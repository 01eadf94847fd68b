//! Bounded status polling.

use crate::error::{Error, Result, Stage};
use crate::types::{JobId, JobStatusResponse, PollOutcome, Session};

use super::ReportFetcher;

impl ReportFetcher {
    /// Poll the job until it has a downloadable result or the budget runs out
    ///
    /// The first check happens immediately. Each subsequent round waits for
    /// `poll.interval` through the configured [`Waiter`](crate::Waiter) and
    /// checks again, up to `poll.max_attempts` rounds. A run over an
    /// always-empty status therefore performs exactly `1 + max_attempts`
    /// checks and `max_attempts` waits.
    pub(crate) async fn poll_result(
        &self,
        session: &Session,
        report_url: &str,
        job_id: &JobId,
    ) -> Result<PollOutcome> {
        let status_url = format!("{report_url}{job_id}");

        if let Some(location) = self.check_status(session, &status_url).await? {
            tracing::info!(job_id = %job_id, "report ready on first check");
            return Ok(PollOutcome::Ready(location));
        }

        for attempt in 1..=self.config.poll.max_attempts {
            tracing::debug!(
                job_id = %job_id,
                attempt,
                max_attempts = self.config.poll.max_attempts,
                waiter = self.waiter.name(),
                "result not ready, waiting"
            );
            self.waiter.wait(self.config.poll.interval).await;

            if let Some(location) = self.check_status(session, &status_url).await? {
                tracing::info!(job_id = %job_id, attempt, "report ready");
                return Ok(PollOutcome::Ready(location));
            }
        }

        tracing::warn!(
            job_id = %job_id,
            checks = self.config.poll.max_attempts + 1,
            "poll budget exhausted"
        );
        Ok(PollOutcome::TimedOut)
    }

    /// Fetch the job status once, treating absent and empty locations as
    /// "not ready"
    async fn check_status(&self, session: &Session, status_url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(status_url)
            .header("Authorization", format!("bearer {}", session.access_token))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                stage: Stage::PollStatus,
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: JobStatusResponse = serde_json::from_str(&text)?;
        Ok(parsed.result_location())
    }
}
