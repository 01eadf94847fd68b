//! Report job submission.

use crate::error::{Error, Result, Stage};
use crate::types::{JobId, Session, StartJobResponse};

use super::ReportFetcher;

impl ReportFetcher {
    /// Start a server-side job for the configured report template
    ///
    /// Posts the fixed export parameters to `{report_url}{report_id}` and
    /// returns the identifier of the created job.
    pub(crate) async fn start_job(&self, session: &Session, report_url: &str) -> Result<JobId> {
        let url = format!("{report_url}{}", self.config.report_id);
        tracing::debug!(url = %url, "starting report job");

        // The service expects these values as strings, not JSON booleans or
        // numbers.
        let body = serde_json::json!({
            "fileType": "CSV",
            "includeHeaders": "true",
            "appendDate": "true",
            "deleteAfter": "7",
            "overwrite": "true",
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("bearer {}", session.access_token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                stage: Stage::StartJob,
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: StartJobResponse = serde_json::from_str(&text)?;
        let job_id = parsed.job_id.ok_or(Error::MissingField {
            stage: Stage::StartJob,
            field: "jobId",
        })?;

        tracing::info!(job_id = %job_id, "report job started");
        Ok(JobId::from(job_id))
    }
}
