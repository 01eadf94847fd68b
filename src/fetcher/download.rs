//! Artifact fetch, decode, and write.

use crate::error::{Error, Result, Stage};
use crate::types::{FileResponse, Session};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::path::PathBuf;

use super::ReportFetcher;

impl ReportFetcher {
    /// Fetch the finished artifact, decode it, and write it to the output path
    ///
    /// The artifact arrives as base64-encoded text inside `files.file`. The
    /// decoded bytes must be valid UTF-8; the write replaces any existing
    /// file at the output path.
    pub(crate) async fn download_report(
        &self,
        session: &Session,
        result_url: &str,
    ) -> Result<PathBuf> {
        tracing::debug!(url = %result_url, "downloading report artifact");

        let response = self
            .client
            .get(result_url)
            .header("Authorization", format!("bearer {}", session.access_token))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                stage: Stage::Download,
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: FileResponse = serde_json::from_str(&text)?;
        let encoded = parsed
            .files
            .and_then(|f| f.file)
            .ok_or(Error::MissingField {
                stage: Stage::Download,
                field: "files.file",
            })?;

        let decoded = STANDARD.decode(encoded.as_bytes())?;
        let content = String::from_utf8(decoded)?;

        tokio::fs::write(&self.config.output_path, &content).await?;
        tracing::info!(
            path = %self.config.output_path.display(),
            bytes = content.len(),
            "report written"
        );
        Ok(self.config.output_path.clone())
    }
}
