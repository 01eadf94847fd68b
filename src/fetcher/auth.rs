//! Credential encoding and token grant.

use crate::error::{Error, Result, Stage};
use crate::types::{Session, TokenResponse};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::ReportFetcher;

/// Encode the application identity as the service's authorization blob
///
/// The blob is the base64 encoding of `{app}@{vendor}:{business_unit}` and is
/// presented as `Authorization: basic {blob}` on the token-grant request.
/// Pure function of its inputs; no network access.
///
/// # Examples
///
/// ```
/// use report_dl::encode_auth_key;
///
/// let key = encode_auth_key("yourApp", "yourVendor", "yourBu");
/// assert_eq!(key, "eW91ckFwcEB5b3VyVmVuZG9yOnlvdXJCdQ==");
/// ```
pub fn encode_auth_key(app: &str, vendor: &str, business_unit: &str) -> String {
    STANDARD.encode(format!("{app}@{vendor}:{business_unit}"))
}

impl ReportFetcher {
    /// Exchange credentials for an ephemeral session
    ///
    /// Posts a password grant to the configured token endpoint. Any
    /// non-success status is fatal and surfaces as [`Error::Auth`].
    pub(crate) async fn authenticate(&self) -> Result<Session> {
        tracing::debug!(url = %self.config.auth_url, "requesting access token");

        let body = serde_json::json!({
            "grant_type": "password",
            "username": self.config.credentials.username,
            "password": self.config.credentials.password,
        });

        let response = self
            .client
            .post(&self.config.auth_url)
            .header("Authorization", format!("basic {}", self.auth_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Auth {
                status: status.as_u16(),
                body: text,
            });
        }

        let token: TokenResponse = serde_json::from_str(&text)?;
        let access_token = token.access_token.ok_or(Error::MissingField {
            stage: Stage::Auth,
            field: "access_token",
        })?;
        let resource_server_base_uri = token.resource_server_base_uri.ok_or(Error::MissingField {
            stage: Stage::Auth,
            field: "resource_server_base_uri",
        })?;

        tracing::info!("authenticated");
        Ok(Session {
            access_token,
            resource_server_base_uri,
        })
    }
}
