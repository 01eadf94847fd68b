//! Configuration types for report-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Long-lived API credentials
///
/// Used once, at client construction, to derive the encoded authorization
/// blob and to fill the token-grant request. Immutable for the process
/// lifetime. `Debug` redacts the password.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Application name registered for API access
    pub app: String,
    /// Vendor name registered for API access
    pub vendor: String,
    /// Business unit identifier
    pub business_unit: String,
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app", &self.app)
            .field("vendor", &self.vendor)
            .field("business_unit", &self.business_unit)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            app: String::new(),
            vendor: String::new(),
            business_unit: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Status-poll loop configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollConfig {
    /// Wait between status checks (default: 60 seconds)
    #[serde(default = "default_poll_interval", with = "duration_serde")]
    pub interval: Duration,

    /// Maximum number of sleep-and-recheck rounds after the first check
    /// (default: 10, i.e. a bounded wait of roughly ten minutes at the
    /// default interval)
    #[serde(default = "default_poll_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: default_poll_interval(),
            max_attempts: default_poll_max_attempts(),
        }
    }
}

/// Main configuration for [`ReportFetcher`](crate::ReportFetcher)
///
/// Can be built programmatically, deserialized from JSON/TOML, or sourced
/// from `REPORT_DL_*` environment variables via [`Config::from_env`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// API credentials
    #[serde(default)]
    pub credentials: Credentials,

    /// Identifier of the report template to execute
    #[serde(default)]
    pub report_id: String,

    /// Destination path for the decoded report (default: "./report.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Token-grant endpoint URL
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// API version path segment embedded in the report base URL (default: "v13.0")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Status-poll loop settings
    #[serde(default)]
    pub poll: PollConfig,

    /// Per-request HTTP timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            report_id: String::new(),
            output_path: default_output_path(),
            auth_url: default_auth_url(),
            api_version: default_api_version(),
            poll: PollConfig::default(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Build a configuration from `REPORT_DL_*` environment variables.
    ///
    /// Required: `REPORT_DL_APP`, `REPORT_DL_VENDOR`,
    /// `REPORT_DL_BUSINESS_UNIT`, `REPORT_DL_USERNAME`,
    /// `REPORT_DL_PASSWORD`, `REPORT_DL_REPORT_ID`.
    ///
    /// Optional: `REPORT_DL_OUTPUT_PATH`, `REPORT_DL_AUTH_URL`,
    /// `REPORT_DL_POLL_INTERVAL_SECS`, `REPORT_DL_POLL_MAX_ATTEMPTS`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but with an injectable variable lookup so
    /// callers and tests can supply values without touching process state.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| -> Result<String> {
            lookup(key).ok_or_else(|| Error::Config {
                message: format!("missing required environment variable {key}"),
                key: Some(key.to_string()),
            })
        };

        let mut config = Config {
            credentials: Credentials {
                app: required("REPORT_DL_APP")?,
                vendor: required("REPORT_DL_VENDOR")?,
                business_unit: required("REPORT_DL_BUSINESS_UNIT")?,
                username: required("REPORT_DL_USERNAME")?,
                password: required("REPORT_DL_PASSWORD")?,
            },
            report_id: required("REPORT_DL_REPORT_ID")?,
            ..Default::default()
        };

        if let Some(path) = lookup("REPORT_DL_OUTPUT_PATH") {
            config.output_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("REPORT_DL_AUTH_URL") {
            config.auth_url = url;
        }
        if let Some(secs) = lookup("REPORT_DL_POLL_INTERVAL_SECS") {
            config.poll.interval = Duration::from_secs(parse_env_number(
                "REPORT_DL_POLL_INTERVAL_SECS",
                &secs,
            )?);
        }
        if let Some(attempts) = lookup("REPORT_DL_POLL_MAX_ATTEMPTS") {
            config.poll.max_attempts =
                parse_env_number::<u32>("REPORT_DL_POLL_MAX_ATTEMPTS", &attempts)?;
        }

        Ok(config)
    }

    /// Validate the configuration, returning the first problem found.
    ///
    /// `poll.max_attempts == 0` is valid: the poller checks once and never
    /// waits.
    pub fn validate(&self) -> Result<()> {
        let non_empty = |value: &str, key: &'static str| -> Result<()> {
            if value.is_empty() {
                return Err(Error::Config {
                    message: format!("{key} must not be empty"),
                    key: Some(key.to_string()),
                });
            }
            Ok(())
        };

        non_empty(&self.credentials.app, "credentials.app")?;
        non_empty(&self.credentials.vendor, "credentials.vendor")?;
        non_empty(&self.credentials.business_unit, "credentials.business_unit")?;
        non_empty(&self.credentials.username, "credentials.username")?;
        non_empty(&self.report_id, "report_id")?;

        url::Url::parse(&self.auth_url).map_err(|e| Error::Config {
            message: format!("auth_url is not a valid URL: {e}"),
            key: Some("auth_url".to_string()),
        })?;

        Ok(())
    }
}

fn parse_env_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| Error::Config {
        message: format!("{key} must be a non-negative integer, got '{raw}'"),
        key: Some(key.to_string()),
    })
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./report.csv")
}

fn default_auth_url() -> String {
    "https://api.incontact.com/InContactAuthorizationServer/Token".to_string()
}

fn default_api_version() -> String {
    "v13.0".to_string()
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(60)
}

fn default_poll_max_attempts() -> u32 {
    10
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Serialize Duration as seconds for readable config files
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
